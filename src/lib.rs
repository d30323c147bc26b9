pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use app::create_app;
pub use config::Config;
