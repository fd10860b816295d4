pub mod api;
pub mod models;
pub mod services;
pub mod utils;
