pub mod app;
pub mod args;
pub mod catalog;
pub mod export;
pub mod import;
pub mod model;
pub mod utils;
