pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod market;
pub mod style;
pub mod ui;

pub use style::cn;
