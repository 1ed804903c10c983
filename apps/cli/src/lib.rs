//! Terminal front end for Holdfolio: configuration, logging setup and
//! rendering of the holdings list and portfolio summary panel.

pub mod cli;
pub mod config;
pub mod main_lib;
pub mod render;

pub use cli::Cli;
pub use config::{Config, LogFormat};
pub use main_lib::{build_service, init_tracing, report, run};
pub use render::{JsonReport, Renderer};
