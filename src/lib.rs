#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod gateway;
pub mod mail;
pub mod render;
pub mod router;
pub mod view;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{Result, SiteError};
