//! Runtime utilities shared by the whole API.

pub mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod panic_hook;
