//! Everything that happens before we can start serving requests.

mod error;
pub use error::Error;
