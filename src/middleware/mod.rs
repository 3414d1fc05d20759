//! Various middlewares.

pub(crate) mod cors;
pub(crate) mod logging;
pub(crate) mod panic_handler;
