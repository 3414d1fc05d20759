//! API services.
//!
//! These contain the core business logic.
//!
//! Every service maps directly to a set of HTTP routes; it has an `http`
//! module and implements `Into<axum::Router>`.

mod health;
pub use health::HealthService;

pub mod students;
pub use students::StudentService;

pub mod marks;
pub use marks::MarkService;
