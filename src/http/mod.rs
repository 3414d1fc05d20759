//! HTTP helpers shared by all services.

mod json;
pub use json::{Json, JsonRejection};

pub mod pagination;

mod query;
pub use query::{Query, QueryRejection};

mod response;
pub use response::Created;
