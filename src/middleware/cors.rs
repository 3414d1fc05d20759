//! CORS configuration.
//!
//! The API is consumed by browser front-ends served from arbitrary origins,
//! so every origin, method and header is allowed.

use std::time::Duration;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// How long browsers may cache preflight responses.
const MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Creates a middleware layer answering CORS requests.
pub(crate) fn layer() -> CorsLayer
{
	CorsLayer::new()
		.allow_origin(AllowOrigin::any())
		.allow_methods(AllowMethods::mirror_request())
		.allow_headers(AllowHeaders::mirror_request())
		.max_age(MAX_AGE)
}
