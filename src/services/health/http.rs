//! HTTP handlers for this service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing};

use super::HealthService;
use crate::store::Store;

impl<S> From<HealthService<S>> for Router
where
	S: Store,
{
	fn from(svc: HealthService<S>) -> Self
	{
		Router::new()
			.route("/health", routing::get(get::<S>))
			.with_state(svc)
	}
}

/// (͡ ͡° ͜ つ ͡͡°)
async fn get<S: Store>(State(svc): State<HealthService<S>>) -> (StatusCode, &'static str)
{
	match svc.check().await {
		Ok(()) => (StatusCode::OK, "(͡ ͡° ͜ つ ͡͡°)"),
		Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "store unavailable"),
	}
}
