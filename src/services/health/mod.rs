//! A very basic service that acts as a healthcheck.

use crate::store::{self, Store};

mod http;

/// A service that responds if the API and its store are healthy.
#[derive(Debug, Clone)]
pub struct HealthService<S>
{
	store: S,
}

impl<S> HealthService<S>
where
	S: Store,
{
	/// Create a new [`HealthService`].
	pub fn new(store: S) -> Self
	{
		Self { store }
	}

	/// Checks whether we can still reach the store.
	#[tracing::instrument(level = "trace", skip(self), err(level = "warn"))]
	pub async fn check(&self) -> store::Result<()>
	{
		self.store.ping().await
	}
}

#[cfg(test)]
mod tests
{
	use axum::body::Body;
	use axum::http::{Request, StatusCode};

	use crate::testing::{TestClient, text_body};

	fn health() -> Request<Body>
	{
		Request::get("/health").body(Body::empty()).unwrap()
	}

	#[tokio::test]
	async fn healthy_store()
	{
		let client = TestClient::new();
		let (status, body) = text_body(client.send(health()).await).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, "(͡ ͡° ͜ つ ͡͡°)");
	}

	#[tokio::test]
	async fn unavailable_store()
	{
		let client = TestClient::new();

		client.store().make_unavailable();

		let (status, body) = text_body(client.send(health()).await).await;

		assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
		assert_eq!(body, "store unavailable");
	}
}
