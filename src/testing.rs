//! Helpers for driving the whole API in tests.

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use crate::store::memory::InMemoryStore;

/// Sends requests through the full router, backed by an [`InMemoryStore`].
#[derive(Debug)]
pub(crate) struct TestClient
{
	router: axum::Router,
	store: InMemoryStore,
}

impl TestClient
{
	pub(crate) fn new() -> Self
	{
		let store = InMemoryStore::default();
		let router = crate::router(store.clone());

		Self { router, store }
	}

	/// The store behind the router.
	pub(crate) fn store(&self) -> &InMemoryStore
	{
		&self.store
	}

	/// Sends an arbitrary request.
	pub(crate) async fn send(&self, req: Request<Body>) -> Response<Body>
	{
		match self.router.clone().oneshot(req).await {
			Ok(res) => res,
			Err(infallible) => match infallible {},
		}
	}

	pub(crate) async fn get(&self, uri: &str) -> (StatusCode, JsonValue)
	{
		self.call(Method::GET, uri, None).await
	}

	pub(crate) async fn post(&self, uri: &str, body: JsonValue) -> (StatusCode, JsonValue)
	{
		self.call(Method::POST, uri, Some(body.to_string())).await
	}

	pub(crate) async fn put(&self, uri: &str, body: JsonValue) -> (StatusCode, JsonValue)
	{
		self.call(Method::PUT, uri, Some(body.to_string())).await
	}

	pub(crate) async fn delete(&self, uri: &str) -> (StatusCode, JsonValue)
	{
		self.call(Method::DELETE, uri, None).await
	}

	/// Sends `body` verbatim with a JSON content type.
	pub(crate) async fn call(
		&self,
		method: Method,
		uri: &str,
		body: Option<String>,
	) -> (StatusCode, JsonValue)
	{
		let req = Request::builder().method(method).uri(uri);
		let req = match body {
			Some(body) => req
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(body)),
			None => req.body(Body::empty()),
		};

		json_body(self.send(req.unwrap()).await).await
	}
}

/// Splits a response into its status and JSON body.
pub(crate) async fn json_body(res: impl IntoResponse) -> (StatusCode, JsonValue)
{
	let (status, body) = text_body(res).await;
	let json = serde_json::from_str(&body).unwrap_or_else(|err| panic!("{err}: {body:?}"));

	(status, json)
}

/// Splits a response into its status and body text.
pub(crate) async fn text_body(res: impl IntoResponse) -> (StatusCode, String)
{
	let res = res.into_response();
	let status = res.status();
	let bytes = res.into_body().collect().await.unwrap().to_bytes();

	(status, String::from_utf8(bytes.to_vec()).unwrap())
}
