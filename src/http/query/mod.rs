//! A query parameter extractor.
//!
//! Unlike [`axum::extract::Query`], repeated keys are collected instead of
//! rejected, and rejections use the API's error body.

use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request;
use serde::Deserialize;

mod rejection;
pub use rejection::QueryRejection;

/// Query parameters of type `T`.
#[derive(Debug)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
	T: for<'de> Deserialize<'de> + fmt::Debug + Send,
	S: Send + Sync,
{
	type Rejection = QueryRejection;

	#[tracing::instrument(level = "debug", skip_all, ret(level = "debug"), err(level = "debug"))]
	async fn from_request_parts(
		parts: &mut request::Parts,
		_state: &S,
	) -> Result<Self, Self::Rejection>
	{
		let query = parts.uri.query().unwrap_or_default();
		let value = serde_html_form::from_str(query)?;

		Ok(Self(value))
	}
}

#[cfg(test)]
mod tests
{
	use axum::http::{Request, StatusCode};

	use super::*;
	use crate::testing::json_body;

	#[derive(Debug, Deserialize)]
	struct Filter
	{
		age: u32,
	}

	async fn extract(uri: &str) -> Result<Query<Filter>, QueryRejection>
	{
		let (mut parts, ()) = Request::get(uri).body(()).unwrap().into_parts();

		Query::<Filter>::from_request_parts(&mut parts, &()).await
	}

	#[tokio::test]
	async fn extracts_parameters()
	{
		let Query(filter) = extract("/students?age=21").await.unwrap();

		assert_eq!(filter.age, 21);
	}

	#[tokio::test]
	async fn rejects_with_error_body()
	{
		let rejection = extract("/students?age=old").await.unwrap_err();
		let (status, body) = json_body(rejection).await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(body["error"].is_string(), "{body}");
		assert_eq!(body.as_object().map(|object| object.len()), Some(1));

		let (status, _) = json_body(extract("/students").await.unwrap_err()).await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
	}
}
