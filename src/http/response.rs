//! HTTP response types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::Json;

/// A JSON response with status `201 Created`.
#[derive(Debug)]
pub struct Created<T>(pub T)
where
	T: Serialize;

impl<T: Serialize> IntoResponse for Created<T>
{
	fn into_response(self) -> Response
	{
		(StatusCode::CREATED, Json(self.0)).into_response()
	}
}
