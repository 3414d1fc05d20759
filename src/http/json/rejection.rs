use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};

use crate::runtime;

/// Rejection for the [`Json`] extractor.
///
/// [`Json`]: super::Json
#[derive(Debug, thiserror::Error)]
pub enum JsonRejection
{
	#[error("missing `Content-Type: application/json` header")]
	MissingContentType,

	#[error("failed to buffer request body: {0}")]
	BufferBody(#[from] BytesRejection),

	#[error("failed to deserialize request body: {0}")]
	Deserialize(serde_json::Error),
}

impl IntoResponse for JsonRejection
{
	fn into_response(self) -> Response
	{
		runtime::Error::bad_request(self).into_response()
	}
}
