use axum::response::{IntoResponse, Response};

use crate::runtime;

/// Rejection for the [`Query`] extractor.
///
/// [`Query`]: super::Query
#[derive(Debug, thiserror::Error)]
#[error("failed to parse query parameters: {0}")]
pub struct QueryRejection(#[from] serde_html_form::de::Error);

impl IntoResponse for QueryRejection
{
	fn into_response(self) -> Response
	{
		runtime::Error::bad_request(self).into_response()
	}
}
