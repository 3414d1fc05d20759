//! The main error type.
//!
//! This is returned by all fallible HTTP handlers, middlewares, etc.

use std::fmt;
use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::Json;

/// Type alias that defaults to our [`Error`] as the default error type, but is
/// still overridable and therefore compatible with [`std::result::Result`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Convenience type alias.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main runtime error type.
///
/// This is the only error type allowed to reach users!
pub struct Error
{
	/// We box this so our error type is only 1 pointer wide.
	inner: Box<Inner>,
}

/// The different kinds of errors that can occur at runtime.
#[derive(Debug, thiserror::Error)]
enum ErrorKind
{
	/// Request was somehow malformed.
	#[error(transparent)]
	BadRequest(BoxError),

	/// A resource does not exist.
	#[error("{message}")]
	NotFound
	{
		/// What we tell the user.
		message: &'static str,
	},

	/// Anything else that went wrong while handling the request.
	///
	/// The `source` is only ever logged, users only see the `message`.
	#[error("{message}")]
	Internal
	{
		/// What we tell the user.
		message: &'static str,

		/// What actually happened.
		#[source]
		source: BoxError,
	},

	/// An HTTP handler panicked, but was caught by middleware.
	#[error("something unexpected happened; please report this incident")]
	Panic,
}

impl Error
{
	/// Create a new [`Error`].
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self { inner: Box::new(Inner::new(kind)) }
	}

	/// Returns the source code location of the original error source.
	pub fn source_location(&self) -> Location<'static>
	{
		self.inner.source_location
	}

	/// Returns the appropriate HTTP status code to use in an error response.
	pub fn status(&self) -> StatusCode
	{
		match self.inner.kind {
			ErrorKind::BadRequest(_) => StatusCode::BAD_REQUEST,
			ErrorKind::NotFound { .. } => StatusCode::NOT_FOUND,
			ErrorKind::Internal { .. } | ErrorKind::Panic => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Indicate that an HTTP handler panicked but the panic was caught.
	#[track_caller]
	pub(crate) fn panic() -> Self
	{
		Self::new(ErrorKind::Panic)
	}

	/// Reject a request because it was malformed in some way.
	#[track_caller]
	pub(crate) fn bad_request(reason: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::BadRequest(reason.into()))
	}

	/// Reject a request because a requested resource was not found.
	#[track_caller]
	pub(crate) fn not_found(message: &'static str) -> Self
	{
		Self::new(ErrorKind::NotFound { message })
	}

	/// Fail a request with a fixed `message`, keeping the real cause for the
	/// logs.
	#[track_caller]
	pub(crate) fn internal(message: &'static str, source: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::Internal { message, source: source.into() })
	}
}

impl fmt::Debug for Error
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "[{}]: {:?}", self.source_location(), self.inner.kind)
	}
}

impl fmt::Display for Error
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.inner.kind, f)
	}
}

impl std::error::Error for Error
{
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
	{
		Some(&self.inner.kind)
	}
}

/// The body of every error response.
#[derive(Debug, Serialize)]
struct ErrorResponse
{
	error: String,
}

impl IntoResponse for Error
{
	fn into_response(self) -> Response
	{
		let status = self.status();

		match &self.inner.kind {
			ErrorKind::Internal { source, .. } => {
				tracing::error! {
					target: "student_records::audit_log",
					source_location = %self.source_location(),
					error = %source,
					"internal server error: \"{self}\"",
				};
			}
			ErrorKind::Panic => {
				tracing::error! {
					target: "student_records::audit_log",
					source_location = %self.source_location(),
					"handler panicked",
				};
			}
			ErrorKind::BadRequest(_) | ErrorKind::NotFound { .. } => {
				tracing::debug! {
					%status,
					source_location = %self.source_location(),
					"runtime error: \"{self}\"",
				};
			}
		}

		(status, Json(ErrorResponse { error: self.to_string() })).into_response()
	}
}

/// The actual representation of [`Error`].
struct Inner
{
	/// Which particular error we're dealing with.
	kind: ErrorKind,

	/// The source code location of where this [`Error`] was created.
	source_location: Location<'static>,
}

impl Inner
{
	/// Create a new [`Inner`].
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self { kind, source_location: *Location::caller() }
	}
}
