//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::{runtime, store};

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the mark service.
#[derive(Debug, Error)]
pub enum Error
{
	/// The store refused to create a mark, e.g. because the student does not
	/// exist.
	#[error("failed to add mark: {0}")]
	CreateMark(#[from] store::Error),
}

impl From<Error> for runtime::Error
{
	#[track_caller]
	fn from(value: Error) -> Self
	{
		match value {
			Error::CreateMark(_) => Self::internal("Failed to add mark", value),
		}
	}
}
