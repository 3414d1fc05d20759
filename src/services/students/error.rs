//! The errors that can occur when interacting with this service.

use derive_more::Display;
use thiserror::Error;

use crate::{runtime, store};

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The operations offered by the student service.
///
/// Every operation has its own fixed failure message; the actual cause of a
/// failure is only ever logged.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Operation
{
	#[display("fetch students")]
	FetchStudents,

	#[display("fetch student")]
	FetchStudent,

	#[display("create student")]
	CreateStudent,

	#[display("update student")]
	UpdateStudent,

	#[display("delete student")]
	DeleteStudent,
}

impl Operation
{
	/// The message users get to see if this operation fails.
	pub fn failure_message(self) -> &'static str
	{
		match self {
			Self::FetchStudents => "Failed to fetch students",
			Self::FetchStudent => "Failed to fetch student",
			Self::CreateStudent => "Failed to create student with marks",
			Self::UpdateStudent => "Failed to update student",
			Self::DeleteStudent => "Failed to delete student",
		}
	}
}

/// The errors that can occur when interacting with the student service.
#[derive(Debug, Error)]
pub enum Error
{
	/// A specific student was requested, but they could not be found.
	#[error("student not found")]
	StudentNotFound,

	/// The ID in the request path can't possibly refer to a student.
	#[error("`{raw}` is not a valid student ID")]
	InvalidStudentID
	{
		/// What we were trying to do.
		operation: Operation,

		/// The path segment we got.
		raw: String,
	},

	/// The store failed to carry out an operation.
	#[error("failed to {operation}: {source}")]
	Store
	{
		/// What we were trying to do.
		operation: Operation,

		/// What went wrong.
		source: store::Error,
	},
}

impl Error
{
	/// Wraps a [`store::Error`] that occurred during `operation`.
	pub(crate) fn store(operation: Operation) -> impl FnOnce(store::Error) -> Self
	{
		move |source| Self::Store { operation, source }
	}
}

impl From<Error> for runtime::Error
{
	#[track_caller]
	fn from(value: Error) -> Self
	{
		match value {
			Error::StudentNotFound => Self::not_found("Student not found"),
			Error::InvalidStudentID { operation, .. } | Error::Store { operation, .. } => {
				Self::internal(operation.failure_message(), value)
			}
		}
	}
}
