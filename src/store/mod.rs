//! Persistence for students and their marks.
//!
//! Services never talk to the database directly; they are generic over
//! [`Store`] and receive a handle when they are constructed. The real API uses
//! [`MySqlStore`], tests use an in-memory implementation.

use std::future::Future;

use thiserror::Error;

use crate::services::marks::{CreateMarkRequest, Mark};
use crate::services::students::{
	CreateStudentRequest,
	FullStudent,
	Student,
	StudentID,
	UpdateStudentRequest,
};

mod mysql;
pub use mysql::MySqlStore;

#[cfg(test)]
pub(crate) mod memory;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with a [`Store`].
#[derive(Debug, Error)]
pub enum Error
{
	/// An operation targeting a specific student could not find them.
	#[error("student with ID `{student_id}` does not exist")]
	StudentDoesNotExist
	{
		/// The student's ID.
		student_id: StudentID,
	},

	/// Something went wrong communicating with the database.
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

/// A handle to wherever students and marks are stored.
///
/// Handles are cheap to clone and shared by every request.
pub trait Store: Clone + Send + Sync + 'static
{
	/// Checks whether the store is reachable.
	fn ping(&self) -> impl Future<Output = Result<()>> + Send;

	/// Fetches a page of students, most recently created first, including
	/// their marks.
	fn fetch_students(
		&self,
		limit: u64,
		offset: u64,
	) -> impl Future<Output = Result<Vec<FullStudent>>> + Send;

	/// Counts all students.
	fn count_students(&self) -> impl Future<Output = Result<u64>> + Send;

	/// Fetches a single student including their marks.
	fn fetch_student(
		&self,
		student_id: StudentID,
	) -> impl Future<Output = Result<Option<FullStudent>>> + Send;

	/// Creates a student and all of the marks in `req` atomically.
	fn create_student(
		&self,
		req: CreateStudentRequest,
	) -> impl Future<Output = Result<FullStudent>> + Send;

	/// Overwrites the fields present in `req`.
	///
	/// Fails with [`Error::StudentDoesNotExist`] if there is no such student.
	fn update_student(
		&self,
		req: UpdateStudentRequest,
	) -> impl Future<Output = Result<Student>> + Send;

	/// Deletes a student and all of their marks atomically.
	///
	/// Fails with [`Error::StudentDoesNotExist`] if there is no such student,
	/// in which case nothing is deleted.
	fn delete_student(&self, student_id: StudentID) -> impl Future<Output = Result<()>> + Send;

	/// Creates a mark for an existing student.
	fn create_mark(&self, req: CreateMarkRequest) -> impl Future<Output = Result<Mark>> + Send;
}
