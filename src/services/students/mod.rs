//! A service for managing students.

use crate::store::Store;

mod error;
pub use error::{Error, Operation, Result};

mod models;
pub use models::{
	CreateStudentRequest,
	DEFAULT_LIMIT,
	DeleteStudentRequest,
	DeleteStudentResponse,
	FetchStudentRequest,
	FetchStudentsRequest,
	FetchStudentsResponse,
	FullStudent,
	NewMark,
	Student,
	StudentID,
	UpdateStudentRequest,
};

mod http;


/// A service for managing students.
#[derive(Debug, Clone)]
pub struct StudentService<S>
{
	store: S,
}

impl<S> StudentService<S>
where
	S: Store,
{
	/// Create a new [`StudentService`].
	pub fn new(store: S) -> Self
	{
		Self { store }
	}

	/// Fetches a page of students.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_students(&self, req: FetchStudentsRequest) -> Result<FetchStudentsResponse>
	{
		let FetchStudentsRequest { page, limit } = req;

		let (students, total) = tokio::try_join!(
			self.store.fetch_students(limit.value(), page.offset(limit)),
			self.store.count_students(),
		)
		.map_err(Error::store(Operation::FetchStudents))?;

		Ok(FetchStudentsResponse {
			students,
			total,
			page: page.value(),
			total_pages: limit.total_pages(total),
		})
	}

	/// Fetches a student.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_student(&self, req: FetchStudentRequest) -> Result<FullStudent>
	{
		self.store
			.fetch_student(req.student_id)
			.await
			.map_err(Error::store(Operation::FetchStudent))?
			.ok_or(Error::StudentNotFound)
	}

	/// Creates a student and their initial marks.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn create_student(&self, req: CreateStudentRequest) -> Result<FullStudent>
	{
		self.store
			.create_student(req)
			.await
			.map_err(Error::store(Operation::CreateStudent))
	}

	/// Updates a student's name, email, and / or age.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn update_student(&self, req: UpdateStudentRequest) -> Result<Student>
	{
		self.store
			.update_student(req)
			.await
			.map_err(Error::store(Operation::UpdateStudent))
	}

	/// Deletes a student and all of their marks.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn delete_student(&self, req: DeleteStudentRequest) -> Result<DeleteStudentResponse>
	{
		self.store
			.delete_student(req.student_id)
			.await
			.map_err(Error::store(Operation::DeleteStudent))?;

		Ok(DeleteStudentResponse {
			message: String::from("Student and related marks deleted successfully."),
		})
	}
}
