//! HTTP handlers for this service.

use axum::extract::{Path, State};
use axum::{Router, routing};
use serde::Deserialize;

use super::{
	CreateStudentRequest,
	DeleteStudentRequest,
	DeleteStudentResponse,
	Error,
	FetchStudentRequest,
	FetchStudentsRequest,
	FetchStudentsResponse,
	FullStudent,
	Operation,
	Student,
	StudentID,
	StudentService,
	UpdateStudentRequest,
};
use crate::http::{Created, Json, Query};
use crate::runtime::Result;
use crate::store::Store;

impl<S> From<StudentService<S>> for Router
where
	S: Store,
{
	fn from(svc: StudentService<S>) -> Self
	{
		Router::new()
			.route("/students", routing::get(get_many::<S>).post(create::<S>))
			.route(
				"/students/{id}",
				routing::get(get_single::<S>)
					.put(update::<S>)
					.delete(delete::<S>),
			)
			.with_state(svc)
	}
}

/// Parses the `{id}` path segment for `operation`.
fn parse_id(raw: String, operation: Operation) -> Result<StudentID, Error>
{
	raw.parse::<StudentID>()
		.map_err(|_| Error::InvalidStudentID { operation, raw })
}

/// Fetch many students.
async fn get_many<S: Store>(
	State(svc): State<StudentService<S>>,
	Query(req): Query<FetchStudentsRequest>,
) -> Result<Json<FetchStudentsResponse>>
{
	let res = svc.fetch_students(req).await?;

	Ok(Json(res))
}

/// Fetch a specific student by their ID.
async fn get_single<S: Store>(
	State(svc): State<StudentService<S>>,
	Path(raw_id): Path<String>,
) -> Result<Json<FullStudent>>
{
	// nothing can be stored under an ID that doesn't parse
	let student_id = raw_id.parse::<StudentID>().map_err(|_| Error::StudentNotFound)?;
	let res = svc.fetch_student(FetchStudentRequest { student_id }).await?;

	Ok(Json(res))
}

/// Create a new student, optionally with marks.
async fn create<S: Store>(
	State(svc): State<StudentService<S>>,
	Json(req): Json<CreateStudentRequest>,
) -> Result<Created<FullStudent>>
{
	let res = svc.create_student(req).await?;

	Ok(Created(res))
}

/// Request body for `PUT /students/{id}`.
///
/// Missing and `null` fields are left unchanged.
#[derive(Debug, Deserialize)]
struct UpdateStudentPayload
{
	name: Option<String>,
	email: Option<String>,
	age: Option<i32>,
}

/// Update a student.
async fn update<S: Store>(
	State(svc): State<StudentService<S>>,
	Path(raw_id): Path<String>,
	Json(payload): Json<UpdateStudentPayload>,
) -> Result<Json<Student>>
{
	let req = UpdateStudentRequest {
		student_id: parse_id(raw_id, Operation::UpdateStudent)?,
		name: payload.name,
		email: payload.email,
		age: payload.age,
	};

	let res = svc.update_student(req).await?;

	Ok(Json(res))
}

/// Delete a student and all of their marks.
async fn delete<S: Store>(
	State(svc): State<StudentService<S>>,
	Path(raw_id): Path<String>,
) -> Result<Json<DeleteStudentResponse>>
{
	let student_id = parse_id(raw_id, Operation::DeleteStudent)?;
	let res = svc.delete_student(DeleteStudentRequest { student_id }).await?;

	Ok(Json(res))
}
