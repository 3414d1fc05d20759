//! Request / Response types for this service.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::http::pagination::{Limit, Page};
use crate::services::marks::Mark;
use crate::util;

util::make_id! {
	/// An ID uniquely identifying a student.
	StudentID
}

/// The default number of students per page.
pub const DEFAULT_LIMIT: u64 = 5;

/// A student, without their marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student
{
	/// The student's ID.
	pub id: StudentID,

	/// The student's name.
	pub name: String,

	/// The student's email address.
	pub email: String,

	/// The student's age.
	pub age: i32,

	/// When this student was created.
	#[serde(with = "time::serde::rfc3339")]
	#[sqlx(rename = "created_on")]
	pub created_at: OffsetDateTime,
}

/// A student and all of their marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullStudent
{
	/// The student.
	#[serde(flatten)]
	pub student: Student,

	/// The student's marks, ordered by creation.
	pub marks: Vec<Mark>,
}

/// A mark submitted together with a new student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMark
{
	/// The subject this mark is for.
	pub subject: String,

	/// The score.
	pub score: f64,
}

/// Request payload for fetching a student.
#[derive(Debug, Clone, Copy)]
pub struct FetchStudentRequest
{
	/// The ID of the student you want to fetch.
	pub student_id: StudentID,
}

/// Request payload for fetching many students.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct FetchStudentsRequest
{
	/// Which page to return.
	#[serde(default)]
	pub page: Page,

	/// How many students to return per page.
	#[serde(default)]
	pub limit: Limit<DEFAULT_LIMIT>,
}

/// Response payload for fetching many students.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchStudentsResponse
{
	/// The students on the requested page, most recently created first.
	pub students: Vec<FullStudent>,

	/// How many students exist in total.
	pub total: u64,

	/// The requested page.
	pub page: u64,

	/// How many pages there are for the requested limit.
	pub total_pages: u64,
}

/// Request payload for creating a student.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateStudentRequest
{
	/// The student's name.
	pub name: String,

	/// The student's email address.
	pub email: String,

	/// The student's age.
	pub age: i32,

	/// Marks to create together with the student.
	#[serde(default)]
	pub marks: Vec<NewMark>,
}

/// Request payload for updating a student.
///
/// Fields that are [`None`] are left unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStudentRequest
{
	/// The ID of the student you want to update.
	pub student_id: StudentID,

	/// A new name.
	pub name: Option<String>,

	/// A new email address.
	pub email: Option<String>,

	/// A new age.
	pub age: Option<i32>,
}

/// Request payload for deleting a student.
#[derive(Debug, Clone, Copy)]
pub struct DeleteStudentRequest
{
	/// The ID of the student you want to delete.
	pub student_id: StudentID,
}

/// Response payload for deleting a student.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteStudentResponse
{
	/// Confirmation message.
	pub message: String,
}
