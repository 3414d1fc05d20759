//! The production [`Store`], backed by MySQL.

use std::collections::HashMap;

use sqlx::{MySql, MySqlConnection, Pool, QueryBuilder};

use super::{Error, Result, Store};
use crate::database::{self, QueryBuilderExt, UpdateQueryBuilder};
use crate::services::marks::{CreateMarkRequest, Mark, MarkID};
use crate::services::students::{
	CreateStudentRequest,
	FullStudent,
	Student,
	StudentID,
	UpdateStudentRequest,
};

/// Base query for fetching students.
const SELECT_STUDENTS: &str = "SELECT id, name, email, age, created_on FROM Students";

/// Base query for fetching marks.
const SELECT_MARKS: &str = "SELECT id, student_id, subject, score FROM Marks";

/// A [`Store`] backed by a MySQL connection pool.
#[derive(Debug, Clone)]
pub struct MySqlStore
{
	database: Pool<MySql>,
}

impl MySqlStore
{
	/// Create a new [`MySqlStore`].
	pub fn new(database: Pool<MySql>) -> Self
	{
		Self { database }
	}
}

impl Store for MySqlStore
{
	#[tracing::instrument(level = "trace", skip(self), err(level = "debug"))]
	async fn ping(&self) -> Result<()>
	{
		sqlx::query("SELECT 1").execute(&self.database).await?;

		Ok(())
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	async fn fetch_students(&self, limit: u64, offset: u64) -> Result<Vec<FullStudent>>
	{
		let mut conn = self.database.acquire().await?;
		let mut query = QueryBuilder::<MySql>::new(SELECT_STUDENTS);

		query.push(" ORDER BY created_on DESC, id DESC");
		query.push_limits(limit, offset);

		let students = query
			.build_query_as::<Student>()
			.fetch_all(&mut *conn)
			.await?;

		let students = attach_marks(&mut conn, students).await?;

		Ok(students)
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	async fn count_students(&self) -> Result<u64>
	{
		let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Students")
			.fetch_one(&self.database)
			.await?;

		Ok(database::convert_count(count)?)
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	async fn fetch_student(&self, student_id: StudentID) -> Result<Option<FullStudent>>
	{
		let mut conn = self.database.acquire().await?;
		let student = fetch_full_student(&mut conn, student_id).await?;

		Ok(student)
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	async fn create_student(&self, req: CreateStudentRequest) -> Result<FullStudent>
	{
		let mut txn = self.database.begin().await?;

		let student_id = sqlx::query("INSERT INTO Students (name, email, age) VALUES (?, ?, ?)")
			.bind(&req.name)
			.bind(&req.email)
			.bind(req.age)
			.execute(&mut *txn)
			.await?
			.last_insert_id();

		let student_id = StudentID(student_id);

		if !req.marks.is_empty() {
			let mut query = QueryBuilder::<MySql>::new("INSERT INTO Marks (student_id, subject, score) ");

			query.push_values(&req.marks, |mut row, mark| {
				row.push_bind(student_id)
					.push_bind(&mark.subject)
					.push_bind(mark.score);
			});

			query.build().execute(&mut *txn).await?;
		}

		let student = fetch_full_student(&mut txn, student_id)
			.await?
			.ok_or(Error::StudentDoesNotExist { student_id })?;

		txn.commit().await?;

		tracing::info! {
			target: "student_records::audit_log",
			%student_id,
			marks = student.marks.len(),
			"created student",
		};

		Ok(student)
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	async fn update_student(&self, req: UpdateStudentRequest) -> Result<Student>
	{
		let mut txn = self.database.begin().await?;
		let mut query = UpdateQueryBuilder::<MySql>::new("Students");

		query
			.set_if_some("name", req.name.as_deref())
			.set_if_some("email", req.email.as_deref())
			.set_if_some("age", req.age);

		if query.has_changes() {
			query.push(" WHERE id = ").push_bind(req.student_id);
			query.build().execute(&mut *txn).await?;
		}

		let mut select = QueryBuilder::<MySql>::new(SELECT_STUDENTS);
		select.push(" WHERE id = ").push_bind(req.student_id);

		let student = select
			.build_query_as::<Student>()
			.fetch_optional(&mut *txn)
			.await?
			.ok_or(Error::StudentDoesNotExist { student_id: req.student_id })?;

		txn.commit().await?;

		tracing::info! {
			target: "student_records::audit_log",
			student_id = %req.student_id,
			"updated student",
		};

		Ok(student)
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	async fn delete_student(&self, student_id: StudentID) -> Result<()>
	{
		let mut txn = self.database.begin().await?;

		let deleted_marks = sqlx::query("DELETE FROM Marks WHERE student_id = ?")
			.bind(student_id)
			.execute(&mut *txn)
			.await?
			.rows_affected();

		let deleted_students = sqlx::query("DELETE FROM Students WHERE id = ?")
			.bind(student_id)
			.execute(&mut *txn)
			.await?
			.rows_affected();

		match deleted_students {
			0 => {
				txn.rollback().await?;
				return Err(Error::StudentDoesNotExist { student_id });
			}
			n => assert_eq!(n, 1, "deleted more than 1 student"),
		}

		txn.commit().await?;

		tracing::info! {
			target: "student_records::audit_log",
			%student_id,
			deleted_marks,
			"deleted student",
		};

		Ok(())
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	async fn create_mark(&self, req: CreateMarkRequest) -> Result<Mark>
	{
		let mark_id = sqlx::query("INSERT INTO Marks (student_id, subject, score) VALUES (?, ?, ?)")
			.bind(req.student_id)
			.bind(&req.subject)
			.bind(req.score)
			.execute(&self.database)
			.await?
			.last_insert_id();

		let mark = Mark {
			id: MarkID(mark_id),
			student_id: req.student_id,
			subject: req.subject,
			score: req.score,
		};

		tracing::info! {
			target: "student_records::audit_log",
			mark_id = %mark.id,
			student_id = %mark.student_id,
			"created mark",
		};

		Ok(mark)
	}
}

/// Fetches a single student and their marks using an existing connection.
async fn fetch_full_student(
	conn: &mut MySqlConnection,
	student_id: StudentID,
) -> sqlx::Result<Option<FullStudent>>
{
	let mut query = QueryBuilder::<MySql>::new(SELECT_STUDENTS);
	query.push(" WHERE id = ").push_bind(student_id);

	let Some(student) = query
		.build_query_as::<Student>()
		.fetch_optional(&mut *conn)
		.await?
	else {
		return Ok(None);
	};

	let mut query = QueryBuilder::<MySql>::new(SELECT_MARKS);
	query
		.push(" WHERE student_id = ")
		.push_bind(student_id)
		.push(" ORDER BY id");

	let marks = query.build_query_as::<Mark>().fetch_all(&mut *conn).await?;

	Ok(Some(FullStudent { student, marks }))
}

/// Fetches the marks of all `students` in a single query.
async fn attach_marks(
	conn: &mut MySqlConnection,
	students: Vec<Student>,
) -> sqlx::Result<Vec<FullStudent>>
{
	if students.is_empty() {
		return Ok(Vec::new());
	}

	let mut query = QueryBuilder::<MySql>::new(SELECT_MARKS);
	query.push(" WHERE student_id IN (");

	let mut student_ids = query.separated(", ");

	for student in &students {
		student_ids.push_bind(student.id);
	}

	student_ids.push_unseparated(") ORDER BY id");

	let mut marks = HashMap::<StudentID, Vec<Mark>>::new();

	for mark in query.build_query_as::<Mark>().fetch_all(&mut *conn).await? {
		marks.entry(mark.student_id).or_default().push(mark);
	}

	let students = students
		.into_iter()
		.map(|student| {
			let marks = marks.remove(&student.id).unwrap_or_default();
			FullStudent { student, marks }
		})
		.collect();

	Ok(students)
}
