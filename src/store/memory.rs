//! An in-memory [`Store`] for tests.

use std::sync::{Arc, Mutex, MutexGuard};

use time::OffsetDateTime;

use super::{Error, Result, Store};
use crate::services::marks::{CreateMarkRequest, Mark, MarkID};
use crate::services::students::{
	CreateStudentRequest,
	FullStudent,
	Student,
	StudentID,
	UpdateStudentRequest,
};

/// A [`Store`] that keeps everything in a [`Vec`].
///
/// Behaves like the MySQL schema: IDs start at 1, marks must reference an
/// existing student, and students are listed most recent first.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryStore
{
	state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State
{
	students: Vec<Student>,
	marks: Vec<Mark>,
	next_student_id: u64,
	next_mark_id: u64,

	/// Makes every operation fail, simulating a lost connection.
	unavailable: bool,
}

impl InMemoryStore
{
	/// Makes every subsequent operation fail.
	pub(crate) fn make_unavailable(&self)
	{
		self.lock().unavailable = true;
	}

	/// Returns all marks, regardless of student.
	pub(crate) fn all_marks(&self) -> Vec<Mark>
	{
		self.lock().marks.clone()
	}

	fn lock(&self) -> MutexGuard<'_, State>
	{
		self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn lock_available(&self) -> Result<MutexGuard<'_, State>>
	{
		let state = self.lock();

		if state.unavailable {
			return Err(Error::Database(sqlx::Error::PoolTimedOut));
		}

		Ok(state)
	}
}

impl State
{
	fn full_student(&self, student: &Student) -> FullStudent
	{
		let marks = self
			.marks
			.iter()
			.filter(|mark| mark.student_id == student.id)
			.cloned()
			.collect();

		FullStudent { student: student.clone(), marks }
	}

	fn insert_mark(&mut self, student_id: StudentID, subject: String, score: f64) -> Result<Mark>
	{
		if !self.students.iter().any(|student| student.id == student_id) {
			return Err(Error::StudentDoesNotExist { student_id });
		}

		self.next_mark_id += 1;

		let mark = Mark { id: MarkID(self.next_mark_id), student_id, subject, score };
		self.marks.push(mark.clone());

		Ok(mark)
	}
}

impl Store for InMemoryStore
{
	async fn ping(&self) -> Result<()>
	{
		self.lock_available().map(drop)
	}

	async fn fetch_students(&self, limit: u64, offset: u64) -> Result<Vec<FullStudent>>
	{
		let state = self.lock_available()?;
		let mut students = state.students.iter().collect::<Vec<_>>();

		students.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

		Ok(students
			.into_iter()
			.skip(usize::try_from(offset).unwrap_or(usize::MAX))
			.take(usize::try_from(limit).unwrap_or(usize::MAX))
			.map(|student| state.full_student(student))
			.collect())
	}

	async fn count_students(&self) -> Result<u64>
	{
		Ok(self.lock_available()?.students.len() as u64)
	}

	async fn fetch_student(&self, student_id: StudentID) -> Result<Option<FullStudent>>
	{
		let state = self.lock_available()?;

		Ok(state
			.students
			.iter()
			.find(|student| student.id == student_id)
			.map(|student| state.full_student(student)))
	}

	async fn create_student(&self, req: CreateStudentRequest) -> Result<FullStudent>
	{
		let mut state = self.lock_available()?;

		state.next_student_id += 1;

		let student = Student {
			id: StudentID(state.next_student_id),
			name: req.name,
			email: req.email,
			age: req.age,
			created_at: OffsetDateTime::now_utc(),
		};

		state.students.push(student.clone());

		let marks = req
			.marks
			.into_iter()
			.map(|mark| state.insert_mark(student.id, mark.subject, mark.score))
			.collect::<Result<Vec<_>>>()?;

		Ok(FullStudent { student, marks })
	}

	async fn update_student(&self, req: UpdateStudentRequest) -> Result<Student>
	{
		let mut state = self.lock_available()?;
		let student = state
			.students
			.iter_mut()
			.find(|student| student.id == req.student_id)
			.ok_or(Error::StudentDoesNotExist { student_id: req.student_id })?;

		if let Some(name) = req.name {
			student.name = name;
		}

		if let Some(email) = req.email {
			student.email = email;
		}

		if let Some(age) = req.age {
			student.age = age;
		}

		Ok(student.clone())
	}

	async fn delete_student(&self, student_id: StudentID) -> Result<()>
	{
		let mut state = self.lock_available()?;
		let Some(idx) = state.students.iter().position(|student| student.id == student_id) else {
			return Err(Error::StudentDoesNotExist { student_id });
		};

		state.marks.retain(|mark| mark.student_id != student_id);
		state.students.remove(idx);

		Ok(())
	}

	async fn create_mark(&self, req: CreateMarkRequest) -> Result<Mark>
	{
		self.lock_available()?
			.insert_mark(req.student_id, req.subject, req.score)
	}
}
