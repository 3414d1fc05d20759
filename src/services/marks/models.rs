//! Request / Response types for this service.

use serde::{Deserialize, Serialize};

use crate::services::students::StudentID;
use crate::util;

util::make_id! {
	/// An ID uniquely identifying a mark.
	MarkID
}

/// A student's mark in a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Mark
{
	/// The mark's ID.
	pub id: MarkID,

	/// The student this mark belongs to.
	pub student_id: StudentID,

	/// The subject this mark is for.
	pub subject: String,

	/// The score.
	pub score: f64,
}

/// Request payload for creating a mark.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarkRequest
{
	/// The student the mark belongs to.
	pub student_id: StudentID,

	/// The subject this mark is for.
	pub subject: String,

	/// The score.
	pub score: f64,
}
