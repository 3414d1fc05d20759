//! Helpers for dealing with SQL queries.

use std::fmt;
use std::ops::{Deref, DerefMut};

use sqlx::QueryBuilder;

/// Extension trait for [`sqlx::QueryBuilder`].
///
/// Provides some helpful methods.
pub(crate) trait QueryBuilderExt
{
	/// Pushes `LIMIT` and `OFFSET` clauses into the query.
	fn push_limits(&mut self, limit: u64, offset: u64) -> &mut Self;
}

impl<'q, DB> QueryBuilderExt for QueryBuilder<'q, DB>
where
	DB: sqlx::Database,
	u64: sqlx::Type<DB> + sqlx::Encode<'q, DB>,
{
	fn push_limits(&mut self, limit: u64, offset: u64) -> &mut Self
	{
		self.push(" LIMIT ")
			.push_bind(limit)
			.push(" OFFSET ")
			.push_bind(offset)
	}
}

/// A wrapper around [`sqlx::QueryBuilder`] for `UPDATE` queries that only
/// touch some columns.
pub(crate) struct UpdateQueryBuilder<'args, DB>
where
	DB: sqlx::Database,
{
	/// The underlying query builder.
	query: QueryBuilder<'args, DB>,

	/// Whether we already pushed `SET`.
	has_set: bool,
}

impl<'args, DB> UpdateQueryBuilder<'args, DB>
where
	DB: sqlx::Database,
{
	/// Creates a new [`UpdateQueryBuilder`].
	pub(crate) fn new(table: impl fmt::Display) -> Self
	{
		Self { query: QueryBuilder::new(format!("UPDATE {table}")), has_set: false }
	}

	/// Adds an update into the query.
	///
	/// # Example
	///
	/// ```rust,ignore
	/// let mut query = UpdateQueryBuilder::new("Students");
	///
	/// if let Some(name) = name {
	///     query.set("name", name);
	/// }
	///
	/// if query.has_changes() {
	///     query.push(" WHERE id = ").push_bind(id);
	///     query.build().execute(&database).await?;
	/// }
	/// ```
	pub(crate) fn set<V>(&mut self, column: impl fmt::Display, value: V) -> &mut Self
	where
		V: sqlx::Type<DB> + sqlx::Encode<'args, DB> + Send + 'args,
	{
		self.query
			.push(if self.has_set { ", " } else { " SET " })
			.push(column)
			.push(" = ")
			.push_bind(value);

		self.has_set = true;
		self
	}

	/// Calls [`set()`] if `value` is [`Some`].
	///
	/// [`set()`]: UpdateQueryBuilder::set
	pub(crate) fn set_if_some<V>(&mut self, column: impl fmt::Display, value: Option<V>) -> &mut Self
	where
		V: sqlx::Type<DB> + sqlx::Encode<'args, DB> + Send + 'args,
	{
		if let Some(value) = value {
			self.set(column, value);
		}

		self
	}

	/// Returns whether any columns are being updated.
	pub(crate) fn has_changes(&self) -> bool
	{
		self.has_set
	}
}

impl<'args, DB> Deref for UpdateQueryBuilder<'args, DB>
where
	DB: sqlx::Database,
{
	type Target = QueryBuilder<'args, DB>;

	fn deref(&self) -> &Self::Target
	{
		&self.query
	}
}

impl<DB> DerefMut for UpdateQueryBuilder<'_, DB>
where
	DB: sqlx::Database,
{
	fn deref_mut(&mut self) -> &mut Self::Target
	{
		&mut self.query
	}
}

#[cfg(test)]
mod tests
{
	use sqlx::MySql;

	use super::*;

	#[test]
	fn push_limits_binds_both_values()
	{
		let mut query = QueryBuilder::<MySql>::new("SELECT * FROM Students");
		query.push_limits(5, 10);

		assert_eq!(query.sql(), "SELECT * FROM Students LIMIT ? OFFSET ?");
	}

	#[test]
	fn update_only_sets_present_columns()
	{
		let mut query = UpdateQueryBuilder::<MySql>::new("Students");
		query
			.set_if_some("name", Some("Ana"))
			.set_if_some("email", None::<&str>)
			.set_if_some("age", Some(21_i32));

		assert!(query.has_changes());
		assert_eq!(query.sql(), "UPDATE Students SET name = ?, age = ?");
	}

	#[test]
	fn empty_update_has_no_changes()
	{
		let query = UpdateQueryBuilder::<MySql>::new("Students");

		assert!(!query.has_changes());
	}
}
