//! Helper traits & types for SQL.

mod query;
pub(crate) use query::{QueryBuilderExt, UpdateQueryBuilder};

/// The default minimum number of database pool connections.
pub(crate) const MIN_CONNECTIONS: u32 = if cfg!(test) { 1 } else { 5 };

/// The default maximum number of database pool connections.
pub(crate) const MAX_CONNECTIONS: u32 = if cfg!(test) { 10 } else { 20 };

/// Converts the result of a `SELECT COUNT(*)` query into a `u64`.
pub(crate) fn convert_count(count: i64) -> sqlx::Result<u64>
{
	u64::try_from(count).map_err(|error| sqlx::Error::ColumnDecode {
		index: String::from("count"),
		source: Box::new(error),
	})
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn converts_positive_count()
	{
		assert_eq!(convert_count(42).unwrap(), 42);
	}

	#[test]
	fn rejects_negative_count()
	{
		assert!(matches!(convert_count(-1), Err(sqlx::Error::ColumnDecode { .. })));
	}
}
