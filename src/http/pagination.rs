//! Pagination query parameters.
//!
//! Both parameters are forgiving: anything that doesn't look like a positive
//! integer silently falls back to the default.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// A 1-indexed page number.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Page
{
	value: u64,
}

impl Page
{
	/// The page returned if none was requested.
	pub const DEFAULT: u64 = 1;

	/// Returns the page number.
	pub fn value(self) -> u64
	{
		self.value
	}

	/// Calculates how many rows to skip for a page of size `limit`.
	pub fn offset<const DEFAULT: u64>(self, limit: Limit<DEFAULT>) -> u64
	{
		(self.value - 1).saturating_mul(limit.value())
	}
}

impl Default for Page
{
	fn default() -> Self
	{
		Self { value: Self::DEFAULT }
	}
}

impl From<u64> for Page
{
	fn from(value: u64) -> Self
	{
		match value {
			0 => Self::default(),
			value => Self { value },
		}
	}
}

impl fmt::Debug for Page
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "Page({})", self.value)
	}
}

impl<'de> Deserialize<'de> for Page
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(parse_positive(deserializer)?.map_or_else(Self::default, |value| Self { value }))
	}
}

/// Maximum number of results per page.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Limit<const DEFAULT: u64>
{
	value: u64,
}

impl<const DEFAULT: u64> Limit<DEFAULT>
{
	/// Returns the limit.
	pub fn value(self) -> u64
	{
		self.value
	}

	/// Calculates how many pages are needed to display `total` rows.
	pub fn total_pages(self, total: u64) -> u64
	{
		total.div_ceil(self.value)
	}
}

impl<const DEFAULT: u64> Default for Limit<DEFAULT>
{
	fn default() -> Self
	{
		const { assert!(DEFAULT > 0) };
		Self { value: DEFAULT }
	}
}

impl<const DEFAULT: u64> From<u64> for Limit<DEFAULT>
{
	fn from(value: u64) -> Self
	{
		match value {
			0 => Self::default(),
			value => Self { value },
		}
	}
}

impl<const DEFAULT: u64> fmt::Debug for Limit<DEFAULT>
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "Limit({})", self.value)
	}
}

impl<'de, const DEFAULT: u64> Deserialize<'de> for Limit<DEFAULT>
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(parse_positive(deserializer)?.map_or_else(Self::default, |value| Self { value }))
	}
}

/// A query parameter as it arrives: once, or repeated (`?page=1&page=2`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawParam
{
	One(String),
	Many(Vec<String>),
}

/// Deserializes a query parameter value and interprets it as a positive
/// integer.
///
/// Query parameters always arrive as strings, so we deserialize a string and
/// parse it ourselves instead of rejecting the whole request. Only the first
/// occurrence of a repeated parameter counts.
fn parse_positive<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = match RawParam::deserialize(deserializer)? {
		RawParam::One(value) => Some(value),
		RawParam::Many(values) => values.into_iter().next(),
	};

	Ok(value.as_deref().and_then(leading_int))
}

/// Parses the leading digits of `value`, e.g. `"12abc"` -> `12`.
///
/// Returns [`None`] if there are no digits, the number is zero, negative, or
/// does not fit into a `u64`.
fn leading_int(value: &str) -> Option<u64>
{
	let value = value.trim_start();
	let value = value.strip_prefix('+').unwrap_or(value);
	let digits = value
		.find(|ch: char| !ch.is_ascii_digit())
		.map_or(value, |end| &value[..end]);

	digits.parse::<u64>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[derive(Debug, Deserialize)]
	struct Query
	{
		#[serde(default)]
		page: Page,

		#[serde(default)]
		limit: Limit<5>,
	}

	fn query(raw: &str) -> Query
	{
		serde_html_form::from_str(raw).unwrap()
	}

	#[test]
	fn defaults_when_missing()
	{
		let Query { page, limit } = query("");

		assert_eq!(page.value(), 1);
		assert_eq!(limit.value(), 5);
	}

	#[test]
	fn parses_valid_values()
	{
		let Query { page, limit } = query("page=3&limit=20");

		assert_eq!(page.value(), 3);
		assert_eq!(limit.value(), 20);
	}

	#[test]
	fn falls_back_on_garbage()
	{
		for raw in ["page=abc&limit=xyz", "page=0&limit=0", "page=-2&limit=-7", "page=&limit="] {
			let Query { page, limit } = query(raw);

			assert_eq!(page.value(), 1, "{raw}");
			assert_eq!(limit.value(), 5, "{raw}");
		}
	}

	#[test]
	fn honors_numeric_prefix()
	{
		let Query { page, limit } = query("page=2nd&limit=10items");

		assert_eq!(page.value(), 2);
		assert_eq!(limit.value(), 10);
	}

	#[test]
	fn uses_first_of_repeated_values()
	{
		let Query { page, limit } = query("page=2&page=7&limit=3&limit=9");

		assert_eq!(page.value(), 2);
		assert_eq!(limit.value(), 3);

		let Query { page, .. } = query("page=abc&page=4");

		assert_eq!(page.value(), 1);
	}

	#[test]
	fn calculates_offset()
	{
		assert_eq!(Page::from(1).offset(Limit::<5>::from(5)), 0);
		assert_eq!(Page::from(3).offset(Limit::<5>::from(5)), 10);
		assert_eq!(Page::from(u64::MAX).offset(Limit::<5>::from(u64::MAX)), u64::MAX);
	}

	#[test]
	fn calculates_total_pages()
	{
		let limit = Limit::<5>::default();

		assert_eq!(limit.total_pages(0), 0);
		assert_eq!(limit.total_pages(5), 1);
		assert_eq!(limit.total_pages(6), 2);
		assert_eq!(limit.total_pages(11), 3);
	}
}
