//! Helper macro for creating "ID" types.

/// Creates a new "ID" type.
///
/// IDs are assigned by the database (`AUTO_INCREMENT`), so they are always
/// backed by a `u64`.
macro_rules! make_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[repr(transparent)]
		#[derive(
			Debug,
			Clone,
			Copy,
			PartialEq,
			Eq,
			PartialOrd,
			Ord,
			Hash,
			serde::Serialize,
			serde::Deserialize,
			sqlx::Type,
		)]
		#[serde(transparent)]
		#[sqlx(transparent)]
		pub struct $name(pub u64);

		impl std::fmt::Display for $name
		{
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
			{
				std::fmt::Display::fmt(&self.0, f)
			}
		}

		impl std::ops::Deref for $name
		{
			type Target = u64;

			fn deref(&self) -> &Self::Target
			{
				&self.0
			}
		}

		impl From<$name> for u64
		{
			fn from(value: $name) -> Self
			{
				value.0
			}
		}

		impl From<u64> for $name
		{
			fn from(value: u64) -> Self
			{
				Self(value)
			}
		}

		impl std::str::FromStr for $name
		{
			type Err = std::num::ParseIntError;

			fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
			{
				<u64 as std::str::FromStr>::from_str(s).map(Self)
			}
		}
	};
}

pub(crate) use make_id;

#[cfg(test)]
mod tests
{
	make_id! {
		/// Test ID.
		TestID
	}

	#[test]
	fn parses_from_str()
	{
		assert_eq!("42".parse::<TestID>(), Ok(TestID(42)));
	}

	#[test]
	fn rejects_non_numeric()
	{
		assert!("abc".parse::<TestID>().is_err());
		assert!("-1".parse::<TestID>().is_err());
	}

	#[test]
	fn serializes_transparently()
	{
		assert_eq!(serde_json::to_string(&TestID(7)).ok().as_deref(), Some("7"));
	}
}
