//! A service for managing marks.
//!
//! Marks can only be created here; they are read through the students they
//! belong to and deleted together with them.

use crate::store::Store;

mod error;
pub use error::{Error, Result};

mod models;
pub use models::{CreateMarkRequest, Mark, MarkID};

mod http;


/// A service for managing marks.
#[derive(Debug, Clone)]
pub struct MarkService<S>
{
	store: S,
}

impl<S> MarkService<S>
where
	S: Store,
{
	/// Create a new [`MarkService`].
	pub fn new(store: S) -> Self
	{
		Self { store }
	}

	/// Adds a mark to an existing student.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn create_mark(&self, req: CreateMarkRequest) -> Result<Mark>
	{
		let mark = self.store.create_mark(req).await?;

		Ok(mark)
	}
}
