//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::{CreateMarkRequest, Mark, MarkService};
use crate::http::{Created, Json};
use crate::runtime::Result;
use crate::store::Store;

impl<S> From<MarkService<S>> for Router
where
	S: Store,
{
	fn from(svc: MarkService<S>) -> Self
	{
		Router::new()
			.route("/marks", routing::post(create::<S>))
			.with_state(svc)
	}
}

/// Add a mark to a student.
async fn create<S: Store>(
	State(svc): State<MarkService<S>>,
	Json(req): Json<CreateMarkRequest>,
) -> Result<Created<Mark>>
{
	let res = svc.create_mark(req).await?;

	Ok(Created(res))
}
