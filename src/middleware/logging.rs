//! Request / response logging.

use std::time::Duration;

use http::{Request, Response};
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::{HttpMakeClassifier, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer};

/// Creates a middleware layer that wraps every request in a span and logs
/// its outcome.
pub(crate) fn layer<ReqBody, ResBody>() -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<ReqBody> + Clone,
	impl OnRequest<ReqBody> + Clone,
	impl OnResponse<ResBody> + Clone,
	(),
	(),
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	TraceLayer::new_for_http()
		.make_span_with(make_span::<ReqBody>)
		.on_request(on_request::<ReqBody>)
		.on_response(on_response::<ResBody>)
		.on_body_chunk(())
		.on_eos(())
		.on_failure(on_failure)
}

fn make_span<B>(req: &Request<B>) -> tracing::Span
{
	tracing::info_span!(
		target: "student_records::http",
		"request",
		req.method = %req.method(),
		req.uri = %req.uri(),
		req.version = ?req.version(),
		res.status = tracing::field::Empty,
	)
}

fn on_request<B>(_req: &Request<B>, _span: &tracing::Span)
{
	tracing::debug!(target: "student_records::http", "starting to process request");
}

fn on_response<B>(res: &Response<B>, latency: Duration, span: &tracing::Span)
{
	span.record("res.status", res.status().as_u16());

	tracing::info!(target: "student_records::http", ?latency, "finished processing request");
}

fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span)
{
	match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			tracing::error!(
				target: "student_records::http",
				status = status.as_u16(),
				?latency,
				"failed to handle request",
			);
		}
		ServerErrorsFailureClass::Error(error) => {
			tracing::error!(
				target: "student_records::http",
				error,
				?latency,
				"failed to handle request",
			);
		}
	}
}
