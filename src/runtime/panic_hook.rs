//! Custom global panic hook to log runtime panics.
//!
//! Panics inside request handlers are turned into responses by the
//! `panic_handler` middleware; this hook makes sure they also end up in the
//! audit log, together with the span of the request that caused them.

use std::backtrace::Backtrace;
use std::panic::{self, PanicHookInfo};
use std::thread;

/// Installs the API's custom global panic hook.
///
/// The previous hook will be invoked after this custom one is done.
pub fn install()
{
	let previous_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		log_panic(info);
		previous_hook(info)
	}));
}

/// Records a panic on the audit log.
fn log_panic(info: &PanicHookInfo<'_>)
{
	let thread = thread::current();
	let location = info
		.location()
		.map_or_else(|| String::from("<unknown>"), ToString::to_string);

	tracing::error! {
		target: "student_records::audit_log",
		thread = thread.name().unwrap_or("<unnamed>"),
		%location,
		backtrace = %Backtrace::force_capture(),
		"panicked: {}",
		panic_message(info),
	};
}

/// Extracts the message a panic was raised with.
fn panic_message<'a>(info: &'a PanicHookInfo<'_>) -> &'a str
{
	info.payload_as_str().unwrap_or("<non-string panic payload>")
}

#[cfg(test)]
mod tests
{
	use std::panic;

	use super::*;

	#[test]
	fn extracts_panic_message()
	{
		let previous_hook = panic::take_hook();
		let (tx, rx) = std::sync::mpsc::channel();

		panic::set_hook(Box::new(move |info| {
			let _ = tx.send(String::from(panic_message(info)));
		}));

		let result = panic::catch_unwind(|| panic!("student {} vanished", 7));

		panic::set_hook(previous_hook);

		assert!(result.is_err());

		// other tests may panic concurrently while our hook is installed
		assert!(rx.try_iter().any(|message| message == "student 7 vanished"));
	}
}
