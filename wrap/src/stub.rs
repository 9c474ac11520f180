use core::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use runtime::Terminate;

/// What a terminal accessor asked [`Stub`] to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Terminated {
	Exit(i32),
	Fatal(String),
}

/// Unwinds with a [`Terminated`] payload instead of ending the test process.
pub struct Stub;

impl Terminate for Stub {
	fn exit(&self, code: i32) -> ! {
		panic::panic_any(Terminated::Exit(code))
	}

	fn fatal(&self, msg: &dyn Display) -> ! {
		panic::panic_any(Terminated::Fatal(msg.to_string()))
	}
}

/// Runs `f`, which must unwind, and returns its panic payload as a `P`.
pub fn payload<P: 'static>(f: impl FnOnce()) -> P {
	let err = panic::catch_unwind(AssertUnwindSafe(f)).expect_err("closure should unwind");

	match err.downcast::<P>() {
		Ok(p) => *p,
		Err(_) => panic!("unexpected panic payload type"),
	}
}
