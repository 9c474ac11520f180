use core::fmt::Display;
use std::process;

use crate::logger::FATAL_TARGET;

/// Status code used by [`Terminate::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// A strategy for ending the process.
///
/// The terminal accessors never call [`process::exit`] directly, so a test can swap in an implementation that
/// records the request and unwinds instead.
pub trait Terminate {
	/// Terminates with the given status code.
	fn exit(&self, code: i32) -> !;

	/// Logs `msg` at fatal severity, then terminates with [`FATAL_EXIT_CODE`].
	fn fatal(&self, msg: &dyn Display) -> ! {
		log::error!(target: FATAL_TARGET, "{msg}");
		self.exit(FATAL_EXIT_CODE)
	}
}

/// Terminates the current process.
#[derive(Clone, Copy, Debug, Default)]
pub struct Process;

impl Terminate for Process {
	fn exit(&self, code: i32) -> ! {
		log::logger().flush();
		process::exit(code)
	}
}
