use core::fmt;
use std::panic::{self, Location};

/// Which mismatched extractor was called.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultKind {
	/// `unwrap` on an absent [`Optional`](crate::Optional).
	NoneValue,
	/// `unwrap` on an [`Outcome`](crate::Outcome) holding an error.
	ErrValue,
	/// `unwrap_error` on an [`Outcome`](crate::Outcome) holding a value.
	OkValue,
}

/// Panic payload for caller misuse.
///
/// Distinct from payloads handed to `unwrap_or_panic` and from carried errors, so whoever catches the unwind can
/// tell a bug at the call site from a legitimate failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnwrapFault {
	pub kind: FaultKind,
}

impl UnwrapFault {
	/// Logs the fault and unwinds with it as the payload.
	#[cold]
	#[track_caller]
	pub(crate) fn raise(kind: FaultKind) -> ! {
		let fault = Self { kind };
		let location = Location::caller();

		log::error!("{fault} at {location}");
		panic::panic_any(fault)
	}
}

impl fmt::Display for UnwrapFault {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self.kind {
			FaultKind::NoneValue => "called `unwrap` on an absent value",
			FaultKind::ErrValue => "called `unwrap` on an error outcome",
			FaultKind::OkValue => "called `unwrap_error` on an ok outcome",
		})
	}
}

impl std::error::Error for UnwrapFault {}
