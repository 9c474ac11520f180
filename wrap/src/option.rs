use core::any::Any;
use core::fmt::Display;
use std::panic;

use runtime::{Process, Terminate};

use crate::fault::{FaultKind, UnwrapFault};
use crate::matcher::OptionMatcher;
use crate::outcome::Outcome;
use crate::zero::zero;

/// A value of `T`, or nothing.
///
/// Every extractor consumes the container and states what happens when the value is absent, so the policy is
/// visible at the call site: a default, a computed default, a panic, or ending the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Optional<T> {
	Some(T),
	#[default]
	None,
}

impl<T> Optional<T> {
	/// Wraps a present value.
	pub const fn some(value: T) -> Self {
		Self::Some(value)
	}

	/// An absent value.
	pub const fn none() -> Self {
		Self::None
	}

	/// Adapts the `(value, found)` shape of lookup-style APIs. `value` is dropped when `ok` is false.
	pub fn from_flag(value: T, ok: bool) -> Self {
		if ok {
			Self::Some(value)
		} else {
			Self::None
		}
	}

	pub const fn is_some(&self) -> bool {
		matches!(self, Self::Some(_))
	}

	pub const fn is_none(&self) -> bool {
		!self.is_some()
	}

	/// Returns the value.
	///
	/// ### Panics
	/// Unwinds with an [`UnwrapFault`] of kind [`FaultKind::NoneValue`] if the value is absent.
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self {
			Self::Some(v) => v,
			Self::None => UnwrapFault::raise(FaultKind::NoneValue),
		}
	}

	pub fn unwrap_or(self, default: T) -> T {
		match self {
			Self::Some(v) => v,
			Self::None => default,
		}
	}

	pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
		match self {
			Self::Some(v) => v,
			Self::None => f(),
		}
	}

	/// Returns the value, or the [`zero`] value of `T`.
	pub fn unwrap_or_zero(self) -> T
	where
		T: Default,
	{
		self.unwrap_or_else(zero)
	}

	/// Returns the value, or unwinds with `payload` as the panic payload.
	#[track_caller]
	pub fn unwrap_or_panic<P: Any + Send>(self, payload: P) -> T {
		match self {
			Self::Some(v) => v,
			Self::None => panic::panic_any(payload),
		}
	}

	/// Returns the value, or logs `msg` at fatal severity and exits the process.
	pub fn unwrap_or_log_fatal(self, msg: impl Display) -> T {
		self.unwrap_or_log_fatal_with(&Process, msg)
	}

	/// [`unwrap_or_log_fatal`](Self::unwrap_or_log_fatal) through the given strategy.
	pub fn unwrap_or_log_fatal_with<R: Terminate + ?Sized>(self, term: &R, msg: impl Display) -> T {
		match self {
			Self::Some(v) => v,
			Self::None => term.fatal(&msg),
		}
	}

	/// Returns the value, or exits the process with `code`.
	pub fn unwrap_or_exit(self, code: i32) -> T {
		self.unwrap_or_exit_with(&Process, code)
	}

	/// [`unwrap_or_exit`](Self::unwrap_or_exit) through the given strategy.
	pub fn unwrap_or_exit_with<R: Terminate + ?Sized>(self, term: &R, code: i32) -> T {
		match self {
			Self::Some(v) => v,
			Self::None => term.exit(code),
		}
	}

	/// Starts a two-branch match. `f` runs now if the value is present; finish with
	/// [`on_none`](OptionMatcher::on_none).
	pub fn on_some<U>(self, f: impl FnOnce(T) -> U) -> OptionMatcher<U> {
		OptionMatcher::new(self.into_option().map(f))
	}

	pub const fn as_ref(&self) -> Optional<&T> {
		match self {
			Self::Some(v) => Optional::Some(v),
			Self::None => Optional::None,
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
		match self {
			Self::Some(v) => Optional::Some(f(v)),
			Self::None => Optional::None,
		}
	}

	/// Converts to an [`Outcome`], carrying `err` if the value is absent.
	pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
		match self {
			Self::Some(v) => Outcome::Ok(v),
			Self::None => Outcome::Err(err),
		}
	}

	pub fn into_option(self) -> Option<T> {
		match self {
			Self::Some(v) => Some(v),
			Self::None => None,
		}
	}
}

impl<T> From<Option<T>> for Optional<T> {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => Self::Some(v),
			None => Self::None,
		}
	}
}

impl<T> From<Optional<T>> for Option<T> {
	fn from(value: Optional<T>) -> Self {
		value.into_option()
	}
}
