use core::any::Any;
use core::fmt::Display;
use std::panic;

use runtime::{Process, Terminate};

use crate::fault::{FaultKind, UnwrapFault};
use crate::matcher::OutcomeMatcher;
use crate::option::Optional;
use crate::zero::zero;

/// The error carried by an [`Outcome`] unless another type is named.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A value of `T`, or the error `E` that prevented it.
///
/// Shares the extractor set of [`Optional`], except that the error branch has the carried error to work with:
/// [`unwrap_or_panic`](Self::unwrap_or_panic) unwinds with it and
/// [`unwrap_or_log_fatal`](Self::unwrap_or_log_fatal) logs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T, E = BoxError> {
	Ok(T),
	Err(E),
}

impl<T, E> Outcome<T, E> {
	pub const fn ok(value: T) -> Self {
		Self::Ok(value)
	}

	pub const fn error(err: E) -> Self {
		Self::Err(err)
	}

	/// Adapts the `(value, err)` shape of functions that return both. `value` is dropped when an error is present.
	pub fn from_pair(value: T, err: Option<E>) -> Self {
		match err {
			Some(e) => Self::Err(e),
			None => Self::Ok(value),
		}
	}

	pub const fn is_ok(&self) -> bool {
		matches!(self, Self::Ok(_))
	}

	pub const fn is_error(&self) -> bool {
		!self.is_ok()
	}

	/// Returns the value.
	///
	/// ### Panics
	/// Unwinds with an [`UnwrapFault`] of kind [`FaultKind::ErrValue`] if an error is carried.
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self {
			Self::Ok(v) => v,
			Self::Err(_) => UnwrapFault::raise(FaultKind::ErrValue),
		}
	}

	/// Returns the carried error.
	///
	/// ### Panics
	/// Unwinds with an [`UnwrapFault`] of kind [`FaultKind::OkValue`] if a value is held.
	#[track_caller]
	pub fn unwrap_error(self) -> E {
		match self {
			Self::Ok(_) => UnwrapFault::raise(FaultKind::OkValue),
			Self::Err(e) => e,
		}
	}

	pub fn unwrap_or(self, default: T) -> T {
		match self {
			Self::Ok(v) => v,
			Self::Err(_) => default,
		}
	}

	pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
		match self {
			Self::Ok(v) => v,
			Self::Err(_) => f(),
		}
	}

	pub fn unwrap_or_zero(self) -> T
	where
		T: Default,
	{
		self.unwrap_or_else(zero)
	}

	/// Returns the value, or unwinds with the carried error as the panic payload.
	#[track_caller]
	pub fn unwrap_or_panic(self) -> T
	where
		E: Any + Send,
	{
		match self {
			Self::Ok(v) => v,
			Self::Err(e) => panic::panic_any(e),
		}
	}

	/// Returns the value, or logs the carried error at fatal severity and exits the process.
	pub fn unwrap_or_log_fatal(self) -> T
	where
		E: Display,
	{
		self.unwrap_or_log_fatal_with(&Process)
	}

	pub fn unwrap_or_log_fatal_with<R: Terminate + ?Sized>(self, term: &R) -> T
	where
		E: Display,
	{
		match self {
			Self::Ok(v) => v,
			Self::Err(e) => term.fatal(&e),
		}
	}

	/// Returns the value, or exits the process with `code`.
	pub fn unwrap_or_exit(self, code: i32) -> T {
		self.unwrap_or_exit_with(&Process, code)
	}

	pub fn unwrap_or_exit_with<R: Terminate + ?Sized>(self, term: &R, code: i32) -> T {
		match self {
			Self::Ok(v) => v,
			Self::Err(_) => term.exit(code),
		}
	}

	/// Returns the value, or exits the process with the code `f` picks for the carried error.
	pub fn unwrap_or_dynamic_exit(self, f: impl FnOnce(E) -> i32) -> T {
		self.unwrap_or_dynamic_exit_with(&Process, f)
	}

	pub fn unwrap_or_dynamic_exit_with<R: Terminate + ?Sized>(self, term: &R, f: impl FnOnce(E) -> i32) -> T {
		match self {
			Self::Ok(v) => v,
			Self::Err(e) => term.exit(f(e)),
		}
	}

	/// Starts a two-branch match. `f` runs now if a value is held; finish with
	/// [`on_error`](OutcomeMatcher::on_error).
	pub fn on_ok<U>(self, f: impl FnOnce(T) -> U) -> OutcomeMatcher<U, E> {
		OutcomeMatcher::new(self.into_result().map(f))
	}

	pub const fn as_ref(&self) -> Outcome<&T, &E> {
		match self {
			Self::Ok(v) => Outcome::Ok(v),
			Self::Err(e) => Outcome::Err(e),
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
		match self {
			Self::Ok(v) => Outcome::Ok(f(v)),
			Self::Err(e) => Outcome::Err(e),
		}
	}

	pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
		match self {
			Self::Ok(v) => Outcome::Ok(v),
			Self::Err(e) => Outcome::Err(f(e)),
		}
	}

	/// The value, discarding any error.
	pub fn into_ok(self) -> Optional<T> {
		match self {
			Self::Ok(v) => Optional::Some(v),
			Self::Err(_) => Optional::None,
		}
	}

	/// The carried error, discarding any value.
	pub fn into_error(self) -> Optional<E> {
		match self {
			Self::Ok(_) => Optional::None,
			Self::Err(e) => Optional::Some(e),
		}
	}

	pub fn into_result(self) -> Result<T, E> {
		match self {
			Self::Ok(v) => Ok(v),
			Self::Err(e) => Err(e),
		}
	}
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	fn from(value: Result<T, E>) -> Self {
		match value {
			Ok(v) => Self::Ok(v),
			Err(e) => Self::Err(e),
		}
	}
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
	fn from(value: Outcome<T, E>) -> Self {
		value.into_result()
	}
}
