/// Second half of [`Optional::on_some`](crate::Optional::on_some).
///
/// Holds the already transformed value, if there was one.
#[must_use = "a matcher does nothing until `on_none` is called"]
#[derive(Debug)]
pub struct OptionMatcher<U> {
	matched: Option<U>,
}

impl<U> OptionMatcher<U> {
	pub(crate) fn new(matched: Option<U>) -> Self {
		Self { matched }
	}

	/// Returns the result of the `on_some` branch, or calls `f` if the value was absent.
	pub fn on_none(self, f: impl FnOnce() -> U) -> U {
		match self.matched {
			Some(u) => u,
			None => f(),
		}
	}
}

/// Second half of [`Outcome::on_ok`](crate::Outcome::on_ok).
#[must_use = "a matcher does nothing until `on_error` is called"]
#[derive(Debug)]
pub struct OutcomeMatcher<U, E> {
	matched: Result<U, E>,
}

impl<U, E> OutcomeMatcher<U, E> {
	pub(crate) fn new(matched: Result<U, E>) -> Self {
		Self { matched }
	}

	/// Returns the result of the `on_ok` branch, or calls `f` with the carried error.
	pub fn on_error(self, f: impl FnOnce(E) -> U) -> U {
		match self.matched {
			Ok(u) => u,
			Err(e) => f(e),
		}
	}
}
