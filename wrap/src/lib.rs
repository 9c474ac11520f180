//! Optional and fallible value wrappers whose accessors pick the failure policy at each call site.

/// The fault raised when an extractor is called on the wrong state.
pub mod fault;
mod matcher;
pub mod option;
pub mod outcome;
mod zero;

#[cfg(test)]
mod stub;

pub use fault::{FaultKind, UnwrapFault};
pub use matcher::{OptionMatcher, OutcomeMatcher};
pub use option::Optional;
pub use outcome::{BoxError, Outcome};
pub use runtime::{Process, Terminate};
pub use zero::zero;
