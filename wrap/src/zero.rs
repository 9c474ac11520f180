/// The zero value of `T`: `0`, `""`, an empty collection, or whatever [`Default`] produces for it.
#[inline]
pub fn zero<T: Default>() -> T {
	T::default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Default, PartialEq)]
	struct Point {
		x: i64,
		y: i64,
		label: String,
	}

	#[test]
	fn zero_values() {
		assert_eq!(zero::<u32>(), 0);
		assert_eq!(zero::<f64>(), 0.0);
		assert!(!zero::<bool>());
		assert_eq!(zero::<String>(), "");
		assert_eq!(zero::<Vec<u8>>(), Vec::<u8>::new());
		assert_eq!(zero::<Option<u8>>(), None);
		assert_eq!(zero::<Point>(), Point { x: 0, y: 0, label: String::new() });
	}
}
