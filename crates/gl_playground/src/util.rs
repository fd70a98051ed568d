// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

/// `lower` if `value < lower`, `upper` if `value > upper`, otherwise `value`.
///
/// Works on anything `PartialOrd`, unlike `Ord::clamp`, so `f32` offsets can
/// go through it directly.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
	if value < lower {
		return lower
	}
	if value > upper {
		return upper
	}
	value
}

/// Size in bytes of a slice's contents, as `glBufferData` wants it.
#[inline]
pub fn data_size<T>(data: &[T]) -> usize {
	std::mem::size_of_val(data)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn clamp_below_range() {
		assert_eq!(clamp(-1.5f32, -1.0, 1.0), -1.0);
		assert_eq!(clamp(-3, 0, 10), 0);
	}

	#[test]
	fn clamp_above_range() {
		assert_eq!(clamp(1.02f32, -1.0, 1.0), 1.0);
		assert_eq!(clamp(42u8, 0, 10), 10);
	}

	#[test]
	fn clamp_inside_range_is_identity() {
		for x in [-1.0f32, -0.5, 0.0, 0.25, 1.0] {
			assert_eq!(clamp(x, -1.0, 1.0), x);
		}
	}

	#[test]
	fn clamp_degenerate_range() {
		assert_eq!(clamp(5, 3, 3), 3);
		assert_eq!(clamp(1, 3, 3), 3);
	}

	#[test]
	fn clamp_orders_strings() {
		assert_eq!(clamp("m", "b", "k"), "k");
		assert_eq!(clamp("c", "b", "k"), "c");
	}

	#[test]
	fn data_size_counts_bytes() {
		assert_eq!(data_size(&[0.0f32; 18]), 72);
		assert_eq!(data_size(&[0u32; 6]), 24);
		assert_eq!(data_size::<u64>(&[]), 0);
	}
}
