// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Bound, RangeBounds};

use crate::EncodedKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyRange {
	pub start: Bound<EncodedKey>,
	pub end: Bound<EncodedKey>,
}

impl EncodedKeyRange {
	pub fn new(start: Bound<EncodedKey>, end: Bound<EncodedKey>) -> Self {
		Self {
			start,
			end,
		}
	}

	/// Start is inclusive, end is exclusive. `None` leaves that side unbounded.
	pub fn start_end(start: Option<EncodedKey>, end: Option<EncodedKey>) -> Self {
		Self {
			start: start.map(Bound::Included).unwrap_or(Bound::Unbounded),
			end: end.map(Bound::Excluded).unwrap_or(Bound::Unbounded),
		}
	}

	/// All keys starting with `prefix`.
	pub fn prefix(prefix: &[u8]) -> Self {
		let start = Bound::Included(EncodedKey::new(prefix.to_vec()));

		let mut end = prefix.to_vec();
		while let Some(last) = end.pop() {
			if last < 0xFF {
				end.push(last + 1);
				return Self {
					start,
					end: Bound::Excluded(EncodedKey::new(end)),
				};
			}
		}

		Self {
			start,
			end: Bound::Unbounded,
		}
	}

	pub fn all() -> Self {
		Self {
			start: Bound::Unbounded,
			end: Bound::Unbounded,
		}
	}
}

impl RangeBounds<EncodedKey> for EncodedKeyRange {
	fn start_bound(&self) -> Bound<&EncodedKey> {
		self.start.as_ref()
	}

	fn end_bound(&self) -> Bound<&EncodedKey> {
		self.end.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use std::ops::RangeBounds;

	use super::*;

	#[test]
	fn test_prefix() {
		let range = EncodedKeyRange::prefix(&[0x01, 0x02]);
		assert!(range.contains(&EncodedKey::new([0x01, 0x02])));
		assert!(range.contains(&EncodedKey::new([0x01, 0x02, 0xFF, 0xFF])));
		assert!(!range.contains(&EncodedKey::new([0x01, 0x03])));
		assert!(!range.contains(&EncodedKey::new([0x01, 0x01, 0xFF])));
	}

	#[test]
	fn test_prefix_carries_over_ff() {
		let range = EncodedKeyRange::prefix(&[0x01, 0xFF]);
		assert_eq!(range.end, Bound::Excluded(EncodedKey::new([0x02])));
		assert!(range.contains(&EncodedKey::new([0x01, 0xFF, 0x00])));
		assert!(!range.contains(&EncodedKey::new([0x02])));
	}

	#[test]
	fn test_prefix_all_ff_is_unbounded() {
		let range = EncodedKeyRange::prefix(&[0xFF, 0xFF]);
		assert_eq!(range.end, Bound::Unbounded);
	}

	#[test]
	fn test_start_end() {
		let range = EncodedKeyRange::start_end(Some(EncodedKey::new([0x01])), Some(EncodedKey::new([0x03])));
		assert!(range.contains(&EncodedKey::new([0x01])));
		assert!(range.contains(&EncodedKey::new([0x02, 0xFF])));
		assert!(!range.contains(&EncodedKey::new([0x03])));
	}
}
