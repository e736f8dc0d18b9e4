// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Bound;

use super::{EncodableKey, KeyKind, VERSION, decode_ids, encode_with};
use crate::{EncodedKey, EncodedKeyRange, SchemaVersion};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryKey {
	pub version: SchemaVersion,
}

impl HistoryKey {
	pub fn encoded(version: SchemaVersion) -> EncodedKey {
		Self {
			version,
		}
		.encode()
	}

	pub fn full_scan() -> EncodedKeyRange {
		EncodedKeyRange::prefix(&[VERSION, Self::KIND as u8])
	}

	/// Entries with a version less than or equal to `version`.
	pub fn up_to(version: SchemaVersion) -> EncodedKeyRange {
		let start = Some(encode_with(Self::KIND, &[0]));
		let end = match version.0.checked_add(1) {
			Some(next) => Some(Self::encoded(SchemaVersion(next))),
			None => return Self::full_scan(),
		};
		EncodedKeyRange::start_end(start, end)
	}

	/// Entries with a version strictly greater than `version`.
	pub fn after(version: SchemaVersion) -> EncodedKeyRange {
		let end = Self::full_scan().end;
		EncodedKeyRange::new(Bound::Excluded(Self::encoded(version)), end)
	}
}

impl EncodableKey for HistoryKey {
	const KIND: KeyKind = KeyKind::History;

	fn encode(&self) -> EncodedKey {
		encode_with(Self::KIND, &[self.version.0])
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		let [version] = decode_ids::<1>(Self::KIND, key)?;
		Some(Self {
			version: SchemaVersion(version),
		})
	}
}
