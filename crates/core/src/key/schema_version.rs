// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, KeyKind, decode_ids, encode_with};
use crate::EncodedKey;

/// Singleton key holding the current schema version.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaVersionKey;

impl SchemaVersionKey {
	pub fn encoded() -> EncodedKey {
		Self.encode()
	}
}

impl EncodableKey for SchemaVersionKey {
	const KIND: KeyKind = KeyKind::SchemaVersion;

	fn encode(&self) -> EncodedKey {
		encode_with(Self::KIND, &[])
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		decode_ids::<0>(Self::KIND, key).map(|_| Self)
	}
}
