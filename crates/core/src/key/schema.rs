// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, KeyKind, VERSION, decode_ids, encode_with};
use crate::{EncodedKey, EncodedKeyRange, SchemaId};

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaKey {
	pub schema: SchemaId,
}

impl SchemaKey {
	pub fn encoded(schema: SchemaId) -> EncodedKey {
		Self {
			schema,
		}
		.encode()
	}

	pub fn full_scan() -> EncodedKeyRange {
		EncodedKeyRange::prefix(&[VERSION, Self::KIND as u8])
	}
}

impl EncodableKey for SchemaKey {
	const KIND: KeyKind = KeyKind::Schema;

	fn encode(&self) -> EncodedKey {
		encode_with(Self::KIND, &[self.schema.0])
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		let [schema] = decode_ids::<1>(Self::KIND, key)?;
		Some(Self {
			schema: SchemaId(schema),
		})
	}
}
