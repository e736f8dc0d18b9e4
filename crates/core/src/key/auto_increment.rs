// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, KeyKind, decode_ids, encode_with};
use crate::{EncodedKey, SchemaId, TableId};

/// High-water mark of the row id allocator of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoIncrementKey {
	pub schema: SchemaId,
	pub table: TableId,
}

impl AutoIncrementKey {
	pub fn encoded(schema: SchemaId, table: TableId) -> EncodedKey {
		Self {
			schema,
			table,
		}
		.encode()
	}
}

impl EncodableKey for AutoIncrementKey {
	const KIND: KeyKind = KeyKind::AutoIncrement;

	fn encode(&self) -> EncodedKey {
		encode_with(Self::KIND, &[self.schema.0, self.table.0])
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		let [schema, table] = decode_ids::<2>(Self::KIND, key)?;
		Some(Self {
			schema: SchemaId(schema),
			table: TableId(table),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode_decode() {
		let key = AutoIncrementKey {
			schema: SchemaId(1),
			table: TableId(2),
		};
		assert_eq!(AutoIncrementKey::decode(&key.encode()), Some(key));
	}
}
