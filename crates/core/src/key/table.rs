// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, KeyKind, decode_ids, encode_with};
use crate::{EncodedKey, EncodedKeyRange, SchemaId, TableId};

/// Location of a table descriptor. Descriptors are scoped by their schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TableKey {
	pub schema: SchemaId,
	pub table: TableId,
}

impl TableKey {
	pub fn encoded(schema: SchemaId, table: TableId) -> EncodedKey {
		Self {
			schema,
			table,
		}
		.encode()
	}

	/// All table descriptors of one schema.
	pub fn full_scan(schema: SchemaId) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&encode_with(Self::KIND, &[schema.0]))
	}
}

impl EncodableKey for TableKey {
	const KIND: KeyKind = KeyKind::Table;

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
