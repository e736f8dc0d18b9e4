// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, KeyKind, decode_ids, encode_with};
use crate::{EncodedKey, EncodedKeyRange, RowId, TableId};

/// Key of an encoded record. All records of a table share [`RowKey::table_prefix`], so
/// rebinding a table to a new id makes its old records unreachable without touching them.
#[derive(Debug, Clone, PartialEq)]
pub struct RowKey {
	pub table: TableId,
	pub row: RowId,
}

impl RowKey {
	pub fn encoded(table: TableId, row: RowId) -> EncodedKey {
		Self {
			table,
			row,
		}
		.encode()
	}

	pub fn table_prefix(table: TableId) -> EncodedKey {
		encode_with(Self::KIND, &[table.0])
	}

	pub fn full_scan(table: TableId) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&Self::table_prefix(table))
	}
}

impl EncodableKey for RowKey {
	const KIND: KeyKind = KeyKind::Row;

	fn encode(&self) -> EncodedKey {
		encode_with(Self::KIND, &[self.table.0, self.row.0])
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		let [table, row] = decode_ids::<2>(Self::KIND, key)?;
		Some(Self {
			table: TableId(table),
			row: RowId(row),
		})
	}
}
