// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Order preserving key encoding.
//!
//! Every key starts with a format version byte followed by a [`KeyKind`] byte. Identifiers are
//! written big-endian, so the byte order of two keys of the same kind matches the numeric order
//! of their identifiers and a shared identifier prefix forms a contiguous key range.

use std::ops::Deref;

pub use auto_increment::AutoIncrementKey;
pub use history::HistoryKey;
pub use range::EncodedKeyRange;
pub use row::RowKey;
pub use schema::SchemaKey;
pub use schema_version::SchemaVersionKey;
pub use table::TableKey;

mod auto_increment;
mod history;
mod range;
mod row;
mod schema;
mod schema_version;
mod table;

pub(crate) const VERSION: u8 = 1;

#[derive(Debug, Clone, PartialOrd, Ord, Hash, PartialEq, Eq)]
pub struct EncodedKey(pub Vec<u8>);

impl Deref for EncodedKey {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(key.into())
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyKind {
	Schema = 0x01,
	Table = 0x02,
	SchemaVersion = 0x03,
	History = 0x04,
	AutoIncrement = 0x05,
	Row = 0x06,
}

impl From<KeyKind> for u8 {
	fn from(kind: KeyKind) -> Self {
		kind as u8
	}
}

impl TryFrom<u8> for KeyKind {
	type Error = u8;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0x01 => Ok(Self::Schema),
			0x02 => Ok(Self::Table),
			0x03 => Ok(Self::SchemaVersion),
			0x04 => Ok(Self::History),
			0x05 => Ok(Self::AutoIncrement),
			0x06 => Ok(Self::Row),
			_ => Err(value),
		}
	}
}

pub trait EncodableKey {
	const KIND: KeyKind;

	fn encode(&self) -> EncodedKey;

	fn decode(key: &EncodedKey) -> Option<Self>
	where
		Self: Sized;
}

/// Writes the key header followed by the given big-endian identifiers.
pub(crate) fn encode_with(kind: KeyKind, ids: &[u64]) -> EncodedKey {
	let mut out = Vec::with_capacity(2 + ids.len() * 8);
	out.push(VERSION);
	out.push(kind as u8);
	for id in ids {
		out.extend(&id.to_be_bytes());
	}
	EncodedKey::new(out)
}

/// Validates the key header and reads exactly `N` big-endian identifiers.
pub(crate) fn decode_ids<const N: usize>(kind: KeyKind, key: &EncodedKey) -> Option<[u64; N]> {
	let bytes = key.as_slice();
	if bytes.len() != 2 + N * 8 {
		return None;
	}
	if bytes[0] != VERSION || KeyKind::try_from(bytes[1]).ok()? != kind {
		return None;
	}

	let mut result = [0u64; N];
	for (i, chunk) in bytes[2..].chunks_exact(8).enumerate() {
		result[i] = u64::from_be_bytes(chunk.try_into().ok()?);
	}
	Some(result)
}
