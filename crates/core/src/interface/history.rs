// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{
	JobId, SchemaId, SchemaVersion, TableId,
	interface::{JobKind, TableDef},
};

/// Immutable record of a completed structural change: the table as it stood when `version`
/// became effective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
	pub version: SchemaVersion,
	pub job: JobId,
	pub kind: JobKind,
	pub schema: SchemaId,
	pub table: TableDef,
	/// Table id that stopped existing with this change, set by truncate.
	pub replaced: Option<TableId>,
}
