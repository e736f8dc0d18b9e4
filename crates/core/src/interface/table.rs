// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::TableId;

/// Lifecycle position of a table, governing what query traffic may observe.
///
/// Creation moves `None -> Public`, teardown moves `Public -> WriteOnly -> DeleteOnly` before
/// the descriptor is removed. No other transitions exist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
	#[default]
	None,
	DeleteOnly,
	WriteOnly,
	Public,
}

impl Display for Visibility {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Visibility::None => f.write_str("none"),
			Visibility::DeleteOnly => f.write_str("delete only"),
			Visibility::WriteOnly => f.write_str("write only"),
			Visibility::Public => f.write_str("public"),
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
	Bool,
	Int8,
	Uint8,
	Float8,
	Utf8,
	Blob,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub name: String,
	pub ty: ColumnType,
	pub nullable: bool,
	pub auto_increment: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDef {
	pub name: String,
	pub columns: Vec<String>,
	pub unique: bool,
	pub primary: bool,
}

/// Case folding applied to table and column names before comparing them.
pub fn normalize_name(name: &str) -> String {
	name.to_lowercase()
}

/// Persisted table descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
	pub id: TableId,
	pub name: String,
	pub columns: Vec<ColumnDef>,
	pub indexes: Vec<IndexDef>,
	pub state: Visibility,
}

impl TableDef {
	/// Table names compare case-insensitively.
	pub fn normalized_name(&self) -> String {
		normalize_name(&self.name)
	}

	pub fn find_column(&self, name: &str) -> Option<&ColumnDef> {
		let name = normalize_name(name);
		self.columns.iter().find(|c| normalize_name(&c.name) == name)
	}
}
