// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{JobId, SchemaId, TableId, interface::Visibility};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobKind {
	CreateTable,
	DropTable,
	TruncateTable,
	/// Background purge of records orphaned by a drop or truncate.
	ReclaimTable,
}

impl Display for JobKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			JobKind::CreateTable => f.write_str("create table"),
			JobKind::DropTable => f.write_str("drop table"),
			JobKind::TruncateTable => f.write_str("truncate table"),
			JobKind::ReclaimTable => f.write_str("reclaim table"),
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobState {
	#[default]
	Running,
	Done,
	Cancelled,
}

impl JobState {
	pub fn is_finished(&self) -> bool {
		matches!(self, JobState::Done | JobState::Cancelled)
	}
}

impl Display for JobState {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			JobState::Running => f.write_str("running"),
			JobState::Done => f.write_str("done"),
			JobState::Cancelled => f.write_str("cancelled"),
		}
	}
}

/// A requested structural change. Owned and persisted by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
	pub id: JobId,
	pub kind: JobKind,
	pub schema: SchemaId,
	pub table: TableId,
	/// postcard encoded, typed by `kind`
	pub args: Vec<u8>,
	pub state: JobState,
	/// Mirrors the lifecycle phase of the table the job is driving.
	pub schema_state: Visibility,
}

impl Job {
	pub fn new<A: Serialize>(
		id: JobId,
		kind: JobKind,
		schema: SchemaId,
		table: TableId,
		args: &A,
	) -> Result<Self, postcard::Error> {
		Ok(Self {
			id,
			kind,
			schema,
			table,
			args: postcard::to_stdvec(args)?,
			state: JobState::Running,
			schema_state: Visibility::None,
		})
	}

	pub fn decode_args<T: DeserializeOwned>(&self) -> Result<T, postcard::Error> {
		postcard::from_bytes(&self.args)
	}
}
