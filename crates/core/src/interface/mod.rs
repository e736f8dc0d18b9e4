// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use history::HistoryEntry;
pub use job::{Job, JobKind, JobState};
pub use schema::SchemaDef;
pub use table::{ColumnDef, ColumnType, IndexDef, TableDef, Visibility, normalize_name};

mod history;
mod job;
mod schema;
mod table;
