// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	SchemaVersion, TableId,
	interface::{Job, JobState, Visibility},
};

use crate::{DdlError, ErrorClass};

/// Result of one step. Handlers never touch the job they were given; the scheduler decides
/// whether to persist the outcome with [`JobOutcome::apply_to`].
#[derive(Debug)]
pub struct JobOutcome {
	pub state: JobState,
	pub schema_state: Visibility,
	/// Schema version committed by this step, if it bumped one.
	pub version: Option<SchemaVersion>,
	/// Table id whose orphaned records need a follow-up reclaim job.
	pub reclaim: Option<TableId>,
	pub error: Option<DdlError>,
}

impl JobOutcome {
	pub fn running(schema_state: Visibility) -> Self {
		Self {
			state: JobState::Running,
			schema_state,
			version: None,
			reclaim: None,
			error: None,
		}
	}

	pub fn done(schema_state: Visibility) -> Self {
		Self {
			state: JobState::Done,
			..Self::running(schema_state)
		}
	}

	/// Leaves the job exactly as it was.
	pub fn unchanged(job: &Job) -> Self {
		Self {
			state: job.state,
			..Self::running(job.schema_state)
		}
	}

	/// Cancels the job for [`ErrorClass::Cancel`], keeps its persisted state otherwise.
	pub fn failed(job: &Job, error: DdlError) -> Self {
		let state = match error.class() {
			ErrorClass::Cancel => JobState::Cancelled,
			ErrorClass::Retry | ErrorClass::Fatal => job.state,
		};
		Self {
			state,
			schema_state: job.schema_state,
			version: None,
			reclaim: None,
			error: Some(error),
		}
	}

	pub fn with_version(mut self, version: SchemaVersion) -> Self {
		self.version = Some(version);
		self
	}

	pub fn with_reclaim(mut self, table: TableId) -> Self {
		self.reclaim = Some(table);
		self
	}

	pub fn is_finished(&self) -> bool {
		self.state.is_finished()
	}

	/// Whether the scheduler should invoke the job again.
	pub fn should_retry(&self) -> bool {
		match &self.error {
			None => self.state == JobState::Running,
			Some(err) => err.class() == ErrorClass::Retry,
		}
	}

	pub fn apply_to(&self, job: &mut Job) {
		job.state = self.state;
		job.schema_state = self.schema_state;
	}
}
