// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_catalog::{CatalogStore, test_utils::create_schema};
use strata_core::{
	JobId, RowId, SchemaId, SchemaVersion, TableId,
	interface::{HistoryEntry, Job, JobKind, TableDef},
	key::RowKey,
};
use strata_transaction::{MemoryStore, Transaction, TransactionStore};

use crate::{Ddl, DdlConfig, JobOutcome};

/// Fresh in-memory store holding one empty schema.
pub fn test_ddl(schema: u64) -> Ddl<MemoryStore> {
	test_ddl_with(schema, DdlConfig::default())
}

pub fn test_ddl_with(schema: u64, config: DdlConfig) -> Ddl<MemoryStore> {
	let store = MemoryStore::new();
	let mut txn = store.begin();
	create_schema(&mut txn, schema, &format!("schema_{schema}"));
	txn.commit().unwrap();
	Ddl::new(store, config)
}

pub fn create_table_job(id: u64, schema: u64, table: &TableDef) -> Job {
	Job::new(JobId(id), JobKind::CreateTable, SchemaId(schema), table.id, table).unwrap()
}

pub fn drop_table_job(id: u64, schema: u64, table: u64) -> Job {
	Job::new(JobId(id), JobKind::DropTable, SchemaId(schema), TableId(table), &()).unwrap()
}

pub fn truncate_table_job(id: u64, schema: u64, table: u64, new_table: u64) -> Job {
	Job::new(JobId(id), JobKind::TruncateTable, SchemaId(schema), TableId(table), &TableId(new_table)).unwrap()
}

pub fn reclaim_table_job(id: u64, schema: u64, table: u64) -> Job {
	Job::new(JobId(id), JobKind::ReclaimTable, SchemaId(schema), TableId(table), &()).unwrap()
}

/// Steps `job` the way a scheduler would until it finishes, persisting every outcome.
/// Panics on a non retryable error or if the job does not converge.
pub fn run_to_completion<S: TransactionStore>(ddl: &Ddl<S>, job: &mut Job) -> Vec<JobOutcome> {
	let mut outcomes = Vec::new();
	for _ in 0..10_000 {
		let outcome = ddl.step(job);
		outcome.apply_to(job);

		if outcome.is_finished() {
			outcomes.push(outcome);
			return outcomes;
		}
		assert!(outcome.should_retry(), "job {} failed: {:?}", job.id, outcome.error);
		outcomes.push(outcome);
	}
	panic!("job {} did not finish", job.id);
}

pub fn get_table(ddl: &Ddl<MemoryStore>, schema: u64, table: u64) -> Option<TableDef> {
	CatalogStore::get_table(&mut ddl.store().begin(), SchemaId(schema), TableId(table)).unwrap()
}

pub fn schema_version(ddl: &Ddl<MemoryStore>) -> SchemaVersion {
	CatalogStore::schema_version(&mut ddl.store().begin()).unwrap()
}

pub fn history(ddl: &Ddl<MemoryStore>) -> Vec<HistoryEntry> {
	CatalogStore::history_since(&mut ddl.store().begin(), SchemaVersion(0)).unwrap()
}

/// Writes `count` empty records keyed by `table`, bypassing any descriptor.
pub fn insert_rows(ddl: &Ddl<MemoryStore>, table: u64, count: u64) {
	let mut txn = ddl.store().begin();
	for row in 1..=count {
		txn.set(&RowKey::encoded(TableId(table), RowId(row)), vec![]).unwrap();
	}
	txn.commit().unwrap();
}

pub fn row_count(ddl: &Ddl<MemoryStore>, table: u64) -> usize {
	ddl.store().begin().range(RowKey::full_scan(TableId(table)), usize::MAX).unwrap().len()
}
