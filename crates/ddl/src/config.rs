// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone)]
pub struct DdlConfig {
	/// Maximum number of records removed by one reclamation step.
	pub reclaim_batch_size: usize,
	/// Number of row ids an allocator reserves per round trip to the store.
	pub allocator_step: u64,
}

impl Default for DdlConfig {
	fn default() -> Self {
		Self {
			reclaim_batch_size: 1024,
			allocator_step: 1000,
		}
	}
}

impl DdlConfig {
	pub fn with_reclaim_batch_size(mut self, reclaim_batch_size: usize) -> Self {
		self.reclaim_batch_size = reclaim_batch_size;
		self
	}

	pub fn with_allocator_step(mut self, allocator_step: u64) -> Self {
		self.allocator_step = allocator_step;
		self
	}

	/// A zero batch could never tell an exhausted table from an unfinished one.
	pub(crate) fn reclaim_limit(&self) -> usize {
		self.reclaim_batch_size.max(1)
	}
}
