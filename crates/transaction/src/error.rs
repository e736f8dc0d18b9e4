// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
	/// Something this transaction read was committed by another transaction after it began.
	#[error("transaction conflict, please retry")]
	Conflict,

	#[error("transaction has been discarded, please create a new one")]
	Discarded,
}

impl TransactionError {
	pub fn is_retryable(&self) -> bool {
		matches!(self, TransactionError::Conflict)
	}
}
