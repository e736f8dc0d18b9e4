// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

macro_rules! define_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[repr(transparent)]
		#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Default, Serialize, Deserialize)]
		pub struct $name(pub u64);

		impl Deref for $name {
			type Target = u64;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl PartialEq<u64> for $name {
			fn eq(&self, other: &u64) -> bool {
				self.0.eq(other)
			}
		}

		impl From<$name> for u64 {
			fn from(value: $name) -> Self {
				value.0
			}
		}

		impl From<u64> for $name {
			fn from(value: u64) -> Self {
				Self(value)
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				Display::fmt(&self.0, f)
			}
		}
	};
}

define_id!(SchemaId);
define_id!(TableId);
define_id!(JobId);
define_id!(
	/// Row handle inside a table. Combined with the table id it forms the record key.
	RowId
);
define_id!(
	/// Monotonic catalog clock. Bumped once per committed structural change and used as
	/// the key of the schema history.
	SchemaVersion
);
define_id!(
	/// Version assigned by the store to each committed transaction.
	CommitVersion
);

impl SchemaVersion {
	pub fn next(self) -> Self {
		Self(self.0 + 1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_schema_version_next() {
		assert_eq!(SchemaVersion(0).next(), SchemaVersion(1));
		assert_eq!(SchemaVersion(41).next(), 42);
	}

	#[test]
	fn test_display() {
		assert_eq!(TableId(10).to_string(), "10");
		assert_eq!(format!("{}", SchemaId(5)), "5");
	}
}
