//! Strongly-typed identifier value objects.
//!
//! All identifiers are database sequence values handed over by the
//! persistence collaborator, so they wrap a plain `i64`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates a transparent integer identifier type.
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates the identifier from its raw value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

integer_id!(
    /// Identifier of a single process dataset (one module of one process config).
    ProcessId
);

integer_id!(
    /// Identifier of a process configuration (a building material or service).
    ProcessConfigId
);

integer_id!(
    /// Identifier of a reference process database (e.g. one Ökobaudat release).
    ProcessDbId
);

integer_id!(
    /// Identifier of a benchmark system version.
    BenchmarkVersionId
);

/// Identifies the life cycle of one process config within one process database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProcessLifeCycleId {
    pub process_db_id: ProcessDbId,
    pub process_config_id: ProcessConfigId,
}

impl ProcessLifeCycleId {
    pub fn new(process_db_id: ProcessDbId, process_config_id: ProcessConfigId) -> Self {
        Self {
            process_db_id,
            process_config_id,
        }
    }
}

impl fmt::Display for ProcessLifeCycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.process_db_id, self.process_config_id)
    }
}
