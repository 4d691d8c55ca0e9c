// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-process object storage prefix

use crate::constants::storage::RUN_PREFIX;
use std::fmt;
use std::sync::OnceLock;

/// Token embedded in the backup storage path so concurrent runs never share object keys.
///
/// [`RunPrefix::process`] is computed once on first use and is the same value for every
/// caller in this process. Fixtures receive the prefix as a value and never consult the
/// process-wide copy on their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunPrefix(String);

static PROCESS_PREFIX: OnceLock<RunPrefix> = OnceLock::new();

impl RunPrefix {
    /// The process-wide prefix
    pub fn process() -> RunPrefix {
        PROCESS_PREFIX.get_or_init(RunPrefix::generate).clone()
    }

    /// A fresh prefix independent of the process-wide one
    pub fn generate() -> RunPrefix {
        RunPrefix(format!("{}{:032x}", RUN_PREFIX, rand::random::<u128>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
