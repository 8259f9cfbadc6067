//! Sentinel-to-missing replacement.
//!
//! The source data marks absence with in-band sentinels (`-1`, `"-1"`,
//! `"Unknown / Non-Applicable"`). This module translates them into the
//! explicit `Missing` marker once, at the cleaning boundary, so everything
//! downstream sees a single representation of absence.

use jobs_model::{CellValue, Table};
use tracing::debug;

use crate::error::{CleanError, Result};

/// Behavior when a policy names a column the table does not have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingColumns {
    /// Skip the column with a debug log (matches the source behavior).
    #[default]
    Skip,
    /// Fail with [`CleanError::ColumnNotFound`].
    Error,
}

/// Which columns to scrub, which values count as sentinels, and what to
/// write in their place.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SentinelPolicy {
    pub columns: Vec<String>,
    pub sentinels: Vec<CellValue>,
    pub replacement: CellValue,
    #[serde(default)]
    pub missing_columns: MissingColumns,
}

impl SentinelPolicy {
    /// Builds a policy, rejecting empty column or sentinel lists up front
    /// so misconfiguration surfaces at setup time rather than mid-table.
    pub fn new(
        columns: Vec<String>,
        sentinels: Vec<CellValue>,
        replacement: CellValue,
    ) -> Result<Self> {
        let policy = Self {
            columns,
            sentinels,
            replacement,
            missing_columns: MissingColumns::default(),
        };
        policy.check()?;
        Ok(policy)
    }

    #[must_use]
    pub fn with_missing_columns(mut self, mode: MissingColumns) -> Self {
        self.missing_columns = mode;
        self
    }

    /// Re-validates the list invariants; used for deserialized policies.
    pub fn check(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(CleanError::EmptyColumnList);
        }
        if self.sentinels.is_empty() {
            return Err(CleanError::EmptySentinelList);
        }
        Ok(())
    }
}

/// Replaces every cell in the policy's columns whose value exactly equals
/// one of the listed sentinels. Equality is type-and-value: `Int(-1)` is
/// not matched by a policy listing only `Text("-1")`. Unlisted columns and
/// unmatched values pass through unchanged.
pub fn replace_vals_in_cols(table: &Table, policy: &SentinelPolicy) -> Result<Table> {
    let mut out = table.clone();
    for column in &policy.columns {
        if !out.has_column(column) {
            match policy.missing_columns {
                MissingColumns::Skip => {
                    debug!(column = %column, "sentinel column not in table; skipping");
                    continue;
                }
                MissingColumns::Error => return Err(CleanError::ColumnNotFound(column.clone())),
            }
        }
        for row in &mut out.rows {
            let is_sentinel = row
                .get(column)
                .is_some_and(|value| policy.sentinels.contains(value));
            if is_sentinel {
                row.set(column.clone(), policy.replacement.clone());
            }
        }
    }
    Ok(out)
}
