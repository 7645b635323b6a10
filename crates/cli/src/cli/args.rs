// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

/// Limit arguments for listings.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results (overrides the configured limit)
    #[arg(short = 'n', long, conflicts_with = "no_limit")]
    pub limit: Option<usize>,

    /// Show every matching record, ignoring any configured limit
    #[arg(long, conflicts_with = "limit")]
    pub no_limit: bool,
}

impl LimitArgs {
    /// The effective limit given the configured default.
    pub fn resolve(&self, configured: Option<usize>) -> Option<usize> {
        if self.no_limit {
            None
        } else {
            self.limit.or(configured)
        }
    }
}
