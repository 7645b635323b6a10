// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod filters;
pub mod list;
pub mod shell;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
