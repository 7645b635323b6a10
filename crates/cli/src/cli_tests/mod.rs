// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Argument parsing tests: global flags and the small subcommands in
// flags_tests, the query and limit options of `list` in list_tests.

use super::*;
