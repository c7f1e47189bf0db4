// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Where an atomization run leaves its artifacts, relative to its working
//! directory.

pub const HISTORY_FILE: &str = "audit/dag.json";
pub const TRACE_FILE: &str = "audit/collapse_trace.log";
pub const ATOMIZER_INPUT: &str = "input.fb";
pub const ATOMIZED_OUTPUT: &str = "build/atomized.json";
pub const ATOMIZER_BIN: &str = "fabc";
