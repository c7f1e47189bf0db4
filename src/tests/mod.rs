#[cfg(test)]
// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod verify_tests;
pub mod policy_tests;
pub mod report_tests;
