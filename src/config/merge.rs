//! Merge rules for the layered loader.

pub mod merge_policy;
