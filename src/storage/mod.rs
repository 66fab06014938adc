//! Storage backends for benchmark records.

pub mod jsonl;
