//! Search orchestration: fusion, persona ranking, and the public pipeline.
//!
//! [`fuse`](fuse::fuse) merges settled provider outcomes in planned order
//! and deduplicates by URL identity; [`rank`](rank::rank) applies persona
//! keyword and source-affinity boosts and sorts; [`SearchOrchestrator`]
//! wires the whole bias → plan → fan-out → fuse → rank pipeline together.

pub mod dedup_key;
pub mod fuse;
pub mod rank;
pub mod search;

pub use search::SearchOrchestrator;
