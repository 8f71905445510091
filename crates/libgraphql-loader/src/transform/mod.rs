//! In-place passes over a merged `Document` node.

mod dedupe_fragments;
mod prune_unused_fragments;
mod strip_locations;

pub use dedupe_fragments::dedupe_fragments;
pub use prune_unused_fragments::prune_unused_fragments;
pub use strip_locations::strip_locations;

#[cfg(test)]
mod tests;
