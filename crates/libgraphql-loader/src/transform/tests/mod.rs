mod dedupe_fragments_tests;
mod prune_unused_fragments_tests;
mod strip_locations_tests;
