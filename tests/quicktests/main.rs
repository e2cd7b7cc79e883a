//! Property tests for `ordered_tree::Tree` driven by quickcheck.

mod ordered;
