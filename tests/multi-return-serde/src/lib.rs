//! `serde` feature tests for `multi-return`
