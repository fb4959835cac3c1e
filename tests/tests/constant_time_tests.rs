//! Timing-leak checks
//!
//! Statistical and machine dependent, so every test is `#[ignore]`d. Run
//! them on a quiet machine with
//! `cargo test --release -p chapoly-tests --test constant_time_tests -- --ignored --nocapture`.
