//! Conformance harness — box contract invariants.
//!
//! Invariant coverage:
//! - Tamper detection: any single bit flip makes `open` fail closed
//! - Fail-closed shape: one error kind, no partial plaintext
//! - Key generation: RNG failure yields no key pair
//! - End-to-end scenario: "hello world" from A to B, C rejected

mod fail_closed;
mod scenario;
mod tamper_detection;
