//! Integration test suite for setup-shfmt
//!
//! End-to-end tests that run the installer and the binary against a local
//! mock release index. No test talks to the real network.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! cargo nextest run --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: The `setup-shfmt` binary, exit codes and `::error::` output
//! - **install_flow**: Download, placement, idempotence and the decision table
//! - **resolve_latest**: `latest` lookup through the release redirect

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod install_flow;
mod resolve_latest;
