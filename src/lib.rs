//! Falling blocks (workspace facade crate).
//!
//! This package exposes `falling_blocks::{core,types}` while the implementation
//! lives in dedicated crates under `crates/`, plus the configuration of the
//! headless demo binary.

pub mod config;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;
