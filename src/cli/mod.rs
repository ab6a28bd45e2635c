//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands.

pub mod inspect;
pub mod manifest;
pub mod opcodes;
