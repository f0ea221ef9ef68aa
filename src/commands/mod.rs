//! Command handlers.
//!
//! This module contains handlers for the generate and config commands.

pub mod config;
pub mod generate;
