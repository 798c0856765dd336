//! Core library components.
//!
//! This module contains the salt pipeline: spec resolution, generation,
//! formatting and file output, plus configuration handling.

pub mod config;
pub mod constants;
pub mod format;
pub mod generator;
pub mod salts;
pub mod spec;
pub mod types;
pub mod validation;
pub mod writer;
