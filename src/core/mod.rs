//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run configuration, file entries, summary and errors (model)
//! - Banner and summary rendering
//! - Path normalization and matching utilities
//! - Strict UTF-8 file reading

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
