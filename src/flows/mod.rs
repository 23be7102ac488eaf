//! Flows module - Multi-step workflows
//!
//! Provides:
//! - combine: Scan a tree and concatenate matching files into one output

pub mod combine;
