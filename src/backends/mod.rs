//! Backends module - File system operations
//!
//! Provides:
//! - scan: Recursive file discovery with walkdir

pub mod scan;
