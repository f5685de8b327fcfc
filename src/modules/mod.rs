//! Modules layer - Infrastructure components behind the feature services
//!
//! Contains the storage contract and its in-memory backend.

pub mod storage;
