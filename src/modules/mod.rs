//! Modules layer - Infrastructure components for external integrations
//!
//! Holds the client for the external object-storage service.

pub mod storage;
