//! Resource abstraction layer
//!
//! This module provides a data-driven approach to the VisionBoard Pro REST
//! surface. Operation descriptors are loaded from JSON files at compile
//! time, so new sub-resources can be added without touching request logic.
//!
//! # Architecture
//!
//! - [`registry`] - Loads and caches operation descriptors from embedded JSON
//! - [`dispatch`] - Generic list/create/update/delete/action operations
//!   driven by the descriptors
//!
//! # Resource Definitions
//!
//! Resources are defined in JSON files under `src/resources/`, one per
//! group: `strategy.json`, `targets.json`, `resources.json`,
//! `execution.json`, `financial.json`, `collaboration.json`.
//!
//! # Example
//!
//! ```ignore
//! use crate::resource::{dispatch, get_resource};
//! use crate::api::client::VisionBoardClient;
//!
//! async fn list_okrs(client: &VisionBoardClient) -> Result<Vec<serde_json::Value>, crate::error::ApiError> {
//!     dispatch::list(client, "board-1", "targets-okrs", None).await
//! }
//! ```

pub mod dispatch;
mod registry;

pub use registry::*;
