//! VisionBoard Pro API interaction module
//!
//! This module provides the core plumbing for talking to the VisionBoard Pro
//! REST API: the HTTP transport and the client that scopes requests to a
//! vision board.
//!
//! # Module Structure
//!
//! - [`client`] - Main client combining transport, base URL, and credentials
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use crate::api::client::VisionBoardClient;
//!
//! async fn example() -> Result<(), crate::error::ApiError> {
//!     let client = VisionBoardClient::new("https://api.visionboardpro.com/v1", "token")?;
//!     let body = client.get(&client.board_url("b1", "targets/okrs")).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
