//! Client library for the VisionBoard Pro business-planning API.
//!
//! The crate is organized around a declarative resource registry: every
//! sub-resource of a vision board (OKRs, milestones, risks, budget lines,
//! discussions, ...) is described once in an embedded JSON table, and a small
//! set of generic request builders turns those descriptions into HTTP calls.
//! Typed per-group services sit on top as thin facades.
//!
//! # Example
//!
//! ```ignore
//! use visionboard_api::VisionBoardClient;
//! use serde_json::json;
//!
//! async fn example() -> Result<(), visionboard_api::ApiError> {
//!     let client = VisionBoardClient::new("https://api.visionboardpro.com/v1", "bearer-token")?;
//!     let okr = client
//!         .targets()
//!         .create_okr("board-1", &json!({"title": "Grow revenue"}))
//!         .await?;
//!     println!("created {}", okr["id"]);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod resource;
pub mod services;
pub mod token;

pub use api::client::VisionBoardClient;
pub use config::Config;
pub use error::ApiError;
pub use token::{TokenError, TokenIssuer};
