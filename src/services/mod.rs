//! Typed service groups
//!
//! One thin facade per sub-resource group, mirroring how the API nests
//! everything under a vision board. Each method delegates to
//! [`crate::resource::dispatch`] with the right resource key; no request
//! logic lives here.

mod collaboration;
mod execution;
mod financial;
mod resources;
mod strategy;
mod targets;

pub use collaboration::CollaborationService;
pub use execution::ExecutionService;
pub use financial::FinancialService;
pub use resources::ResourcesService;
pub use strategy::StrategyService;
pub use targets::TargetsService;
