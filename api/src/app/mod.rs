//! Application layer
//!
//! Services orchestrate the ports and translate store failures into
//! `AppError`s for the handlers.

pub mod dashboard_service;
pub mod listing_service;
pub mod participant_service;

pub use dashboard_service::DashboardService;
pub use listing_service::{ListParams, ListingService};
pub use participant_service::ParticipantService;
