//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod dashboard;
pub mod lists;
pub mod participants;

pub use dashboard::{get_rollups, get_summary};
pub use lists::{list_logbooks, list_mentors, list_outputs, list_universities};
pub use participants::{
    get_participant, get_participant_outputs, list_participants, participant_filters,
};
