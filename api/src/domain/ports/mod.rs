//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod analytics;
pub mod repositories;

pub use analytics::AnalyticsRepository;
pub use repositories::{
    LogbookRepository, MentorRepository, MonthlyReportRepository, ParticipantRepository,
    UniversityRepository,
};
