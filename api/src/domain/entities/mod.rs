//! Domain entities
//!
//! Pure domain models representing the program's core concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod logbook;
pub mod mentor;
pub mod monthly_report;
pub mod participant;
pub mod status;
pub mod university;

pub use logbook::{LogbookEntry, LogbookId, MeetingType, VisitLog, VisitType};
pub use mentor::{MentorId, MentorSummary};
pub use monthly_report::{MonthlyReportEntry, MonthlyReportId, ReportPeriod};
pub use participant::{
    ParticipantDetail, ParticipantFilterOptions, ParticipantId, ParticipantOutputs,
    ParticipantSummary, OutputsSummary,
};
pub use status::EntityStatus;
pub use university::{University, UniversityBrief, UniversityId, UniversityRef};
