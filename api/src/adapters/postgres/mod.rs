//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

mod listing;

pub mod analytics_repo;
pub mod logbook_repo;
pub mod mentor_repo;
pub mod monthly_report_repo;
pub mod participant_repo;
pub mod university_repo;


pub use analytics_repo::PostgresAnalyticsRepository;
pub use logbook_repo::PostgresLogbookRepository;
pub use mentor_repo::PostgresMentorRepository;
pub use monthly_report_repo::PostgresMonthlyReportRepository;
pub use participant_repo::PostgresParticipantRepository;
pub use university_repo::PostgresUniversityRepository;
