//! SeaORM table models
//!
//! Read-only view over the program database. The domain never sees these
//! types directly; adapters convert them into `crate::domain::entities`.

pub mod business_employees;
pub mod businesses;
pub mod logbooks;
pub mod mentor_participants;
pub mod mentors;
pub mod monthly_reports;
pub mod participants;
pub mod profiles;
pub mod universities;
pub mod users;
