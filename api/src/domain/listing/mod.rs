//! List query composition
//!
//! Turns loosely-typed request parameters into a validated `ListQuery`:
//! clamped pagination, an allowlisted sort key, a normalised search term
//! and allowlisted filters. Adapters turn a `ListQuery` into SQL; nothing
//! from the request reaches SQL text except through these enums.

pub mod fields;
pub mod query;
pub mod values;

pub use fields::{
    LogbookFilter, LogbookQuery, LogbookSort, MentorFilter, MentorQuery, MentorSort,
    OutputFilter, OutputQuery, OutputSort, ParticipantFilter, ParticipantQuery, ParticipantSort,
    UniversityFilter, UniversityQuery, UniversitySort,
};
pub use query::{Allowlist, ListQuery, Page, Pagination, SortKey, SortOrder};
pub use values::{like_pattern, parse_flag, parse_number, parse_uuid, DayRange};
