//! Analytics core
//!
//! Pure, store-independent computations behind the dashboard:
//! - `growth`: first/last revenue and growth percent of a report series
//! - `rollup`: per-group summary rows (by university, by mentor)
//! - `ranking`: bounded, deterministic top-N selection
//! - `geo`: participant counts per location label
//! - `summary`: the merged dashboard payload
//!
//! Inputs are the fact sets in `facts`, loaded by an `AnalyticsRepository`.

pub mod facts;
pub mod geo;
pub mod growth;
pub mod ranking;
pub mod rollup;
pub mod summary;

pub use facts::{MentorFacts, ParticipantFacts};
pub use geo::{group_by_location, LocationCount};
pub use growth::{mean_growth, Growth, RevenuePoint};
pub use ranking::top_n;
pub use rollup::{
    mentor_groups, rollup, university_groups, GroupBy, GroupMembers, RollupOrder, RollupRow,
};
pub use summary::{
    round_for_display, DashboardCounts, DashboardSummary, MapDistribution, SummaryInputs,
    TopMentorVisit, TopOmzetParticipant, UniversityStat,
};
