//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models served by the API
//! - `listing`: List query composition (pagination, sort, search, filters)
//! - `analytics`: Growth, ranking, grouping and dashboard aggregation
//! - `ports`: Trait definitions for external dependencies

pub mod analytics;
pub mod entities;
pub mod listing;
pub mod ports;
