//! Core domain types for the job board.
//!
//! This crate contains shared types used across all packages:
//! - Job and JobId for posting records
//! - FilterCriteria and the fixed filter option lists
//! - BadgeTone classification for job type and experience level
//! - Catalog decoding for job payloads

mod badge;
mod catalog;
mod filters;
mod job;

pub use badge::BadgeTone;
pub use catalog::{Catalog, CatalogError};
pub use filters::{
    FilterCriteria, FilterField, SelectOption, category_options, experience_level_options,
    location_options,
};
pub use job::{Job, JobId, TAG_PREVIEW_LIMIT, TagPreview};
