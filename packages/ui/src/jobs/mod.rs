//! Job board components: listing cards and the filter panel.

mod job_card;
mod job_filters;

pub use job_card::{JobCard, JobCardProps};
pub use job_filters::{JobFilters, JobFiltersProps};
