//! Decoding of job payloads into an ordered catalog.

use std::collections::HashSet;

use crate::{Job, JobId};

/// Errors raised while decoding a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid job payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Duplicate job id: {0}")]
    DuplicateId(JobId),
}

/// An ordered list of jobs with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    jobs: Vec<Job>,
}

impl Catalog {
    /// Build a catalog, rejecting repeated ids.
    pub fn new(jobs: Vec<Job>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(&job.id) {
                return Err(CatalogError::DuplicateId(job.id.clone()));
            }
        }
        Ok(Self { jobs })
    }

    /// Decode a JSON array of jobs.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let jobs: Vec<Job> = serde_json::from_str(payload)?;
        Self::new(jobs)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
