//! Job posting types displayed by the board.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Number of tags a card shows before collapsing the rest into a counter.
pub const TAG_PREVIEW_LIMIT: usize = 3;

/// Identifier of a job posting.
///
/// Postings usually arrive with ids minted elsewhere, so any string is
/// accepted. Locally built postings can use [`JobId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Create a new unique job ID.
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier for this posting.
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Employment type, e.g. "Full-time" or "Contract".
    #[serde(rename = "type")]
    pub job_type: String,
    /// Seniority, e.g. "Entry-Level" or "Senior".
    pub experience_level: String,
    /// Display-ready salary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of the company logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Human-readable posting date, shown as-is.
    pub posted_date: String,
}

impl Job {
    /// Create a posting with the required fields and a fresh id.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        job_type: impl Into<String>,
        experience_level: impl Into<String>,
        posted_date: impl Into<String>,
    ) -> Self {
        Self {
            id: JobId::generate(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            job_type: job_type.into(),
            experience_level: experience_level.into(),
            salary: None,
            description: None,
            logo: None,
            tags: Vec::new(),
            posted_date: posted_date.into(),
        }
    }

    /// Set the id for this posting.
    pub fn with_id(mut self, id: impl Into<JobId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the salary text.
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the logo URL.
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Add tags to this posting.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Tags as a card shows them.
    pub fn tag_preview(&self) -> TagPreview<'_> {
        TagPreview::new(&self.tags, TAG_PREVIEW_LIMIT)
    }
}

/// The leading slice of a tag list plus a count of what was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl<'a> TagPreview<'a> {
    pub fn new(tags: &'a [String], limit: usize) -> Self {
        let cut = tags.len().min(limit);
        Self {
            shown: &tags[..cut],
            hidden: tags.len() - cut,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    /// Overflow label such as "+2 more", if anything was left out.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}
