//! Badge color classification for job type and experience level.

/// Color family of a badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Blue,
    Green,
    Purple,
    Orange,
    Yellow,
    /// Fallback for values the board doesn't recognize.
    #[default]
    Gray,
}

impl BadgeTone {
    /// Tone for an employment type such as "Full-time". Case-insensitive.
    pub fn for_job_type(job_type: &str) -> Self {
        match job_type.to_lowercase().as_str() {
            "full-time" => BadgeTone::Blue,
            "part-time" => BadgeTone::Orange,
            "contract" => BadgeTone::Yellow,
            "remote" => BadgeTone::Green,
            _ => BadgeTone::Gray,
        }
    }

    /// Tone for a seniority such as "Entry-Level". Case-insensitive.
    pub fn for_experience_level(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "entry" | "entry-level" => BadgeTone::Green,
            "mid" | "mid-level" => BadgeTone::Blue,
            "senior" => BadgeTone::Purple,
            _ => BadgeTone::Gray,
        }
    }

    /// Background and text utility classes for this tone.
    pub fn classes(self) -> &'static str {
        match self {
            BadgeTone::Blue => "bg-blue-100 text-blue-800",
            BadgeTone::Green => "bg-green-100 text-green-800",
            BadgeTone::Purple => "bg-purple-100 text-purple-800",
            BadgeTone::Orange => "bg-orange-100 text-orange-800",
            BadgeTone::Yellow => "bg-yellow-100 text-yellow-800",
            BadgeTone::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_ignores_case() {
        for raw in ["full-time", "Full-time", "FULL-TIME"] {
            assert_eq!(BadgeTone::for_job_type(raw), BadgeTone::Blue);
        }
        assert_eq!(BadgeTone::for_job_type("Part-Time"), BadgeTone::Orange);
        assert_eq!(BadgeTone::for_job_type("CONTRACT"), BadgeTone::Yellow);
        assert_eq!(BadgeTone::for_job_type("Remote"), BadgeTone::Green);
    }

    #[test]
    fn experience_level_accepts_short_and_long_forms() {
        assert_eq!(BadgeTone::for_experience_level("entry"), BadgeTone::Green);
        assert_eq!(BadgeTone::for_experience_level("Entry-Level"), BadgeTone::Green);
        assert_eq!(BadgeTone::for_experience_level("MID"), BadgeTone::Blue);
        assert_eq!(BadgeTone::for_experience_level("Mid-Level"), BadgeTone::Blue);
        assert_eq!(BadgeTone::for_experience_level("Senior"), BadgeTone::Purple);
    }

    #[test]
    fn unknown_values_fall_back_to_gray() {
        assert_eq!(BadgeTone::for_job_type("Internship"), BadgeTone::Gray);
        assert_eq!(BadgeTone::for_job_type(""), BadgeTone::Gray);
        assert_eq!(BadgeTone::for_experience_level("Principal"), BadgeTone::Gray);
        // Job-type words aren't experience levels.
        assert_eq!(BadgeTone::for_experience_level("remote"), BadgeTone::Gray);
        assert_eq!(BadgeTone::Gray.classes(), "bg-gray-100 text-gray-800");
    }
}
