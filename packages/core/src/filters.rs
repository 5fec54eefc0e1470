//! Filter criteria emitted by the filter panel, and its fixed option lists.

use serde::{Deserialize, Serialize};

/// User-selected constraints for narrowing a job list.
///
/// An empty string means the field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search: String,
    pub category: String,
    pub location: String,
    pub experience_level: String,
}

/// One of the four criteria fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Category,
    Location,
    ExperienceLevel,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Search,
        FilterField::Category,
        FilterField::Location,
        FilterField::ExperienceLevel,
    ];

    /// Key used in the serialized criteria.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterField::Search => "search",
            FilterField::Category => "category",
            FilterField::Location => "location",
            FilterField::ExperienceLevel => "experienceLevel",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FilterCriteria {
    /// Criteria with every field unconstrained.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Category => &self.category,
            FilterField::Location => &self.location,
            FilterField::ExperienceLevel => &self.experience_level,
        }
    }

    /// Copy of these criteria with a single field replaced.
    pub fn with(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FilterField::Search => next.search = value,
            FilterField::Category => next.category = value,
            FilterField::Location => next.location = value,
            FilterField::ExperienceLevel => next.experience_level = value,
        }
        next
    }

    /// Number of fields carrying a constraint.
    pub fn active_count(&self) -> usize {
        FilterField::ALL
            .iter()
            .filter(|field| !self.get(**field).is_empty())
            .count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}

/// An entry in a select or radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Value written into the criteria when chosen.
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    /// An option whose value is its label.
    const fn labelled(label: &'static str) -> Self {
        Self {
            value: label,
            label,
        }
    }

    /// An "All ..." option that clears the field.
    const fn any(label: &'static str) -> Self {
        Self { value: "", label }
    }
}

const CATEGORY_OPTIONS: [SelectOption; 9] = [
    SelectOption::any("All Categories"),
    SelectOption::labelled("Design"),
    SelectOption::labelled("Engineering"),
    SelectOption::labelled("Marketing"),
    SelectOption::labelled("Sales"),
    SelectOption::labelled("Product"),
    SelectOption::labelled("Customer Support"),
    SelectOption::labelled("Finance"),
    SelectOption::labelled("Human Resources"),
];

const LOCATION_OPTIONS: [SelectOption; 9] = [
    SelectOption::any("All Locations"),
    SelectOption::labelled("Lagos, Nigeria"),
    SelectOption::labelled("Cape Town, South Africa"),
    SelectOption::labelled("Nairobi, Kenya"),
    SelectOption::labelled("Accra, Ghana"),
    SelectOption::labelled("Cairo, Egypt"),
    SelectOption::labelled("Johannesburg, South Africa"),
    SelectOption::labelled("Casablanca, Morocco"),
    SelectOption::labelled("Remote"),
];

const EXPERIENCE_LEVEL_OPTIONS: [SelectOption; 4] = [
    SelectOption::any("All Levels"),
    SelectOption {
        value: "entry",
        label: "Entry-Level",
    },
    SelectOption {
        value: "mid",
        label: "Mid-Level",
    },
    SelectOption {
        value: "senior",
        label: "Senior",
    },
];

/// Category select entries, sentinel first.
pub fn category_options() -> &'static [SelectOption] {
    &CATEGORY_OPTIONS
}

/// Location select entries, sentinel first.
pub fn location_options() -> &'static [SelectOption] {
    &LOCATION_OPTIONS
}

/// Experience level radio entries, "All Levels" first.
pub fn experience_level_options() -> &'static [SelectOption] {
    &EXPERIENCE_LEVEL_OPTIONS
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    fn populated() -> FilterCriteria {
        FilterCriteria {
            search: "rust".to_string(),
            category: "Engineering".to_string(),
            location: "Remote".to_string(),
            experience_level: "senior".to_string(),
        }
    }

    #[test]
    fn with_replaces_only_the_named_field() {
        let base = populated();
        for field in FilterField::ALL {
            let next = base.with(field, "changed");
            for other in FilterField::ALL {
                if other == field {
                    assert_eq!(next.get(other), "changed");
                } else {
                    assert_eq!(next.get(other), base.get(other));
                }
            }
        }
    }

    #[test]
    fn sentinel_options_clear_their_field() {
        let all_categories = category_options()[0];
        assert_eq!(all_categories.label, "All Categories");
        let next = populated().with(FilterField::Category, all_categories.value);
        assert_eq!(next.category, "");

        let all_locations = location_options()[0];
        assert_eq!(all_locations.label, "All Locations");
        let next = populated().with(FilterField::Location, all_locations.value);
        assert_eq!(next.location, "");
    }

    #[test]
    fn non_sentinel_options_use_their_label() {
        for options in [category_options(), location_options()] {
            for option in &options[1..] {
                assert_eq!(option.value, option.label);
            }
        }
        assert!(location_options().iter().any(|o| o.value == "Remote"));
    }

    #[test]
    fn experience_levels_are_fixed() {
        let values: Vec<_> = experience_level_options().iter().map(|o| o.value).collect();
        assert_eq!(values, ["", "entry", "mid", "senior"]);
    }

    #[test]
    fn cleared_has_no_constraints() {
        assert!(FilterCriteria::cleared().is_unconstrained());
        assert_eq!(populated().active_count(), 4);
        assert_eq!(
            FilterCriteria::cleared()
                .with(FilterField::Search, "go")
                .active_count(),
            1
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(FilterCriteria::cleared())?;
        assert_eq!(
            value,
            serde_json::json!({
                "search": "",
                "category": "",
                "location": "",
                "experienceLevel": "",
            })
        );
        Ok(())
    }
}
