//! Board page - filter panel beside the list of job cards.

use board_core::{FilterCriteria, FilterField, Job};
use dioxus::prelude::*;
use ui::jobs::{JobCard, JobFilters};

use crate::Route;
use crate::catalog::LoadedCatalog;

/// Board page component.
#[component]
pub fn Board() -> Element {
    let LoadedCatalog(loaded) = use_context::<LoadedCatalog>();
    let mut filters = use_signal(FilterCriteria::cleared);
    let mut filters_open = use_signal(|| false);
    let nav = use_navigator();

    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(err) => {
            return rsx! {
                div { class: "board-layout",
                    div { class: "error-banner", "Could not load jobs: {err}" }
                }
            };
        }
    };

    let on_select = move |job: Job| {
        nav.push(Route::JobDetail {
            id: job.id.to_string(),
        });
    };

    let on_filters_change = move |next: FilterCriteria| filters.set(next);
    let on_toggle = move |_: ()| filters_open.toggle();

    let active = filters().active_count();
    let summary = describe(&filters());
    let toggle_label = if active > 0 {
        format!("Filters ({active})")
    } else {
        "Filters".to_string()
    };

    rsx! {
        div { class: "board-layout",
            // Desktop sidebar
            aside { class: "hidden lg:block",
                JobFilters { on_filters_change }
            }

            section {
                div { class: "flex items-center justify-between mb-4",
                    div {
                        h1 { class: "text-2xl font-bold text-gray-900", "Open Positions" }
                        p { class: "text-sm text-gray-600",
                            "{catalog.len()} jobs"
                            if let Some(ref summary) = summary {
                                " · {summary}"
                            }
                        }
                    }
                    button {
                        class: "lg:hidden px-4 py-2 bg-white border border-gray-300 rounded-lg text-sm font-medium",
                        onclick: move |_| filters_open.set(true),
                        "{toggle_label}"
                    }
                }

                // Mobile overlay
                div { class: "lg:hidden",
                    JobFilters {
                        on_filters_change,
                        is_mobile: true,
                        is_open: filters_open(),
                        on_toggle,
                    }
                }

                if catalog.is_empty() {
                    div { class: "empty-state",
                        p { "No jobs posted yet" }
                    }
                } else {
                    div { class: "job-grid",
                        for job in catalog.jobs() {
                            JobCard {
                                key: "{job.id}",
                                job: job.clone(),
                                on_click: on_select,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One-line description of the active constraints, if any.
fn describe(filters: &FilterCriteria) -> Option<String> {
    let parts: Vec<String> = FilterField::ALL
        .iter()
        .filter_map(|field| {
            let value = filters.get(*field);
            (!value.is_empty()).then(|| match field {
                FilterField::Search => format!("matching \"{value}\""),
                FilterField::Category => format!("in {value}"),
                FilterField::Location => format!("at {value}"),
                FilterField::ExperienceLevel => format!("{value} level"),
            })
        })
        .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_is_empty_without_constraints() {
        assert_eq!(describe(&FilterCriteria::cleared()), None);
    }

    #[test]
    fn describe_lists_active_fields_in_order() {
        let filters = FilterCriteria::cleared()
            .with(FilterField::Location, "Remote")
            .with(FilterField::Search, "rust");
        assert_eq!(
            describe(&filters).as_deref(),
            Some("matching \"rust\", at Remote")
        );
    }
}
