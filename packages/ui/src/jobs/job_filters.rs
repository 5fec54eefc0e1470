//! Filter panel for narrowing the job board.

use std::sync::atomic::{AtomicUsize, Ordering};

use board_core::{
    FilterCriteria, FilterField, category_options, experience_level_options, location_options,
};
use dioxus::prelude::*;

/// Suffix source for element ids, so several panels can share a page.
static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

const SELECT_CLASS: &str = "w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 outline-none appearance-none bg-white";

/// Props for JobFilters component.
#[derive(Props, Clone, PartialEq)]
pub struct JobFiltersProps {
    /// Receives the complete criteria after every edit.
    pub on_filters_change: EventHandler<FilterCriteria>,
    /// Render as a dismissible overlay instead of an inline panel.
    #[props(default = false)]
    pub is_mobile: bool,
    /// Whether the overlay is shown. Only used when `is_mobile` is set.
    #[props(default = false)]
    pub is_open: bool,
    /// Callback for the overlay backdrop and close button.
    pub on_toggle: Option<EventHandler<()>>,
}

/// Filter panel holding search, category, location and experience level.
#[component]
pub fn JobFilters(props: JobFiltersProps) -> Element {
    let mut filters = use_signal(FilterCriteria::cleared);
    let on_filters_change = props.on_filters_change;
    let on_toggle = props.on_toggle;
    let instance = use_hook(|| NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed));
    let search_id = format!("job-filter-search-{instance}");
    let category_id = format!("job-filter-category-{instance}");
    let location_id = format!("job-filter-location-{instance}");
    let level_group = format!("experienceLevel-{instance}");

    let mut update = move |field: FilterField, value: String| {
        let next = filters.read().with(field, value);
        tracing::debug!(%field, active = next.active_count(), "filters changed");
        filters.set(next.clone());
        on_filters_change.call(next);
    };

    let reset = move |_: MouseEvent| {
        tracing::debug!("filters reset");
        let cleared = FilterCriteria::cleared();
        filters.set(cleared.clone());
        on_filters_change.call(cleared);
    };

    let toggle = move |_: MouseEvent| {
        if let Some(handler) = on_toggle {
            handler.call(());
        }
    };

    let current = filters();

    let content = rsx! {
        div { class: "job-filters space-y-6",
            div { class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold text-gray-900 flex items-center gap-2",
                    span { class: "icon", aria_hidden: "true", "⧩" }
                    "Filter Jobs"
                }
                if props.is_mobile && on_toggle.is_some() {
                    button {
                        class: "job-filters-close p-2 hover:bg-gray-100 rounded-lg transition-colors",
                        aria_label: "Close filters",
                        onclick: toggle,
                        "×"
                    }
                }
            }

            div { class: "space-y-2",
                label { class: "block text-sm font-medium text-gray-700", r#for: "{search_id}", "Search" }
                div { class: "relative",
                    input {
                        id: "{search_id}",
                        class: "w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 outline-none",
                        r#type: "text",
                        placeholder: "Search by title or keyword",
                        value: "{current.search}",
                        oninput: move |e| update(FilterField::Search, e.value()),
                    }
                }
            }

            div { class: "space-y-2",
                label { class: "block text-sm font-medium text-gray-700", r#for: "{category_id}", "Category" }
                div { class: "relative",
                    select {
                        id: "{category_id}",
                        class: SELECT_CLASS,
                        value: "{current.category}",
                        onchange: move |e| update(FilterField::Category, e.value()),

                        for choice in category_options() {
                            option {
                                key: "{choice.label}",
                                value: choice.value,
                                selected: current.category == choice.value,
                                "{choice.label}"
                            }
                        }
                    }
                }
            }

            div { class: "space-y-2",
                label { class: "block text-sm font-medium text-gray-700", r#for: "{location_id}", "Location" }
                div { class: "relative",
                    select {
                        id: "{location_id}",
                        class: SELECT_CLASS,
                        value: "{current.location}",
                        onchange: move |e| update(FilterField::Location, e.value()),

                        for choice in location_options() {
                            option {
                                key: "{choice.label}",
                                value: choice.value,
                                selected: current.location == choice.value,
                                "{choice.label}"
                            }
                        }
                    }
                }
            }

            div { class: "space-y-3",
                span { class: "block text-sm font-medium text-gray-700", "Experience Level" }
                div { class: "space-y-2",
                    for choice in experience_level_options() {
                        label {
                            key: "{choice.value}",
                            class: "flex items-center",
                            input {
                                class: "w-4 h-4 text-blue-600 focus:ring-blue-500 border-gray-300",
                                r#type: "radio",
                                name: "{level_group}",
                                value: choice.value,
                                checked: current.experience_level == choice.value,
                                onchange: move |_| update(FilterField::ExperienceLevel, choice.value.to_string()),
                            }
                            span { class: "ml-2 text-sm text-gray-700", "{choice.label}" }
                        }
                    }
                }
            }

            button {
                class: "job-filters-reset w-full bg-gray-100 text-gray-700 py-2 px-4 rounded-lg font-medium hover:bg-gray-200 transition-colors",
                onclick: reset,
                "Reset Filters"
            }
        }
    };

    if props.is_mobile {
        let visibility = if props.is_open { "block" } else { "hidden" };
        return rsx! {
            div { class: "job-filters-overlay fixed inset-0 z-50 {visibility}",
                div {
                    class: "job-filters-backdrop fixed inset-0 bg-black bg-opacity-50",
                    onclick: toggle,
                }
                div { class: "fixed top-0 left-0 right-0 bg-white p-6 max-h-screen overflow-y-auto",
                    {content}
                }
            }
        };
    }

    rsx! {
        div { class: "job-filters-panel bg-white p-6 rounded-lg shadow-sm border border-gray-200 h-fit sticky top-6",
            {content}
        }
    }
}
