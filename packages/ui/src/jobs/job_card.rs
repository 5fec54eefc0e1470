//! Job card component for displaying a single posting.

use board_core::{BadgeTone, Job};
use dioxus::prelude::*;

use crate::Badge;

/// Props for JobCard component.
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    /// The posting to display.
    pub job: Job,
    /// Callback when the card or its action button is clicked.
    pub on_click: Option<EventHandler<Job>>,
}

/// Card component for displaying a single job posting.
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = props.job.clone();
    let on_click = props.on_click;
    let type_tone = BadgeTone::for_job_type(&job.job_type);
    let level_tone = BadgeTone::for_experience_level(&job.experience_level);
    let tags = job.tag_preview();
    let overflow = tags.overflow_label();

    // Clone job for each closure that needs it
    let job_for_card = job.clone();
    let job_for_button = job.clone();

    rsx! {
        div {
            class: "job-card bg-white border border-gray-200 rounded-lg p-6 hover:shadow-lg hover:scale-[1.02] transition-all duration-300 cursor-pointer group",
            onclick: move |_| select(on_click, &job_for_card),

            div { class: "job-card-header flex items-start justify-between mb-4",
                div { class: "flex items-center gap-3",
                    div { class: "job-card-logo w-12 h-12 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg flex items-center justify-center shrink-0",
                        if let Some(ref logo) = job.logo {
                            img {
                                class: "w-8 h-8 rounded-md object-cover",
                                src: "{logo}",
                                alt: "{job.company} logo",
                            }
                        } else {
                            span { class: "job-card-logo-placeholder text-white", aria_hidden: "true", "▦" }
                        }
                    }

                    div { class: "min-w-0 flex-1",
                        h3 { class: "job-title font-semibold text-gray-900 group-hover:text-blue-600 transition-colors line-clamp-2 text-lg",
                            "{job.title}"
                        }
                        p { class: "job-company text-gray-600 text-sm font-medium", "{job.company}" }
                    }
                }

                Badge {
                    tone: type_tone,
                    label: job.job_type.clone(),
                    class: "job-type whitespace-nowrap",
                }
            }

            div { class: "job-meta flex items-center gap-4 mb-4 text-sm text-gray-600",
                div { class: "flex items-center gap-1",
                    span { class: "icon", aria_hidden: "true", "⌖" }
                    span { class: "job-location", "{job.location}" }
                }
                div { class: "flex items-center gap-1",
                    span { class: "icon", aria_hidden: "true", "◷" }
                    span { class: "job-posted", "{job.posted_date}" }
                }
            }

            div { class: "mb-4",
                Badge {
                    tone: level_tone,
                    label: job.experience_level.clone(),
                    class: "job-level",
                }
            }

            if let Some(ref salary) = job.salary {
                div { class: "job-salary mb-4",
                    span { class: "font-semibold text-gray-900", "{salary}" }
                }
            }

            if !tags.is_empty() {
                div { class: "job-tags flex flex-wrap gap-2 mb-4",
                    for (index, tag) in tags.shown.iter().enumerate() {
                        span {
                            key: "{index}",
                            class: "job-tag text-xs bg-gray-100 text-gray-700 px-2 py-1 rounded-full",
                            "{tag}"
                        }
                    }
                    if let Some(ref label) = overflow {
                        span { class: "job-tags-overflow text-xs text-gray-500", "{label}" }
                    }
                }
            }

            button {
                class: "job-card-action w-full bg-gray-100 text-gray-900 py-3 px-4 rounded-lg font-medium hover:bg-blue-600 hover:text-white transition-colors group-hover:bg-blue-600 group-hover:text-white flex items-center justify-center gap-2",
                onclick: move |e| {
                    e.stop_propagation();
                    select(on_click, &job_for_button);
                },
                span { "View Details" }
                span { class: "icon", aria_hidden: "true", "→" }
            }
        }
    }
}

fn select(on_click: Option<EventHandler<Job>>, job: &Job) {
    if let Some(handler) = on_click {
        tracing::debug!(job_id = %job.id, "job card selected");
        handler.call(job.clone());
    }
}
