//! Job detail page - full posting including description and every tag.

use board_core::BadgeTone;
use dioxus::prelude::*;
use ui::Badge;

use crate::Route;
use crate::catalog::LoadedCatalog;

/// Job detail page component.
#[component]
pub fn JobDetail(id: String) -> Element {
    let LoadedCatalog(loaded) = use_context::<LoadedCatalog>();
    let job = loaded.ok().and_then(|catalog| catalog.get(&id).cloned());

    let Some(job) = job else {
        return rsx! {
            div { class: "max-w-3xl mx-auto p-6",
                div { class: "empty-state",
                    h2 { class: "text-xl font-semibold text-gray-900", "Job not found" }
                    p { class: "text-gray-600", "No posting with id {id}." }
                }
                Link { to: Route::Board {}, class: "text-blue-600", "← Back to jobs" }
            }
        };
    };

    rsx! {
        article { class: "max-w-3xl mx-auto p-6 space-y-6",
            Link { to: Route::Board {}, class: "text-blue-600", "← Back to jobs" }

            div { class: "bg-white border border-gray-200 rounded-lg p-6 space-y-4",
                div { class: "flex items-start justify-between gap-4",
                    div {
                        h1 { class: "text-2xl font-bold text-gray-900", "{job.title}" }
                        p { class: "text-gray-600 font-medium", "{job.company}" }
                    }
                    Badge {
                        tone: BadgeTone::for_job_type(&job.job_type),
                        label: job.job_type.clone(),
                    }
                }

                div { class: "flex flex-wrap items-center gap-4 text-sm text-gray-600",
                    span { "{job.location}" }
                    span { "Posted {job.posted_date}" }
                    Badge {
                        tone: BadgeTone::for_experience_level(&job.experience_level),
                        label: job.experience_level.clone(),
                    }
                }

                if let Some(ref salary) = job.salary {
                    p { class: "font-semibold text-gray-900", "{salary}" }
                }

                if let Some(ref description) = job.description {
                    p { class: "text-gray-700 leading-relaxed", "{description}" }
                }

                if !job.tags.is_empty() {
                    div { class: "flex flex-wrap gap-2",
                        for tag in job.tags.iter() {
                            span {
                                key: "{tag}",
                                class: "text-xs bg-gray-100 text-gray-700 px-2 py-1 rounded-full",
                                "{tag}"
                            }
                        }
                    }
                }
            }
        }
    }
}
