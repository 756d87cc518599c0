use dioxus::prelude::*;

use aftercare_common::dates::format_date;
use aftercare_common::fixtures;

use super::app::Route;

#[component]
pub fn ServiceHistoryView() -> Element {
    let nav = use_navigator();
    let records = fixtures::service_history();

    rsx! {
        div { class: "screen",
            header { class: "app-header",
                button {
                    class: "ghost",
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    "← Back to Dashboard"
                }
            }
            main { class: "container narrow",
                div { class: "form-heading",
                    h1 { "Service History" }
                    p { "Track all your service requests and their status" }
                }
                div { class: "record-list",
                    if records.is_empty() {
                        div { class: "card empty-state",
                            h3 { "No Service History" }
                            p { "You haven't raised any service requests yet" }
                            button {
                                class: "primary",
                                onclick: move |_| { nav.push(Route::ServiceRequest {}); },
                                "Raise Service Request"
                            }
                        }
                    } else {
                        {records.into_iter().map(|record| {
                            let requested = format_date(record.request_date);
                            let completed = record.completed_date.map(format_date);
                            let scheduled = record.scheduled_date.map(format_date);
                            rsx! {
                                div { class: "card service-card",
                                    key: "{record.id.0}",
                                    div { class: "product-card-heading",
                                        h3 { "{record.product_name}" }
                                        span { class: "{record.status.badge_class()}",
                                            "{record.status.label()}"
                                        }
                                    }
                                    div { class: "product-card-grid",
                                        p { span { class: "muted", "Request Date: " } "{requested}" }
                                        if let Some(done) = completed {
                                            p { span { class: "muted", "Completed: " } "{done}" }
                                        }
                                        if let Some(planned) = scheduled {
                                            p { span { class: "muted", "Scheduled: " } "{planned}" }
                                        }
                                    }
                                    div { class: "issue-panel",
                                        p { class: "strong", "Issue Description" }
                                        p { class: "muted", "{record.description}" }
                                    }
                                    if let Some(resolution) = record.resolution {
                                        div { class: "resolution-panel",
                                            p { class: "strong", "Resolution" }
                                            p { "{resolution}" }
                                            if let Some(technician) = record.technician_name {
                                                p { class: "field-hint", "Technician: {technician}" }
                                            }
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
