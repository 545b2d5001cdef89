//! View rendering for the moderation panel: header with the pending count,
//! the approved-only filter, and the testimonials table.

use yew::html::Scope;
use yew::prelude::*;

use common::model::testimonial::{Testimonial, TestimonialContent};

use crate::sync::Phase;

use super::messages::Msg;
use super::state::AdminPanel;

pub fn view(panel: &AdminPanel, ctx: &Context<AdminPanel>) -> Html {
    let link = ctx.link();

    html! {
        <div class="admin-root">
            { header(panel, link) }
            {
                if panel.sync.phase() == Phase::Loading {
                    html! {
                        <div class="admin-loading">
                            <div class="spinner" />
                            <p>{"Loading testimonials…"}</p>
                        </div>
                    }
                } else {
                    table(panel, link)
                }
            }
        </div>
    }
}

fn header(panel: &AdminPanel, link: &Scope<AdminPanel>) -> Html {
    let pending = panel.sync.pending_count();
    html! {
        <header class="admin-header">
            <div>
                <h1>{"Testimonials"}</h1>
                {
                    if pending > 0 {
                        html! { <span class="chip chip-pending">{ format!("{pending} pending review") }</span> }
                    } else {
                        html! { <span class="chip">{"All caught up"}</span> }
                    }
                }
            </div>
            <button class="btn-plain" onclick={link.callback(|_| Msg::SignOut)}>{"Sign out"}</button>
        </header>
    }
}

fn table(panel: &AdminPanel, link: &Scope<AdminPanel>) -> Html {
    let rows: Vec<&Testimonial> = panel
        .sync
        .items()
        .iter()
        .filter(|t| !panel.show_approved_only || t.approved)
        .collect();

    html! {
        <section class="admin-table">
            <div class="admin-table-bar">
                <h3>{ if panel.show_approved_only { "Approved testimonials" } else { "All testimonials" } }</h3>
                {
                    if panel.sync.is_reloading() {
                        html! { <span class="refresh-hint">{"Refreshing…"}</span> }
                    } else {
                        html! {}
                    }
                }
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        checked={panel.show_approved_only}
                        onchange={link.callback(|_| Msg::ToggleShowApproved)}
                    />
                    {"Show approved only"}
                </label>
            </div>
            <table>
                <thead>
                    <tr>
                        <th>{"Content"}</th>
                        <th>{"Author"}</th>
                        <th>{"Status"}</th>
                        <th class="cell-right">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if rows.is_empty() {
                            html! {
                                <tr><td colspan="4" class="cell-empty">{"No testimonials found"}</td></tr>
                            }
                        } else {
                            rows.iter().map(|t| table_row(panel, link, t)).collect::<Html>()
                        }
                    }
                </tbody>
            </table>
        </section>
    }
}

fn table_row(panel: &AdminPanel, link: &Scope<AdminPanel>, testimonial: &Testimonial) -> Html {
    let id = testimonial.id.clone();

    html! {
        <tr key={id.clone()}>
            <td class="cell-content">{ content_summary(testimonial) }</td>
            <td>
                <div class="cell-author">
                    <span>{ &testimonial.name }</span>
                    <span class="cell-author-detail">{ author_detail(testimonial) }</span>
                </div>
            </td>
            <td>
                {
                    if testimonial.approved {
                        html! { <span class="status status-approved">{"Approved"}</span> }
                    } else {
                        html! { <span class="status status-pending">{"Pending"}</span> }
                    }
                }
            </td>
            <td class="cell-right">
                { approval_button(panel, link, testimonial) }
                { delete_button(panel, link, &id) }
            </td>
        </tr>
    }
}

fn content_summary(testimonial: &Testimonial) -> Html {
    match &testimonial.content {
        TestimonialContent::Linkedin { screenshot_url, .. } => html! {
            <span>
                <span class="kind-tag">{"LinkedIn:"}</span>
                {
                    if screenshot_url.is_some() {
                        html! { <span class="has-shot">{" has screenshot"}</span> }
                    } else {
                        html! { <span class="no-shot">{" no screenshot"}</span> }
                    }
                }
            </span>
        },
        TestimonialContent::Written { text, .. } => {
            html! { <span class="text-excerpt">{ excerpt(text) }</span> }
        }
    }
}

fn author_detail(testimonial: &Testimonial) -> String {
    match &testimonial.content {
        TestimonialContent::Written { role, company, .. } => match (role, company) {
            (Some(role), Some(company)) => format!("{role} at {company}"),
            (Some(role), None) => role.clone(),
            (None, Some(company)) => company.clone(),
            (None, None) => String::new(),
        },
        TestimonialContent::Linkedin { headline, .. } => headline.clone().unwrap_or_default(),
    }
}

fn approval_button(panel: &AdminPanel, link: &Scope<AdminPanel>, testimonial: &Testimonial) -> Html {
    let id = testimonial.id.clone();
    let approve = !testimonial.approved;
    let busy = panel.sync.is_approving(&testimonial.id);

    html! {
        <button
            class={classes!("btn-plain", if approve { "btn-approve" } else { "btn-unapprove" })}
            disabled={busy}
            onclick={link.callback(move |_| Msg::ToggleApproval { id: id.clone(), approve })}
        >
            {
                if busy {
                    "Saving…"
                } else if approve {
                    "Approve"
                } else {
                    "Unapprove"
                }
            }
        </button>
    }
}

fn delete_button(panel: &AdminPanel, link: &Scope<AdminPanel>, id: &str) -> Html {
    let busy = panel.sync.is_deleting(id);
    let armed = panel.sync.armed_id() == Some(id);
    let id = id.to_string();

    html! {
        <button
            class={classes!("btn-plain", "btn-delete", if armed { Some("armed") } else { None })}
            disabled={busy}
            onclick={link.callback(move |_| Msg::DeleteTrigger(id.clone()))}
            onblur={link.callback(|_| Msg::Disarm)}
        >
            {
                if busy {
                    "Deleting…"
                } else if armed {
                    "Confirm?"
                } else {
                    "Delete"
                }
            }
        </button>
    }
}

fn excerpt(text: &str) -> String {
    let short: String = text.chars().take(70).collect();
    if short.len() < text.len() {
        format!("{short}…")
    } else {
        short
    }
}
