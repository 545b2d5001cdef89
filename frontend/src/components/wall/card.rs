//! Card rendering for the two testimonial kinds.

use yew::prelude::*;

use common::model::testimonial::{Testimonial, TestimonialContent};

pub fn testimonial_card(testimonial: &Testimonial, on_expand: Callback<String>) -> Html {
    html! {
        <article class="testimonial-card">
            {
                match &testimonial.content {
                    TestimonialContent::Written {
                        text,
                        role,
                        company,
                        avatar_url,
                    } => written_card(testimonial, text, role.as_deref(), company.as_deref(), avatar_url.as_deref()),
                    TestimonialContent::Linkedin {
                        headline,
                        screenshot_url,
                        source_url,
                    } => linkedin_card(testimonial, headline.as_deref(), screenshot_url.as_deref(), source_url.as_deref(), on_expand),
                }
            }
            { card_footer(testimonial) }
        </article>
    }
}

fn written_card(
    testimonial: &Testimonial,
    text: &str,
    role: Option<&str>,
    company: Option<&str>,
    avatar_url: Option<&str>,
) -> Html {
    html! {
        <>
            <blockquote class="card-text">{text}</blockquote>
            <div class="card-author">
                {
                    if let Some(avatar) = avatar_url {
                        html! { <img class="card-avatar" src={avatar.to_string()} alt="" /> }
                    } else {
                        html! { <div class="card-avatar card-avatar-fallback">{ initial(&testimonial.name) }</div> }
                    }
                }
                <div>
                    <div class="card-name">{ &testimonial.name }</div>
                    { author_line(role, company) }
                </div>
            </div>
        </>
    }
}

fn linkedin_card(
    testimonial: &Testimonial,
    headline: Option<&str>,
    screenshot_url: Option<&str>,
    source_url: Option<&str>,
    on_expand: Callback<String>,
) -> Html {
    html! {
        <>
            {
                if let Some(headline) = headline {
                    html! { <p class="card-headline">{headline}</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(screenshot) = screenshot_url {
                    let data_uri = screenshot.to_string();
                    html! {
                        <img
                            class="card-screenshot"
                            src={screenshot.to_string()}
                            alt={format!("LinkedIn post by {}", testimonial.name)}
                            style="cursor:zoom-in;max-width:100%;border-radius:4px;"
                            onclick={Callback::from(move |_| on_expand.emit(data_uri.clone()))}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <div class="card-author">
                <div class="card-name">{ &testimonial.name }</div>
                {
                    if let Some(url) = source_url {
                        html! {
                            <a class="card-source" href={url.to_string()} target="_blank" rel="noopener noreferrer">
                                {"View on LinkedIn"}
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </>
    }
}

fn card_footer(testimonial: &Testimonial) -> Html {
    html! {
        <footer class="card-footer">
            <span class="card-date">{ display_date(&testimonial.created_at) }</span>
            {
                if let Some(tags) = &testimonial.tags {
                    tags.iter()
                        .map(|tag| html! { <span class="chip">{tag}</span> })
                        .collect::<Html>()
                } else {
                    html! {}
                }
            }
        </footer>
    }
}

fn author_line(role: Option<&str>, company: Option<&str>) -> Html {
    let line = match (role, company) {
        (Some(role), Some(company)) => format!("{role} at {company}"),
        (Some(role), None) => role.to_string(),
        (None, Some(company)) => company.to_string(),
        (None, None) => String::new(),
    };
    if line.is_empty() {
        html! {}
    } else {
        html! { <div class="card-role">{line}</div> }
    }
}

/// Date part of an ISO 8601 timestamp, enough for the card footer.
fn display_date(created_at: &str) -> String {
    created_at.chars().take(10).collect()
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}
