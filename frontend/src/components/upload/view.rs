//! View rendering for the submission wizard.
//!
//! Step one picks the testimonial kind, step two shows the matching form.
//! The dialog is a fixed backdrop with a centered panel; the hosting page
//! mounts it only while it should be visible.

use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::testimonial::TestimonialKind;

use super::messages::Msg;
use super::state::{Step, UploadModal};

pub fn view(form: &UploadModal, ctx: &Context<UploadModal>) -> Html {
    let link = ctx.link();
    html! {
        <div class="modal-backdrop" style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9000;display:flex;align-items:center;justify-content:center;">
            <div class="modal-panel" style="background:#fff;border-radius:8px;max-width:520px;width:90%;max-height:90vh;overflow-y:auto;padding:24px;">
                {
                    match form.step {
                        Step::Select => selection_step(link),
                        Step::Form => form_step(form, ctx),
                    }
                }
            </div>
        </div>
    }
}

fn selection_step(link: &Scope<UploadModal>) -> Html {
    html! {
        <div class="type-select">
            <h2>{"Share your story"}</h2>
            <p class="modal-subtitle">{"How would you like to add your testimonial?"}</p>
            <button
                class="type-option"
                onclick={link.callback(|_| Msg::SelectKind(TestimonialKind::Written))}
            >
                <strong>{"Write it here"}</strong>
                <span>{"A few sentences about your experience"}</span>
            </button>
            <button
                class="type-option"
                onclick={link.callback(|_| Msg::SelectKind(TestimonialKind::Linkedin))}
            >
                <strong>{"LinkedIn screenshot"}</strong>
                <span>{"Upload a post you already shared on LinkedIn"}</span>
            </button>
            <div class="modal-footer">
                <button class="btn-plain" onclick={link.callback(|_| Msg::Cancel)}>{"Cancel"}</button>
            </div>
        </div>
    }
}

fn form_step(form: &UploadModal, ctx: &Context<UploadModal>) -> Html {
    let link = ctx.link();
    let submitting = ctx.props().submitting;
    let is_linkedin = form.kind == Some(TestimonialKind::Linkedin);

    html! {
        <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
            <h2>{ if is_linkedin { "LinkedIn testimonial" } else { "Written testimonial" } }</h2>

            { text_field("Your name", &form.name, link.callback(|v| Msg::SetName(v))) }

            {
                if is_linkedin {
                    html! {
                        <>
                            { text_field("Headline (optional)", &form.headline, link.callback(|v| Msg::SetHeadline(v))) }
                            { text_field("Link to the post (optional)", &form.source_url, link.callback(|v| Msg::SetSourceUrl(v))) }
                            { image_field("Screenshot", form, link) }
                        </>
                    }
                } else {
                    html! {
                        <>
                            <label class="field">
                                <span>{"Your experience"}</span>
                                <textarea
                                    value={form.text.clone()}
                                    rows={5}
                                    oninput={link.callback(|e: InputEvent| {
                                        Msg::SetText(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                                    })}
                                />
                            </label>
                            { text_field("Role (optional)", &form.role, link.callback(|v| Msg::SetRole(v))) }
                            { text_field("Company (optional)", &form.company, link.callback(|v| Msg::SetCompany(v))) }
                            { image_field("Profile picture (optional)", form, link) }
                        </>
                    }
                }
            }

            { text_field("Tags, comma separated (optional)", &form.tags, link.callback(|v| Msg::SetTags(v))) }

            <div class="modal-footer">
                <button type="button" class="btn-plain" disabled={submitting} onclick={link.callback(|_| Msg::BackToSelect)}>{"Back"}</button>
                <button type="button" class="btn-plain" disabled={submitting} onclick={link.callback(|_| Msg::Cancel)}>{"Cancel"}</button>
                <button type="submit" class="btn-primary" disabled={submitting}>
                    { if submitting { "Submitting…" } else { "Submit" } }
                </button>
            </div>
        </form>
    }
}

fn text_field(label: &str, value: &str, on_change: Callback<String>) -> Html {
    html! {
        <label class="field">
            <span>{label}</span>
            <input
                type="text"
                value={value.to_string()}
                oninput={move |e: InputEvent| {
                    on_change.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                }}
            />
        </label>
    }
}

fn image_field(label: &str, form: &UploadModal, link: &Scope<UploadModal>) -> Html {
    html! {
        <div class="field">
            <span>{label}</span>
            {
                if let Some(preview) = &form.preview {
                    html! {
                        <div class="image-preview">
                            <img src={preview.clone()} style="max-width:100%;max-height:220px;border-radius:4px;" />
                            <button type="button" class="btn-plain" onclick={link.callback(|_| Msg::ClearImage)}>{"Remove"}</button>
                        </div>
                    }
                } else {
                    html! {
                        <input
                            type="file"
                            accept="image/*"
                            onchange={link.batch_callback(|e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                input.files().and_then(|files| files.get(0)).map(Msg::FileSelected)
                            })}
                        />
                    }
                }
            }
        </div>
    }
}
