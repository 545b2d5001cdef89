use yew::prelude::*;

use crate::components::upload::UploadModal;
use crate::overlay::ImageOverlay;
use crate::sync::Phase;

use super::card::testimonial_card;
use super::messages::Msg;
use super::state::WallPage;

pub fn view(page: &WallPage, ctx: &Context<WallPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="wall-root">
            <section class="hero">
                <span class="chip">{"Wall of Gratitude"}</span>
                <h1>{"Stories from our community"}</h1>
                <p class="hero-subtitle">
                    {"Read what people say about the program, or add your own story."}
                </p>
                <button class="btn-primary" onclick={link.callback(|_| Msg::OpenModal)}>
                    {"Share your story"}
                </button>
            </section>

            { wall_body(page, ctx) }

            {
                if page.modal_open {
                    html! {
                        <UploadModal
                            submitting={page.submitting}
                            on_close={link.callback(|_| Msg::CloseModal)}
                            on_submit={link.callback(|(draft, image)| Msg::Submit(draft, image))}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <ImageOverlay node_ref={page.overlay_ref.clone()}>
                {
                    if let Some(image) = &page.expanded_image {
                        html! {
                            <div
                                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;align-items:center;justify-content:center;"
                                onclick={link.callback(|_| Msg::CloseImage)}
                            >
                                <img src={image.clone()} style="max-width:90vw;max-height:90vh;" />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </ImageOverlay>
        </div>
    }
}

fn wall_body(page: &WallPage, ctx: &Context<WallPage>) -> Html {
    if page.sync.phase() == Phase::Loading {
        return html! {
            <div class="wall-loading">
                <div class="spinner" />
                <p>{"Loading testimonials…"}</p>
            </div>
        };
    }

    if page.sync.items().is_empty() {
        return html! {
            <p class="wall-empty">{"No testimonials yet. Be the first to share your story!"}</p>
        };
    }

    let link = ctx.link();
    html! {
        <section class={classes!("wall-grid", if page.sync.is_reloading() { Some("refreshing") } else { None })}>
            {
                page.sync
                    .items()
                    .iter()
                    .map(|testimonial| {
                        html! {
                            <div key={testimonial.id.clone()} class="wall-cell">
                                { testimonial_card(testimonial, link.callback(Msg::ExpandImage)) }
                            </div>
                        }
                    })
                    .collect::<Html>()
            }
        </section>
    }
}
