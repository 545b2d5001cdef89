use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::store::encode_image;
use crate::toast::show_error;

use super::helpers::build_draft;
use super::messages::Msg;
use super::state::{Step, UploadModal};

pub fn update(form: &mut UploadModal, ctx: &Context<UploadModal>, msg: Msg) -> bool {
    match msg {
        Msg::SelectKind(kind) => {
            form.kind = Some(kind);
            form.step = Step::Form;
            true
        }
        Msg::BackToSelect => {
            form.step = Step::Select;
            form.kind = None;
            true
        }
        Msg::SetName(value) => {
            form.name = value;
            false
        }
        Msg::SetText(value) => {
            form.text = value;
            false
        }
        Msg::SetRole(value) => {
            form.role = value;
            false
        }
        Msg::SetCompany(value) => {
            form.company = value;
            false
        }
        Msg::SetHeadline(value) => {
            form.headline = value;
            false
        }
        Msg::SetSourceUrl(value) => {
            form.source_url = value;
            false
        }
        Msg::SetTags(value) => {
            form.tags = value;
            false
        }
        Msg::FileSelected(file) => {
            form.image = Some(file.clone());
            form.preview = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                match encode_image(file).await {
                    Ok(data_uri) => link.send_message(Msg::PreviewReady(data_uri)),
                    Err(err) => {
                        error!(format!("upload: preview failed: {err}"));
                        link.send_message(Msg::PreviewFailed);
                    }
                }
            });
            true
        }
        Msg::PreviewReady(data_uri) => {
            // The selection may have been cleared while the read ran.
            if form.image.is_some() {
                form.preview = Some(data_uri);
            }
            true
        }
        Msg::PreviewFailed => {
            form.image = None;
            form.preview = None;
            show_error("Could not read the selected image. Please pick another file.");
            true
        }
        Msg::ClearImage => {
            form.image = None;
            form.preview = None;
            true
        }
        Msg::Submit => {
            if ctx.props().submitting {
                return false;
            }
            match build_draft(form) {
                Ok(draft) => {
                    ctx.props().on_submit.emit((draft, form.image.clone()));
                }
                Err(message) => show_error(&message),
            }
            false
        }
        Msg::Cancel => {
            if !ctx.props().submitting {
                ctx.props().on_close.emit(());
            }
            false
        }
    }
}
