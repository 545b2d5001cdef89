use common::model::testimonial::NewTestimonial;
use yew::prelude::*;

/// Properties of the submission wizard.
///
/// The wizard collects and validates the form; the page that hosts it owns
/// the actual create call, so the wizard reports the finished draft (and
/// the raw image file, if any) upward and is told via `submitting` when to
/// lock its controls.
#[derive(Properties, PartialEq)]
pub struct UploadProps {
    /// True while the hosting page has a create in flight.
    pub submitting: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<(NewTestimonial, Option<web_sys::File>)>,
}
