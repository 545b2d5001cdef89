use common::model::testimonial::TestimonialKind;

/// The wizard's two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Picking between a written testimonial and a LinkedIn screenshot.
    Select,
    /// Filling the form that matches the chosen kind.
    Form,
}

/// Form state of the submission wizard.
///
/// Fields are `pub` because they are accessed by the `view`, `update` and
/// `helpers` modules. The component is mounted fresh on every open, so
/// there is no explicit reset.
pub struct UploadModal {
    pub step: Step,
    pub kind: Option<TestimonialKind>,
    pub name: String,
    pub text: String,
    pub role: String,
    pub company: String,
    pub headline: String,
    pub source_url: String,
    /// Raw comma-separated tag input; parsed on submit.
    pub tags: String,
    pub image: Option<web_sys::File>,
    /// Local `data:` URI preview of the selected image.
    pub preview: Option<String>,
}

impl UploadModal {
    pub fn new() -> Self {
        UploadModal {
            step: Step::Select,
            kind: None,
            name: String::new(),
            text: String::new(),
            role: String::new(),
            company: String::new(),
            headline: String::new(),
            source_url: String::new(),
            tags: String::new(),
            image: None,
            preview: None,
        }
    }
}
