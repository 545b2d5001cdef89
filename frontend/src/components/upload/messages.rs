use common::model::testimonial::TestimonialKind;

pub enum Msg {
    SelectKind(TestimonialKind),
    BackToSelect,
    SetName(String),
    SetText(String),
    SetRole(String),
    SetCompany(String),
    SetHeadline(String),
    SetSourceUrl(String),
    SetTags(String),
    FileSelected(web_sys::File),
    PreviewReady(String),
    PreviewFailed,
    ClearImage,
    Submit,
    Cancel,
}
