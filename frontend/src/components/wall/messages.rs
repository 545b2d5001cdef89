use common::model::testimonial::{NewTestimonial, Testimonial};

use crate::store::StoreError;

pub enum Msg {
    Loaded(Result<Vec<Testimonial>, StoreError>),
    RemoteChanged,
    OpenModal,
    CloseModal,
    Submit(NewTestimonial, Option<web_sys::File>),
    SubmitResolved(Result<Testimonial, StoreError>),
    ExpandImage(String),
    CloseImage,
}
