//! Remote store client for the `testimonials` table.
//!
//! This module is the only place in the application that performs network
//! I/O. It speaks the hosted store's REST dialect (filters and ordering in
//! the query string, `Prefer: return=representation` to learn what a write
//! touched) and hands out entities, never raw rows.
//!
//! Failure policy: every operation returns a `Result`; not-found outcomes on
//! delete and approval are reported as `Ok(false)` rather than errors, since
//! the row being gone already is a benign outcome for a moderation panel.

mod error;
pub mod realtime;

pub use error::StoreError;
pub use realtime::ChangeFeed;

use base64::{engine::general_purpose, Engine as _};
use gloo_console::error;
use gloo_file::{futures::read_as_bytes, Blob};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use yew::Callback;

use common::model::row::{InsertRow, TestimonialRow};
use common::model::testimonial::{NewTestimonial, Testimonial, TestimonialContent};

use crate::config::StoreConfig;

const TABLE: &str = "testimonials";

#[derive(Serialize)]
struct ApprovalPatch {
    approved: bool,
}

#[derive(Clone)]
pub struct TestimonialStore {
    config: StoreConfig,
}

impl TestimonialStore {
    pub fn new(config: StoreConfig) -> Self {
        TestimonialStore { config }
    }

    pub fn from_window() -> Self {
        TestimonialStore::new(StoreConfig::from_window())
    }

    /// All testimonials when `include_unapproved` is set (the moderator
    /// view), otherwise only approved ones. Newest first either way.
    pub async fn list(&self, include_unapproved: bool) -> Result<Vec<Testimonial>, StoreError> {
        let url = self.table_url(&list_query(include_unapproved));
        let response = self
            .with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|err| network_error("listing testimonials", err))?;
        if !response.ok() {
            return Err(http_error("listing testimonials", response).await);
        }
        let rows: Vec<TestimonialRow> = response
            .json()
            .await
            .map_err(|err| decode_error("listing testimonials", err))?;
        Ok(rows.into_iter().map(Testimonial::from).collect())
    }

    /// Stores a submission and returns the record the store created for it,
    /// with its assigned id and timestamp.
    ///
    /// An attached image is embedded into the draft as a `data:` URI before
    /// anything goes on the wire; if the file cannot be read the create is
    /// aborted and no request is issued.
    pub async fn create(
        &self,
        mut draft: NewTestimonial,
        image: Option<web_sys::File>,
    ) -> Result<Testimonial, StoreError> {
        if let Some(file) = image {
            let data_uri = encode_image(file).await?;
            attach_image(&mut draft.content, data_uri);
        }

        let url = self.table_url("select=*");
        let request = self
            .with_auth(Request::post(&url))
            .header("Prefer", "return=representation")
            .json(&InsertRow::from(draft))
            .map_err(|err| decode_error("serializing submission", err))?;
        let response = request
            .send()
            .await
            .map_err(|err| network_error("storing submission", err))?;
        if !response.ok() {
            return Err(http_error("storing submission", response).await);
        }
        let rows: Vec<TestimonialRow> = response
            .json()
            .await
            .map_err(|err| decode_error("storing submission", err))?;
        rows.into_iter()
            .next()
            .map(Testimonial::from)
            .ok_or_else(|| StoreError::Decode("insert returned no rows".to_string()))
    }

    /// Deletes by id. `Ok(false)` means no row matched, which is how a
    /// repeated delete of the same id resolves.
    pub async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let url = self.table_url(&format!("{}&select=id", id_filter(id)));
        let response = self
            .with_auth(Request::delete(&url))
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|err| network_error("deleting testimonial", err))?;
        if !response.ok() {
            return Err(http_error("deleting testimonial", response).await);
        }
        let body = response
            .text()
            .await
            .map_err(|err| decode_error("deleting testimonial", err))?;
        affected_rows(&body)
    }

    /// Writes only the approval flag. `Ok(false)` means the row no longer
    /// exists.
    pub async fn set_approval(&self, id: &str, approved: bool) -> Result<bool, StoreError> {
        let url = self.table_url(&format!("{}&select=id", id_filter(id)));
        let request = self
            .with_auth(Request::patch(&url))
            .header("Prefer", "return=representation")
            .json(&ApprovalPatch { approved })
            .map_err(|err| decode_error("serializing approval", err))?;
        let response = request
            .send()
            .await
            .map_err(|err| network_error("updating approval", err))?;
        if !response.ok() {
            return Err(http_error("updating approval", response).await);
        }
        let body = response
            .text()
            .await
            .map_err(|err| decode_error("updating approval", err))?;
        affected_rows(&body)
    }

    /// Opens the realtime change feed for the table. `on_change` fires on
    /// every insert, update or delete; the caller is expected to reload,
    /// not to interpret the event.
    pub fn subscribe(&self, on_change: Callback<()>) -> Result<ChangeFeed, StoreError> {
        realtime::subscribe(&self.config, on_change)
    }

    fn table_url(&self, query: &str) -> String {
        format!(
            "{}/{}?{}",
            self.config.rest_url.trim_end_matches('/'),
            TABLE,
            query
        )
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.config.api_key.is_empty() {
            return builder;
        }
        builder
            .header("apikey", &self.config.api_key)
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
    }
}

fn list_query(include_unapproved: bool) -> String {
    let mut query = String::from("select=*&order=created_at.desc");
    if !include_unapproved {
        query.push_str("&approved=eq.true");
    }
    query
}

fn id_filter(id: &str) -> String {
    format!("id=eq.{}", id)
}

/// A `return=representation` body is the array of rows the write touched.
/// Empty array means the filter matched nothing.
fn affected_rows(body: &str) -> Result<bool, StoreError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|err| StoreError::Decode(format!("unexpected representation body: {err}")))?;
    Ok(!rows.is_empty())
}

fn attach_image(content: &mut TestimonialContent, data_uri: String) {
    match content {
        TestimonialContent::Written { avatar_url, .. } => *avatar_url = Some(data_uri),
        TestimonialContent::Linkedin { screenshot_url, .. } => *screenshot_url = Some(data_uri),
    }
}

/// Reads the file and embeds it as a self-contained `data:` URI.
pub async fn encode_image(file: web_sys::File) -> Result<String, StoreError> {
    let mime = file.type_();
    let mime = if mime.is_empty() {
        "image/*".to_string()
    } else {
        mime
    };
    let blob = Blob::from(file);
    let bytes = read_as_bytes(&blob).await.map_err(|err| {
        error!(format!("reading attached image failed: {err}"));
        StoreError::ImageRead(err.to_string())
    })?;
    Ok(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(&bytes)
    ))
}

fn network_error(context: &str, err: gloo_net::Error) -> StoreError {
    error!(format!("{context}: {err}"));
    StoreError::Network(err.to_string())
}

fn decode_error(context: &str, err: gloo_net::Error) -> StoreError {
    error!(format!("{context}: {err}"));
    StoreError::Decode(err.to_string())
}

async fn http_error(context: &str, response: Response) -> StoreError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    error!(format!("{context}: status {status}: {message}"));
    StoreError::Http { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_list_query_filters_and_orders() {
        let query = list_query(false);
        assert!(query.contains("approved=eq.true"));
        assert!(query.contains("order=created_at.desc"));
    }

    #[test]
    fn moderator_list_query_keeps_unapproved() {
        let query = list_query(true);
        assert!(!query.contains("approved=eq.true"));
        assert!(query.contains("order=created_at.desc"));
    }

    #[test]
    fn id_filter_targets_one_row() {
        assert_eq!(id_filter("abc123"), "id=eq.abc123");
    }

    #[test]
    fn empty_representation_means_nothing_deleted() {
        assert_eq!(affected_rows("[]").unwrap(), false);
    }

    #[test]
    fn populated_representation_means_a_row_was_touched() {
        assert_eq!(affected_rows(r#"[{"id":"abc123"}]"#).unwrap(), true);
    }

    #[test]
    fn garbage_representation_is_a_decode_error() {
        assert!(matches!(
            affected_rows("not json"),
            Err(StoreError::Decode(_))
        ));
    }
}
