//! Remote Store Client
//!
//! REST bindings for the Firebase Realtime Database holding the ingredients.
//! Every document lives under `/ingredients/{id}.json`; the store generates
//! ids on POST and returns them as `name`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use log::warn;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{CreateResponse, Ingredient, IngredientDraft};

/// Characters escaped in an id used as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Operations the ingredient view needs from the store
#[async_trait(?Send)]
pub trait RemoteStore: Send + Sync {
    /// Create a document, returning the store-assigned id
    async fn create(&self, draft: &IngredientDraft) -> Result<String, StoreError>;

    /// Delete a document by id
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// List documents whose title equals `filter` (all when empty)
    async fn search(&self, filter: &str) -> Result<Vec<Ingredient>, StoreError>;
}

/// `RemoteStore` over HTTP
#[derive(Debug, Clone)]
pub struct FirebaseStore {
    config: StoreConfig,
    client: reqwest::Client,
}

impl FirebaseStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        collection_url(&self.config)
    }

    fn document_url(&self, id: &str) -> String {
        document_url(&self.config, id)
    }
}

#[async_trait(?Send)]
impl RemoteStore for FirebaseStore {
    async fn create(&self, draft: &IngredientDraft) -> Result<String, StoreError> {
        let body = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?
            .text()
            .await?;
        parse_create_response(&body)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        // Status codes are not inspected: any response counts as deleted
        let _ = self.client.delete(self.document_url(id)).send().await?;
        Ok(())
    }

    async fn search(&self, filter: &str) -> Result<Vec<Ingredient>, StoreError> {
        let mut request = self.client.get(self.collection_url());
        if let Some(params) = search_params(filter) {
            request = request.query(&params);
        }
        let body = request.send().await?.text().await?;
        parse_listing(&body)
    }
}

// ========================
// URL and Body Helpers
// ========================

pub fn collection_url(config: &StoreConfig) -> String {
    format!("{}/ingredients.json", config.base_url)
}

pub fn document_url(config: &StoreConfig, id: &str) -> String {
    format!("{}/ingredients/{}.json", config.base_url, utf8_percent_encode(id, PATH_SEGMENT))
}

/// Query parameters for an exact title match; `None` lists everything
pub fn search_params(filter: &str) -> Option<[(&'static str, String); 2]> {
    if filter.is_empty() {
        return None;
    }
    // Firebase expects JSON-encoded values for orderBy / equalTo
    let quoted = serde_json::Value::String(filter.to_string()).to_string();
    Some([("orderBy", "\"title\"".to_string()), ("equalTo", quoted)])
}

pub fn parse_create_response(body: &str) -> Result<String, StoreError> {
    let response: CreateResponse = serde_json::from_str(body)?;
    Ok(response.name)
}

/// Convert an `{id: {title, amount}}` object (or `null`) into a list ordered by id.
///
/// Documents that do not parse are skipped.
pub fn parse_listing(body: &str) -> Result<Vec<Ingredient>, StoreError> {
    let documents: Option<BTreeMap<String, serde_json::Value>> = serde_json::from_str(body)?;
    Ok(documents
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(id, value)| match serde_json::from_value::<IngredientDraft>(value) {
            Ok(draft) => Some(Ingredient::from_draft(id, draft)),
            Err(err) => {
                warn!("skipping ingredient {id}: {err}");
                None
            }
        })
        .collect())
}
