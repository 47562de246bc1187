//! Frontend Models
//!
//! Data structures matching the remote store's JSON documents.

use serde::{Deserialize, Deserializer, Serialize};

/// Ingredient record (id assigned by the remote store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub title: String,
    pub amount: f64,
}

impl Ingredient {
    /// Build a full record once the store has assigned an id
    pub fn from_draft(id: impl Into<String>, draft: IngredientDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            amount: draft.amount,
        }
    }
}

/// Create payload: an ingredient without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub title: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub amount: f64,
}

/// Older records store `amount` as the raw form string
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("amount {s:?} is not a number"))),
    }
}

/// Body returned by the store for a successful POST
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    /// Generated key of the new document
    pub name: String,
}
