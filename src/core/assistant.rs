//! Conversational search over marketplace inventory.
//!
//! The model behind [`TextGenerator`] is an outside collaborator that
//! answers a prompt with JSON following [`search_schema`]. Whatever it
//! returns, the user always gets an answer: generation failures and
//! malformed output degrade to a canned reply.

use crate::errors::{AppError, AppResult};
use crate::models::listing::Listing;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const FALLBACK_REPLY: &str = "Sorry, I couldn't search the marketplace right now. \
You can still browse open driveways with `listing list`, or look for a public garage \
or metered street parking nearby.";

const PUBLIC_PARKING_TIP: &str = "No private driveway matches that. Public garages usually \
post hourly rates at the entrance, and metered street parking is often free after 6pm; \
check local signage.";

pub trait TextGenerator {
    /// Raw model output for `prompt`, expected to follow `schema`.
    fn generate(&self, prompt: &str, schema: &Value) -> AppResult<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReply {
    pub reply: String,
    #[serde(default)]
    pub listing_ids: Vec<i64>,
}

impl SearchReply {
    pub fn fallback() -> Self {
        Self {
            reply: FALLBACK_REPLY.to_string(),
            listing_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchAnswer {
    pub reply: String,
    pub listings: Vec<Listing>,
    /// True when the fallback reply was used.
    pub degraded: bool,
}

pub fn search_schema() -> Value {
    json!({
        "type": "object",
        "required": ["reply", "listing_ids"],
        "properties": {
            "reply": { "type": "string" },
            "listing_ids": { "type": "array", "items": { "type": "integer" } }
        }
    })
}

/// Inventory lines followed by the user's question on the last line.
pub fn build_prompt(query: &str, inventory: &[Listing]) -> String {
    let mut prompt = String::from(
        "You help drivers find parking. Recommend driveways from the inventory \
         when they fit, otherwise give general advice about public parking.\n\
         Inventory:\n",
    );

    for l in inventory {
        prompt.push_str(&format!(
            "- id={} | {} | {} {}-{} | {}/h\n",
            l.id,
            l.address,
            l.date_str(),
            l.start_time,
            l.end_time,
            l.rate
        ));
    }

    prompt.push_str(&format!("Question: {}", query.trim()));
    prompt
}

/// Strip a markdown code fence some models wrap JSON in.
fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Degrade-on-malformed policy: any generation error or output that does
/// not deserialize into `T` yields `fallback`. Returns `(value, degraded)`.
pub fn degrade_on_malformed<T: DeserializeOwned>(raw: AppResult<String>, fallback: T) -> (T, bool) {
    match raw {
        Ok(text) => match serde_json::from_str::<T>(strip_fence(&text)) {
            Ok(v) => (v, false),
            Err(_) => (fallback, true),
        },
        Err(_) => (fallback, true),
    }
}

pub struct Assistant<'g> {
    generator: &'g dyn TextGenerator,
}

impl<'g> Assistant<'g> {
    pub fn new(generator: &'g dyn TextGenerator) -> Self {
        Self { generator }
    }

    pub fn search(&self, query: &str, inventory: &[Listing]) -> SearchAnswer {
        let prompt = build_prompt(query, inventory);
        let raw = self.generator.generate(&prompt, &search_schema());
        let (reply, degraded) = degrade_on_malformed(raw, SearchReply::fallback());

        // Ids the model made up are dropped, not trusted.
        let listings = reply
            .listing_ids
            .iter()
            .filter_map(|id| inventory.iter().find(|l| l.id == *id).cloned())
            .collect();

        SearchAnswer {
            reply: reply.reply,
            listings,
            degraded,
        }
    }
}

/// Words too generic to identify an address.
const STOPWORDS: &[&str] = &[
    "the", "any", "and", "for", "near", "nearby", "parking", "park", "spot", "spots", "driveway",
    "street", "road", "avenue", "ave", "lane", "drive", "way", "place", "court", "boulevard",
];

/// Offline generator: whole-word match of the question against listing
/// addresses. Used when no model endpoint is configured.
pub struct InventoryMatcher {
    inventory: Vec<Listing>,
}

impl InventoryMatcher {
    pub fn new(inventory: &[Listing]) -> Self {
        Self {
            inventory: inventory.to_vec(),
        }
    }

    fn words(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
    }

    /// Question words worth matching: 3+ chars and not a generic term.
    fn keywords(question: &str) -> Vec<String> {
        Self::words(question)
            .filter(|w| w.chars().count() >= 3 && !STOPWORDS.contains(&w.as_str()))
            .collect()
    }
}

impl TextGenerator for InventoryMatcher {
    fn generate(&self, prompt: &str, _schema: &Value) -> AppResult<String> {
        let question = prompt
            .lines()
            .rev()
            .find_map(|l| l.strip_prefix("Question: "))
            .ok_or_else(|| AppError::Generation("prompt has no question".into()))?;

        let words = Self::keywords(question);
        let hits: Vec<&Listing> = self
            .inventory
            .iter()
            .filter(|l| Self::words(&l.address).any(|a| words.contains(&a)))
            .collect();

        let reply = if hits.is_empty() {
            SearchReply {
                reply: PUBLIC_PARKING_TIP.to_string(),
                listing_ids: Vec::new(),
            }
        } else {
            SearchReply {
                reply: format!("I found {} driveway(s) matching your search.", hits.len()),
                listing_ids: hits.iter().map(|l| l.id).collect(),
            }
        };

        serde_json::to_string(&reply).map_err(|e| AppError::Generation(e.to_string()))
    }
}
