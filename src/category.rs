use crate::{filtered_events, Event};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The identifier of a [`Category`].
///
/// EONET v2.1 uses integers; string identifiers are accepted as well. A string holding a
/// canonical decimal integer (`"8"`, not `"08"`) is the same identifier as that integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawCategoryId")]
pub enum CategoryId {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Number(u64),
    Text(String),
}

impl From<RawCategoryId> for CategoryId {
    fn from(raw: RawCategoryId) -> Self {
        match raw {
            RawCategoryId::Number(n) => CategoryId::Number(n),
            RawCategoryId::Text(s) => CategoryId::from(s.as_str()),
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryId::Number(n) => write!(f, "{}", n),
            CategoryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for CategoryId {
    fn from(n: u64) -> Self {
        CategoryId::Number(n)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => CategoryId::Number(n),
            _ => CategoryId::Text(s.to_string()),
        }
    }
}

/// A category of natural events, such as wildfires or severe storms.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    /// The human-readable name, e.g. `"Wildfires"`.
    pub name: String,
    pub description: String,
    /// Where to fetch this category's events.
    ///
    /// Links under [`API_BASE`](crate::API_BASE) are stored relative to it, starting with `/`,
    /// so they follow whichever base URL the [`Client`](crate::Client) is using.
    pub endpoint: String,
    /// Events already associated with this category by the consumer.
    pub events: Vec<Event>,
}

#[derive(Deserialize)]
struct RawCategory {
    id: CategoryId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    link: String,
}

impl Category {
    /// Decode a category from one entry of a `/categories` response.
    ///
    /// Returns `None` if `id`, `title`, or `link` is missing or empty.
    pub fn from_json(value: &Value) -> Option<Category> {
        let raw = RawCategory::deserialize(value).ok()?;
        let endpoint = relative_endpoint(raw.link.trim());
        if raw.title.is_empty() || endpoint.is_empty() {
            return None;
        }

        Some(Category {
            id: raw.id,
            name: raw.title,
            description: raw.description.unwrap_or_default(),
            endpoint,
            events: Vec::new(),
        })
    }

    /// Associate any of `events` which belong to this category and aren't already associated.
    ///
    /// Returns the number of events added.
    pub fn add_events(&mut self, events: &[Event]) -> usize {
        let new = filtered_events(events, self);
        let count = new.len();
        self.events.extend(new);
        count
    }
}

fn relative_endpoint(link: &str) -> String {
    match link.strip_prefix(crate::API_BASE) {
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => link.to_string(),
    }
}
