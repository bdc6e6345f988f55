use crate::{parse_date, CategoryId};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

/// A natural event tracked by EONET.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The EONET identifier, e.g. `"EONET_354"`.
    pub id: String,
    pub title: String,
    /// Often empty.
    pub description: String,
    pub link: Option<String>,
    /// When the event was closed, if it has been.
    pub closed: Option<DateTime<FixedOffset>>,
    /// The categories this event belongs to. Never empty.
    pub categories: Vec<CategoryId>,
    /// The observations of this event, in the order EONET reported them.
    pub geometries: Vec<Geometry>,
    /// The date of the most recent observation.
    pub date: DateTime<FixedOffset>,
}

/// A single dated observation of an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub date: DateTime<FixedOffset>,
    /// The GeoJSON geometry type, usually `"Point"` or `"Polygon"`.
    pub kind: String,
    /// The raw GeoJSON coordinates.
    pub coordinates: Value,
}

impl Geometry {
    /// The `(longitude, latitude)` of a point observation.
    pub fn point(&self) -> Option<(f64, f64)> {
        if self.kind != "Point" {
            return None;
        }
        match self.coordinates.as_array()?.as_slice() {
            [lon, lat] => Some((lon.as_f64()?, lat.as_f64()?)),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEvent {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    closed: Option<String>,
    categories: Vec<RawCategoryRef>,
    #[serde(default)]
    geometries: Vec<Value>,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryRef {
    Object { id: CategoryId },
    Bare(CategoryId),
}

#[derive(Deserialize)]
struct RawGeometry {
    date: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    coordinates: Value,
}

impl Event {
    /// Decode an event from one entry of an `/events` response.
    ///
    /// Returns `None` if the event has no `id`, no `title`, no categories, or no observation with
    /// a parseable date. Individual observations with unparseable dates are dropped.
    pub fn from_json(value: &Value) -> Option<Event> {
        let raw = RawEvent::deserialize(value).ok()?;
        if raw.id.is_empty() || raw.categories.is_empty() {
            return None;
        }

        let geometries: Vec<Geometry> = raw.geometries.iter().filter_map(geometry).collect();
        let date = match geometries.iter().map(|g| g.date).max() {
            Some(date) => date,
            None => parse_date(raw.date.as_deref()?)?,
        };

        let closed = raw.closed.as_deref().and_then(|s| {
            let date = parse_date(s);
            if date.is_none() {
                log::trace!("{}: ignoring unparseable close date {:?}", raw.id, s);
            }
            date
        });

        let categories = raw
            .categories
            .into_iter()
            .map(|c| match c {
                RawCategoryRef::Object { id } | RawCategoryRef::Bare(id) => id,
            })
            .collect();

        Some(Event {
            id: raw.id,
            title: raw.title,
            description: raw.description.unwrap_or_default(),
            link: raw.link,
            closed,
            categories,
            geometries,
            date,
        })
    }

    /// Whether this event belongs to the category with the given identifier.
    pub fn is_in(&self, category: &CategoryId) -> bool {
        self.categories.contains(category)
    }
}

fn geometry(value: &Value) -> Option<Geometry> {
    let raw = RawGeometry::deserialize(value).ok()?;
    Some(Geometry {
        date: parse_date(&raw.date)?,
        kind: raw.kind.unwrap_or_default(),
        coordinates: raw.coordinates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode() {
        let event = Event::from_json(&json!({
            "id": "EONET_1",
            "title": "Fire A",
            "categories": [{"id": 8, "title": "Wildfires"}],
            "geometries": [{"date": "2021-06-01T12:00:00+00:00"}]
        }))
        .unwrap();

        assert_eq!(event.id, "EONET_1");
        assert_eq!(event.title, "Fire A");
        assert_eq!(event.description, "");
        assert_eq!(event.link, None);
        assert_eq!(event.closed, None);
        assert_eq!(event.categories, vec![CategoryId::Number(8)]);
        assert!(event.is_in(&CategoryId::Number(8)));
        assert!(!event.is_in(&CategoryId::Number(10)));
        assert_eq!(event.date, parse_date("2021-06-01T12:00:00Z").unwrap());
    }

    #[test]
    fn date_is_the_latest_observation() {
        let event = Event::from_json(&json!({
            "id": "EONET_2",
            "title": "Storm",
            "description": "A big one",
            "link": "https://eonet.sci.gsfc.nasa.gov/api/v2.1/events/EONET_2",
            "closed": "2021-06-09T00:00:00Z",
            "categories": [10, {"id": 8}],
            "geometries": [
                {"date": "2021-06-02T00:00:00Z", "type": "Point", "coordinates": [-120.5, 38.25]},
                {"date": "2021-06-08T00:00:00Z", "type": "Polygon", "coordinates": [[[0, 0], [1, 1], [0, 1]]]},
                {"date": "yesterday", "type": "Point", "coordinates": [0, 0]},
                {"date": "2021-06-05T00:00:00Z", "type": "Point", "coordinates": [-121.0, 39.0]}
            ]
        }))
        .unwrap();

        assert_eq!(event.description, "A big one");
        assert_eq!(event.categories, vec![CategoryId::Number(10), CategoryId::Number(8)]);
        assert_eq!(event.closed, parse_date("2021-06-09T00:00:00Z"));
        assert_eq!(event.geometries.len(), 3);
        assert_eq!(event.date, parse_date("2021-06-08T00:00:00Z").unwrap());
        assert_eq!(event.geometries[0].point(), Some((-120.5, 38.25)));
        assert_eq!(event.geometries[1].point(), None);
    }

    #[test]
    fn top_level_date_is_a_fallback() {
        let event = Event::from_json(&json!({
            "id": "EONET_3",
            "title": "Iceberg",
            "categories": [{"id": 15}],
            "date": "2020-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(event.geometries.is_empty());
        assert_eq!(event.date, parse_date("2020-01-01T00:00:00Z").unwrap());
    }

    #[test]
    fn malformed_entries_are_absent() {
        let geometries = json!([{"date": "2021-06-01T12:00:00Z"}]);
        for value in [
            json!({"title": "x", "categories": [8], "geometries": geometries}),
            json!({"id": "", "title": "x", "categories": [8], "geometries": geometries}),
            json!({"id": "E", "categories": [8], "geometries": geometries}),
            json!({"id": "E", "title": "x", "categories": [], "geometries": geometries}),
            json!({"id": "E", "title": "x", "geometries": geometries}),
            json!({"id": "E", "title": "x", "categories": [8]}),
            json!({"id": "E", "title": "x", "categories": [8], "geometries": [{"date": "2021-06-01"}]}),
            json!({"id": 1, "title": "x", "categories": [8], "geometries": geometries}),
            json!([1, 2, 3]),
        ] {
            assert_eq!(Event::from_json(&value), None, "{}", value);
        }
    }
}
