use crate::Error;
use serde_json::{Map, Value};

/// Parse a response body which must contain a JSON object.
///
/// `source` names where the body came from and is carried by [`Error::InvalidJson`].
pub fn decode_object(bytes: &[u8], source: &str) -> Result<Map<String, Value>, Error> {
    match serde_json::from_slice(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::InvalidJson(source.to_string())),
        Err(e) => {
            log::debug!("{}: {}", source, e);
            Err(Error::InvalidJson(source.to_string()))
        }
    }
}

/// Decode the array at `key` using `item`, dropping every entry for which `item` returns `None`.
///
/// Fails if `key` is missing or isn't an array.
pub fn decode_list<T>(
    object: &Map<String, Value>,
    key: &str,
    source: &str,
    item: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>, Error> {
    let raw = object
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidJson(source.to_string()))?;

    let out: Vec<T> = raw.iter().filter_map(item).collect();
    if out.len() != raw.len() {
        log::trace!(
            "{}: dropped {} of {} malformed {}",
            source,
            raw.len() - out.len(),
            raw.len(),
            key
        );
    }
    Ok(out)
}
