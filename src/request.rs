use crate::Error;
use reqwest::Url;
use serde_json::Value;

/// Build an absolute URL from a base URL, an endpoint, and a set of query parameters.
///
/// `endpoint` is either a path beginning with `/`, which is appended to `base` (keeping any path
/// `base` already has), or an absolute `http`/`https` URL, which is used as-is. Query parameters
/// are appended after any query the endpoint already carries.
///
/// Numbers are rendered in decimal, booleans as `true`/`false`, and strings as-is. `null`,
/// arrays, and objects have no string form and fail with [`Error::InvalidParameter`].
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let base = "https://eonet.sci.gsfc.nasa.gov/api/v2.1".parse().unwrap();
/// let url = eonet::build(&base, "/events", &[("days", json!(30)), ("status", json!("open"))])
///     .unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://eonet.sci.gsfc.nasa.gov/api/v2.1/events?days=30&status=open"
/// );
/// ```
pub fn build(base: &Url, endpoint: &str, query: &[(&str, Value)]) -> Result<Url, Error> {
    let invalid_url = || Error::InvalidUrl(endpoint.to_string());

    let mut url = if endpoint.starts_with('/') {
        let joined = format!("{}{}", base.as_str().trim_end_matches('/'), endpoint);
        Url::parse(&joined).map_err(|_| invalid_url())?
    } else {
        Url::parse(endpoint).map_err(|_| invalid_url())?
    };

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid_url());
    }

    // Stringify everything before touching the URL
    let pairs = query
        .iter()
        .map(|(name, value)| Ok((*name, query_value(name, value)?)))
        .collect::<Result<Vec<_>, Error>>()?;

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url)
}

fn query_value(name: &str, value: &Value) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(Error::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
