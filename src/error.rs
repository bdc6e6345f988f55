/// An error which occurred while retrieving from EONET.
///
/// Streams produced by [`Client`](crate::Client) never yield these; they are logged and replaced
/// by an empty result. They surface from the lower-level building blocks such as
/// [`build`](crate::build) and [`Client::fetch`](crate::Client::fetch).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A failure occurred during an HTTP exchange
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint could not be turned into a URL
    #[error("invalid URL for endpoint {0:?}")]
    InvalidUrl(String),
    /// A query parameter has no string form
    #[error("invalid query parameter {name:?}: {value}")]
    InvalidParameter { name: String, value: String },
    /// The response was not a JSON object of the expected shape
    #[error("invalid JSON from {0}")]
    InvalidJson(String),
}
