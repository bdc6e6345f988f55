use crate::{
    build, decode_list, decode_object, fetch, Category, CategoryStream, Error, Event,
    EventStream, FetchStream, Producer, CATEGORIES_ENDPOINT,
};
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use reqwest::Url;
use serde_json::{json, Value};
use std::fmt;

/// The default number of days of events to request.
pub const DEFAULT_DAYS: u32 = 360;

/// Whether an event is still being observed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Open,
    Closed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Open => "open",
            EventStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client for the EONET API.
///
/// Every stream a `Client` produces completes normally. Failures of any kind (network, HTTP
/// status, malformed URLs or JSON) are logged and replaced by an empty list.
///
/// The category list is fetched at most once per `Client`, the first time any
/// [`categories()`](Client::categories) stream is polled, and replayed to every later subscriber.
/// Clones of a `Client` share that cache. For a single cache over the life of the process, use
/// [`shared()`](crate::shared).
///
/// # Example
///
/// ```rust,no_run
/// # tokio_test::block_on(async {
/// let client = eonet::Client::new();
///
/// let categories = client.categories().await;
/// if let Some(wildfires) = categories.iter().find(|c| c.name == "Wildfires") {
///     let events = client.events(30, wildfires).await;
///     for event in eonet::filtered_events(&events, wildfires) {
///         println!("{} {}", event.date, event.title);
///     }
/// }
/// # })
/// ```
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
    categories: Shared<BoxFuture<'static, Vec<Category>>>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base", &self.base.as_str())
            .field("categories_cached", &self.categories.peek().is_some())
            .finish()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::from_client(crate::default_client())
    }
}

impl Client {
    /// Create a client for the public EONET API using a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client for the public EONET API using a particular HTTP client.
    ///
    /// # Example
    ///
    /// ```
    /// let http = reqwest::Client::builder()
    ///     .user_agent("Your Software v1.0 (author@example.com)")
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = eonet::Client::from_client(http);
    /// assert_eq!(client.base_url().as_str(), eonet::API_BASE);
    /// ```
    pub fn from_client(http: reqwest::Client) -> Self {
        let base = Url::parse(crate::API_BASE).expect("API_BASE is a valid URL");
        Self::with_parts(http, base)
    }

    /// Create a client for an EONET-compatible API at another base URL.
    ///
    /// Relative endpoints are appended to `base`, so `base` should include any path prefix such
    /// as `/api/v2.1`. A base with a query string or fragment is rejected.
    pub fn with_base_url(http: reqwest::Client, base: &str) -> Result<Self, Error> {
        let url = Url::parse(base).map_err(|_| Error::InvalidUrl(base.to_string()))?;
        if !matches!(url.scheme(), "http" | "https")
            || url.cannot_be_a_base()
            || url.query().is_some()
            || url.fragment().is_some()
        {
            return Err(Error::InvalidUrl(base.to_string()));
        }
        Ok(Self::with_parts(http, url))
    }

    fn with_parts(http: reqwest::Client, base: Url) -> Self {
        let categories = {
            let (http, base) = (http.clone(), base.clone());
            async move {
                let mut categories = or_empty(
                    CATEGORIES_ENDPOINT,
                    get_list(
                        &http,
                        &base,
                        CATEGORIES_ENDPOINT,
                        &[],
                        "categories",
                        Category::from_json,
                    )
                    .await,
                );
                categories.sort_by(|a, b| a.name.cmp(&b.name));
                categories
            }
            .boxed()
            .shared()
        };

        Self {
            http,
            base,
            categories,
        }
    }

    /// The base URL relative endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// All event categories, sorted by name.
    ///
    /// The first subscription to poll issues the request; everyone else, including later
    /// subscribers, receives the same list without another request. Dropping one subscription
    /// does not cancel the request for the others.
    pub fn categories(&self) -> CategoryStream {
        Producer::new(self.categories.clone())
    }

    /// Both open and closed events in `category` from the last `last_days` days.
    ///
    /// The two queries run concurrently, and their results are concatenated into a single list
    /// once both finish. A query which fails contributes nothing.
    pub fn events(&self, last_days: u32, category: &Category) -> EventStream {
        let open = self.status_events(last_days, EventStatus::Open, &category.endpoint);
        let closed = self.status_events(last_days, EventStatus::Closed, &category.endpoint);

        Producer::new(
            async move {
                let (mut open, closed) = futures::future::join(open, closed).await;
                open.extend(closed);
                open
            }
            .boxed(),
        )
    }

    /// Events with the given `status` from the last `last_days` days, fetched from `endpoint`.
    pub fn status_events(
        &self,
        last_days: u32,
        status: EventStatus,
        endpoint: &str,
    ) -> EventStream {
        let (http, base) = (self.http.clone(), self.base.clone());
        let endpoint = endpoint.to_string();
        Producer::new(
            async move {
                let query = [("days", json!(last_days)), ("status", json!(status.as_str()))];
                or_empty(
                    &endpoint,
                    get_list(&http, &base, &endpoint, &query, "events", Event::from_json).await,
                )
            }
            .boxed(),
        )
    }

    /// Fetch the raw response body of `url`.
    ///
    /// Unlike the other streams, errors are passed through to the subscriber.
    pub fn fetch(&self, url: Url) -> FetchStream {
        let http = self.http.clone();
        Producer::new(async move { fetch(&http, url).await }.boxed())
    }
}

/// GET `endpoint` and decode the array at `key`.
async fn get_list<T>(
    http: &reqwest::Client,
    base: &Url,
    endpoint: &str,
    query: &[(&str, Value)],
    key: &str,
    item: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>, Error> {
    let url = build(base, endpoint, query)?;
    let bytes = fetch(http, url.clone()).await?;
    let object = decode_object(&bytes, url.as_str())?;
    decode_list(&object, key, url.as_str(), item)
}

fn or_empty<T>(endpoint: &str, result: Result<Vec<T>, Error>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::warn!("{}: {}", endpoint, e);
        Vec::new()
    })
}
