//! # `eonet`
//!
//! A Rust client for NASA's [Earth Observatory Natural Event
//! Tracker](https://eonet.gsfc.nasa.gov/) (EONET).
//!
//! EONET curates a list of natural events (wildfires, severe storms, volcanic eruptions, sea and
//! lake ice, and so on) along with where and when they were observed. The API is public and
//! read-only, so usage of this crate requires no setup.
//!
//! Results are delivered as lazy, single-item streams: nothing is requested until a stream is
//! polled, and every stream ends normally. Failures are logged through the [`log`] crate and show
//! up as empty lists.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use futures::StreamExt;
//!
//! let client = eonet::Client::new();
//!
//! let mut categories = client.categories();
//! while let Some(categories) = categories.next().await {
//!     for mut category in categories {
//!         // Open and closed events from the last 30 days
//!         let events = client.events(30, &category).await;
//!         let added = category.add_events(&events);
//!         println!("{}: {} events", category.name, added);
//!     }
//! }
//! # })
//! ```

#![forbid(unsafe_code)]

mod category;
mod client;
mod decode;
mod error;
mod event;
mod fetch;
mod filter;
mod request;
mod stream;
mod time;

pub use category::{Category, CategoryId};
pub use client::{Client, EventStatus, DEFAULT_DAYS};
pub use decode::{decode_list, decode_object};
pub use error::Error;
pub use event::{Event, Geometry};
pub use fetch::fetch;
pub use filter::{compare_dates, filtered_events};
pub use request::build;
pub use stream::{CategoryStream, EventStream, FetchStream, Producer};
pub use time::parse_date;

use std::sync::OnceLock;

/// The base URL of the public EONET v2.1 API.
pub const API_BASE: &str = "https://eonet.sci.gsfc.nasa.gov/api/v2.1";

/// The endpoint listing all categories.
pub const CATEGORIES_ENDPOINT: &str = "/categories";

/// The endpoint listing events across all categories.
pub const EVENTS_ENDPOINT: &str = "/events";

/// The HTTP client used by [`Client::new()`].
pub fn default_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("eonet-rs/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("build client")
}

/// A process-wide [`Client`] for the public API.
///
/// Its category list is fetched once and then served for the life of the process.
pub fn shared() -> &'static Client {
    static SHARED: OnceLock<Client> = OnceLock::new();
    SHARED.get_or_init(Client::new)
}
