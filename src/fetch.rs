use crate::Error;
use bytes::Bytes;
use reqwest::Url;

/// Issue a single GET and return the response body.
///
/// Non-success statuses are errors. No caching and no retries.
pub async fn fetch(client: &reqwest::Client, url: Url) -> Result<Bytes, Error> {
    log::debug!("GET {}", url);
    let resp = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()
        .map_err(|e| {
            log::debug!("{}: {}", e, url);
            e
        })?;

    log::debug!("{} {}", resp.status(), url);
    Ok(resp.bytes().await?)
}
