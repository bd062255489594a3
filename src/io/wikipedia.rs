// MediaWiki TextExtracts client.
use crate::constants::{DEFAULT_RETRY_DELAY_MS, DEFAULT_USER_AGENT};
use crate::document::Document;
use crate::io::provider::{DocumentProvider, FetchError};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::thread::sleep;
use std::time::Duration;

pub struct Wikipedia {
    client: Client,
    api_url: String,
    retries: usize,
    retry_delay: Duration,
}

impl Wikipedia {
    pub fn new(
        api_url: &str,
        timeout_ms: u64,
        retries: usize,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Wikipedia {
            client,
            api_url: api_url.to_string(),
            retries,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        })
    }

    fn request_json(
        &self,
        title: &str,
    ) -> Result<Value, FetchError> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("formatversion", "2"),
            ("prop", "extracts|pageprops"),
            ("ppprop", "disambiguation"),
            ("redirects", "1"),
            ("explaintext", "1"),
            ("titles", title),
        ];

        let mut last_error = String::from("request was never sent");
        for attempt in 0..=self.retries {
            if attempt > 0 {
                sleep(self.retry_delay.saturating_mul(attempt as u32));
            }
            let response = match self.client.get(&self.api_url).query(&params).send() {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(attempt, "fetch of {title:?} failed: {e}");
                    last_error = e.to_string();
                    continue;
                }
            };
            let status = response.status();
            if !status.is_success() {
                tracing::warn!(attempt, "fetch of {title:?} returned HTTP {status}");
                last_error = format!("HTTP {status}");
                continue;
            }
            return response
                .json::<Value>()
                .map_err(|e| FetchError::Malformed(e.to_string()));
        }
        Err(FetchError::Unreachable(last_error))
    }
}

/// Turn a `formatversion=2` query response into a document.
pub fn parse_response(payload: &Value) -> Result<Document, FetchError> {
    let malformed = |what: &str| FetchError::Malformed(format!("response has no {what}"));
    if let Some(error) = payload.get("error") {
        let info = error
            .get("info")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(FetchError::Malformed(format!("api error: {info}")));
    }

    let query = payload.get("query").ok_or_else(|| malformed("query"))?;
    let page = query
        .get("pages")
        .and_then(Value::as_array)
        .and_then(|pages| pages.first())
        .ok_or_else(|| malformed("pages"))?;
    if page.get("missing").is_some() || page.get("invalid").is_some() {
        return Err(FetchError::NotFound);
    }

    let title = page
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("title"))?;
    let extract = page
        .get("extract")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("extract"))?;

    let mut doc = Document::new(title, extract);
    if page
        .get("pageprops")
        .and_then(|props| props.get("disambiguation"))
        .is_some()
    {
        doc = doc.disambiguation();
    }
    if query
        .get("redirects")
        .and_then(Value::as_array)
        .is_some_and(|r| !r.is_empty())
    {
        doc = doc.redirected();
    }
    Ok(doc)
}

impl DocumentProvider for Wikipedia {
    fn fetch(
        &self,
        title: &str,
    ) -> Result<Document, FetchError> {
        let payload = self.request_json(title)?;
        parse_response(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_page_with_redirect_and_disambiguation() {
        let payload = json!({
            "query": {
                "redirects": [{"from": "Pishpek", "to": "Bishkek"}],
                "pages": [{
                    "pageid": 1,
                    "title": "Bishkek",
                    "extract": "Bishkek is a city.\n== History ==\nOld.",
                    "pageprops": {"disambiguation": ""}
                }]
            }
        });
        let doc = parse_response(&payload).unwrap();
        assert_eq!(doc.title, "Bishkek");
        assert!(doc.was_redirected);
        assert!(doc.is_disambiguation);
        assert!(doc.extract.starts_with("Bishkek is a city."));
    }

    #[test]
    fn missing_page_is_not_found() {
        let payload = json!({"query": {"pages": [{"title": "Nope", "missing": true}]}});
        assert_eq!(parse_response(&payload).unwrap_err(), FetchError::NotFound);
    }

    #[test]
    fn unexpected_shape_is_malformed() {
        let payload = json!({"batchcomplete": true});
        assert!(matches!(
            parse_response(&payload).unwrap_err(),
            FetchError::Malformed(_)
        ));
        let payload = json!({"query": {"pages": [{"title": "T"}]}});
        assert!(matches!(
            parse_response(&payload).unwrap_err(),
            FetchError::Malformed(_)
        ));
    }
}
