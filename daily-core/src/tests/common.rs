use crate::content::{ContentSource, FetchError, QuotePayload};
use chrono::{DateTime, TimeZone, Utc};

pub(crate) use crate::config::tests::{mk_config, mk_config_from_toml};

/// A fixed instant for deterministic headings: `2025-08-15 at 02:07 PM UTC`.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 15, 14, 7, 0)
        .single()
        .expect("valid timestamp")
}

/// Test helper that serves canned content; whatever is not canned fails like a bad payload.
#[derive(Debug, Default)]
pub struct CannedSource {
    pub quote: Option<QuotePayload>,
    pub fact: Option<String>,
}

impl CannedSource {
    pub fn quote(content: &str, author: &str) -> Self {
        Self {
            quote: Some(QuotePayload {
                content: content.to_string(),
                author: author.to_string(),
            }),
            fact: None,
        }
    }

    pub fn fact(text: &str) -> Self {
        Self {
            quote: None,
            fact: Some(text.to_string()),
        }
    }
}

impl ContentSource for CannedSource {
    async fn fetch_quote(&self) -> Result<QuotePayload, FetchError> {
        self.quote.clone().ok_or_else(|| FetchError::Payload {
            url: "canned://quote".to_string(),
            reason: "no quote canned".to_string(),
        })
    }

    async fn fetch_fact(&self) -> Result<String, FetchError> {
        self.fact.clone().ok_or_else(|| FetchError::Payload {
            url: "canned://fact".to_string(),
            reason: "no fact canned".to_string(),
        })
    }
}
