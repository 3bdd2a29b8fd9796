use super::content_entry::{ContentBody, ContentEntry, ContentKind, ContentOrigin};
use super::fallback::pick_fallback_fact;
use super::source::ContentSource;
use chrono::{DateTime, TimeZone};
use rand::Rng;
use std::fmt::Display;
use tracing::{info, warn};

/// Coin flip between a quote and a fact.
pub fn choose_kind<R: Rng + ?Sized>(rng: &mut R) -> ContentKind {
    if rng.random_bool(0.5) {
        ContentKind::Quote
    } else {
        ContentKind::Fact
    }
}

/// Produces one entry of the requested `kind`, stamped with `now`.
///
/// Makes a single attempt against `source`. Any failure (transport, status, payload)
/// is logged and answered with a random fallback fact, so this never fails.
pub async fn acquire_content<S, R, Tz>(
    source: &S,
    rng: &mut R,
    now: &DateTime<Tz>,
    kind: ContentKind,
) -> ContentEntry
where
    S: ContentSource,
    R: Rng + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let fetched = match kind {
        ContentKind::Quote => source
            .fetch_quote()
            .await
            .map(|quote| ContentBody::Quote {
                text: quote.content,
                author: quote.author,
            }),
        ContentKind::Fact => source
            .fetch_fact()
            .await
            .map(|text| ContentBody::Fact { text }),
    };

    match fetched {
        Ok(body) => {
            info!(kind = kind.name(), "fetched remote content");
            ContentEntry::new(now, body, ContentOrigin::Remote)
        }
        Err(error) => {
            warn!(kind = kind.name(), %error, "remote source failed, using a fallback fact");
            let text = pick_fallback_fact(rng).to_string();
            ContentEntry::new(now, ContentBody::Fact { text }, ContentOrigin::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FALLBACK_FACTS, HttpSource, OfflineSource};
    use crate::tests::common::{CannedSource, fixed_now, mk_config};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn coin_flip_yields_both_kinds() {
        let mut rng = StdRng::seed_from_u64(1);
        let quotes = (0..1000)
            .filter(|_| choose_kind(&mut rng) == ContentKind::Quote)
            .count();
        assert!((400..=600).contains(&quotes), "quotes = {quotes}");
    }

    #[tokio::test]
    async fn quote_from_remote() {
        let source = CannedSource::quote("Simplicity is the soul of efficiency.", "Austin Freeman");
        let mut rng = StdRng::seed_from_u64(1);
        let entry = acquire_content(&source, &mut rng, &fixed_now(), ContentKind::Quote).await;
        assert_eq!(entry.origin, ContentOrigin::Remote);
        assert_eq!(
            entry.body,
            ContentBody::Quote {
                text: "Simplicity is the soul of efficiency.".to_string(),
                author: "Austin Freeman".to_string(),
            }
        );
        assert_eq!(entry.date, fixed_now().date_naive());
    }

    #[tokio::test]
    async fn fact_from_remote() {
        let source = CannedSource::fact("7 is the number of spots on a ladybug.");
        let mut rng = StdRng::seed_from_u64(1);
        let entry = acquire_content(&source, &mut rng, &fixed_now(), ContentKind::Fact).await;
        assert_eq!(entry.origin, ContentOrigin::Remote);
        assert_eq!(entry.body.text(), "7 is the number of spots on a ladybug.");
    }

    #[tokio::test]
    async fn failed_quote_falls_back_to_a_fact() {
        let mut rng = StdRng::seed_from_u64(9);
        let entry = acquire_content(&OfflineSource, &mut rng, &fixed_now(), ContentKind::Quote).await;
        assert_eq!(entry.origin, ContentOrigin::Fallback);
        assert_eq!(entry.kind(), ContentKind::Fact);
        assert!(FALLBACK_FACTS.contains(&entry.body.text()));
    }

    #[tokio::test]
    async fn failed_fact_falls_back_to_a_fact() {
        // Only a quote is canned, so the fact request fails.
        let source = CannedSource::quote("unused", "nobody");
        let mut rng = StdRng::seed_from_u64(9);
        let entry = acquire_content(&source, &mut rng, &fixed_now(), ContentKind::Fact).await;
        assert_eq!(entry.origin, ContentOrigin::Fallback);
        assert!(FALLBACK_FACTS.contains(&entry.body.text()));
    }

    #[tokio::test]
    async fn unreachable_http_source_falls_back() {
        // Nothing listens on the discard port used by the test config.
        let source = HttpSource::from_config(&mk_config("daily-content.md".into())).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        for kind in [ContentKind::Quote, ContentKind::Fact] {
            let entry = acquire_content(&source, &mut rng, &fixed_now(), kind).await;
            assert_eq!(entry.origin, ContentOrigin::Fallback);
            assert_eq!(entry.kind(), ContentKind::Fact);
            assert!(FALLBACK_FACTS.contains(&entry.body.text()));
        }
    }
}
