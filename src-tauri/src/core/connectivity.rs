//! Network reachability pre-flight.

use reqwest::Client;
use std::time::Duration;

const PROBE_URL: &str = "https://translate.googleapis.com/";
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Boolean probe for service availability.
///
/// Any HTTP response counts as reachable; only transport errors count as
/// offline. `fixed()` pins the outcome so flows can be exercised without a
/// connection.
#[derive(Clone)]
pub struct NetworkProbe {
    http: Client,
    url: String,
    assume: Option<bool>,
}

impl NetworkProbe {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            url: PROBE_URL.to_string(),
            assume: None,
        }
    }

    pub fn fixed(outcome: bool) -> Self {
        Self {
            http: Client::new(),
            url: PROBE_URL.to_string(),
            assume: Some(outcome),
        }
    }

    pub async fn is_online(&self) -> bool {
        if let Some(outcome) = self.assume {
            return outcome;
        }
        match self.http.head(&self.url).timeout(PROBE_TIMEOUT).send().await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Reachability probe failed: {}", e);
                false
            }
        }
    }
}
