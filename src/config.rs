//! Configuration types for gh-folder-zip

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pipeline configuration
///
/// Works out of the box with zero configuration; an API token is only needed
/// to raise GitHub's rate limits or to reach private repositories.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Optional GitHub API token
    ///
    /// When set, attached as `Authorization: token <value>` on listing calls
    /// only. Raw content downloads are never authenticated.
    #[serde(default)]
    pub token: Option<String>,

    /// Per-request timeout for every outbound call (default: 30s)
    ///
    /// Applies independently to each listing fetch and each file download.
    /// There is no end-to-end deadline across the whole pipeline, so total
    /// latency grows with tree depth and breadth.
    #[serde(default = "default_request_timeout", with = "duration_secs")]
    pub request_timeout: Duration,

    /// User-Agent header sent on every request
    ///
    /// The GitHub REST API rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("gh-folder-zip/{}", env!("CARGO_PKG_VERSION"))
}

/// Serde helper serializing `Duration` as whole seconds
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}
