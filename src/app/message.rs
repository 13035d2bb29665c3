// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the host application.

use crate::config::Config;
use crate::ui::feedback;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Feedback(feedback::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `THUMBER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Feedback endpoint URL.
    pub endpoint: Option<String>,
    /// Anti-forgery token forwarded with every submission.
    pub token: Option<String>,
    /// Page the feedback is about, sent as `Referer`.
    pub referer: Option<String>,
    /// Raw `Cookie` header value.
    pub cookie: Option<String>,
}

impl Flags {
    /// Overlays the endpoint flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut Config) {
        let endpoint = &mut config.endpoint;
        if let Some(url) = &self.endpoint {
            endpoint.url = Some(url.clone());
        }
        if let Some(token) = &self.token {
            endpoint.security_token = Some(token.clone());
        }
        if let Some(referer) = &self.referer {
            endpoint.referer = Some(referer.clone());
        }
        if let Some(cookie) = &self.cookie {
            endpoint.cookie = Some(cookie.clone());
        }
    }
}
