// Copyright 2026 TedSearch Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::TedError;

/// Blocking client for the notice search endpoint.
pub struct Client {
    agent: ureq::Agent,
}

impl Client {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("ted-search/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }

    /// One GET; the body must be JSON.
    pub fn get_json(&self, url: &str) -> Result<Value, TedError> {
        debug!(url, "requesting notices");
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|err| network_error(url, err))?;
        debug!(status = response.status(), "response received");

        serde_json::from_reader(response.into_reader()).map_err(|err| {
            if err.is_io() {
                TedError::Network {
                    url: url.to_string(),
                    message: err.to_string(),
                }
            } else {
                TedError::JsonParse(err.to_string())
            }
        })
    }
}

fn network_error(url: &str, err: ureq::Error) -> TedError {
    let message = match err {
        ureq::Error::Status(code, response) => {
            format!("HTTP {code} {}", response.status_text())
        }
        ureq::Error::Transport(transport) => transport.to_string(),
    };
    TedError::Network {
        url: url.to_string(),
        message,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total: u64,
    pub results: Vec<RawNotice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNotice {
    /// Base64 XML. A result without it fails on its own, not the whole page.
    #[serde(default)]
    pub content: Option<String>,
}

impl SearchResponse {
    pub fn from_value(value: Value) -> Result<Self, TedError> {
        serde_json::from_value(value).map_err(|err| TedError::JsonParse(err.to_string()))
    }
}
