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

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the fetch, extract and persist stages.
#[derive(Debug, Error)]
pub enum TedError {
    /// The request could not be sent, timed out, or returned a non-2xx status.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The response body was not JSON, or lacked `total`/`results`.
    #[error("invalid search response: {0}")]
    JsonParse(String),

    /// The `content` payload was not valid base64 or not UTF-8.
    #[error("invalid notice payload: {0}")]
    Decode(String),

    #[error("malformed notice XML: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl TedError {
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
