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

//! Shared domain types used across extraction, batching, and output.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgDetails {
    pub name: String,
    pub city: String,
    pub street: String,
    pub contact_name: String,
    pub contact_email: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeRecord {
    pub name: String,
    pub city: String,
    pub title: String,
    pub desc: String,
    #[serde(rename = "docId")]
    pub doc_id: String,
    pub date_added: String,
    pub date_expires: String,
    pub date_submitby: String,
    #[serde(rename = "applyurl")]
    pub apply_url: String,
    pub nuts: String,
    pub cpv: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_details: Option<OrgDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBatch {
    pub total: u64,
    pub current_count: usize,
    pub current_page: u32,
    pub results: Vec<NoticeRecord>,
}
