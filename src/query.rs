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

//! Builds the expert-search query string and the request URL.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;

/// Characters left untouched in the `q` parameter, everything else is escaped.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFilter {
    Single(String),
    Range { start: String, end: String },
}

impl DateFilter {
    /// `YYYYMMDD-YYYYMMDD` becomes a range; anything else is passed through
    /// as a single publication date.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some((start, end)) = trimmed.split_once('-') {
            let start = start.trim();
            let end = end.trim();
            if is_compact_date(start) && is_compact_date(end) {
                return Self::Range {
                    start: start.to_string(),
                    end: end.to_string(),
                };
            }
        }
        Self::Single(trimmed.to_string())
    }

    fn clause(&self) -> String {
        match self {
            Self::Single(date) => format!("PD=[{date}]"),
            Self::Range { start, end } => format!("PD=[{start} <> {end}]"),
        }
    }
}

fn is_compact_date(token: &str) -> bool {
    token.len() == 8 && token.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub country: Option<String>,
    pub date: Option<DateFilter>,
    pub search_terms: Vec<String>,
    pub page: u32,
    pub page_size: u32,
}

impl SearchRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            country: None,
            date: None,
            search_terms: Vec::new(),
            page,
            page_size,
        }
    }

    pub fn with_country(mut self, country: Option<&str>) -> Self {
        self.country = country
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_date(mut self, date: Option<&str>) -> Self {
        self.date = date
            .filter(|d| !d.trim().is_empty())
            .map(DateFilter::parse);
        self
    }

    /// Comma-separated terms, each required to match (AND).
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search_terms = search.map(split_terms).unwrap_or_default();
        self
    }
}

pub fn split_terms(search: &str) -> Vec<String> {
    search
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn build_query(request: &SearchRequest) -> String {
    let mut clauses = Vec::new();

    if let Some(country) = &request.country {
        clauses.push(format!("CY=[{country}]"));
    }

    if let Some(date) = &request.date {
        clauses.push(date.clause());
    }

    if !request.search_terms.is_empty() {
        let terms = request
            .search_terms
            .iter()
            .map(|term| format!("FT=[{term}]"))
            .collect::<Vec<_>>()
            .join(" AND ");
        clauses.push(format!("({terms})"));
    }

    clauses.join(" AND ")
}

pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ESCAPE).to_string()
}

pub fn request_url(base_url: &str, request: &SearchRequest) -> String {
    format!(
        "{base_url}?fields=CONTENT&pageNum={}&pageSize={}&q={}&reverseOrder=false&scope=2&sortField=ND",
        request.page,
        request.page_size,
        encode_query(&build_query(request)),
    )
}
