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

use clap::Parser;
use clap_complete::Shell;

use crate::config::Config;
use crate::query::SearchRequest;

#[derive(Parser, Debug)]
#[command(
    name = "ted-search",
    version,
    about = "Search procurement notices on Tenders Electronic Daily"
)]
pub struct Cli {
    /// Country code, two letters in caps [default: SE]
    #[arg(short, long)]
    pub country: Option<String>,

    /// Results per page [default: 20]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Page number
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Search terms, comma separated, all must match
    #[arg(short = 't', long)]
    pub search: Option<String>,

    /// Publication date, YYYYMMDD or a span YYYYMMDD-YYYYMMDD
    #[arg(short, long)]
    pub date: Option<String>,

    /// Save each notice as <docId>.xml in this directory
    #[arg(long, value_name = "DIR")]
    pub savexml: Option<PathBuf>,

    /// Save the whole page as a JSON file
    #[arg(long, value_name = "FILE")]
    pub savejson: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,

    /// Print the query, request URL and raw response
    #[arg(long)]
    pub debug: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Flags win over the config file.
    pub fn search_request(&self, config: &Config) -> SearchRequest {
        let country = self.country.as_deref().unwrap_or(&config.country);
        SearchRequest::new(self.page, self.limit.unwrap_or(config.limit))
            .with_country(Some(country))
            .with_date(self.date.as_deref())
            .with_search(self.search.as_deref())
    }
}
