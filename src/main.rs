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

mod batch;
mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod model;
mod output;
mod query;
mod xml;

use anyhow::Context as _;
use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use tracing::Level;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::batch::BatchOptions;
use crate::cli::Cli;
use crate::fetch::SearchResponse;
use crate::output::debug_block;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "ted-search", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(cli.debug);

    let config = config::load_global_config().context("load configuration")?;
    let request = cli.search_request(&config);

    let query = query::build_query(&request);
    let url = query::request_url(&config.base_url, &request);
    if cli.debug {
        debug_block("query", &query);
        debug_block("request url", &url);
    }

    let client = fetch::Client::new(config.timeout());
    let body = client.get_json(&url)?;
    if cli.debug {
        debug_block("json response", &serde_json::to_string_pretty(&body)?);
    }

    let response = SearchResponse::from_value(body)?;
    info!(
        total = response.total,
        count = response.results.len(),
        "search returned"
    );

    let opts = BatchOptions {
        page: request.page,
        xml_dir: cli.savexml.as_deref(),
    };
    let report = batch::assemble(response, &opts);
    if !report.warnings.is_empty() {
        warn!(
            unreadable = report.warnings.len(),
            "some notices were replaced by empty records"
        );
    }
    let mut write_errors = report.write_errors;

    if let Some(path) = &cli.savejson
        && let Err(err) = output::write_batch_json(path, &report.batch)
    {
        error!(error = %err, "could not save batch JSON");
        write_errors.push(err);
    }

    if cli.json {
        output::print_json(&report.batch)?;
    } else {
        let stdout = std::io::stdout();
        output::render_text(&report.batch, stdout.lock())?;
    }

    if let Some(first) = write_errors.first() {
        anyhow::bail!("{} file write(s) failed, first: {first}", write_errors.len());
    }
    Ok(())
}
