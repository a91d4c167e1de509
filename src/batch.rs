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

use std::path::Path;

use tracing::warn;

use crate::error::TedError;
use crate::extract;
use crate::fetch::SearchResponse;
use crate::model::NoticeRecord;
use crate::model::ResultBatch;
use crate::output;

#[derive(Debug, Clone, Default)]
pub struct BatchOptions<'a> {
    pub page: u32,
    /// Write each notice's XML as `<dir>/<docId>.xml` while extracting.
    pub xml_dir: Option<&'a Path>,
}

#[derive(Debug)]
pub struct BatchReport {
    pub batch: ResultBatch,
    pub warnings: Vec<String>,
    pub write_errors: Vec<TedError>,
}

/// Extracts every result of one page. A notice that fails to decode or parse
/// is replaced by an empty record so the page keeps its shape.
pub fn assemble(response: SearchResponse, opts: &BatchOptions<'_>) -> BatchReport {
    let mut report = BatchReport {
        batch: ResultBatch {
            total: response.total,
            current_count: response.results.len(),
            current_page: opts.page,
            results: Vec::with_capacity(response.results.len()),
        },
        warnings: Vec::new(),
        write_errors: Vec::new(),
    };

    for (index, raw) in response.results.into_iter().enumerate() {
        let record = match raw.content {
            Some(content) => process(&content, opts, &mut report),
            None => Err(TedError::Decode("result has no content field".to_string())),
        };
        let record = record.unwrap_or_else(|err| {
            warn!(index, error = %err, "skipping unreadable notice");
            report.warnings.push(format!("result {index}: {err}"));
            NoticeRecord::default()
        });
        report.batch.results.push(record);
    }

    report
}

fn process(
    content: &str,
    opts: &BatchOptions<'_>,
    report: &mut BatchReport,
) -> Result<NoticeRecord, TedError> {
    let Some(dir) = opts.xml_dir else {
        return extract::extract(content);
    };

    let (record, xml) = extract::extract_with_xml(content)?;
    if let Err(err) = output::write_xml(dir, &record.doc_id, &xml) {
        warn!(doc_id = %record.doc_id, error = %err, "could not save notice XML");
        report.write_errors.push(err);
    }
    Ok(record)
}
