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

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::error::TedError;
use crate::model::ResultBatch;

const SEPARATOR: &str = "-------------------------------------------------------------------";

pub fn print_json(batch: &ResultBatch) -> Result<()> {
    let text = serde_json::to_string_pretty(batch)?;
    println!("{text}");
    Ok(())
}

pub fn render_text(batch: &ResultBatch, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    writeln!(
        out,
        "    Showing {} of {} found notices.",
        batch.current_count, batch.total
    )?;
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    writeln!(out)?;

    for record in &batch.results {
        writeln!(out, "{} / {} / {}", record.name, record.city, record.doc_id)?;
        writeln!(out, "{}", record.title)?;
        writeln!(out, "{}", record.desc)?;
        writeln!(out, "{}", record.apply_url)?;
        writeln!(out)?;
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// `--debug` block on stderr: `[label]`, the value, `[/label]`.
pub fn debug_block(label: &str, value: &str) {
    eprintln!("[{label}]");
    eprintln!("{value}");
    eprintln!("[/{label}]");
}

pub fn xml_path(dir: &Path, doc_id: &str) -> Result<PathBuf, TedError> {
    let usable = !doc_id.is_empty()
        && doc_id != "."
        && doc_id != ".."
        && !doc_id.contains(['/', '\\']);
    if !usable {
        return Err(TedError::file_write(
            dir.join(format!("{doc_id}.xml")),
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unusable document id {doc_id:?}"),
            ),
        ));
    }
    Ok(dir.join(format!("{doc_id}.xml")))
}

pub fn write_xml(dir: &Path, doc_id: &str, xml: &str) -> Result<PathBuf, TedError> {
    let path = xml_path(dir, doc_id)?;
    fs::create_dir_all(dir).map_err(|err| TedError::file_write(dir, err))?;
    fs::write(&path, xml).map_err(|err| TedError::file_write(&path, err))?;
    debug!(path = %path.display(), "saved notice XML");
    Ok(path)
}

pub fn write_batch_json(path: &Path, batch: &ResultBatch) -> Result<(), TedError> {
    let file = File::create(path).map_err(|err| TedError::file_write(path, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, batch)
        .map_err(|err| TedError::file_write(path, io::Error::other(err)))?;
    writer
        .flush()
        .map_err(|err| TedError::file_write(path, err))?;
    debug!(path = %path.display(), records = batch.results.len(), "saved batch JSON");
    Ok(())
}
