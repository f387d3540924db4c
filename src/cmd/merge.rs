// Copyright 2025 Fernando Borretti
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

use std::fs::read_to_string;
use std::fs::write;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use quizsift_core::error::Fallible;
use quizsift_core::error::fail;
use quizsift_core::merge::Collection;
use quizsift_core::merge::merge_records;
use quizsift_core::types::record::ResultSet;

pub struct MergeConfig {
    pub import: PathBuf,
    pub directory: Option<PathBuf>,
}

pub fn merge_import(config: MergeConfig) -> Fallible<()> {
    let import: ResultSet = serde_json::from_str(&read_to_string(&config.import)?)?;
    let directory = config.directory.unwrap_or_else(|| PathBuf::from("."));
    let target = collection_path(&directory, &import.source_title)?;

    if !target.exists() {
        log::warn!("Collection file {} not found", target.display());
        return Ok(());
    }

    let mut collection: Collection = serde_json::from_str(&read_to_string(&target)?)?;
    let report = merge_records(&mut collection, &import.data);
    for term in &report.updated {
        log::info!("Updated answer for: {term}");
    }
    for term in &report.added {
        log::info!("Added new question: {term}");
    }

    let mut json = serde_json::to_string_pretty(&collection)?;
    json.push('\n');
    write(&target, json)?;

    println!(
        "Imported into {}: {} added, {} updated",
        target.display(),
        report.added.len(),
        report.updated.len()
    );
    Ok(())
}

/// The collection file for a source title. The title becomes a file name,
/// so it must not name a directory or climb out of `directory`.
fn collection_path(directory: &Path, source_title: &str) -> Fallible<PathBuf> {
    let file_name = PathBuf::from(format!("{source_title}.json"));
    let mut components = file_name.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(directory.join(file_name)),
        _ => fail(format!("invalid source title: {source_title:?}")),
    }
}
