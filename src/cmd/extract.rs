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

use std::fs::File;
use std::fs::read_to_string;
use std::io::BufWriter;
use std::io::stdout;
use std::path::PathBuf;

use quizsift_core::assembler::Extraction;
use quizsift_core::assembler::run;
use quizsift_core::error::Fallible;
use quizsift_core::sink::JsonSink;
use quizsift_core::sink::OutputShape;
use quizsift_core::types::raw_pair::RawDeck;

pub struct ExtractConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub shape: OutputShape,
}

pub fn extract_deck(config: ExtractConfig) -> Fallible<()> {
    let text = read_to_string(&config.input)?;
    let deck: RawDeck = serde_json::from_str(&text)?;
    let title = config.title.unwrap_or(deck.title);
    log::debug!(
        "Read {} pairs from {}",
        deck.pairs.len(),
        config.input.display()
    );

    let extraction: Extraction = match &config.output {
        Some(path) => {
            let mut sink = JsonSink::new(BufWriter::new(File::create(path)?), config.shape);
            run(&title, &deck.pairs, &mut sink)?
        }
        None => {
            let mut sink = JsonSink::new(stdout().lock(), config.shape);
            run(&title, &deck.pairs, &mut sink)?
        }
    };

    for diagnostic in &extraction.diagnostics {
        log::warn!("{diagnostic}");
    }
    let skipped = deck.pairs.len() - extraction.result_set.data.len();
    if skipped > 0 {
        log::info!("Skipped {skipped} pairs with a missing side");
    }
    log::info!(
        "Extracted {} records ({} unresolved)",
        extraction.result_set.data.len(),
        extraction.diagnostics.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use quizsift_core::types::record::Record;
    use quizsift_core::types::record::ResultSet;
    use tempfile::tempdir;

    use super::*;

    const DECK: &str = r#"{
        "title": "Maths",
        "pairs": [
            {"side1": "1. What is 2+2?\nA. 3\nB. 4\nC. 5", "side2": "B"},
            {"side1": "", "side2": "A"},
            {"side1": "Zero is even", "side2": "t"}
        ]
    }"#;

    #[test]
    fn test_extract_to_file() -> Fallible<()> {
        let dir = tempdir()?;
        let input = dir.path().join("deck.json");
        let output = dir.path().join("out.json");
        write(&input, DECK)?;
        extract_deck(ExtractConfig {
            input,
            output: Some(output.clone()),
            title: None,
            shape: OutputShape::Wrapped,
        })?;
        let result: ResultSet = serde_json::from_str(&read_to_string(&output)?)?;
        assert_eq!(
            result,
            ResultSet {
                source_title: "Maths".to_string(),
                data: vec![
                    Record::new("What is 2+2?", "4"),
                    Record::new("Zero is even", "True"),
                ],
            }
        );
        Ok(())
    }

    #[test]
    fn test_extract_bare_with_title_override() -> Fallible<()> {
        let dir = tempdir()?;
        let input = dir.path().join("deck.json");
        let output = dir.path().join("out.json");
        write(&input, DECK)?;
        extract_deck(ExtractConfig {
            input,
            output: Some(output.clone()),
            title: Some("Ignored in bare output".to_string()),
            shape: OutputShape::Bare,
        })?;
        let records: Vec<Record> = serde_json::from_str(&read_to_string(&output)?)?;
        assert_eq!(records.len(), 2);
        Ok(())
    }

    #[test]
    fn test_extract_missing_input() -> Fallible<()> {
        let dir = tempdir()?;
        let result = extract_deck(ExtractConfig {
            input: dir.path().join("missing.json"),
            output: None,
            title: None,
            shape: OutputShape::Wrapped,
        });
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_extract_malformed_input() -> Fallible<()> {
        let dir = tempdir()?;
        let input = dir.path().join("deck.json");
        write(&input, "{\"pairs\": 3}")?;
        let result = extract_deck(ExtractConfig {
            input,
            output: Some(dir.path().join("out.json")),
            title: None,
            shape: OutputShape::Wrapped,
        });
        let err = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(err.starts_with("error: JSON error:"));
        Ok(())
    }
}
