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

//! Folding newly extracted records into a saved collection.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::types::record::Record;

/// A saved collection file. Keys other than `Source` and `Data` are kept
/// as they are.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "Data", default)]
    pub data: Vec<Record>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Terms touched by a merge, in the order they were processed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: Vec<String>,
    pub updated: Vec<String>,
}

/// Merge `incoming` into `collection` keyed by term. New terms are
/// appended; known terms get the incoming definition if it differs.
pub fn merge_records(collection: &mut Collection, incoming: &[Record]) -> MergeReport {
    let mut report = MergeReport::default();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (i, record) in collection.data.iter().enumerate() {
        index.insert(record.term.clone(), i);
    }
    for record in incoming {
        match index.get(&record.term) {
            Some(&i) => {
                let existing = &mut collection.data[i];
                if existing.definition != record.definition {
                    existing.definition = record.definition.clone();
                    report.updated.push(record.term.clone());
                }
            }
            None => {
                index.insert(record.term.clone(), collection.data.len());
                collection.data.push(record.clone());
                report.added.push(record.term.clone());
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_add_update_unchanged() {
        let mut collection = Collection {
            source: Some("Bio".to_string()),
            data: vec![Record::new("Cell", "Unit of life"), Record::new("DNA", "Old")],
            extra: Map::new(),
        };
        let incoming = vec![
            Record::new("Cell", "Unit of life"),
            Record::new("DNA", "Genetic material"),
            Record::new("RNA", "Messenger"),
        ];
        let report = merge_records(&mut collection, &incoming);
        assert_eq!(report.added, vec!["RNA"]);
        assert_eq!(report.updated, vec!["DNA"]);
        assert_eq!(
            collection.data,
            vec![
                Record::new("Cell", "Unit of life"),
                Record::new("DNA", "Genetic material"),
                Record::new("RNA", "Messenger"),
            ]
        );
    }

    #[test]
    fn test_duplicate_incoming_terms() {
        let mut collection = Collection::default();
        let incoming = vec![Record::new("Q", "first"), Record::new("Q", "second")];
        let report = merge_records(&mut collection, &incoming);
        assert_eq!(report.added, vec!["Q"]);
        assert_eq!(report.updated, vec!["Q"]);
        assert_eq!(collection.data, vec![Record::new("Q", "second")]);
    }

    #[test]
    fn test_extra_keys_preserved() -> Fallible<()> {
        let json = r#"{"Source":"Bio","Version":3,"Data":[{"term":"a","definition":"b"}]}"#;
        let mut collection: Collection = serde_json::from_str(json)?;
        merge_records(&mut collection, &[Record::new("c", "d")]);
        let value: Value = serde_json::to_value(&collection)?;
        assert_eq!(value["Version"], 3);
        assert_eq!(value["Source"], "Bio");
        assert_eq!(value["Data"].as_array().map(Vec::len), Some(2));
        Ok(())
    }

    #[test]
    fn test_missing_data_key() -> Fallible<()> {
        let mut collection: Collection = serde_json::from_str(r#"{"Source":"Bio"}"#)?;
        let report = merge_records(&mut collection, &[Record::new("a", "b")]);
        assert_eq!(report.added, vec!["a"]);
        assert_eq!(collection.data.len(), 1);
        Ok(())
    }
}
