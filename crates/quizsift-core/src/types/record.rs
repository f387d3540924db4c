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

use serde::Deserialize;
use serde::Serialize;

/// A resolved flashcard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub definition: String,
}

impl Record {
    /// Construct a record, trimming both fields.
    pub fn new(term: &str, definition: &str) -> Self {
        Self {
            term: term.trim().to_string(),
            definition: definition.trim().to_string(),
        }
    }
}

/// All records extracted from one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(rename = "Source")]
    pub source_title: String,
    #[serde(rename = "Data", default)]
    pub data: Vec<Record>,
}

impl ResultSet {
    pub fn new(source_title: impl Into<String>) -> Self {
        Self {
            source_title: source_title.into(),
            data: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_record_trims() {
        let record = Record::new("  What?\n", "\tThat ");
        assert_eq!(record.term, "What?");
        assert_eq!(record.definition, "That");
    }

    #[test]
    fn test_serialize_result_set() -> Fallible<()> {
        let mut set = ResultSet::new("Chemistry");
        set.data.push(Record::new("H2O", "Water"));
        let json = serde_json::to_string(&set)?;
        assert_eq!(
            json,
            r#"{"Source":"Chemistry","Data":[{"term":"H2O","definition":"Water"}]}"#
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_without_data() -> Fallible<()> {
        let set: ResultSet = serde_json::from_str(r#"{"Source":"Empty"}"#)?;
        assert_eq!(set, ResultSet::new("Empty"));
        Ok(())
    }
}
