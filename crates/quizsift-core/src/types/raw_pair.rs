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

/// The two text blobs extracted from one flashcard. Either side may be
/// missing when the page did not render it. Nothing says which side is the
/// question.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPair {
    #[serde(default)]
    pub side1: Option<String>,
    #[serde(default)]
    pub side2: Option<String>,
}

impl RawPair {
    pub fn new(side1: impl Into<String>, side2: impl Into<String>) -> Self {
        Self {
            side1: Some(side1.into()),
            side2: Some(side2.into()),
        }
    }

    /// Both sides, or `None` if either is absent or blank.
    pub fn sides(&self) -> Option<(&str, &str)> {
        let side1 = self.side1.as_deref().filter(|s| !s.trim().is_empty())?;
        let side2 = self.side2.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((side1, side2))
    }
}

impl From<(Option<String>, Option<String>)> for RawPair {
    fn from((side1, side2): (Option<String>, Option<String>)) -> Self {
        Self { side1, side2 }
    }
}

/// An input document: the page title and the pairs scraped from it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawDeck {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pairs: Vec<RawPair>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_sides() {
        let pair = RawPair::new("What is Rust?", "A language");
        assert_eq!(pair.sides(), Some(("What is Rust?", "A language")));
    }

    #[test]
    fn test_blank_side() {
        assert_eq!(RawPair::new("", "B").sides(), None);
        assert_eq!(RawPair::new("Q", " \n ").sides(), None);
        assert_eq!(RawPair::from((None, Some("B".to_string()))).sides(), None);
    }

    #[test]
    fn test_deserialize_deck() -> Fallible<()> {
        let json = r#"{
            "title": "Biology 101",
            "pairs": [
                {"side1": "Q1", "side2": "A1"},
                {"side1": null, "side2": "A2"},
                {"side2": "A3"}
            ]
        }"#;
        let deck: RawDeck = serde_json::from_str(json)?;
        assert_eq!(deck.title, "Biology 101");
        assert_eq!(deck.pairs.len(), 3);
        assert_eq!(deck.pairs[0], RawPair::new("Q1", "A1"));
        assert_eq!(deck.pairs[1].side1, None);
        assert_eq!(deck.pairs[2].side1, None);
        Ok(())
    }
}
