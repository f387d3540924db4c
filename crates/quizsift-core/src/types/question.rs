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

use std::fmt::Display;
use std::fmt::Formatter;

/// One lettered choice of a multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOption {
    /// Always an uppercase ASCII letter.
    pub letter: char,
    pub content: String,
}

impl AnswerOption {
    pub fn new(letter: char, content: impl Into<String>) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            content: content.into(),
        }
    }
}

/// A question split into its prompt and its options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedQuestion {
    main_question: String,
    options: Vec<AnswerOption>,
}

impl ParsedQuestion {
    pub fn new(main_question: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            main_question: main_question.into(),
            options,
        }
    }

    /// A question with no recognizable options.
    pub fn plain(main_question: impl Into<String>) -> Self {
        Self::new(main_question, Vec::new())
    }

    pub fn main_question(&self) -> &str {
        &self.main_question
    }

    /// Options in order of appearance.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Renders the question back to text, one `L. content` line per option.
impl Display for ParsedQuestion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.main_question)?;
        for option in &self.options {
            write!(f, "\n{}. {}", option.letter, option.content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_uppercased() {
        assert_eq!(AnswerOption::new('b', "Blue").letter, 'B');
    }

    #[test]
    fn test_plain_has_no_options() {
        let q = ParsedQuestion::plain("Why?");
        assert!(!q.has_options());
        assert!(q.options().is_empty());
    }

    #[test]
    fn test_display() {
        let q = ParsedQuestion::new(
            "Pick one:",
            vec![AnswerOption::new('A', "Red"), AnswerOption::new('B', "Blue")],
        );
        assert_eq!(q.to_string(), "Pick one:\nA. Red\nB. Blue");
    }
}
