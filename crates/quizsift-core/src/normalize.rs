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

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Trim and collapse every whitespace run (line breaks included) into a
/// single space.
pub fn clean(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Strip a single quiz counter such as `12. ` from the start of the text.
pub fn remove_leading_number(text: &str) -> String {
    LEADING_NUMBER.replace(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        assert_eq!(clean("  What   is\n\tthis?  "), "What is this?");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_clean_idempotent() {
        let once = clean(" a \n b  c ");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn test_remove_leading_number() {
        assert_eq!(remove_leading_number("12. What is 2+2?"), "What is 2+2?");
        assert_eq!(remove_leading_number("1.\nLine two"), "Line two");
    }

    #[test]
    fn test_remove_leading_number_once() {
        assert_eq!(remove_leading_number("1. 2. Text"), "2. Text");
    }

    #[test]
    fn test_remove_leading_number_only_at_start() {
        assert_eq!(remove_leading_number("Question 3. here"), "Question 3. here");
        assert_eq!(remove_leading_number("1.5 litres"), "1.5 litres");
        assert_eq!(remove_leading_number(" 1. indented"), " 1. indented");
    }

    #[test]
    fn test_remove_leading_number_idempotent() {
        let text = "What is 2+2?";
        assert_eq!(remove_leading_number(&remove_leading_number(text)), text);
    }
}
