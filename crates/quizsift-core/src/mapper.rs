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

use crate::signature::strip_separators;
use crate::types::question::AnswerOption;

/// Separates the contents of a multi-letter answer. Wider than a normal
/// space so the pieces stay visually distinct.
pub const ANSWER_SEPARATOR: &str = "   ";

/// The letters of an answer key, uppercased, in the order written.
pub fn answer_letters(answer: &str) -> Vec<char> {
    strip_separators(answer)
        .to_ascii_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Look up each letter of `answer` among `options`. Letters without a
/// matching option are dropped.
pub fn map_answers<'a>(answer: &str, options: &'a [AnswerOption]) -> Vec<&'a str> {
    answer_letters(answer)
        .into_iter()
        .filter_map(|letter| options.iter().find(|o| o.letter == letter))
        .map(|o| o.content.as_str())
        .collect()
}

pub fn join_answers(contents: &[&str]) -> String {
    contents.join(ANSWER_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<AnswerOption> {
        vec![
            AnswerOption::new('A', "Red"),
            AnswerOption::new('B', "Blue"),
            AnswerOption::new('C', "Green"),
        ]
    }

    #[test]
    fn test_answer_letters() {
        assert_eq!(answer_letters("a, c"), vec!['A', 'C']);
        assert_eq!(answer_letters(" B D "), vec!['B', 'D']);
        assert_eq!(answer_letters("1-2"), Vec::<char>::new());
    }

    #[test]
    fn test_single() {
        assert_eq!(map_answers("B", &options()), vec!["Blue"]);
    }

    #[test]
    fn test_answer_order_kept() {
        assert_eq!(map_answers("C, A", &options()), vec!["Green", "Red"]);
    }

    #[test]
    fn test_unmatched_dropped() {
        assert_eq!(map_answers("AZ", &options()), vec!["Red"]);
        assert!(map_answers("Z", &options()).is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(join_answers(&["Red", "Green"]), "Red   Green");
        assert_eq!(join_answers(&["Red"]), "Red");
    }
}
