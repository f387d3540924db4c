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

//! Deciding which side of a flashcard is a letter-coded answer.

/// Longest run of letters still treated as an answer key.
const MAX_SIGNATURE_LEN: usize = 10;

/// How a pair's sides were told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairKind {
    /// The answer is a True/False token.
    TrueFalse,
    /// The answer is a letter code pointing into the question's options.
    Signature,
    /// Neither side is coded; sides were assigned by shape.
    Plain,
}

/// A pair after classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classified<'a> {
    pub kind: PairKind,
    pub question: &'a str,
    pub answer: &'a str,
}

/// The canonical spelling of a True/False token, if `text` is one.
pub fn expand_true_false(text: &str) -> Option<&'static str> {
    match text.trim().to_ascii_uppercase().as_str() {
        "T" | "TRUE" => Some("True"),
        "F" | "FALSE" => Some("False"),
        _ => None,
    }
}

pub fn is_true_false(text: &str) -> bool {
    expand_true_false(text).is_some()
}

/// Drop whitespace and commas, leaving only the letters of an answer key.
pub fn strip_separators(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect()
}

/// Uppercase letters such as `B`, `A, C` or `ACD`.
pub fn is_answer_signature(text: &str) -> bool {
    let stripped = strip_separators(text);
    !stripped.is_empty()
        && stripped.len() <= MAX_SIGNATURE_LEN
        && stripped.chars().all(|c| c.is_ascii_uppercase())
}

/// A lone letter in either case.
pub fn is_single_letter(text: &str) -> bool {
    let mut chars = text.trim().chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// Work out which side is the question and which is the answer.
///
/// Checks run in a fixed order: True/False, then a multi-letter key, then a
/// single letter. At each step the second side is tried first, since pages
/// put the answer there. When nothing matches, the side with a line break
/// is the question, otherwise the longer one (the first side on a tie).
pub fn classify_pair<'a>(side1: &'a str, side2: &'a str) -> Classified<'a> {
    let checks: [(PairKind, fn(&str) -> bool); 3] = [
        (PairKind::TrueFalse, is_true_false),
        (PairKind::Signature, is_answer_signature),
        (PairKind::Signature, is_single_letter),
    ];
    for (kind, check) in checks {
        if check(side2) {
            return Classified {
                kind,
                question: side1,
                answer: side2,
            };
        }
        if check(side1) {
            return Classified {
                kind,
                question: side2,
                answer: side1,
            };
        }
    }
    let (question, answer) = if side1_is_question(side1, side2) {
        (side1, side2)
    } else {
        (side2, side1)
    };
    Classified {
        kind: PairKind::Plain,
        question,
        answer,
    }
}

fn side1_is_question(side1: &str, side2: &str) -> bool {
    let multiline1 = side1.contains('\n');
    let multiline2 = side2.contains('\n');
    if multiline1 != multiline2 {
        return multiline1;
    }
    side1.chars().count() >= side2.chars().count()
}
