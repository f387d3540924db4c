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

//! Turning raw flashcard pairs into records.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::Fallible;
use crate::mapper::join_answers;
use crate::mapper::map_answers;
use crate::normalize::remove_leading_number;
use crate::options::parse_question;
use crate::signature::Classified;
use crate::signature::PairKind;
use crate::signature::classify_pair;
use crate::signature::expand_true_false;
use crate::sink::Sink;
use crate::types::raw_pair::RawPair;
use crate::types::record::Record;
use crate::types::record::ResultSet;

/// Which path a pair took through resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionKind {
    TrueFalse,
    SignatureResolved,
    SignatureUnresolved,
    Plain,
}

/// A letter-coded answer that could not be resolved. `index` is the
/// position of the pair in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// Options were found but none matched the answer's letters.
    UnmappedAnswer { index: usize, answer: String },
    /// The answer is letter-coded but the question has no options.
    NoOptions { index: usize, answer: String },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnmappedAnswer { index, answer } => write!(
                f,
                "pair {index}: answer \"{answer}\" does not match any option"
            ),
            Diagnostic::NoOptions { index, answer } => write!(
                f,
                "pair {index}: no options found for answer \"{answer}\""
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub record: Record,
    pub kind: ResolutionKind,
    pub diagnostic: Option<Diagnostic>,
}

/// The records of one run plus anything worth reporting about them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub result_set: ResultSet,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    fn push(mut self, resolution: Resolution) -> Self {
        self.result_set.data.push(resolution.record);
        self.diagnostics.extend(resolution.diagnostic);
        self
    }
}

/// Resolve a pair. Returns `None` when either side is missing or blank.
pub fn resolve_pair(index: usize, pair: &RawPair) -> Option<Resolution> {
    let (side1, side2) = pair.sides()?;
    Some(resolve_sides(index, side1, side2))
}

fn resolve_sides(index: usize, side1: &str, side2: &str) -> Resolution {
    let side1 = remove_leading_number(side1.trim());
    let side2 = remove_leading_number(side2.trim());
    let Classified {
        kind,
        question,
        answer,
    } = classify_pair(&side1, &side2);
    match kind {
        PairKind::TrueFalse => Resolution {
            record: Record::new(question, expand_true_false(answer).unwrap_or(answer)),
            kind: ResolutionKind::TrueFalse,
            diagnostic: None,
        },
        PairKind::Signature => resolve_signature(index, question, answer),
        PairKind::Plain => Resolution {
            record: Record::new(question, answer),
            kind: ResolutionKind::Plain,
            diagnostic: None,
        },
    }
}

fn resolve_signature(index: usize, question: &str, answer: &str) -> Resolution {
    let answer = answer.trim();
    let parsed = parse_question(question);
    if !parsed.has_options() {
        return Resolution {
            record: Record::new(
                question,
                &format!("ERROR: No options found for answer \"{answer}\""),
            ),
            kind: ResolutionKind::SignatureUnresolved,
            diagnostic: Some(Diagnostic::NoOptions {
                index,
                answer: answer.to_string(),
            }),
        };
    }
    let main_question = parsed.main_question();
    let contents = map_answers(answer, parsed.options());
    if contents.is_empty() {
        let term = match main_question.trim() {
            "" => question,
            main => main,
        };
        return Resolution {
            record: Record::new(
                term,
                &format!("ERROR: Could not map answer \"{answer}\" to any option"),
            ),
            kind: ResolutionKind::SignatureUnresolved,
            diagnostic: Some(Diagnostic::UnmappedAnswer {
                index,
                answer: answer.to_string(),
            }),
        };
    }
    Resolution {
        record: Record::new(main_question, &join_answers(&contents)),
        kind: ResolutionKind::SignatureResolved,
        diagnostic: None,
    }
}

/// Resolve every complete pair, in input order.
pub fn extract(source_title: &str, pairs: &[RawPair]) -> Extraction {
    let initial = Extraction {
        result_set: ResultSet::new(source_title),
        diagnostics: Vec::new(),
    };
    pairs
        .iter()
        .enumerate()
        .filter_map(|(index, pair)| pair.sides().map(|(side1, side2)| (index, side1, side2)))
        .map(|(index, side1, side2)| resolve_sides(index, side1, side2))
        .fold(initial, Extraction::push)
}

/// Extract and hand the result to `sink`, once.
pub fn run(source_title: &str, pairs: &[RawPair], sink: &mut impl Sink) -> Fallible<Extraction> {
    let extraction = extract(source_title, pairs);
    sink.emit(&extraction.result_set)?;
    Ok(extraction)
}
