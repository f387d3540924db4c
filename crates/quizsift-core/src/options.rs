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

//! Splitting question text into its prompt and lettered options.
//!
//! Three layouts are recognized, tried in order:
//!
//! 1. Marked lines, e.g. `A. text`, `b) text`, `(C) text`, `D: text`,
//!    `E, text`, or a bare marker line followed by the option text.
//! 2. Unmarked short lines after a line ending in `?` or `:`, lettered
//!    by position.
//! 3. Inline markers on a question that is a single line, e.g.
//!    `Which? A. one B. two`.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::clean;
use crate::types::question::AnswerOption;
use crate::types::question::ParsedQuestion;

/// A marker followed by the option text on the same line.
static OPTION_WITH_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?([A-Za-z])\)?[.):,]\s?(.*\S.*)$").unwrap());

/// A marker alone on its line.
static MARKER_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?([A-Za-z])\)?[.):,]$").unwrap());

static INLINE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" ([A-Z])\. ").unwrap());

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[_-]{3,}$").unwrap());

static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,4}$").unwrap());

/// Unmarked options must be shorter than this many characters.
const MAX_UNMARKED_OPTION_LEN: usize = 50;

/// Unmarked option lists outside this range are not treated as options.
const MIN_UNMARKED_OPTIONS: usize = 2;
const MAX_UNMARKED_OPTIONS: usize = 6;

/// Parse the options out of a question.
pub fn parse_question(text: &str) -> ParsedQuestion {
    let mut parser = OptionParser::default();
    let mut state = State::ScanningQuestion;
    for raw in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let line = parser.read_line(raw, &state);
        state = parser.parse_line(state, line);
    }
    parser.finalize(state);

    if !parser.options.is_empty() {
        return ParsedQuestion::new(parser.question_lines.join("\n"), parser.options);
    }
    if let Some(parsed) = parse_unmarked(&parser.question_lines) {
        return parsed;
    }
    if let [line] = parser.question_lines.as_slice() {
        if let Some(parsed) = parse_inline(&clean(line)) {
            return parsed;
        }
    }
    ParsedQuestion::plain(parser.question_lines.join("\n"))
}

#[derive(Debug, PartialEq)]
enum State {
    /// No option marker seen yet; lines belong to the question.
    ScanningQuestion,
    /// A bare marker was read; the next line is its text.
    AwaitingOptionContent { letter: char },
    /// Reading an option's text, possibly over several lines.
    AccumulatingOption { letter: char, content: String },
}

#[derive(Debug, PartialEq)]
enum Line {
    /// A line like `A. text`.
    OptionWithContent { letter: char, content: String },
    /// A line like `(b)`.
    MarkerOnly(char),
    /// Any other line.
    Text(String),
}

impl Line {
    fn read(line: &str) -> Self {
        if let Some(caps) = OPTION_WITH_CONTENT.captures(line) {
            if let Some(letter) = caps[1].chars().next() {
                return Line::OptionWithContent {
                    letter: letter.to_ascii_uppercase(),
                    content: caps[2].trim().to_string(),
                };
            }
        }
        if let Some(caps) = MARKER_ONLY.captures(line) {
            if let Some(letter) = caps[1].chars().next() {
                return Line::MarkerOnly(letter.to_ascii_uppercase());
            }
        }
        Line::Text(line.to_string())
    }

    fn letter(&self) -> Option<char> {
        match self {
            Line::OptionWithContent { letter, .. } | Line::MarkerOnly(letter) => Some(*letter),
            Line::Text(_) => None,
        }
    }
}

#[derive(Default)]
struct OptionParser {
    question_lines: Vec<String>,
    options: Vec<AnswerOption>,
}

impl OptionParser {
    /// Classify a line. Markers for a letter already in use, and bare
    /// markers before any option has been seen, are plain text.
    fn read_line(&self, raw: &str, state: &State) -> Line {
        let line = Line::read(raw);
        let demote = match (&line, state) {
            (Line::MarkerOnly(_), State::ScanningQuestion) => true,
            _ => line.letter().is_some_and(|l| self.is_used(l, state)),
        };
        if demote {
            Line::Text(raw.to_string())
        } else {
            line
        }
    }

    fn is_used(&self, letter: char, state: &State) -> bool {
        let open = match state {
            State::ScanningQuestion => None,
            State::AwaitingOptionContent { letter: open }
            | State::AccumulatingOption { letter: open, .. } => Some(*open),
        };
        open == Some(letter) || self.options.iter().any(|o| o.letter == letter)
    }

    fn parse_line(&mut self, state: State, line: Line) -> State {
        match line {
            Line::OptionWithContent { letter, content } => {
                self.seal(state);
                State::AccumulatingOption { letter, content }
            }
            Line::MarkerOnly(letter) => {
                self.seal(state);
                State::AwaitingOptionContent { letter }
            }
            Line::Text(text) => match state {
                State::ScanningQuestion => {
                    self.question_lines.push(text);
                    State::ScanningQuestion
                }
                State::AwaitingOptionContent { letter } => State::AccumulatingOption {
                    letter,
                    content: text,
                },
                State::AccumulatingOption { letter, content } => State::AccumulatingOption {
                    letter,
                    content: format!("{content} {text}"),
                },
            },
        }
    }

    /// Store the option being read, if it has any text.
    fn seal(&mut self, state: State) {
        if let State::AccumulatingOption { letter, content } = state {
            if !content.is_empty() {
                self.options.push(AnswerOption::new(letter, content));
            }
        }
    }

    fn finalize(&mut self, state: State) {
        self.seal(state);
    }
}

/// Options written on one line: `Which? A. one B. two C. three`. Markers
/// must run `A`, `B`, `C`, ... in order; out-of-sequence matches are left in
/// the option text.
fn parse_inline(text: &str) -> Option<ParsedQuestion> {
    // (marker start, content start, letter)
    let mut markers: Vec<(usize, usize, char)> = Vec::new();
    for caps in INLINE_MARKER.captures_iter(text) {
        let (Some(whole), Some(letter)) = (caps.get(0), caps[1].chars().next()) else {
            continue;
        };
        if Some(letter) == letter_at(markers.len()) {
            markers.push((whole.start(), whole.end(), letter));
        }
    }
    if markers.len() < 2 {
        return None;
    }
    let mut options = Vec::with_capacity(markers.len());
    for (i, (_, content_start, letter)) in markers.iter().enumerate() {
        let content_end = markers.get(i + 1).map_or(text.len(), |next| next.0);
        let content = text[*content_start..content_end].trim();
        if content.is_empty() {
            return None;
        }
        options.push(AnswerOption::new(*letter, content));
    }
    Some(ParsedQuestion::new(text[..markers[0].0].trim(), options))
}

/// Options written as short unmarked lines after the question.
fn parse_unmarked(lines: &[String]) -> Option<ParsedQuestion> {
    if lines.len() < 2 {
        return None;
    }
    let terminator = lines
        .iter()
        .position(|l| l.ends_with('?') || l.ends_with(':'))
        .unwrap_or(0);
    let mut question: Vec<&str> = lines[..=terminator].iter().map(String::as_str).collect();
    let mut found: Vec<&str> = Vec::new();
    for line in &lines[terminator + 1..] {
        if SEPARATOR.is_match(line) {
            continue;
        }
        if is_unmarked_option(line) {
            found.push(line);
        } else if found.is_empty() {
            question.push(line);
        } else {
            break;
        }
    }
    if !(MIN_UNMARKED_OPTIONS..=MAX_UNMARKED_OPTIONS).contains(&found.len()) {
        return None;
    }
    let options = found
        .into_iter()
        .enumerate()
        .map(|(i, content)| letter_at(i).map(|letter| AnswerOption::new(letter, content)))
        .collect::<Option<Vec<_>>>()?;
    Some(ParsedQuestion::new(question.join("\n"), options))
}

/// A bare number, or short text that reads like a choice rather than a
/// sentence or a line of code.
fn is_unmarked_option(line: &str) -> bool {
    if BARE_NUMBER.is_match(line) {
        return true;
    }
    line.chars().count() < MAX_UNMARKED_OPTION_LEN
        && !line.ends_with(['.', '!', '?'])
        && !line.contains(['{', '}', ';', '=', '<', '>'])
}

/// `A` for 0, `B` for 1, and so on through `Z`.
fn letter_at(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
}
