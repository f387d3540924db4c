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

//! quizsift-core: Core library for quizsift.
//!
//! Takes the raw text pairs scraped from a flashcard page and resolves them
//! into `{term, definition}` records:
//! - Classifying which side holds a letter-coded or True/False answer
//! - Parsing lettered options out of question text
//! - Mapping answer letters back to option text
//! - Merging results into saved collections

pub mod assembler;
pub mod error;
pub mod mapper;
pub mod merge;
pub mod normalize;
pub mod options;
pub mod signature;
pub mod sink;
pub mod types;

// Re-exports for convenience
pub use assembler::{Diagnostic, Extraction, Resolution, ResolutionKind, extract, resolve_pair, run};
pub use error::{ErrorReport, Fallible, fail};
pub use merge::{Collection, MergeReport, merge_records};
pub use options::parse_question;
pub use sink::{JsonSink, OutputShape, Sink};
pub use types::question::{AnswerOption, ParsedQuestion};
pub use types::raw_pair::{RawDeck, RawPair};
pub use types::record::{Record, ResultSet};
