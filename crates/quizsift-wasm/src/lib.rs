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

//! WASM bindings for quizsift - resolves flashcard answers inside the page
//! the cards were read from.

use wasm_bindgen::prelude::*;
use web_sys::console;

use quizsift_core::assembler::Extraction;
use quizsift_core::assembler::run;
use quizsift_core::error::Fallible;
use quizsift_core::sink::JsonSink;
use quizsift_core::sink::OutputShape;
use quizsift_core::types::raw_pair::RawPair;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

/// Resolve scraped flashcards into JSON.
/// Takes an array of `[side1, side2]` pairs; either side may be null.
/// With `bare`, returns only the array of records.
#[wasm_bindgen]
pub fn extract_json(pairs_json: &str, title: &str, bare: bool) -> Result<String, JsValue> {
    let pairs: Vec<(Option<String>, Option<String>)> = serde_json::from_str(pairs_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse pairs JSON: {}", e)))?;
    let pairs: Vec<RawPair> = pairs.into_iter().map(RawPair::from).collect();

    let shape = if bare {
        OutputShape::Bare
    } else {
        OutputShape::Wrapped
    };
    let (json, extraction) = render(title, &pairs, shape)
        .map_err(|e| JsValue::from_str(&format!("Failed to extract cards: {}", e)))?;

    for diagnostic in &extraction.diagnostics {
        console::warn_1(&diagnostic.to_string().into());
    }
    Ok(json)
}

fn render(title: &str, pairs: &[RawPair], shape: OutputShape) -> Fallible<(String, Extraction)> {
    let mut sink = JsonSink::new(Vec::new(), shape);
    let extraction = run(title, pairs, &mut sink)?;
    let json = String::from_utf8(sink.into_inner())?;
    Ok((json, extraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bare() -> Fallible<()> {
        let pairs = vec![RawPair::new("Which?\nA. one\nB. two", "B"), RawPair::new("Q", "Z")];
        let (json, extraction) = render("Deck", &pairs, OutputShape::Bare)?;
        assert_eq!(
            json,
            "[\n  {\n    \"term\": \"Which?\",\n    \"definition\": \"two\"\n  },\n  {\n    \"term\": \"Q\",\n    \"definition\": \"ERROR: No options found for answer \\\"Z\\\"\"\n  }\n]\n"
        );
        assert_eq!(extraction.diagnostics.len(), 1);
        Ok(())
    }
}
