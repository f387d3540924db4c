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

use std::io::Write;

use crate::error::Fallible;
use crate::types::record::ResultSet;

/// Where a finished result set goes. Called once per run.
pub trait Sink {
    fn emit(&mut self, result: &ResultSet) -> Fallible<()>;
}

/// Shape of the JSON document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputShape {
    /// `{"Source": ..., "Data": [...]}`
    #[default]
    Wrapped,
    /// Just the array of records.
    Bare,
}

/// Writes pretty-printed JSON to any writer.
pub struct JsonSink<W: Write> {
    writer: W,
    shape: OutputShape,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W, shape: OutputShape) -> Self {
        Self { writer, shape }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for JsonSink<W> {
    fn emit(&mut self, result: &ResultSet) -> Fallible<()> {
        match self.shape {
            OutputShape::Wrapped => serde_json::to_writer_pretty(&mut self.writer, result)?,
            OutputShape::Bare => serde_json::to_writer_pretty(&mut self.writer, &result.data)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
