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

use clap::Parser;

use quizsift_core::error::Fallible;
use quizsift_core::sink::OutputShape;

use crate::cmd::extract::ExtractConfig;
use crate::cmd::extract::extract_deck;
use crate::cmd::merge::MergeConfig;
use crate::cmd::merge::merge_import;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Resolve a file of scraped flashcard pairs into question/answer records.
    Extract {
        /// Path to the JSON file with the page title and raw pairs.
        input: String,
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<String>,
        /// Source title to record. By default, the title in the input file is used.
        #[arg(long)]
        title: Option<String>,
        /// Emit only the array of records, without the `Source` wrapper.
        #[arg(long)]
        bare: bool,
    },
    /// Merge an extracted result set into the collection file named after its source.
    Merge {
        /// Path to the extracted result set.
        import: String,
        /// Directory holding the collection files. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Extract {
            input,
            output,
            title,
            bare,
        } => {
            let config = ExtractConfig {
                input: input.into(),
                output: output.map(Into::into),
                title,
                shape: if bare {
                    OutputShape::Bare
                } else {
                    OutputShape::Wrapped
                },
            };
            extract_deck(config)
        }
        Command::Merge { import, directory } => {
            let config = MergeConfig {
                import: import.into(),
                directory: directory.map(Into::into),
            };
            merge_import(config)
        }
    }
}
