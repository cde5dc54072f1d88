//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Captured output fragments and their document level rendering.
//!
//! A code cell produces a sequence of [`OutputBlock`]s. Rendering runs the
//! [`BlockMerger`] once, then converts every captured output fragment and wraps it in
//! the block selected by its kind. Echoed source is never converted.

use crate::{AnsiMarkupConverter, BlockMerger, Conversion, Dialect};
use tracing::{debug, instrument, trace};

/// Where a fragment of captured output came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Standard output of the program
    Stdout,
    /// Standard error of the program
    Stderr,
    /// The program source, echoed into the document
    Echo,
}

/// One contiguous block of captured text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFragment {
    /// Origin of the text
    pub kind: FragmentKind,
    /// The text, possibly holding escape sequences
    pub text: String,
}

impl OutputFragment {
    /// Creates a fragment of `kind`.
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates a standard output fragment.
    pub fn stdout(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Stdout, text)
    }

    /// Creates a standard error fragment.
    pub fn stderr(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Stderr, text)
    }

    /// Creates an echoed source fragment.
    pub fn echo(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Echo, text)
    }

    /// Returns `true` for standard error output.
    pub fn is_stderr(&self) -> bool {
        self.kind == FragmentKind::Stderr
    }
}

/// An entry of a code cell's output sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputBlock {
    /// A single chunk of text
    Fragment(OutputFragment),
    /// Several chunks already grouped together, such as a rich display result
    Composite(Vec<OutputFragment>),
}

impl From<OutputFragment> for OutputBlock {
    fn from(fragment: OutputFragment) -> Self {
        OutputBlock::Fragment(fragment)
    }
}

impl AnsiMarkupConverter {
    /// Renders one fragment as a complete document block.
    ///
    /// - Without a dialect the text is returned unmodified, escape sequences included.
    /// - Echoed source is returned unmodified.
    /// - Captured output is converted and wrapped in the LaTeX environment or HTML block
    ///   for its kind: stderr first, then ANSI styled when the text held any escape
    ///   introducer (even a truncated one), otherwise plain.
    #[instrument(skip_all, fields(kind = ?fragment.kind, dialect = ?dialect))]
    pub fn render_fragment(
        &self,
        fragment: &OutputFragment,
        dialect: Option<Dialect>,
    ) -> Conversion {
        let Some(dialect) = dialect else {
            trace!("No dialect, passing fragment through");
            return passthrough(fragment);
        };
        if fragment.kind == FragmentKind::Echo {
            trace!("Echoed source, passing fragment through");
            return passthrough(fragment);
        }

        let mut conversion = self.convert(&fragment.text, dialect);
        conversion.markup = match dialect {
            Dialect::Latex => self.wrap_latex(fragment, &conversion),
            Dialect::Html => self.wrap_html(fragment, &conversion),
        };
        debug!(
            diagnostics = conversion.diagnostics.len(),
            had_escapes = conversion.had_escapes,
            "Rendered output fragment"
        );
        conversion
    }

    /// Merges `blocks` and renders each resulting block.
    ///
    /// Composite blocks render their fragments one by one, joined with line breaks.
    pub fn render_blocks(
        &self,
        blocks: Vec<OutputBlock>,
        dialect: Option<Dialect>,
    ) -> Vec<Conversion> {
        BlockMerger::merge(blocks)
            .iter()
            .map(|block| match block {
                OutputBlock::Fragment(fragment) => self.render_fragment(fragment, dialect),
                OutputBlock::Composite(fragments) => {
                    let mut combined = Conversion::default();
                    for (index, fragment) in fragments.iter().enumerate() {
                        let conversion = self.render_fragment(fragment, dialect);
                        if index > 0 {
                            combined.markup.push('\n');
                        }
                        combined.markup.push_str(&conversion.markup);
                        combined.diagnostics.extend(conversion.diagnostics);
                        combined.had_escapes |= conversion.had_escapes;
                    }
                    combined
                }
            })
            .collect()
    }

    fn wrap_latex(&self, fragment: &OutputFragment, conversion: &Conversion) -> String {
        let environments = &self.config().latex;
        let environment = if fragment.is_stderr() {
            &environments.stderr
        } else if conversion.had_escapes {
            &environments.ansi
        } else {
            &environments.plain
        };
        let separator = if conversion.markup.ends_with('\n') { "" } else { "\n" };
        format!(
            "\\begin{{{environment}}}\n{}{separator}\\end{{{environment}}}",
            conversion.markup
        )
    }

    fn wrap_html(&self, fragment: &OutputFragment, conversion: &Conversion) -> String {
        let classes = &self.config().html;
        let class = if fragment.is_stderr() {
            &classes.stderr
        } else if conversion.had_escapes {
            &classes.ansi
        } else {
            &classes.plain
        };
        if class.is_empty() {
            format!("<pre><code>{}</code></pre>", conversion.markup)
        } else {
            format!("<pre class=\"{class}\"><code>{}</code></pre>", conversion.markup)
        }
    }
}

fn passthrough(fragment: &OutputFragment) -> Conversion {
    Conversion {
        markup: fragment.text.clone(),
        diagnostics: Vec::new(),
        had_escapes: false,
    }
}
