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

use crate::parser::{EscapeScanner, Token};
use crate::{Dialect, MarkupConfig, MarkupDiagnostic, StyleState};
use tracing::trace;

/// A run of literal text and the style active while it was scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkupSpan<'a> {
    /// Literal text with every escape sequence removed
    pub text: &'a str,
    /// Style in effect for the whole run
    pub style: StyleState,
}

/// The outcome of converting one fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    /// The converted markup
    pub markup: String,
    /// Problems found while scanning, in the order they were found
    pub diagnostics: Vec<MarkupDiagnostic>,
    /// Whether the text held an escape introducer, complete sequence or not
    pub had_escapes: bool,
}

/// Converts captured program output holding ANSI SGR sequences into styled markup.
///
/// Each conversion scans its text left to right with a fresh [`StyleState`]. Literal
/// runs are wrapped in the dialect tags for the state in effect before the next
/// sequence; SGR sequences (terminator `m`) update the state; any other sequence is
/// reported and dropped. Nothing is shared between conversions, so a converter can be
/// used from several threads at once.
///
/// # Examples
///
/// ```
/// use bookfilter_ansimarkup::{AnsiMarkupConverter, Dialect};
///
/// let converter = AnsiMarkupConverter::default();
/// let conversion = converter.convert("\x1b[31mred\x1b[0m plain", Dialect::Html);
/// assert_eq!(conversion.markup, "<span class=\"ansi-red-fg\">red</span> plain");
/// assert!(conversion.diagnostics.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnsiMarkupConverter {
    config: MarkupConfig,
}

impl AnsiMarkupConverter {
    /// Creates a converter using `config`.
    pub fn new(config: MarkupConfig) -> Self {
        Self { config }
    }

    /// The configuration this converter was created with.
    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    /// Splits `text` into styled spans without rendering them.
    ///
    /// Every literal run of the input appears exactly once, in order, including runs
    /// whose style is plain.
    pub fn spans<'a>(&'a self, text: &'a str) -> (Vec<MarkupSpan<'a>>, Vec<MarkupDiagnostic>) {
        let mut spans = Vec::new();
        let mut diagnostics = Vec::new();
        let mut style = StyleState::default();

        for token in EscapeScanner::new(text, &self.config.escape) {
            match token {
                Token::Text(text) => spans.push(MarkupSpan { text, style }),
                Token::Escape {
                    parameters,
                    terminator: 'm',
                } => {
                    style.apply_sgr(parameters, &mut diagnostics);
                    trace!(parameters, ?style, "Applied SGR sequence");
                }
                Token::Escape {
                    parameters,
                    terminator,
                } => MarkupDiagnostic::UnsupportedTerminator {
                    terminator,
                    parameters: parameters.to_string(),
                }
                .emit(&mut diagnostics),
            }
        }

        (spans, diagnostics)
    }

    /// Converts `text` into `dialect` markup.
    pub fn convert(&self, text: &str, dialect: Dialect) -> Conversion {
        let (spans, diagnostics) = self.spans(text);
        let mut markup = String::with_capacity(text.len());
        for span in &spans {
            self.write_span(&mut markup, span, dialect);
        }
        Conversion {
            markup,
            diagnostics,
            had_escapes: EscapeScanner::contains_introducer(text, &self.config.escape),
        }
    }

    /// Renders one span onto `markup`.
    fn write_span(&self, markup: &mut String, span: &MarkupSpan<'_>, dialect: Dialect) {
        let style = span.style.rendered(self.config.bold_brightens);
        let (start, end) = dialect.tags(&style);
        markup.push_str(&start);
        if self.config.escape_text {
            markup.push_str(&dialect.escape(span.text));
        } else {
            markup.push_str(span.text);
        }
        markup.push_str(&end);
    }
}
