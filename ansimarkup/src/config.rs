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

//! Converter configuration
//!
//! # Examples
//!
//! ```
//! use bookfilter_ansimarkup::MarkupConfig;
//!
//! let config = MarkupConfig::default()
//!     .with_escape("\u{a2}\u{a3}")
//!     .with_bold_brightens(false)
//!     .with_escape_text(true);
//! assert!(config.validate().is_ok());
//! ```

use crate::{MarkupError, MarkupResult};

/// Settings shared by every conversion made with one [`AnsiMarkupConverter`].
///
/// [`AnsiMarkupConverter`]: crate::AnsiMarkupConverter
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarkupConfig {
    /// Marker standing in for the ESC character in captured output
    pub escape: String,
    /// Render bold normal named colors with their intense variant
    pub bold_brightens: bool,
    /// Escape literal text for the target dialect
    pub escape_text: bool,
    /// Environments wrapping converted LaTeX fragments
    pub latex: LatexEnvironments,
    /// Classes of the block wrapping converted HTML fragments
    pub html: HtmlClasses,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            escape: "\u{1b}".to_string(),
            bold_brightens: true,
            escape_text: false,
            latex: LatexEnvironments::default(),
            html: HtmlClasses::default(),
        }
    }
}

impl MarkupConfig {
    /// Set the escape marker
    pub fn with_escape(mut self, escape: impl Into<String>) -> Self {
        self.escape = escape.into();
        self
    }

    /// Enable or disable bold color promotion
    pub fn with_bold_brightens(mut self, enabled: bool) -> Self {
        self.bold_brightens = enabled;
        self
    }

    /// Enable or disable escaping of literal text
    pub fn with_escape_text(mut self, enabled: bool) -> Self {
        self.escape_text = enabled;
        self
    }

    /// Set the LaTeX fragment environments
    pub fn with_latex_environments(mut self, latex: LatexEnvironments) -> Self {
        self.latex = latex;
        self
    }

    /// Set the HTML fragment classes
    pub fn with_html_classes(mut self, html: HtmlClasses) -> Self {
        self.html = html;
        self
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidConfig`] for an empty escape marker or an empty
    /// LaTeX environment name.
    pub fn validate(&self) -> MarkupResult<()> {
        if self.escape.is_empty() {
            return Err(MarkupError::InvalidConfig {
                name: "escape",
                reason: "must not be empty".to_string(),
            });
        }
        let environments = [
            ("latex.plain", &self.latex.plain),
            ("latex.ansi", &self.latex.ansi),
            ("latex.stderr", &self.latex.stderr),
        ];
        for (name, environment) in environments {
            if environment.is_empty() {
                return Err(MarkupError::InvalidConfig {
                    name,
                    reason: "environment name must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// LaTeX environments selected by fragment kind.
///
/// Stderr output always uses `stderr`. Otherwise `ansi` is used whenever the original
/// text held an escape sequence and `plain` when it did not.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LatexEnvironments {
    /// Output without escape sequences
    pub plain: String,
    /// Output that held escape sequences
    pub ansi: String,
    /// Standard error output
    pub stderr: String,
}

impl Default for LatexEnvironments {
    fn default() -> Self {
        Self {
            plain: "verbatim".to_string(),
            ansi: "ansiverbatim".to_string(),
            stderr: "stderrverbatim".to_string(),
        }
    }
}

/// Classes of the `<pre><code>` block wrapping a converted HTML fragment.
///
/// Selected the same way as [`LatexEnvironments`]. An empty class omits the attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HtmlClasses {
    /// Output without escape sequences
    pub plain: String,
    /// Output that held escape sequences
    pub ansi: String,
    /// Standard error output
    pub stderr: String,
}

impl Default for HtmlClasses {
    fn default() -> Self {
        Self {
            plain: "output".to_string(),
            ansi: "ansi-escaped-output".to_string(),
            stderr: "output-stderr".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MarkupConfig::default();
        assert_eq!(config.escape, "\x1b");
        assert!(config.bold_brightens);
        assert!(!config.escape_text);
        assert_eq!(config.latex.ansi, "ansiverbatim");
        assert_eq!(config.html.ansi, "ansi-escaped-output");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MarkupConfig::default()
            .with_escape("¢£")
            .with_bold_brightens(false)
            .with_escape_text(true);
        assert_eq!(config.escape, "¢£");
        assert!(!config.bold_brightens);
        assert!(config.escape_text);
    }

    #[test]
    fn test_validate_rejects_empty_escape() {
        let config = MarkupConfig::default().with_escape("");
        assert_eq!(
            config.validate(),
            Err(MarkupError::InvalidConfig {
                name: "escape",
                reason: "must not be empty".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_environment() {
        let config = MarkupConfig::default().with_latex_environments(LatexEnvironments {
            stderr: String::new(),
            ..Default::default()
        });
        assert!(matches!(
            config.validate(),
            Err(MarkupError::InvalidConfig {
                name: "latex.stderr",
                ..
            })
        ));
    }
}
