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

//! Target markup dialects.
//!
//! A dialect turns a [`StyleState`] into a pair of start and end tags. Both dialects
//! nest attributes the same way, from the outside in:
//!
//! ```text
//! foreground( background( bold( underline( text ))))
//! ```
//!
//! A plain style produces empty tags, so unstyled text is emitted untouched.

use crate::consts::{ANSI_COLORS, DEFAULT_INVERSE_BG, DEFAULT_INVERSE_FG};
use crate::{Color, MarkupError, MarkupResult, StyleState};
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::str::FromStr;

/// A target markup language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// HTML with `ansi-*` CSS classes and inline `rgb()` styles.
    Html,
    /// LaTeX with `xcolor` commands.
    Latex,
}

impl Dialect {
    /// Resolves the dialect for a document output format.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::DialectUnavailable`] when the format renders through
    /// neither HTML nor LaTeX.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfilter_ansimarkup::Dialect;
    ///
    /// assert_eq!(Dialect::for_format("html5").unwrap(), Dialect::Html);
    /// assert_eq!(Dialect::for_format("PDF").unwrap(), Dialect::Latex);
    /// assert!(Dialect::for_format("docx").is_err());
    /// ```
    pub fn for_format(format: &str) -> MarkupResult<Dialect> {
        match format.to_ascii_lowercase().as_str() {
            "html" | "html4" | "html5" | "revealjs" | "epub" | "epub3" => Ok(Dialect::Html),
            "latex" | "pdf" | "beamer" => Ok(Dialect::Latex),
            _ => Err(MarkupError::DialectUnavailable(format.to_string())),
        }
    }

    /// Start and end tags representing `style`.
    ///
    /// `style` is rendered as given; bold promotion is applied by the caller.
    pub fn tags(&self, style: &StyleState) -> (String, String) {
        let start = StartTag {
            dialect: *self,
            style,
        };
        let end = EndTag {
            dialect: *self,
            style,
        };
        (start.to_string(), end.to_string())
    }

    /// Escapes literal text so the dialect reads it verbatim.
    pub fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let special: &[char] = match self {
            Dialect::Html => &['&', '<', '>', '"'],
            Dialect::Latex => &['\\', '{', '}'],
        };
        if !text.contains(special) {
            return Cow::Borrowed(text);
        }
        let mut escaped = String::with_capacity(text.len() + 16);
        for ch in text.chars() {
            match (self, ch) {
                (Dialect::Html, '&') => escaped.push_str("&amp;"),
                (Dialect::Html, '<') => escaped.push_str("&lt;"),
                (Dialect::Html, '>') => escaped.push_str("&gt;"),
                (Dialect::Html, '"') => escaped.push_str("&quot;"),
                (Dialect::Latex, '\\') => escaped.push_str("\\textbackslash{}"),
                (Dialect::Latex, '{') => escaped.push_str("\\{"),
                (Dialect::Latex, '}') => escaped.push_str("\\}"),
                _ => escaped.push(ch),
            }
        }
        Cow::Owned(escaped)
    }
}

impl FromStr for Dialect {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::for_format(s)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Html => f.write_str("html"),
            Dialect::Latex => f.write_str("latex"),
        }
    }
}

fn color_name(index: u8) -> &'static str {
    ANSI_COLORS[usize::from(index) % ANSI_COLORS.len()]
}

struct StartTag<'a> {
    dialect: Dialect,
    style: &'a StyleState,
}

impl fmt::Display for StartTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_plain() {
            return Ok(());
        }
        match self.dialect {
            Dialect::Html => write_html_start(f, self.style),
            Dialect::Latex => write_latex_start(f, self.style),
        }
    }
}

struct EndTag<'a> {
    dialect: Dialect,
    style: &'a StyleState,
}

impl fmt::Display for EndTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_plain() {
            return Ok(());
        }
        match self.dialect {
            Dialect::Html => f.write_str("</span>"),
            Dialect::Latex => write_latex_end(f, self.style),
        }
    }
}

fn write_html_start<W: Write>(writer: &mut W, style: &StyleState) -> fmt::Result {
    let (foreground, background) = style.effective_colors();
    let mut classes = Vec::new();
    let mut styles = Vec::new();

    match foreground {
        Some(Color::Named(index)) => classes.push(format!("{}-fg", color_name(index))),
        Some(Color::Rgb(r, g, b)) => styles.push(format!("color: rgb({r},{g},{b})")),
        None if style.inverse => classes.push(DEFAULT_INVERSE_FG.to_string()),
        None => {}
    }
    match background {
        Some(Color::Named(index)) => classes.push(format!("{}-bg", color_name(index))),
        Some(Color::Rgb(r, g, b)) => styles.push(format!("background-color: rgb({r},{g},{b})")),
        None if style.inverse => classes.push(DEFAULT_INVERSE_BG.to_string()),
        None => {}
    }
    if style.bold {
        classes.push("ansi-bold".to_string());
    }
    if style.underline {
        classes.push("ansi-underline".to_string());
    }

    writer.write_str("<span")?;
    if !classes.is_empty() {
        write!(writer, " class=\"{}\"", classes.join(" "))?;
    }
    if !styles.is_empty() {
        write!(writer, " style=\"{}\"", styles.join("; "))?;
    }
    writer.write_char('>')
}

/// Whether a LaTeX rendering of `style` opens a background box.
fn has_latex_box(style: &StyleState) -> bool {
    style.inverse || style.effective_colors().1.is_some()
}

fn write_latex_start<W: Write>(writer: &mut W, style: &StyleState) -> fmt::Result {
    let (foreground, background) = style.effective_colors();
    match foreground {
        Some(Color::Named(index)) => write!(writer, "\\textcolor{{{}}}{{", color_name(index))?,
        Some(Color::Rgb(r, g, b)) => write!(writer, "\\textcolor[RGB]{{{r},{g},{b}}}{{")?,
        None if style.inverse => write!(writer, "\\textcolor{{{DEFAULT_INVERSE_FG}}}{{")?,
        None => {}
    }
    if has_latex_box(style) {
        writer.write_str("\\setlength{\\fboxsep}{0pt}")?;
        match background {
            Some(Color::Named(index)) => write!(writer, "\\colorbox{{{}}}{{", color_name(index))?,
            Some(Color::Rgb(r, g, b)) => write!(writer, "\\colorbox[RGB]{{{r},{g},{b}}}{{")?,
            None => write!(writer, "\\colorbox{{{DEFAULT_INVERSE_BG}}}{{")?,
        }
    }
    if style.bold {
        writer.write_str("\\textbf{")?;
    }
    if style.underline {
        writer.write_str("\\underline{")?;
    }
    Ok(())
}

fn write_latex_end<W: Write>(writer: &mut W, style: &StyleState) -> fmt::Result {
    if style.underline {
        writer.write_char('}')?;
    }
    if style.bold {
        writer.write_char('}')?;
    }
    if has_latex_box(style) {
        writer.write_str("\\strut}")?;
    }
    if style.inverse || style.effective_colors().0.is_some() {
        writer.write_char('}')?;
    }
    Ok(())
}
