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
use std::borrow::Cow;

/// Removes escape sequences from captured output.
///
/// Used for output formats that have no markup dialect but still should not show raw
/// control codes. Every complete sequence (`<escape> [ <parameters> <terminator>`) is
/// dropped, whatever its terminator; truncated sequences are kept as literal text, the
/// same way the converter treats them.
///
/// # Performance
///
/// If the escape marker does not occur in `text`, a borrowed reference to the original
/// string is returned (zero-copy). Otherwise a new `String` is allocated.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use bookfilter_ansimarkup::strip_ansi_codes;
///
/// let colored = "\x1b[1;31mRed Text\x1b[0m";
/// assert_eq!(strip_ansi_codes(colored, "\x1b"), "Red Text");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_ansi_codes(plain, "\x1b"), Cow::Borrowed(_)));
///
/// let marked = "\u{a2}\u{a3}[4mUnderlined\u{a2}\u{a3}[24m";
/// assert_eq!(strip_ansi_codes(marked, "\u{a2}\u{a3}"), "Underlined");
/// ```
pub fn strip_ansi_codes<'a>(text: &'a str, escape: &str) -> Cow<'a, str> {
    if escape.is_empty() || !text.contains(escape) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    for token in EscapeScanner::new(text, escape) {
        if let Token::Text(literal) = token {
            result.push_str(literal);
        }
    }
    Cow::Owned(result)
}
