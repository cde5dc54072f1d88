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

/// A piece of a fragment produced by [`EscapeScanner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text between escape sequences. Never empty.
    Text(&'a str),

    /// A complete escape sequence: `<escape> [ <parameters> <terminator>`.
    Escape {
        /// Everything between `[` and the terminator
        parameters: &'a str,
        /// The final character, in the range `@` (0x40) to `~` (0x7E)
        terminator: char,
    },
}

/// A left to right scanner splitting captured output into literal text and escape
/// sequences.
///
/// A sequence starts with the escape marker followed by `[`. Upstream pipelines often
/// cannot carry a raw ESC byte, so the marker is configurable and may be any non-empty
/// string. The sequence ends at the first character in the range `@`-`~`.
///
/// A marker that is not followed by a complete sequence on the same line is not an
/// escape at all; it stays part of the literal text. This covers truncated sequences at
/// the end of a fragment.
///
/// Every call to `next` consumes at least one byte of input, so a scan always terminates.
#[derive(Clone, Debug)]
pub struct EscapeScanner<'a> {
    /// The full text being scanned.
    text: &'a str,
    /// The escape marker; an empty marker never matches.
    escape: &'a str,
    /// Start of the literal text not yet returned.
    position: usize,
    /// A sequence found directly after the pending literal text, with its end offset.
    pending: Option<(Token<'a>, usize)>,
}

impl<'a> EscapeScanner<'a> {
    /// Creates a scanner over `text` using `escape` as the ESC marker.
    pub fn new(text: &'a str, escape: &'a str) -> Self {
        Self {
            text,
            escape,
            position: 0,
            pending: None,
        }
    }

    /// Returns `true` if `text` holds `escape` followed by `[`, whether or not a
    /// terminator follows.
    pub fn contains_introducer(text: &str, escape: &str) -> bool {
        !escape.is_empty()
            && text
                .match_indices(escape)
                .any(|(start, _)| text[start + escape.len()..].starts_with('['))
    }

    /// Finds the next complete sequence starting at or after `from`.
    ///
    /// Returns the offset of the marker, the token and the offset just past the
    /// terminator.
    fn find_sequence(&self, mut from: usize) -> Option<(usize, Token<'a>, usize)> {
        if self.escape.is_empty() {
            return None;
        }
        while let Some(found) = self.text[from..].find(self.escape) {
            let start = from + found;
            let after_marker = start + self.escape.len();
            if let Some((token, end)) = self.parse_sequence(after_marker) {
                return Some((start, token, end));
            }
            from = after_marker;
        }
        None
    }

    /// Parses `[ <parameters> <terminator>` at `offset`.
    fn parse_sequence(&self, offset: usize) -> Option<(Token<'a>, usize)> {
        let rest = self.text[offset..].strip_prefix('[')?;
        let parameters_start = offset + 1;
        for (index, ch) in rest.char_indices() {
            match ch {
                '@'..='~' => {
                    let parameters = &rest[..index];
                    let end = parameters_start + index + ch.len_utf8();
                    return Some((
                        Token::Escape {
                            parameters,
                            terminator: ch,
                        },
                        end,
                    ));
                }
                '\n' => return None,
                _ => {}
            }
        }
        None
    }
}

impl<'a> Iterator for EscapeScanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((token, end)) = self.pending.take() {
            self.position = end;
            return Some(token);
        }
        if self.position >= self.text.len() {
            return None;
        }
        match self.find_sequence(self.position) {
            Some((start, token, end)) if start > self.position => {
                let literal = &self.text[self.position..start];
                self.position = start;
                self.pending = Some((token, end));
                Some(Token::Text(literal))
            }
            Some((_, token, end)) => {
                self.position = end;
                Some(token)
            }
            None => {
                let literal = &self.text[self.position..];
                self.position = self.text.len();
                Some(Token::Text(literal))
            }
        }
    }
}
