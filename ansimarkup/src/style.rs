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

use crate::MarkupDiagnostic;
use crate::consts::{
    ANSI_COLORS, CUBE_BASE, CUBE_STEP, GRAYSCALE_BASE, GRAYSCALE_START, GRAYSCALE_STEP,
    NAMED_COLOR_COUNT, SELECTOR_PALETTE, SELECTOR_RGB,
};
use std::collections::VecDeque;

/// A color as it is rendered into markup.
///
/// The 256 color palette is resolved when it is parsed: indices 0-15 become
/// [`Named`](Color::Named) and everything above becomes [`Rgb`](Color::Rgb), so a
/// renderer only ever deals with the 16 named colors or an explicit triple.
///
/// An unset color is represented as `None` wherever a `Color` is optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 named terminal colors.
    ///
    /// | Index  | SGR (FG / BG)           |
    /// |--------|-------------------------|
    /// | `0-7`  | `30-37` / `40-47`       |
    /// | `8-15` | `90-97` / `100-107`     |
    Named(u8),

    /// A 24-bit RGB color, from `38;2;r;g;b` or a resolved palette index.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Resolves an entry of the 256 color palette.
    ///
    /// - `0-15` map to [`Color::Named`]
    /// - `16-231` map onto the 6x6x6 color cube, each component scaled as `55 + level * 40`
    /// - `232-255` map onto the grayscale ramp, `(index - 232) * 10 + 8`
    ///
    /// Returns `None` for indices past the end of the palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfilter_ansimarkup::Color;
    ///
    /// assert_eq!(Color::from_palette(15), Some(Color::Named(15)));
    /// assert_eq!(Color::from_palette(16), Some(Color::Rgb(55, 55, 55)));
    /// assert_eq!(Color::from_palette(232), Some(Color::Rgb(8, 8, 8)));
    /// assert_eq!(Color::from_palette(256), None);
    /// ```
    pub fn from_palette(index: u32) -> Option<Color> {
        let index = u8::try_from(index).ok()?;
        if index < NAMED_COLOR_COUNT {
            return Some(Color::Named(index));
        }
        if index < GRAYSCALE_START {
            let cube = index - NAMED_COLOR_COUNT;
            let scale = |level: u8| CUBE_BASE + level * CUBE_STEP;
            return Some(Color::Rgb(
                scale(cube / 36),
                scale((cube % 36) / 6),
                scale(cube % 6),
            ));
        }
        let level = (index - GRAYSCALE_START) * GRAYSCALE_STEP + GRAYSCALE_BASE;
        Some(Color::Rgb(level, level, level))
    }

    /// The identifier of a named color, `None` for RGB colors.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Color::Named(index) => ANSI_COLORS.get(usize::from(*index)).copied(),
            Color::Rgb(..) => None,
        }
    }

    /// The intense variant of a normal named color; every other color is returned as is.
    pub fn brightened(self) -> Color {
        match self {
            Color::Named(index) if index < 8 => Color::Named(index + 8),
            other => other,
        }
    }
}

/// The running attribute set of a fragment scan.
///
/// | Attribute    | Set by              | Cleared by    |
/// |--------------|---------------------|---------------|
/// | `foreground` | `30-38`, `90-97`    | `39`, `0`     |
/// | `background` | `40-48`, `100-107`  | `49`, `0`     |
/// | `bold`       | `1`, `5`            | `21`, `22`, `0` |
/// | `underline`  | `4`                 | `24`, `0`     |
/// | `inverse`    | `7`                 | `27`, `0`     |
///
/// Inverse video never touches the stored colors; dialects swap them when rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// Foreground color, `None` when unset
    pub foreground: Option<Color>,
    /// Background color, `None` when unset
    pub background: Option<Color>,
    /// Bold text; blink (`5`) is folded into this
    pub bold: bool,
    /// Underlined text
    pub underline: bool,
    /// Inverse video
    pub inverse: bool,
}

impl StyleState {
    /// Returns `true` when no attribute is active, so no markup needs to be emitted.
    pub fn is_plain(&self) -> bool {
        *self == StyleState::default()
    }

    /// Clears every attribute.
    pub fn reset(&mut self) {
        *self = StyleState::default();
    }

    /// The state as it should be rendered.
    ///
    /// When `bold_brightens` is set, a bold normal named foreground is promoted to its
    /// intense variant. RGB colors are never promoted.
    pub fn rendered(&self, bold_brightens: bool) -> StyleState {
        let mut style = *self;
        if bold_brightens && style.bold {
            style.foreground = style.foreground.map(Color::brightened);
        }
        style
    }

    /// The colors to render, with foreground and background swapped under inverse video.
    pub fn effective_colors(&self) -> (Option<Color>, Option<Color>) {
        if self.inverse {
            (self.background, self.foreground)
        } else {
            (self.foreground, self.background)
        }
    }

    /// Applies the parameter string of one SGR sequence (`ESC [ <parameters> m`).
    ///
    /// Parameters are applied left to right. Empty entries are skipped. Unknown codes,
    /// non-numeric entries and malformed extended colors are reported to `diagnostics`
    /// and otherwise ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfilter_ansimarkup::{Color, StyleState};
    ///
    /// let mut style = StyleState::default();
    /// let mut diagnostics = Vec::new();
    /// style.apply_sgr("1;38;5;196", &mut diagnostics);
    /// assert!(style.bold);
    /// assert_eq!(style.foreground, Some(Color::Rgb(255, 55, 55)));
    /// assert!(diagnostics.is_empty());
    /// ```
    pub fn apply_sgr(&mut self, parameters: &str, diagnostics: &mut Vec<MarkupDiagnostic>) {
        let mut codes = VecDeque::new();
        for entry in parameters.split(';').filter(|entry| !entry.is_empty()) {
            match entry.parse::<u32>() {
                Ok(code) => codes.push_back(code),
                Err(_) => MarkupDiagnostic::UnknownSgrCode {
                    code: entry.to_string(),
                    parameters: parameters.to_string(),
                }
                .emit(diagnostics),
            }
        }

        while let Some(code) = codes.pop_front() {
            match code {
                0 => self.reset(),
                1 | 5 => self.bold = true,
                4 => self.underline = true,
                7 => self.inverse = true,
                21 | 22 => self.bold = false,
                24 => self.underline = false,
                27 => self.inverse = false,
                30..=37 => self.foreground = Some(Color::Named((code - 30) as u8)),
                38 => self.foreground = extended_color(&mut codes, parameters, diagnostics),
                39 => self.foreground = None,
                40..=47 => self.background = Some(Color::Named((code - 40) as u8)),
                48 => self.background = extended_color(&mut codes, parameters, diagnostics),
                49 => self.background = None,
                90..=97 => self.foreground = Some(Color::Named((code - 90 + 8) as u8)),
                100..=107 => self.background = Some(Color::Named((code - 100 + 8) as u8)),
                _ => MarkupDiagnostic::UnknownSgrCode {
                    code: code.to_string(),
                    parameters: parameters.to_string(),
                }
                .emit(diagnostics),
            }
        }
    }
}

/// Consumes the operands of an extended color from the front of `codes`.
///
/// `2;r;g;b` yields an RGB color and `5;n` a palette entry. A recognized selector takes
/// up to the operands it needs even when too few are left, so a short color never
/// leaks numbers back into the code table. Anything malformed yields `None`.
fn extended_color(
    codes: &mut VecDeque<u32>,
    parameters: &str,
    diagnostics: &mut Vec<MarkupDiagnostic>,
) -> Option<Color> {
    let selector = codes.pop_front();
    let needed = match selector {
        Some(SELECTOR_RGB) => 3,
        Some(SELECTOR_PALETTE) => 1,
        _ => 0,
    };
    let operands: Vec<u32> = codes.drain(..needed.min(codes.len())).collect();
    let color = match (selector, operands.as_slice()) {
        (Some(SELECTOR_RGB), &[r, g, b]) => {
            match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
                (Ok(r), Ok(g), Ok(b)) => Some(Color::Rgb(r, g, b)),
                _ => None,
            }
        }
        (Some(SELECTOR_PALETTE), &[index]) => Color::from_palette(index),
        _ => None,
    };
    if color.is_none() {
        MarkupDiagnostic::MalformedExtendedColor {
            selector,
            parameters: parameters.to_string(),
        }
        .emit(diagnostics);
    }
    color
}
