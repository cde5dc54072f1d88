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

/// Names of the 16 named terminal colors, indexed by palette position.
///
/// Entries 0-7 are the normal colors (SGR `30`-`37` / `40`-`47`), entries 8-15 the
/// intense variants (SGR `90`-`97` / `100`-`107`). The HTML dialect appends `-fg` or
/// `-bg` to form a CSS class; the LaTeX dialect uses the name as a `xcolor` identifier.
pub const ANSI_COLORS: [&str; 16] = [
    "ansi-black",
    "ansi-red",
    "ansi-green",
    "ansi-yellow",
    "ansi-blue",
    "ansi-magenta",
    "ansi-cyan",
    "ansi-white",
    "ansi-black-intense",
    "ansi-red-intense",
    "ansi-green-intense",
    "ansi-yellow-intense",
    "ansi-blue-intense",
    "ansi-magenta-intense",
    "ansi-cyan-intense",
    "ansi-white-intense",
];

/// Number of named colors; also the first index of the 6x6x6 color cube.
pub const NAMED_COLOR_COUNT: u8 = 16;

/// First palette index of the 24 step grayscale ramp.
pub const GRAYSCALE_START: u8 = 232;

/// Offset added to every scaled color cube component.
pub const CUBE_BASE: u8 = 55;

/// Distance between two adjacent color cube levels.
pub const CUBE_STEP: u8 = 40;

/// Darkest grayscale level, palette index 232.
pub const GRAYSCALE_BASE: u8 = 8;

/// Distance between two adjacent grayscale levels.
pub const GRAYSCALE_STEP: u8 = 10;

/// Placeholder color used for the foreground when inverse video is active
/// without an explicit background to swap in.
pub const DEFAULT_INVERSE_FG: &str = "ansi-default-inverse-fg";

/// Placeholder color used for the background when inverse video is active
/// without an explicit foreground to swap in.
pub const DEFAULT_INVERSE_BG: &str = "ansi-default-inverse-bg";

/// SGR parameters introducing an extended color.
pub const SELECTOR_RGB: u32 = 2;
pub const SELECTOR_PALETTE: u32 = 5;
