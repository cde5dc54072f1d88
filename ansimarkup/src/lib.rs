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

//! Converts ANSI SGR escape sequences in captured program output into styled HTML or
//! LaTeX markup.
//!
//! The pipeline for one code cell is:
//!
//! 1. [`BlockMerger`] coalesces adjacent output fragments of the same kind.
//! 2. [`AnsiMarkupConverter`] scans each fragment left to right, tracking a
//!    [`StyleState`], and wraps every literal run in the tags of the target [`Dialect`].
//!
//! ```
//! use bookfilter_ansimarkup::{AnsiMarkupConverter, Dialect, OutputFragment};
//!
//! let converter = AnsiMarkupConverter::default();
//! let blocks = vec![
//!     OutputFragment::stdout("\x1b[32mok\x1b[0m\n").into(),
//!     OutputFragment::stdout("done\n").into(),
//! ];
//! let rendered = converter.render_blocks(blocks, Some(Dialect::Latex));
//! assert_eq!(
//!     rendered[0].markup,
//!     "\\begin{ansiverbatim}\n\\textcolor{ansi-green}{ok}\ndone\n\\end{ansiverbatim}"
//! );
//! ```

mod config;
mod consts;
mod converter;
mod dialect;
mod fragment;
mod merge;
mod parser;
mod result;
mod style;
pub mod utility;

pub use self::config::{HtmlClasses, LatexEnvironments, MarkupConfig};
pub use self::consts::ANSI_COLORS;
pub use self::converter::{AnsiMarkupConverter, Conversion, MarkupSpan};
pub use self::dialect::Dialect;
pub use self::fragment::{FragmentKind, OutputBlock, OutputFragment};
pub use self::merge::BlockMerger;
pub use self::parser::{EscapeScanner, Token};
pub use self::result::{MarkupDiagnostic, MarkupError, MarkupResult};
pub use self::style::{Color, StyleState};
pub use self::utility::strip_ansi_codes;
