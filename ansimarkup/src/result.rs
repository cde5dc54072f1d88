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

//! Error and diagnostic types for the ansimarkup crate.
//!
//! Nothing in the conversion path is fatal. Problems found while scanning a fragment are
//! reported as [`MarkupDiagnostic`]s and the scan carries on; [`MarkupError`] is reserved
//! for the few operations a caller can act on, like resolving a dialect name.

use thiserror::Error;
use tracing::warn;

/// Result type alias for operations that may fail with a [`MarkupError`].
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors returned by fallible ansimarkup operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// The output format has no supported markup dialect.
    ///
    /// Callers treat this as "not applicable" and pass fragments through unmodified.
    #[error("No markup dialect for output format '{0}'")]
    DialectUnavailable(String),

    /// A configuration value is unusable.
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig {
        /// Name of the offending setting
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// A non-fatal problem found while converting a fragment.
///
/// Every diagnostic is logged through `tracing` when it is raised and is also returned
/// to the caller in the conversion result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MarkupDiagnostic {
    /// An escape sequence ended in something other than `m`.
    ///
    /// The whole sequence is dropped without touching the style state.
    #[error("Unsupported escape sequence terminator '{terminator}' (parameters '{parameters}')")]
    UnsupportedTerminator {
        /// The final byte of the sequence
        terminator: char,
        /// The raw parameter string
        parameters: String,
    },

    /// An SGR parameter has no mapping.
    ///
    /// Only that parameter is ignored; the rest of the sequence is still applied.
    #[error("Unknown SGR code '{code}' (parameters '{parameters}')")]
    UnknownSgrCode {
        /// The offending parameter as it appeared in the sequence
        code: String,
        /// The raw parameter string
        parameters: String,
    },

    /// An extended color (`38`/`48`) had a bad selector or too few or out of range operands.
    ///
    /// The affected color is left unset.
    #[error("Malformed extended color (selector {selector:?}, parameters '{parameters}')")]
    MalformedExtendedColor {
        /// The selector following `38`/`48`, when one was present
        selector: Option<u32>,
        /// The raw parameter string
        parameters: String,
    },
}

impl MarkupDiagnostic {
    /// The parameter string of the escape sequence that raised this diagnostic.
    pub fn parameters(&self) -> &str {
        match self {
            MarkupDiagnostic::UnsupportedTerminator { parameters, .. }
            | MarkupDiagnostic::UnknownSgrCode { parameters, .. }
            | MarkupDiagnostic::MalformedExtendedColor { parameters, .. } => parameters,
        }
    }

    /// Log this diagnostic and push it onto `sink`.
    pub(crate) fn emit(self, sink: &mut Vec<MarkupDiagnostic>) {
        match &self {
            MarkupDiagnostic::UnsupportedTerminator {
                terminator,
                parameters,
            } => warn!(%terminator, %parameters, "Dropping unsupported escape sequence"),
            MarkupDiagnostic::UnknownSgrCode { code, parameters } => {
                warn!(%code, %parameters, "Ignoring unknown SGR code")
            }
            MarkupDiagnostic::MalformedExtendedColor {
                selector,
                parameters,
            } => warn!(?selector, %parameters, "Malformed extended color, leaving it unset"),
        }
        sink.push(self);
    }
}
