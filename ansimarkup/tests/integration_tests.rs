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

//! End to end tests for ANSI markup conversion

use bookfilter_ansimarkup::{
    AnsiMarkupConverter, BlockMerger, Color, Dialect, MarkupConfig, MarkupDiagnostic,
    OutputBlock, OutputFragment, StyleState, strip_ansi_codes,
};
use proptest::prelude::*;
use tracing_test::traced_test;

fn html(text: &str) -> String {
    AnsiMarkupConverter::default()
        .convert(text, Dialect::Html)
        .markup
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_red_then_reset() {
    assert_eq!(
        html("\x1b[31mred\x1b[0m plain"),
        "<span class=\"ansi-red-fg\">red</span> plain"
    );
}

#[test]
fn test_bold_blue_then_partial_reset() {
    let converter =
        AnsiMarkupConverter::new(MarkupConfig::default().with_bold_brightens(false));
    assert_eq!(
        converter
            .convert("\x1b[1;34mBoldBlue\x1b[22;39m", Dialect::Html)
            .markup,
        "<span class=\"ansi-blue-fg ansi-bold\">BoldBlue</span>"
    );
}

#[test]
fn test_stdout_fragments_merge() {
    let merged = BlockMerger::merge(vec![
        OutputFragment::stdout("a\n").into(),
        OutputFragment::stdout("b\n").into(),
    ]);
    assert_eq!(
        merged,
        vec![OutputBlock::Fragment(OutputFragment::stdout("a\nb\n"))]
    );
}

#[test]
fn test_stdout_and_stderr_never_merge() {
    let blocks: Vec<OutputBlock> = vec![
        OutputFragment::stdout("x\n").into(),
        OutputFragment::stderr("x\n").into(),
    ];
    assert_eq!(BlockMerger::merge(blocks.clone()), blocks);

    let reversed: Vec<OutputBlock> = vec![
        OutputFragment::stderr("x\n").into(),
        OutputFragment::stdout("x\n").into(),
    ];
    assert_eq!(BlockMerger::merge(reversed.clone()), reversed);
}

#[test]
#[traced_test]
fn test_unknown_code_reported_once() {
    let conversion = AnsiMarkupConverter::default().convert(
        "\x1b[32mbefore\x1b[99m after\x1b[0m",
        Dialect::Html,
    );
    assert_eq!(
        conversion.markup,
        "<span class=\"ansi-green-fg\">before</span><span class=\"ansi-green-fg\"> after</span>"
    );
    assert_eq!(
        conversion.diagnostics,
        vec![MarkupDiagnostic::UnknownSgrCode {
            code: "99".to_string(),
            parameters: "99".to_string(),
        }]
    );
    assert!(logs_contain("Ignoring unknown SGR code"));
}

#[test]
#[traced_test]
fn test_unsupported_terminator_logged() {
    let conversion =
        AnsiMarkupConverter::default().convert("progress\x1b[2K\x1b[1Gdone", Dialect::Latex);
    assert_eq!(conversion.markup, "progressdone");
    assert_eq!(conversion.diagnostics.len(), 2);
    assert!(logs_contain("Dropping unsupported escape sequence"));
}

#[test]
#[traced_test]
fn test_missing_dialect_is_silent() {
    let converter = AnsiMarkupConverter::default();
    let fragment = OutputFragment::stdout("\x1b[99mraw\x1b[2K");
    let conversion = converter.render_fragment(&fragment, Dialect::for_format("docx").ok());
    assert_eq!(conversion.markup, fragment.text);
    assert!(conversion.diagnostics.is_empty());
    assert!(!logs_contain("WARN"));
}

#[test]
fn test_extended_color_boundaries() {
    assert_eq!(
        html("\x1b[38;5;15mx"),
        "<span class=\"ansi-white-intense-fg\">x</span>"
    );
    assert_eq!(
        html("\x1b[38;5;16mx"),
        "<span style=\"color: rgb(55,55,55)\">x</span>"
    );
    assert_eq!(
        html("\x1b[38;5;231mx"),
        "<span style=\"color: rgb(255,255,255)\">x</span>"
    );
    assert_eq!(
        html("\x1b[38;5;232mx"),
        "<span style=\"color: rgb(8,8,8)\">x</span>"
    );
}

#[test]
fn test_true_color_never_downgraded() {
    let converter = AnsiMarkupConverter::default();
    assert_eq!(
        converter
            .convert("\x1b[38;2;205;49;49mx", Dialect::Latex)
            .markup,
        "\\textcolor[RGB]{205,49,49}{x}"
    );
}

#[test]
fn test_basic_codes_map_to_distinct_tokens() {
    let mut tokens: Vec<String> = (30..=37)
        .chain(90..=97)
        .map(|code| html(&format!("\x1b[{code}mx")))
        .collect();
    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), 16);
}

#[test]
fn test_latex_full_cell() {
    let converter = AnsiMarkupConverter::default();
    let blocks = vec![
        OutputFragment::echo("println(\"hi\")").into(),
        OutputFragment::stdout("\x1b[1mhi\x1b[0m").into(),
        OutputFragment::stdout("more").into(),
        OutputFragment::stderr("\x1b[33mWarning\x1b[39m: careful").into(),
    ];
    let rendered: Vec<String> = converter
        .render_blocks(blocks, Some(Dialect::Latex))
        .into_iter()
        .map(|conversion| conversion.markup)
        .collect();
    assert_eq!(
        rendered,
        vec![
            "println(\"hi\")".to_string(),
            "\\begin{ansiverbatim}\n\\textbf{hi}\nmore\n\\end{ansiverbatim}".to_string(),
            "\\begin{stderrverbatim}\n\\textcolor{ansi-yellow}{Warning}: careful\n\
             \\end{stderrverbatim}"
                .to_string(),
        ]
    );
}

#[test]
fn test_strip_matches_converted_text() {
    let text = "\x1b[1;31mError\x1b[0m: \x1b[4mfile\x1b[24m missing";
    assert_eq!(strip_ansi_codes(text, "\x1b"), "Error: file missing");
}

#[test]
fn test_bold_promotion_equivalence() {
    let bold_yellow = StyleState {
        foreground: Some(Color::Named(3)),
        bold: true,
        ..Default::default()
    };
    let bold_bright_yellow = StyleState {
        foreground: Some(Color::Named(11)),
        bold: true,
        ..Default::default()
    };
    assert_eq!(
        Dialect::Html.tags(&bold_yellow.rendered(true)),
        Dialect::Html.tags(&bold_bright_yellow.rendered(true))
    );
}

#[test]
fn test_latex_inverse() {
    let converter = AnsiMarkupConverter::default();
    assert_eq!(
        converter.convert("\x1b[31;44;7mx", Dialect::Latex).markup,
        "\\textcolor{ansi-blue}{\\setlength{\\fboxsep}{0pt}\\colorbox{ansi-red}{x\\strut}}"
    );
    assert_eq!(
        converter.convert("\x1b[7mx", Dialect::Latex).markup,
        "\\textcolor{ansi-default-inverse-fg}{\\setlength{\\fboxsep}{0pt}\
         \\colorbox{ansi-default-inverse-bg}{x\\strut}}"
    );
}

#[test]
#[traced_test]
fn test_short_extended_color_leaves_other_attributes() {
    let conversion = AnsiMarkupConverter::default().convert("\x1b[38;2;4;1mx", Dialect::Html);
    assert_eq!(conversion.markup, "x");
    assert_eq!(conversion.diagnostics.len(), 1);
    assert!(logs_contain("Malformed extended color"));
}

#[test]
fn test_truncated_sequence_selects_ansi_environment() {
    let conversion = AnsiMarkupConverter::default().render_fragment(
        &OutputFragment::stdout("50%\x1b[3"),
        Some(Dialect::Latex),
    );
    assert_eq!(
        conversion.markup,
        "\\begin{ansiverbatim}\n50%\x1b[3\n\\end{ansiverbatim}"
    );
}

// ============================================================================
// Properties
// ============================================================================

fn sgr_code() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..110)
            .prop_filter("extended colors take operands", |code| *code != 38 && *code != 48)
            .prop_map(|code| code.to_string()),
        (0u8..=255).prop_map(|index| format!("38;5;{index}")),
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b)| format!("48;2;{r};{g};{b}")),
    ]
}

proptest! {
    #[test]
    fn prop_plain_text_is_identity(text in "[^\x1b]*") {
        let converter = AnsiMarkupConverter::default();
        prop_assert_eq!(&converter.convert(&text, Dialect::Html).markup, &text);
        prop_assert_eq!(&converter.convert(&text, Dialect::Latex).markup, &text);
    }

    #[test]
    fn prop_reset_idempotent(codes in prop::collection::vec(sgr_code(), 0..8)) {
        let parameters = codes.join(";");
        let mut once = StyleState::default();
        once.apply_sgr(&format!("{parameters};0"), &mut Vec::new());
        let mut twice = StyleState::default();
        twice.apply_sgr(&format!("{parameters};0;0"), &mut Vec::new());
        prop_assert_eq!(once, twice);
        prop_assert!(once.is_plain());
    }

    #[test]
    fn prop_inverse_round_trip(codes in prop::collection::vec(sgr_code(), 0..8)) {
        let parameters = codes.join(";");
        let plain = html(&format!("\x1b[{parameters};27mx"));
        let toggled = html(&format!("\x1b[{parameters};7;27mx"));
        prop_assert_eq!(plain, toggled);
    }

    #[test]
    fn prop_latex_inverse_round_trip(codes in prop::collection::vec(sgr_code(), 0..8)) {
        let converter = AnsiMarkupConverter::default();
        let parameters = codes.join(";");
        let plain = converter.convert(&format!("\x1b[{parameters};27mx"), Dialect::Latex);
        let toggled = converter.convert(&format!("\x1b[{parameters};7;27mx"), Dialect::Latex);
        prop_assert_eq!(plain.markup, toggled.markup);
    }

    #[test]
    fn prop_text_survives_conversion(
        chunks in prop::collection::vec(("[a-z ]{0,8}", sgr_code()), 0..8)
    ) {
        let mut text = String::new();
        let mut expected = String::new();
        for (chunk, code) in &chunks {
            text.push_str(chunk);
            text.push_str(&format!("\x1b[{code}m"));
            expected.push_str(chunk);
        }
        let converter = AnsiMarkupConverter::default();
        let (spans, _) = converter.spans(&text);
        let literal: String = spans.iter().map(|span| span.text).collect();
        prop_assert_eq!(literal, expected);
    }

    #[test]
    fn prop_merge_idempotent(kinds in prop::collection::vec((0u8..3, "[ab\n]{0,3}"), 0..10)) {
        let blocks: Vec<OutputBlock> = kinds
            .into_iter()
            .map(|(kind, text)| {
                OutputBlock::from(match kind {
                    0 => OutputFragment::stdout(text),
                    1 => OutputFragment::stderr(text),
                    _ => OutputFragment::echo(text),
                })
            })
            .collect();
        let once = BlockMerger::merge(blocks);
        let twice = BlockMerger::merge(once.clone());
        prop_assert_eq!(once, twice);
    }
}
