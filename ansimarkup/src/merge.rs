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

use crate::{FragmentKind, OutputBlock, OutputFragment};
use tracing::debug;

/// Coalesces adjacent captured output fragments before conversion.
///
/// Two neighbours merge when both are single fragments of the same kind and neither is
/// stderr. Stderr fragments always stay separate blocks. Pairs are visited from the
/// back, so a run of mergeable fragments collapses into one and a second pass is a
/// no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockMerger;

impl BlockMerger {
    /// Returns `true` if `first` and `second` may be merged.
    pub fn can_merge(first: &OutputBlock, second: &OutputBlock) -> bool {
        match (first, second) {
            (OutputBlock::Fragment(first), OutputBlock::Fragment(second)) => {
                !first.is_stderr() && !second.is_stderr() && first.kind == second.kind
            }
            _ => false,
        }
    }

    /// Merges every mergeable pair of adjacent blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfilter_ansimarkup::{BlockMerger, OutputBlock, OutputFragment};
    ///
    /// let merged = BlockMerger::merge(vec![
    ///     OutputFragment::stdout("a\n").into(),
    ///     OutputFragment::stdout("b\n").into(),
    /// ]);
    /// assert_eq!(merged, vec![OutputBlock::Fragment(OutputFragment::stdout("a\nb\n"))]);
    /// ```
    pub fn merge(mut blocks: Vec<OutputBlock>) -> Vec<OutputBlock> {
        let mut index = blocks.len();
        while index > 1 {
            index -= 1;
            if !Self::can_merge(&blocks[index - 1], &blocks[index]) {
                continue;
            }
            let OutputBlock::Fragment(second) = blocks.remove(index) else {
                continue;
            };
            if let OutputBlock::Fragment(first) = &mut blocks[index - 1] {
                debug!(kind = ?first.kind, "Merging adjacent output fragments");
                Self::append(first, second);
            }
        }
        blocks
    }

    /// Appends `second` to `first`, separated by a line break.
    ///
    /// Standard output that already has a line break at the seam is joined directly.
    fn append(first: &mut OutputFragment, second: OutputFragment) {
        let joined_directly = first.kind == FragmentKind::Stdout
            && second.kind == FragmentKind::Stdout
            && (first.text.ends_with('\n') || second.text.starts_with('\n'));
        if !joined_directly {
            first.text.push('\n');
        }
        first.text.push_str(&second.text);
    }
}
