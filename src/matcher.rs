use crate::config::Config;

/// A back-reference candidate: `length` bytes starting `offset` bytes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub offset: usize,
    pub length: usize,
}

/// Finds the longest earlier occurrence of the run starting at `pos`.
///
/// Candidates are taken from `[pos - window_size, pos)` and scanned oldest
/// first. A candidate only replaces the current best when it is strictly
/// longer, so among equal lengths the largest offset wins. Runs may extend
/// past `pos` (overlapping matches).
///
/// Returns `None` when no run reaches `config.min_match`, including when
/// fewer than `min_match` bytes remain.
#[must_use]
pub fn find_match(input: &[u8], pos: usize, config: &Config) -> Option<Match> {
    let remaining = input.len().checked_sub(pos)?;
    let max_len = remaining.min(config.max_match);
    if max_len < config.min_match || max_len == 0 {
        return None;
    }

    let search_start = pos.saturating_sub(config.window_size);
    let lookahead = &input[pos..pos + max_len];
    let mut best: Option<Match> = None;

    for candidate in search_start..pos {
        let run = common_prefix_len(&input[candidate..], lookahead);

        if run >= config.min_match && best.is_none_or(|m| run > m.length) {
            best = Some(Match {
                offset: pos - candidate,
                length: run,
            });
            if run == max_len {
                break; // nothing longer is possible
            }
        }
    }

    best
}

/// Length of the common prefix of `a` and `b`, bounded by `b.len()`.
#[inline]
fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
