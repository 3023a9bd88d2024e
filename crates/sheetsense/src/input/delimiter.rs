//! Delimiter detection for delimited text.

/// Delimiters to try when auto-detecting, in tie-break order.
pub const CANDIDATE_DELIMITERS: &[u8] = &[b',', b';', b'\t', b'|'];

/// Delimiter used when no candidate appears in the sample.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Number of non-empty lines sampled.
pub const SAMPLE_LINES: usize = 10;

/// Weight of the count variance in the score.
const VARIANCE_PENALTY: f64 = 0.01;

/// Detect the delimiter by analyzing the first few non-empty lines.
///
/// Expects decoded text with `\n` line endings. Never fails: falls back to
/// [`DEFAULT_DELIMITER`] when no candidate occurs outside quotes.
pub fn detect_delimiter(text: &str) -> u8 {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    if lines.is_empty() {
        return DEFAULT_DELIMITER;
    }

    let mut best: Option<(u8, f64)> = None;

    for &delim in CANDIDATE_DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let Some(score) = delimiter_score(&counts) else {
            continue;
        };

        tracing::trace!(delimiter = %(delim as char).escape_default(), score, "delimiter candidate");

        // Strictly greater keeps the earlier candidate on ties.
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((delim, score));
        }
    }

    match best {
        Some((delim, score)) => {
            tracing::debug!(delimiter = %(delim as char).escape_default(), score, "detected delimiter");
            delim
        }
        None => DEFAULT_DELIMITER,
    }
}

/// Score a candidate from its per-line counts: median minus a small
/// variance penalty. `None` when the median is zero.
pub fn delimiter_score(counts: &[usize]) -> Option<f64> {
    let median = median(counts);
    if median <= 0.0 {
        return None;
    }
    Some(median - VARIANCE_PENALTY * variance(counts))
}

/// Count delimiter occurrences in a line, ignoring quoted spans.
///
/// A doubled quote inside a quoted span is a literal quote and does not
/// close the span.
pub fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

fn median(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Population variance.
fn variance(counts: &[usize]) -> f64 {
    if counts.len() < 2 {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean = counts.iter().sum::<usize>() as f64 / n;
    counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / n
}
