use crate::catalog::FrequencyRange;

/// Parse a product's free-text frequency specification into covered ranges.
///
/// The text comes from heterogeneous data entry ("698-960 MHz", "698–960 MHz,
/// 1710-2690 MHz", ...), so parsing is lenient: the string is split on commas
/// and semicolons, and the first two numeric tokens of each segment become a
/// range. Segments that do not yield a valid range are dropped silently.
pub fn parse_frequency_spec(spec: &str) -> Vec<FrequencyRange> {
    let mut ranges = Vec::new();

    for segment in spec.split([',', ';']) {
        let numbers = numeric_tokens(segment.trim());
        if numbers.len() >= 2 && numbers[0] <= numbers[1] {
            ranges.push(FrequencyRange::new(numbers[0], numbers[1]));
        }
    }

    ranges
}

/// Extract numeric tokens (integers or decimals) from a segment, ignoring
/// units, labels and dashes of any style.
fn numeric_tokens(segment: &str) -> Vec<f64> {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for c in segment.chars() {
        if c.is_ascii_digit() || c == '.' {
            run.push(c);
        } else if !run.is_empty() {
            if let Some(value) = parse_leading_number(&run) {
                tokens.push(value);
            }
            run.clear();
        }
    }
    if let Some(value) = parse_leading_number(&run) {
        tokens.push(value);
    }

    tokens
}

/// Longest leading `digits[.digits]` prefix of a digit/dot run, so "1.2.3"
/// reads as 1.2 and a stray "." reads as nothing.
fn parse_leading_number(run: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;

    for (i, c) in run.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }

    run[..end].parse().ok()
}
