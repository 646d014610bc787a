/// Symbols the upstream systems pad phone numbers with.
const STRIP: [char; 5] = ['-', '(', ')', '_', '.'];

/// Best-effort "###-###-####" formatter. Strips the symbol set from the
/// number; a stripped number of exactly 10 characters is used alone,
/// otherwise the area code is prepended before stripping. A result of at
/// least 7 characters gets a hyphen after the 3rd; a result then longer
/// than 8 gets a second hyphen after the 7th. Lossy and non-validating:
/// malformed input comes back stripped but never rejected.
pub fn normalize(area: &str, number: &str) -> String {
    let stripped = strip(number);
    let mut out: Vec<char> = if stripped.chars().count() == 10 {
        stripped.chars().collect()
    } else {
        strip(&format!("{area}{number}")).chars().collect()
    };

    if out.len() >= 7 {
        out.insert(3, '-');
    }
    if out.len() > 8 {
        out.insert(7, '-');
    }
    out.into_iter().collect()
}

fn strip(value: &str) -> String {
    value
        .chars()
        .filter(|c| !STRIP.contains(c) && !c.is_whitespace())
        .collect()
}
