//! String case transforms

/// Uppercase the first character and leave the rest untouched.
///
/// Note that the remainder is not lowercased: `"hELLO"` becomes `"HELLO"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case each space-separated word: first character upper, rest lower.
///
/// Splits on single spaces only, so runs of spaces are preserved as-is.
pub fn title(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(word.len());
                    out.extend(first.to_uppercase());
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
