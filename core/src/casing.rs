//! Casing restoration: carry the typed word's capitalisation over to the
//! dictionary form.

/// True when the word has at least one cased character and no lowercase ones.
pub fn is_all_uppercase(word: &str) -> bool {
    let mut cased = false;
    for ch in word.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Apply the casing of `original` to `corrected`.
///
/// - `ROMANIA` + `românia` → `ROMÂNIA`
/// - `Romania` + `românia` → `România`
/// - anything else leaves `corrected` as is
pub fn restore_casing(original: &str, corrected: &str) -> String {
    if is_all_uppercase(original) {
        return corrected.to_uppercase();
    }
    if original.chars().next().is_some_and(char::is_uppercase) {
        return capitalize_first(corrected);
    }
    corrected.to_string()
}

/// Uppercase the first character, leave the rest untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_detection() {
        assert!(is_all_uppercase("ROMANIA"));
        assert!(is_all_uppercase("O"));
        assert!(is_all_uppercase("A1"));
        assert!(!is_all_uppercase("Romania"));
        assert!(!is_all_uppercase("123"));
        assert!(!is_all_uppercase(""));
    }

    #[test]
    fn three_casing_rules() {
        assert_eq!(restore_casing("ROMANIA", "românia"), "ROMÂNIA");
        assert_eq!(restore_casing("Romania", "românia"), "România");
        assert_eq!(restore_casing("romania", "românia"), "românia");
        assert_eq!(restore_casing("rOMANIA", "românia"), "românia");
    }

    #[test]
    fn diacritic_initials_uppercase() {
        assert_eq!(restore_casing("Tara", "țară"), "Țară");
        assert_eq!(restore_casing("SCOALA", "școală"), "ȘCOALĂ");
        assert_eq!(restore_casing("Invatatura", "învățătură"), "Învățătură");
    }

    #[test]
    fn capitalize_keeps_tail() {
        assert_eq!(restore_casing("Iasi", "iaȘi"), "IaȘi");
        assert_eq!(restore_casing("X", ""), "");
    }
}
