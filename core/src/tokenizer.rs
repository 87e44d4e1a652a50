//! Whitespace tokenizer and reassembler.
//!
//! Tokens are maximal runs of non-whitespace. Reassembly joins corrected
//! tokens with single spaces, so original inter-token spacing is normalised.

/// Trailing characters detached before lookup and reattached afterwards.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Tokens taken on each side of a word for its context window.
pub const CONTEXT_RADIUS: usize = 2;

/// Split on runs of whitespace. Empty or blank text yields no tokens.
pub fn split(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Detach at most one trailing punctuation character.
///
/// Returns `(core, punctuation)`; `punctuation` is empty when the token does
/// not end in one of `. , ! ? ; :`.
pub fn strip_trailing_punctuation(token: &str) -> (&str, &str) {
    match token.char_indices().next_back() {
        Some((idx, ch)) if TRAILING_PUNCTUATION.contains(&ch) => token.split_at(idx),
        _ => (token, ""),
    }
}

/// Join tokens with a single space.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, tok) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(tok.as_ref());
    }
    out
}

/// Up to two tokens before and after `tokens[index]`, including it.
pub fn context_window<'a, S: AsRef<str>>(tokens: &'a [S], index: usize) -> &'a [S] {
    let start = index.saturating_sub(CONTEXT_RADIUS);
    let end = tokens.len().min(index + CONTEXT_RADIUS + 1);
    &tokens[start.min(end)..end]
}
