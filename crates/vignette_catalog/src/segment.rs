//! Sentence segmentation for submitted work text.

/// Split text into sentences.
///
/// A break happens wherever `.`, `!` or `?` is followed by whitespace; the
/// whitespace run is dropped. Fragments are trimmed and empty ones discarded.
/// Abbreviations and quoted punctuation are not special-cased.
///
/// # Examples
///
/// ```
/// use vignette_catalog::split_sentences;
///
/// assert_eq!(
///     split_sentences("Hello world. How are you? Fine!"),
///     vec!["Hello world.", "How are you?", "Fine!"]
/// );
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut prev = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            fragments.push(&text[start..i]);
            let mut end = i + c.len_utf8();
            while let Some(&(j, w)) = chars.peek() {
                if !w.is_whitespace() {
                    break;
                }
                end = j + w.len_utf8();
                chars.next();
            }
            start = end;
        }
        prev = Some(c);
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
