/// Greedily packs the whitespace-separated words of `text` into lines of at
/// most `max_chars` characters.
///
/// Widths are character counts, not glyph widths. A word longer than
/// `max_chars` is never split and ends up alone on its own line, so no
/// content is dropped. Returns an empty vector only for empty or
/// whitespace-only input.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut count = 0;

    for word in text.split(is_separator).filter(|word| !word.is_empty()) {
        let word_len = word.chars().count();
        let add = word_len + usize::from(!current.is_empty());

        if count + add <= max_chars {
            current.push(word);
            count += add;
        } else {
            if !current.is_empty() {
                lines.push(current.join(" "));
            }
            current = vec![word];
            count = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    lines
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}
