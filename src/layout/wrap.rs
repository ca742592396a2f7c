//! Greedy line wrapping

/// Wrap text into lines of at most `max_length` characters
///
/// Words are split on whitespace and packed left to right. A word longer
/// than `max_length` is never broken; it ends up alone on an over-long line.
///
/// `max_length` must be positive.
pub fn wrap_text(text: &str, max_length: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_length = 0;

    for word in text.split_whitespace() {
        let word_length = word.chars().count();
        let added = if current.is_empty() {
            word_length
        } else {
            word_length + 1
        };

        if current_length + added <= max_length {
            current.push(word);
            current_length += added;
        } else {
            if !current.is_empty() {
                lines.push(current.join(" "));
            }
            current = vec![word];
            current_length = word_length;
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    lines
}
