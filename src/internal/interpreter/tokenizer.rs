//! Quote-aware splitting of one input line into tokens.

/// Splits `line` on whitespace, keeping a double-quoted span together as a
/// single token with the quotes stripped.
///
/// An opening quote with no closing quote is treated as a literal
/// character, so the token continues under normal whitespace splitting.
/// Splitting is pure and idempotent on tokens that contain no quotes or
/// whitespace.
pub fn smart_split(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if c == '"' {
            let mut lookahead = chars.clone();
            let mut span = String::new();
            let mut closed = false;
            for n in lookahead.by_ref() {
                if n == '"' {
                    closed = true;
                    break;
                }
                span.push(n);
            }
            if closed {
                current.push_str(&span);
                chars = lookahead;
            } else {
                // unterminated: the quote is an ordinary character
                current.push(c);
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
