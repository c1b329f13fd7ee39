//! Statement splitter for raw SQL text.
//!
//! Splits on semicolons without breaking inside string literals, quoted
//! identifiers, or comments. Comment text stays part of the statement.

use super::parser::SqlParseError;

/// Split raw SQL into individual statements, trimmed, empties dropped.
pub fn split_statements(input: &str) -> Result<Vec<String>, SqlParseError> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut chars = input.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '\'' | '"' | '`' => {
                current.push(c);
                let mut closed = false;
                while let Some((_, q)) = chars.next() {
                    current.push(q);
                    if q == c {
                        // Doubled quote escapes itself
                        if chars.peek().map(|&(_, n)| n) == Some(c) {
                            if let Some((_, n)) = chars.next() {
                                current.push(n);
                            }
                        } else {
                            closed = true;
                            break;
                        }
                    }
                }
                if !closed {
                    return Err(SqlParseError::UnterminatedString { offset: pos });
                }
            }
            '-' if chars.peek().map(|&(_, n)| n) == Some('-') => {
                current.push(c);
                for (_, n) in chars.by_ref() {
                    current.push(n);
                    if n == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek().map(|&(_, n)| n) == Some('*') => {
                current.push(c);
                let mut closed = false;
                let mut prev = ' ';
                for (_, n) in chars.by_ref() {
                    current.push(n);
                    if prev == '*' && n == '/' {
                        closed = true;
                        break;
                    }
                    prev = n;
                }
                if !closed {
                    return Err(SqlParseError::UnterminatedComment { offset: pos });
                }
            }
            ';' => {
                let statement = current.trim();
                if !statement.is_empty() {
                    statements.push(statement.to_string());
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }

    let statement = current.trim();
    if !statement.is_empty() {
        statements.push(statement.to_string());
    }

    Ok(statements)
}
