//! Command line tokenizer.
//!
//! Splits input into whitespace-separated words. Single and double quotes
//! group words containing spaces; there are no pipes, variables or escapes.

// =============================================================================
// Parsed Command
// =============================================================================

/// A command name with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Tokenize a line; `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = Lexer::new(input.trim());
    let name = words.next()?;
    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}

// =============================================================================
// Lexer
// =============================================================================

/// Lexer yielding one word per item.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Read a word; quoted sections may contain whitespace and are joined
    /// with adjacent unquoted text (`a"b c"` is one word).
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        let mut quote: Option<char> = None;

        while let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
            match (quote, c) {
                (Some(q), c) if c == q => quote = None,
                (Some(_), c) => word.push(c),
                (None, '"' | '\'') => quote = Some(c),
                (None, c) if c.is_whitespace() => break,
                (None, c) => word.push(c),
            }
        }

        // Unclosed quote: keep what was read
        word
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }
        Some(self.read_word())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_words() {
        let parsed = parse_input("ls projects").unwrap();
        assert_eq!(parsed.name, "ls");
        assert_eq!(parsed.args, vec!["projects"]);
    }

    #[test]
    fn test_extra_whitespace() {
        let parsed = parse_input("  echo   hello \t world  ").unwrap();
        assert_eq!(parsed.name, "echo");
        assert_eq!(parsed.args, vec!["hello", "world"]);
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t "), None);
    }

    #[test]
    fn test_quotes() {
        let parsed = parse_input(r#"echo "hello   world" 'single quoted'"#).unwrap();
        assert_eq!(parsed.args, vec!["hello   world", "single quoted"]);

        let parsed = parse_input(r#"echo a"b c"d"#).unwrap();
        assert_eq!(parsed.args, vec!["ab cd"]);

        let parsed = parse_input(r#"echo "it's""#).unwrap();
        assert_eq!(parsed.args, vec!["it's"]);
    }

    #[test]
    fn test_empty_quoted_argument() {
        let parsed = parse_input(r#"cat """#).unwrap();
        assert_eq!(parsed.args, vec![""]);
    }

    #[test]
    fn test_unclosed_quote() {
        let parsed = parse_input(r#"echo "open ended"#).unwrap();
        assert_eq!(parsed.args, vec!["open ended"]);
    }

    #[test]
    fn test_unicode() {
        let parsed = parse_input("echo 👋 héllo").unwrap();
        assert_eq!(parsed.args, vec!["👋", "héllo"]);
    }
}
