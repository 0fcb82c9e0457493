//! Single-pass tokenizer for template markers

/// One piece of a template
///
/// Names borrow from the template source. Marker names consist of ASCII
/// letters, digits, `_` and `.`; a `$` that does not open a well-formed marker
/// is part of a [`Token::Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied to the output unchanged
    Literal(&'a str),
    /// `$name$`
    Scalar(&'a str),
    /// `$*name*$`
    Sequence(&'a str),
}

impl Token<'_> {
    /// Append the token's source form to `out`
    pub fn write_source(&self, out: &mut String) {
        match self {
            Token::Literal(text) => out.push_str(text),
            Token::Scalar(name) => {
                out.push('$');
                out.push_str(name);
                out.push('$');
            }
            Token::Sequence(name) => {
                out.push_str("$*");
                out.push_str(name);
                out.push_str("*$");
            }
        }
    }
}

/// Split `source` into literal text and markers
///
/// Consecutive literal text is always merged into one token, so no two
/// [`Token::Literal`]s are adjacent in the result.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = source[cursor..].find('$') {
        let dollar = cursor + offset;

        match parse_marker(&source[dollar..]) {
            Some((token, len)) => {
                if literal_start < dollar {
                    tokens.push(Token::Literal(&source[literal_start..dollar]));
                }
                tokens.push(token);
                cursor = dollar + len;
                literal_start = cursor;
            }
            None => cursor = dollar + 1,
        }
    }

    if literal_start < source.len() {
        tokens.push(Token::Literal(&source[literal_start..]));
    }

    tokens
}

/// Parse a marker at the start of `s`, which begins with `$`
///
/// Returns the token and the number of bytes it spans.
fn parse_marker(s: &str) -> Option<(Token<'_>, usize)> {
    let rest = &s[1..];

    if let Some(inner) = rest.strip_prefix('*') {
        let len = name_len(inner);
        if len > 0 && inner[len..].starts_with("*$") {
            return Some((Token::Sequence(&inner[..len]), len + 4));
        }
        return None;
    }

    let len = name_len(rest);
    if len > 0 && rest[len..].starts_with('$') {
        return Some((Token::Scalar(&rest[..len]), len + 2));
    }

    None
}

fn name_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'.')
        .count()
}

/// A parsed template
///
/// Parsing cannot fail; it only classifies the text. Templates that are
/// expanded many times (one per message, one per method) should be parsed
/// once and reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Template<'a> {
    /// Tokenize `source`
    pub fn parse(source: &'a str) -> Self {
        Self {
            tokens: tokenize(source),
        }
    }

    /// The token stream
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }
}
