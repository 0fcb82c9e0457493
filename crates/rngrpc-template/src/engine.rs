//! Template expansion
//!
//! Expansion runs in two passes over a parsed [`Template`]:
//!
//! 1. **Scalar pass.** Every `$name$` token is replaced by its value. Values
//!    are inserted as opaque text and never scanned for markers, so an
//!    already-expanded child construct cannot pick up the parent's bindings.
//!    The result is split into physical lines; a value containing newlines
//!    contributes several lines.
//! 2. **Sequence pass.** Each physical line is handled on its own. The line is
//!    emitted `n` times, where `n` is the length of the shortest sequence it
//!    references. Repetition `i` replaces every `$*name*$` on the line with
//!    element `i` of `name`. A line that references no bound sequence is
//!    emitted once; a line whose count is zero is removed, newline included.

use crate::bindings::{Scalars, Sequences};
use crate::token::{Template, Token};
use std::fmt;

/// Something expansion had to paper over
///
/// Line numbers are 1-based and count lines of the scalar-substituted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `$name$` had no binding and was left in the output
    MissingScalar { name: String },
    /// `$*name*$` had no binding and was left in the output
    MissingSequence { name: String, line: usize },
    /// Co-indexed sequences on one line differ in length; the line was
    /// repeated only as often as the shortest one allows
    LengthMismatch {
        line: usize,
        lengths: Vec<(String, usize)>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingScalar { name } => write!(f, "unbound scalar ${name}$"),
            Diagnostic::MissingSequence { name, line } => {
                write!(f, "unbound sequence $*{name}*$ on line {line}")
            }
            Diagnostic::LengthMismatch { line, lengths } => {
                write!(f, "sequence lengths differ on line {line}:")?;
                for (name, len) in lengths {
                    write!(f, " {name}={len}")?;
                }
                Ok(())
            }
        }
    }
}

/// Result of an expansion together with its diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Expansion {
    /// True when every marker was bound and no line was truncated
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Expand `template` with the given bindings
///
/// Never fails. Unbound markers stay visible in the returned text; use
/// [`expand_report`] to find out about them programmatically.
pub fn expand(template: &str, scalars: &Scalars, sequences: &Sequences) -> String {
    expand_report(template, scalars, sequences).text
}

/// Expand `template` and report every diagnostic
pub fn expand_report(template: &str, scalars: &Scalars, sequences: &Sequences) -> Expansion {
    Template::parse(template).expand(scalars, sequences)
}

/// Text after the scalar pass, before sequences are applied
#[derive(Debug, Clone, Copy)]
enum Piece<'t> {
    Text(&'t str),
    Sequence(&'t str),
}

impl Template<'_> {
    /// Expand this template with the given bindings
    pub fn expand(&self, scalars: &Scalars, sequences: &Sequences) -> Expansion {
        let mut diagnostics = Vec::new();
        let lines = substitute_scalars(self.tokens(), scalars, &mut diagnostics);

        let mut output: Vec<String> = Vec::with_capacity(lines.len());
        for (index, pieces) in lines.iter().enumerate() {
            expand_line(pieces, index + 1, sequences, &mut output, &mut diagnostics);
        }

        Expansion {
            text: output.join("\n"),
            diagnostics,
        }
    }
}

/// Scalar pass: resolve `$name$` and split into physical lines
fn substitute_scalars<'t>(
    tokens: &[Token<'t>],
    scalars: &'t Scalars,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Vec<Piece<'t>>> {
    let mut lines: Vec<Vec<Piece<'t>>> = vec![Vec::new()];

    for token in tokens {
        match *token {
            Token::Literal(text) => push_text(&mut lines, text),
            Token::Scalar(name) => match scalars.get(name) {
                Some(value) => push_text(&mut lines, value),
                None => {
                    let missing = Diagnostic::MissingScalar {
                        name: name.to_string(),
                    };
                    if !diagnostics.contains(&missing) {
                        diagnostics.push(missing);
                    }
                    push_text(&mut lines, "$");
                    push_text(&mut lines, name);
                    push_text(&mut lines, "$");
                }
            },
            Token::Sequence(name) => {
                if let Some(line) = lines.last_mut() {
                    line.push(Piece::Sequence(name));
                }
            }
        }
    }

    lines
}

fn push_text<'t>(lines: &mut Vec<Vec<Piece<'t>>>, text: &'t str) {
    let mut parts = text.split('\n');

    if let Some(first) = parts.next() {
        if !first.is_empty() {
            if let Some(line) = lines.last_mut() {
                line.push(Piece::Text(first));
            }
        }
    }

    for part in parts {
        let mut line = Vec::new();
        if !part.is_empty() {
            line.push(Piece::Text(part));
        }
        lines.push(line);
    }
}

/// Sequence pass for one physical line
fn expand_line(
    pieces: &[Piece<'_>],
    line_number: usize,
    sequences: &Sequences,
    output: &mut Vec<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut referenced: Vec<&str> = Vec::new();
    for piece in pieces {
        if let Piece::Sequence(name) = piece {
            if !referenced.contains(name) {
                referenced.push(name);
            }
        }
    }

    let mut bound: Vec<(&str, &[String])> = Vec::with_capacity(referenced.len());
    for name in referenced {
        match sequences.get(name) {
            Some(values) => bound.push((name, values)),
            None => diagnostics.push(Diagnostic::MissingSequence {
                name: name.to_string(),
                line: line_number,
            }),
        }
    }

    let Some(count) = bound.iter().map(|(_, values)| values.len()).min() else {
        output.push(render_line(pieces, &bound, 0));
        return;
    };

    if bound.iter().any(|(_, values)| values.len() != count) {
        diagnostics.push(Diagnostic::LengthMismatch {
            line: line_number,
            lengths: bound
                .iter()
                .map(|(name, values)| (name.to_string(), values.len()))
                .collect(),
        });
    }

    for index in 0..count {
        output.push(render_line(pieces, &bound, index));
    }
}

/// Render one repetition of a line
///
/// Sequences missing from `bound` are written back as markers.
fn render_line(pieces: &[Piece<'_>], bound: &[(&str, &[String])], index: usize) -> String {
    let mut line = String::new();

    for piece in pieces {
        match *piece {
            Piece::Text(text) => line.push_str(text),
            Piece::Sequence(name) => {
                match bound.iter().find(|(bound_name, _)| *bound_name == name) {
                    Some((_, values)) => line.push_str(&values[index]),
                    None => Token::Sequence(name).write_source(&mut line),
                }
            }
        }
    }

    line
}
