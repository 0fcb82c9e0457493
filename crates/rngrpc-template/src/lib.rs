//! rngrpc-template - Line-wise template expansion
//!
//! A deliberately small template language with two kinds of markers:
//!
//! - `$name$` is a **scalar** marker, replaced anywhere in the template by a
//!   single string from [`Scalars`].
//! - `$*name*$` is a **sequence** marker. Every physical line holding one is
//!   repeated once per element of the referenced [`Sequences`] entry. Several
//!   sequences on one line are co-indexed: repetition `i` uses element `i` of
//!   each of them.
//!
//! ```text
//! template:   .set$*upper*$(map.get$*types*$("$*lower*$"))
//! sequences:  upper = [Id, Label]  types = [Int, String]  lower = [id, label]
//! output:     .setId(map.getInt("id"))
//!             .setLabel(map.getString("label"))
//! ```
//!
//! The repetition count of a line is the shortest referenced sequence. A line
//! whose sequences are all empty disappears entirely. Expansion never fails:
//! unbound names stay in the output as literal markers, and [`expand_report`]
//! describes every such problem as a [`Diagnostic`].
//!
//! There are no conditionals, loops or expressions.

mod bindings;
mod engine;
mod token;

pub use bindings::{Scalars, ScalarsBuilder, Sequences, SequencesBuilder};
pub use engine::{Diagnostic, Expansion, expand, expand_report};
pub use token::{Template, Token, tokenize};
