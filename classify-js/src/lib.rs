//! Semantic classification queries for the printer.
//!
//! Everything here is a pure function over a node, its ancestor
//! [`ast_js::path::Path`], and the immutable [`ast_js::options::FormatOptions`]
//! snapshot: same inputs, same answer, nothing mutated. The printer calls
//! these at the moment it decides grouping, forced breaks, or
//! parenthesization; no function here ever calls back into it.
//!
//! Recursive walks are bounded either by an explicit depth budget
//! ([`literal::is_simple_call_argument`]) or by strict descent into
//! subtrees, so every query terminates on any finite tree. A node that
//! claims a naked left side and then fails to produce one is a contract
//! break between classifiers and aborts the run via
//! [`error::ClassifyResult`].

pub mod chains;
pub mod comments;
pub mod error;
pub mod kind;
pub mod left_side;
pub mod literal;
pub mod search;
pub mod stmt;
pub mod test_call;
