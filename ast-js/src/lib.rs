//! Normalized JavaScript/TypeScript/JSX syntax tree for formatting.
//!
//! Several alternative parsers can produce the tree; an adapter normalizes
//! their dialect-specific tags into the single union defined here before any
//! downstream crate sees it. Two things intentionally survive normalization:
//! literal values keep whichever spelling their producer used (dedicated
//! kinds or the generic [`ast::expr::lit::LitExpr`] form), and out-of-band
//! facts (comments, raw slices) ride in [`ast::node::NodeAssocData`] rather
//! than in the syntax types.
//!
//! Nothing in this crate mutates a tree after construction; consumers get
//! borrowed views ([`path::NodeRef`]) and an explicit ancestor stack
//! ([`path::Path`]) instead of parent pointers.

pub mod ast;
pub mod comment;
pub mod loc;
pub mod num;
pub mod operator;
pub mod options;
pub mod path;
