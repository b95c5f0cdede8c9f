//! Turns an RDF Transform template and tabular rows into RDF triples.
//!
//! Serializing the triples is left to an RDF I/O library.

mod error;
mod expression;
mod materializer;
mod row;

pub use error::*;
pub use expression::{strip_literal, BuiltinEvaluator, ExpressionEvaluator};
pub use materializer::Materializer;
pub use row::Row;

// Re-export the oxrdf types materialization produces.
pub use oxrdf::{BlankNode, Graph, Literal, NamedNode, Subject, Term, Triple};
