mod config;
mod error;
mod node;
mod prefixes;
mod property;
mod transform;

pub use config::*;
pub use error::*;
pub use node::*;
pub use prefixes::*;
pub use property::*;
pub use transform::*;

// Re-export the IRI parser used for namespace validation.
pub use oxiri::{Iri, IriParseError};
