//! RDF term model and document reading

pub mod reader;
pub mod types;

pub use reader::{GraphDocument, ParseError, ParseResult, RdfFormat};
pub use types::{
    BlankNode, Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, RdfSubject,
    RdfTerm, Triple,
};
