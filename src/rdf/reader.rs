//! RDF document reading
//!
//! Loads a graph file into a triple sequence plus its declared namespace
//! bindings. The format is picked from the file extension; parsing is done
//! with the rio parsers (Turtle, N-Triples, RDF/XML).
//!
//! The rio 0.8 parsers do not surface the prefix declarations they consume,
//! so namespace bindings are harvested from the document text with a
//! separate scan before parsing.

use super::types::{BlankNode, Literal, NamedNode, RdfObject, RdfPredicate, RdfSubject, Triple};
use regex::Regex;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleParser};
use rio_xml::RdfXmlParser;
use std::io::{BufReader, Cursor};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Format could not be determined from the file name
    #[error("Unsupported graph file extension: {0}")]
    UnsupportedExtension(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

impl From<rio_turtle::TurtleError> for ParseError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        ParseError::Parse(e.to_string())
    }
}

impl From<rio_xml::RdfXmlError> for ParseError {
    fn from(e: rio_xml::RdfXmlError) -> Self {
        ParseError::Parse(e.to_string())
    }
}

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
    /// RDF/XML format (.rdf, .xml, .owl)
    RdfXml,
}

impl RdfFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> ParseResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "ttl" | "turtle" => Ok(RdfFormat::Turtle),
            "nt" | "ntriples" => Ok(RdfFormat::NTriples),
            "rdf" | "xml" | "owl" => Ok(RdfFormat::RdfXml),
            _ => Err(ParseError::UnsupportedExtension(
                path.display().to_string(),
            )),
        }
    }
}

/// A parsed graph document: the triple sequence in document order plus the
/// `(prefix, iri)` namespace bindings the document declares.
#[derive(Debug, Clone)]
pub struct GraphDocument {
    /// Triples in document order
    pub triples: Vec<Triple>,
    /// Declared namespace bindings as `(prefix, iri)` pairs
    pub namespaces: Vec<(String, String)>,
}

impl GraphDocument {
    /// Load a graph document from a file, detecting the format from the
    /// extension
    pub fn load(path: &Path) -> ParseResult<Self> {
        let format = RdfFormat::from_path(path)?;
        let input = std::fs::read_to_string(path)?;
        Self::parse(&input, format)
    }

    /// Parse a graph document from a string
    pub fn parse(input: &str, format: RdfFormat) -> ParseResult<Self> {
        let namespaces = scan_namespaces(input, format)?;
        let triples = match format {
            RdfFormat::Turtle => parse_turtle(input)?,
            RdfFormat::NTriples => parse_ntriples(input)?,
            RdfFormat::RdfXml => parse_rdf_xml(input)?,
        };
        debug!(
            triples = triples.len(),
            namespaces = namespaces.len(),
            "parsed graph document"
        );
        Ok(Self {
            triples,
            namespaces,
        })
    }
}

fn parse_turtle(input: &str) -> ParseResult<Vec<Triple>> {
    let reader = BufReader::new(Cursor::new(input));
    let mut parser = TurtleParser::new(reader, None);

    let mut triples = Vec::new();
    let res: Result<(), ParseError> = parser.parse_all(&mut |t| {
        triples.push(convert_triple(t)?);
        Ok(())
    });
    res?;
    Ok(triples)
}

fn parse_ntriples(input: &str) -> ParseResult<Vec<Triple>> {
    let reader = BufReader::new(Cursor::new(input));
    let mut parser = NTriplesParser::new(reader);

    let mut triples = Vec::new();
    let res: Result<(), ParseError> = parser.parse_all(&mut |t| {
        triples.push(convert_triple(t)?);
        Ok(())
    });
    res?;
    Ok(triples)
}

fn parse_rdf_xml(input: &str) -> ParseResult<Vec<Triple>> {
    let reader = BufReader::new(Cursor::new(input));
    let mut parser = RdfXmlParser::new(reader, None);

    let mut triples = Vec::new();
    let res: Result<(), ParseError> = parser.parse_all(&mut |t| {
        triples.push(convert_triple(t)?);
        Ok(())
    });
    res?;
    Ok(triples)
}

fn convert_triple(t: rio_api::model::Triple) -> Result<Triple, ParseError> {
    let subject = convert_subject(t.subject)?;
    let predicate = convert_predicate(t.predicate)?;
    let object = convert_object(t.object)?;
    Ok(Triple::new(subject, predicate, object))
}

fn convert_subject(s: rio_api::model::Subject) -> Result<RdfSubject, ParseError> {
    match s {
        rio_api::model::Subject::NamedNode(n) => Ok(RdfSubject::NamedNode(
            NamedNode::new(n.iri).map_err(|e| ParseError::Parse(e.to_string()))?,
        )),
        rio_api::model::Subject::BlankNode(b) => Ok(RdfSubject::BlankNode(
            BlankNode::new(b.id).map_err(|e| ParseError::Parse(e.to_string()))?,
        )),
        _ => Err(ParseError::Parse("Unsupported subject type".to_string())),
    }
}

fn convert_predicate(p: rio_api::model::NamedNode) -> Result<RdfPredicate, ParseError> {
    RdfPredicate::new(p.iri).map_err(|e| ParseError::Parse(e.to_string()))
}

fn convert_object(o: rio_api::model::Term) -> Result<RdfObject, ParseError> {
    match o {
        rio_api::model::Term::NamedNode(n) => Ok(RdfObject::NamedNode(
            NamedNode::new(n.iri).map_err(|e| ParseError::Parse(e.to_string()))?,
        )),
        rio_api::model::Term::BlankNode(b) => Ok(RdfObject::BlankNode(
            BlankNode::new(b.id).map_err(|e| ParseError::Parse(e.to_string()))?,
        )),
        rio_api::model::Term::Literal(l) => match l {
            rio_api::model::Literal::Simple { value } => {
                Ok(RdfObject::Literal(Literal::new_simple_literal(value)))
            }
            rio_api::model::Literal::LanguageTaggedString { value, language } => {
                Ok(RdfObject::Literal(
                    Literal::new_language_tagged_literal(value, language)
                        .map_err(|e| ParseError::Parse(e.to_string()))?,
                ))
            }
            rio_api::model::Literal::Typed { value, datatype } => {
                let dt =
                    NamedNode::new(datatype.iri).map_err(|e| ParseError::Parse(e.to_string()))?;
                Ok(RdfObject::Literal(Literal::new_typed_literal(value, dt)))
            }
        },
        _ => Err(ParseError::Parse("Unsupported object type".to_string())),
    }
}

/// Scan a document for namespace declarations.
///
/// Turtle: `@prefix ex: <iri> .` and SPARQL-style `PREFIX ex: <iri>`.
/// RDF/XML: `xmlns:ex="iri"` attributes. N-Triples declares none.
fn scan_namespaces(input: &str, format: RdfFormat) -> ParseResult<Vec<(String, String)>> {
    let pattern = match format {
        RdfFormat::Turtle => r"(?mi)^\s*(?:@prefix|prefix)\s+([A-Za-z][\w.-]*)?:\s*<([^>]*)>",
        RdfFormat::RdfXml => r#"xmlns:([A-Za-z][\w.-]*)\s*=\s*"([^"]*)""#,
        RdfFormat::NTriples => return Ok(Vec::new()),
    };
    let re = Regex::new(pattern).map_err(|e| ParseError::Parse(e.to_string()))?;

    let mut namespaces = Vec::new();
    for caps in re.captures_iter(input) {
        let prefix = caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string();
        let iri = caps[2].to_string();
        namespaces.push((prefix, iri));
    }
    Ok(namespaces)
}
