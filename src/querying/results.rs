//! SPARQL 1.1 Query Results JSON format.

use crate::core::{Literal, Term};
use crate::error::{Error, Result};
use crate::model::vocab::{rdf, xsd};
use crate::querying::sparql_client::{SelectResults, Solution};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Media type of the format
pub const MEDIA_TYPE: &str = "application/sparql-results+json";

#[derive(Deserialize)]
struct Document {
    head: Head,
    results: Option<Bindings>,
}

#[derive(Deserialize)]
struct Head {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Deserialize)]
struct Bindings {
    bindings: Vec<HashMap<String, JsonTerm>>,
}

#[derive(Deserialize)]
struct JsonTerm {
    #[serde(rename = "type")]
    kind: String,
    value: String,
    datatype: Option<String>,
    #[serde(rename = "xml:lang")]
    lang: Option<String>,
}

impl JsonTerm {
    fn into_term(self) -> Result<Term> {
        match self.kind.as_str() {
            "uri" => Ok(Term::NamedNode(self.value)),
            "bnode" => Ok(Term::BlankNode(self.value)),
            "literal" | "typed-literal" => Ok(Term::Literal(match (self.lang, self.datatype) {
                (Some(lang), _) => Literal::new_language_tagged(self.value, lang),
                (None, Some(datatype)) => Literal::new_typed(self.value, datatype),
                (None, None) => Literal::new_simple(self.value),
            })),
            other => Err(Error::TransportFailure(format!("unsupported term type in results: {}", other))),
        }
    }
}

/// Parse a `SELECT` response body
pub fn parse(body: &str) -> Result<SelectResults> {
    let document: Document = serde_json::from_str(body)
        .map_err(|e| Error::TransportFailure(format!("invalid SPARQL results document: {}", e)))?;
    let bindings = document
        .results
        .ok_or_else(|| Error::TransportFailure("response has no results section".to_string()))?;

    let solutions = bindings
        .bindings
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(variable, term)| Ok((variable, term.into_term()?)))
                .collect::<Result<Solution>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SelectResults { variables: document.head.vars, solutions })
}

pub fn term_to_json(term: &Term) -> Value {
    match term {
        Term::NamedNode(iri) => json!({ "type": "uri", "value": iri }),
        Term::BlankNode(label) => json!({ "type": "bnode", "value": label }),
        Term::Literal(literal) => {
            let mut object = Map::new();
            object.insert("type".to_string(), json!("literal"));
            object.insert("value".to_string(), json!(literal.value()));
            if let Some(language) = literal.language() {
                object.insert("xml:lang".to_string(), json!(language));
            } else if literal.datatype() != xsd::STRING && literal.datatype() != rdf::LANG_STRING {
                object.insert("datatype".to_string(), json!(literal.datatype()));
            }
            Value::Object(object)
        }
    }
}

/// Serialize results as a SPARQL JSON document
pub fn to_json(results: &SelectResults) -> Value {
    let bindings: Vec<Value> = results
        .solutions
        .iter()
        .map(|solution| {
            let row: Map<String, Value> = results
                .variables
                .iter()
                .filter_map(|variable| solution.get(variable).map(|term| (variable.clone(), term_to_json(term))))
                .collect();
            Value::Object(row)
        })
        .collect();

    json!({
        "head": { "vars": results.variables },
        "results": { "bindings": bindings }
    })
}
