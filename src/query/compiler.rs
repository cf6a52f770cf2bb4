//! Compilation of query descriptors to SPARQL 1.1.
//!
//! The generated queries bind the same variables as the in-memory evaluator
//! and order by the same keys, so both backends return the same identifier
//! sequence. Anonymous identifiers cannot be addressed from a SPARQL query
//! string and are rejected.

use crate::core::{Identifier, Term};
use crate::error::{Error, Result};
use crate::model::vocab::rdf;
use crate::model::ModelKind;
use crate::query::pattern::{Expression, GraphPattern, PatternElement, TermPattern, Variable};
use crate::query::{Query, Where, TYPE_VARIABLE};
use std::fmt::Write;

/// Variable holding the count in [`count`] queries
pub const COUNT_VARIABLE: &str = "count";

/// `SELECT DISTINCT ?subject` query for [`ObjectSet::identifiers`](crate::object_set::ObjectSet::identifiers)
pub fn select_identifiers(kind: ModelKind, query: &Query) -> Result<String> {
    query.validate()?;
    let subject = Query::subject();
    let mut sparql = format!("SELECT DISTINCT {} WHERE {{\n{}}}\n", subject, group(kind, query)?);

    sparql.push_str("ORDER BY");
    for order in &query.order {
        check_expression(&order.expression)?;
        let direction = if order.descending { "DESC" } else { "ASC" };
        let _ = write!(sparql, " {}({})", direction, order.expression);
    }
    let _ = writeln!(sparql, " ASC({})", subject);

    if let Some(limit) = query.limit {
        let _ = writeln!(sparql, "LIMIT {}", limit);
    }
    if query.offset > 0 {
        let _ = writeln!(sparql, "OFFSET {}", query.offset);
    }
    Ok(sparql)
}

/// `SELECT (COUNT(DISTINCT ?subject) AS ?count)` query, ignoring pagination
pub fn count(kind: ModelKind, query: &Query) -> Result<String> {
    query.validate()?;
    Ok(format!(
        "SELECT (COUNT(DISTINCT {}) AS ?{}) WHERE {{\n{}}}\n",
        Query::subject(),
        COUNT_VARIABLE,
        group(kind, query)?
    ))
}

/// Triples `?s ?p ?o` of every node reachable from `root` within `depth` hops
pub fn describe(root: &Identifier, depth: usize) -> Result<String> {
    let root = node(&Term::from(root))?;
    let mut branches = vec![format!("  {{ VALUES ?s {{ {} }} ?s ?p ?o }}", root)];
    for hops in 1..=depth {
        let mut path = String::new();
        let mut previous = root.clone();
        for hop in 0..hops {
            let next = if hop + 1 == hops { "?s".to_string() } else { format!("?n{}", hop) };
            let _ = write!(path, "{} ?p{} {} . ", previous, hop, next);
            previous = next;
        }
        branches.push(format!("  {{ {}?s ?p ?o }}", path));
    }
    Ok(format!("SELECT ?s ?p ?o WHERE {{\n{}\n}}\n", branches.join("\n  UNION\n")))
}

fn group(kind: ModelKind, query: &Query) -> Result<String> {
    let subject = Query::subject();
    let mut body = String::new();

    match &query.where_ {
        Some(Where::Identifiers(identifiers)) => {
            let terms = identifiers
                .iter()
                .map(|identifier| node(&Term::from(identifier)))
                .collect::<Result<Vec<_>>>()?;
            let _ = writeln!(body, "  VALUES {} {{ {} }}", subject, terms.join(" "));
        }
        Some(Where::Patterns(pattern)) => write_pattern(&mut body, pattern)?,
        None => {}
    }

    let type_variable = Variable::new_unchecked(TYPE_VARIABLE);
    let types: Vec<String> = kind.rdf_types().iter().map(|iri| format!("<{}>", iri)).collect();
    let _ = writeln!(body, "  {} <{}> {} .", subject, rdf::TYPE, type_variable);
    let _ = writeln!(body, "  VALUES {} {{ {} }}", type_variable, types.join(" "));
    let _ = writeln!(body, "  FILTER(!isLiteral({}))", subject);
    Ok(body)
}

fn write_pattern(body: &mut String, pattern: &GraphPattern) -> Result<()> {
    for element in &pattern.elements {
        match element {
            PatternElement::Triple(triple) => {
                for position in [&triple.subject, &triple.predicate, &triple.object] {
                    if let TermPattern::Term(term) = position {
                        node(term)?;
                    }
                }
                let _ = writeln!(body, "  {}", triple);
            }
            PatternElement::Filter(expression) => {
                check_expression(expression)?;
                let _ = writeln!(body, "  FILTER{}", parenthesized(expression));
            }
            PatternElement::Values { variable, terms } => {
                let terms = terms.iter().map(node).collect::<Result<Vec<_>>>()?;
                let _ = writeln!(body, "  VALUES {} {{ {} }}", variable, terms.join(" "));
            }
        }
    }
    Ok(())
}

/// SPARQL form of a concrete term
fn node(term: &Term) -> Result<String> {
    match term {
        Term::BlankNode(label) => Err(Error::MalformedQuery(format!(
            "anonymous identifier _:{} cannot be addressed through a query endpoint",
            label
        ))),
        Term::NamedNode(iri) => {
            Identifier::named(iri.as_str()).map_err(|e| Error::MalformedQuery(e.to_string()))?;
            Ok(term.to_string())
        }
        Term::Literal(literal) => {
            literal.to_oxigraph().map_err(|e| Error::MalformedQuery(e.to_string()))?;
            Ok(term.to_string())
        }
    }
}

fn check_expression(expression: &Expression) -> Result<()> {
    expression.constants().into_iter().try_for_each(|term| node(term).map(|_| ()))
}

fn parenthesized(expression: &Expression) -> String {
    let rendered = expression.to_string();
    if rendered.starts_with('(') && rendered.ends_with(')') {
        rendered
    } else {
        format!("({})", rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Literal;
    use crate::model::vocab::schema;

    fn service() -> Identifier {
        Identifier::Named("http://example.com/service".to_string())
    }

    #[test]
    fn test_select_with_order_and_pagination() {
        let start_date = Variable::new("startDate").unwrap();
        let query = Query::pattern(
            GraphPattern::new()
                .triple(Query::subject(), TermPattern::iri(schema::PUBLISHED_ON), service())
                .triple(Query::subject(), TermPattern::iri(schema::START_DATE), start_date.clone()),
        )
        .order_descending(start_date)
        .with_limit(1)
        .with_offset(2);

        let sparql = select_identifiers(ModelKind::BroadcastEvent, &query).unwrap();
        assert!(sparql.starts_with("SELECT DISTINCT ?subject WHERE {"));
        assert!(sparql.contains("?subject <http://schema.org/publishedOn> <http://example.com/service> ."));
        assert!(sparql.contains("VALUES ?subjectType { <http://schema.org/BroadcastEvent> }"));
        assert!(sparql.contains("ORDER BY DESC(?startDate) ASC(?subject)"));
        assert!(sparql.contains("LIMIT 1"));
        assert!(sparql.contains("OFFSET 2"));
    }

    #[test]
    fn test_unbounded_query_has_no_limit() {
        let sparql = select_identifiers(ModelKind::Person, &Query::new()).unwrap();
        assert!(!sparql.contains("LIMIT"));
        assert!(!sparql.contains("OFFSET"));
        assert!(sparql.contains("ORDER BY ASC(?subject)"));
    }

    #[test]
    fn test_filter_rendering() {
        let start_date = Variable::new("startDate").unwrap();
        let query = Query::pattern(
            GraphPattern::new()
                .triple(Query::subject(), TermPattern::iri(schema::START_DATE), start_date.clone())
                .filter(Expression::between(&start_date, Literal::integer(1), Literal::integer(2))),
        );
        let sparql = count(ModelKind::Event, &query).unwrap();
        assert!(sparql.starts_with("SELECT (COUNT(DISTINCT ?subject) AS ?count) WHERE {"));
        assert!(sparql.contains("FILTER((?startDate >= "));
    }

    #[test]
    fn test_anonymous_identifiers_rejected() {
        let query = Query::identifiers(vec![Identifier::Anonymous("b0".to_string())]);
        assert!(matches!(select_identifiers(ModelKind::Thing, &query), Err(Error::MalformedQuery(_))));
        assert!(matches!(describe(&Identifier::Anonymous("b0".to_string()), 1), Err(Error::MalformedQuery(_))));
    }

    #[test]
    fn test_describe_paths() {
        let sparql = describe(&service(), 2).unwrap();
        assert!(sparql.contains("{ VALUES ?s { <http://example.com/service> } ?s ?p ?o }"));
        assert!(sparql.contains("{ <http://example.com/service> ?p0 ?s . ?s ?p ?o }"));
        assert!(sparql.contains("{ <http://example.com/service> ?p0 ?n0 . ?n0 ?p1 ?s . ?s ?p ?o }"));
        assert_eq!(sparql.matches("UNION").count(), 2);
    }
}
