//! Query descriptors.
//!
//! A [`Query`] is a backend-neutral description of which identifiers an
//! object set should return: a `where` clause (explicit identifiers or a
//! conjunctive graph pattern over the subject variable), ordering
//! expressions, and `limit`/`offset` pagination. The same descriptor is either
//! evaluated directly against a [`Dataset`](crate::core::Dataset) by
//! [`evaluator`] or compiled to SPARQL by [`compiler`].
//!
//! The subject variable is always [`Query::subject`]. Results are ordered by
//! the order expressions and then by subject identifier, so a descriptor has
//! exactly one correct answer on a given graph.

pub mod compiler;
pub mod evaluator;
pub mod ordering;
pub mod pattern;

pub use pattern::{ComparisonOperator, Expression, GraphPattern, PatternElement, TermPattern, TriplePattern, Variable};

use crate::core::Identifier;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Name of the subject variable every descriptor binds
pub const SUBJECT_VARIABLE: &str = "subject";

/// Reserved for the type constraint added by object sets
pub(crate) const TYPE_VARIABLE: &str = "subjectType";

/// Restriction on the candidate subjects
#[derive(Debug, Clone, PartialEq)]
pub enum Where {
    /// Exactly these identifiers (those that exist with the requested type)
    Identifiers(Vec<Identifier>),
    /// Subjects that satisfy the pattern
    Patterns(GraphPattern),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub expression: Expression,
    pub descending: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub where_: Option<Where>,
    pub order: Vec<OrderBy>,
    /// `None` means no cap
    pub limit: Option<usize>,
    pub offset: usize,
}

impl Query {
    /// Every instance of the requested kind
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject() -> Variable {
        Variable::new_unchecked(SUBJECT_VARIABLE)
    }

    pub fn identifiers(identifiers: impl IntoIterator<Item = Identifier>) -> Self {
        Self { where_: Some(Where::Identifiers(identifiers.into_iter().collect())), ..Self::default() }
    }

    pub fn pattern(pattern: GraphPattern) -> Self {
        Self { where_: Some(Where::Patterns(pattern)), ..Self::default() }
    }

    pub fn order_ascending(mut self, expression: impl Into<Expression>) -> Self {
        self.order.push(OrderBy { expression: expression.into(), descending: false });
        self
    }

    pub fn order_descending(mut self, expression: impl Into<Expression>) -> Self {
        self.order.push(OrderBy { expression: expression.into(), descending: true });
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Check the descriptor can be evaluated identically by every backend
    pub fn validate(&self) -> Result<()> {
        let mut bound: HashSet<&str> = HashSet::from([SUBJECT_VARIABLE]);

        if let Some(Where::Patterns(pattern)) = &self.where_ {
            for element in &pattern.elements {
                match element {
                    PatternElement::Triple(triple) => {
                        if matches!(triple.subject, TermPattern::Term(crate::core::Term::Literal(_))) {
                            return Err(Error::MalformedQuery(format!(
                                "literal in subject position: {}",
                                triple
                            )));
                        }
                        if !matches!(
                            triple.predicate,
                            TermPattern::Variable(_) | TermPattern::Term(crate::core::Term::NamedNode(_))
                        ) {
                            return Err(Error::MalformedQuery(format!(
                                "predicate must be an IRI or a variable: {}",
                                triple
                            )));
                        }
                        bound.extend(triple.variables().map(Variable::as_str));
                    }
                    PatternElement::Values { variable, .. } => {
                        bound.insert(variable.as_str());
                    }
                    PatternElement::Filter(_) => {}
                }
            }
            if bound.contains(TYPE_VARIABLE) {
                return Err(Error::MalformedQuery(format!("?{} is reserved", TYPE_VARIABLE)));
            }
            for element in &pattern.elements {
                if let PatternElement::Filter(expression) = element {
                    check_bound(expression, &bound, "filter")?;
                }
            }
        }

        for order in &self.order {
            match &order.expression {
                Expression::Variable(_) | Expression::Constant(_) => check_bound(&order.expression, &bound, "order")?,
                other => {
                    return Err(Error::MalformedQuery(format!("unsupported expression in order: {}", other)))
                }
            }
        }
        Ok(())
    }
}

fn check_bound(expression: &Expression, bound: &HashSet<&str>, clause: &str) -> Result<()> {
    for variable in expression.variables() {
        if !bound.contains(variable.as_str()) {
            return Err(Error::MalformedQuery(format!(
                "variable {} in {} does not occur in the pattern",
                variable, clause
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Literal, Term};
    use crate::model::vocab::schema;

    #[test]
    fn test_default_query_is_unbounded() {
        let query = Query::new();
        assert_eq!(query.limit, None);
        assert_eq!(query.offset, 0);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_order_variable_must_be_bound() {
        let start_date = Variable::new("startDate").unwrap();
        let query = Query::new().order_ascending(start_date.clone());
        assert!(matches!(query.validate(), Err(Error::MalformedQuery(_))));

        let query = Query::pattern(GraphPattern::new().triple(
            Query::subject(),
            TermPattern::iri(schema::START_DATE),
            start_date.clone(),
        ))
        .order_ascending(start_date);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_order_rejects_operations() {
        let query = Query::new().order_ascending(Expression::not(Expression::Bound(Query::subject())));
        assert!(matches!(query.validate(), Err(Error::MalformedQuery(_))));
    }

    #[test]
    fn test_literal_subject_rejected() {
        let pattern = GraphPattern::new().triple(
            Term::Literal(Literal::new_simple("x")),
            TermPattern::iri(schema::NAME),
            Query::subject(),
        );
        assert!(matches!(Query::pattern(pattern).validate(), Err(Error::MalformedQuery(_))));
    }

    #[test]
    fn test_reserved_variable_rejected() {
        let pattern = GraphPattern::new().triple(
            Query::subject(),
            TermPattern::iri(schema::NAME),
            Variable::new(TYPE_VARIABLE).unwrap(),
        );
        assert!(matches!(Query::pattern(pattern).validate(), Err(Error::MalformedQuery(_))));
    }
}
