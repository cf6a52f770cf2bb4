//! In-memory evaluation of query descriptors.
//!
//! Triple patterns and value sets are joined one element at a time, carrying
//! the partial solutions forward; filters run once every element has been
//! joined, and a comparison that cannot be decided drops the solution.
//! Solutions are then stable-sorted by the order expressions and the subject
//! identifier, projected onto the subject (first occurrence wins) and sliced
//! by offset and limit.

use crate::core::{Dataset, Identifier, Literal, Term};
use crate::error::Result;
use crate::model::vocab::{rdf, xsd};
use crate::model::ModelKind;
use crate::query::ordering::{compare_values, equal_values, order_terms};
use crate::query::pattern::{ComparisonOperator, Expression, GraphPattern, PatternElement, TermPattern, TriplePattern, Variable};
use crate::query::{Query, Where, TYPE_VARIABLE};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

type Solution = HashMap<Variable, Term>;

/// Distinct identifiers matching `query`, ordered and paginated
pub fn identifiers(dataset: &Dataset, kind: ModelKind, query: &Query) -> Result<Vec<Identifier>> {
    query.validate()?;
    let mut solutions = solutions(dataset, kind, query.where_.as_ref());
    let subject = Query::subject();

    solutions.sort_by(|left, right| {
        for order in &query.order {
            let ordering = order_terms(evaluate(&order.expression, left).as_ref(), evaluate(&order.expression, right).as_ref());
            let ordering = if order.descending { ordering.reverse() } else { ordering };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        order_terms(left.get(&subject), right.get(&subject))
    });

    let limit = query.limit.unwrap_or(usize::MAX);
    Ok(project(&solutions).into_iter().skip(query.offset).take(limit).collect())
}

/// Number of distinct identifiers matching `query`, ignoring pagination
pub fn count(dataset: &Dataset, kind: ModelKind, query: &Query) -> Result<usize> {
    query.validate()?;
    Ok(project(&solutions(dataset, kind, query.where_.as_ref())).len())
}

fn project(solutions: &[Solution]) -> Vec<Identifier> {
    let subject = Query::subject();
    let mut seen = HashSet::new();
    solutions
        .iter()
        .filter_map(|solution| solution.get(&subject))
        .filter_map(Term::as_identifier)
        .filter(|identifier| seen.insert(identifier.clone()))
        .collect()
}

fn solutions(dataset: &Dataset, kind: ModelKind, where_: Option<&Where>) -> Vec<Solution> {
    let subject = Query::subject();
    let type_variable = Variable::new_unchecked(TYPE_VARIABLE);

    let mut elements = Vec::new();
    let mut seeds = vec![Solution::new()];
    match where_ {
        Some(Where::Identifiers(identifiers)) => {
            let mut seen = HashSet::new();
            seeds = identifiers
                .iter()
                .filter(|identifier| seen.insert(*identifier))
                .map(|identifier| Solution::from([(subject.clone(), Term::from(identifier))]))
                .collect();
        }
        Some(Where::Patterns(pattern)) => elements.extend(pattern.elements.iter().cloned()),
        None => {}
    }
    let type_constraint = GraphPattern::new()
        .triple(subject.clone(), TermPattern::iri(rdf::TYPE), type_variable.clone())
        .values(type_variable, kind.rdf_types().iter().map(|iri| Term::named(*iri)));
    elements.extend(type_constraint.elements);

    let mut current = seeds;
    let mut filters = Vec::new();
    for element in &elements {
        match element {
            PatternElement::Triple(pattern) => {
                current = current.iter().flat_map(|solution| join_triple(dataset, pattern, solution)).collect();
            }
            PatternElement::Values { variable, terms } => {
                current = current.iter().flat_map(|solution| join_values(variable, terms, solution)).collect();
            }
            PatternElement::Filter(expression) => filters.push(expression),
        }
        if current.is_empty() {
            return current;
        }
    }

    current
        .into_iter()
        .filter(|solution| filters.iter().all(|filter| effective_boolean(filter, solution) == Some(true)))
        .filter(|solution| !matches!(solution.get(&subject), Some(Term::Literal(_))))
        .collect()
}

fn join_triple(dataset: &Dataset, pattern: &TriplePattern, solution: &Solution) -> Vec<Solution> {
    let resolve = |position: &TermPattern| -> Option<Term> {
        match position {
            TermPattern::Term(term) => Some(term.clone()),
            TermPattern::Variable(variable) => solution.get(variable).cloned(),
        }
    };
    let (subject, predicate, object) = (resolve(&pattern.subject), resolve(&pattern.predicate), resolve(&pattern.object));

    dataset
        .matching(subject.as_ref(), predicate.as_ref(), object.as_ref())
        .into_iter()
        .filter_map(|triple| {
            let mut extended = solution.clone();
            for (position, term) in [
                (&pattern.subject, triple.subject),
                (&pattern.predicate, triple.predicate),
                (&pattern.object, triple.object),
            ] {
                if let TermPattern::Variable(variable) = position {
                    match extended.get(variable) {
                        Some(existing) if existing != term => return None,
                        Some(_) => {}
                        None => {
                            extended.insert(variable.clone(), term.clone());
                        }
                    }
                }
            }
            Some(extended)
        })
        .collect()
}

fn join_values(variable: &Variable, terms: &[Term], solution: &Solution) -> Vec<Solution> {
    match solution.get(variable) {
        Some(bound) if terms.contains(bound) => vec![solution.clone()],
        Some(_) => Vec::new(),
        None => terms
            .iter()
            .map(|term| {
                let mut extended = solution.clone();
                extended.insert(variable.clone(), term.clone());
                extended
            })
            .collect(),
    }
}

fn evaluate(expression: &Expression, solution: &Solution) -> Option<Term> {
    match expression {
        Expression::Variable(variable) => solution.get(variable).cloned(),
        Expression::Constant(term) => Some(term.clone()),
        _ => effective_boolean(expression, solution).map(|value| Term::Literal(Literal::boolean(value))),
    }
}

/// Three-valued evaluation: `None` is a SPARQL evaluation error
fn effective_boolean(expression: &Expression, solution: &Solution) -> Option<bool> {
    match expression {
        Expression::Variable(_) | Expression::Constant(_) => match evaluate(expression, solution)? {
            Term::Literal(literal) if literal.datatype() == xsd::BOOLEAN => {
                Some(literal.value() == "true" || literal.value() == "1")
            }
            _ => None,
        },
        Expression::Compare { operator, left, right } => {
            let left = evaluate(left, solution)?;
            let right = evaluate(right, solution)?;
            match operator {
                ComparisonOperator::Equal => equal_values(&left, &right),
                ComparisonOperator::NotEqual => equal_values(&left, &right).map(|equal| !equal),
                ComparisonOperator::Less => compare_values(&left, &right).map(Ordering::is_lt),
                ComparisonOperator::LessOrEqual => compare_values(&left, &right).map(Ordering::is_le),
                ComparisonOperator::Greater => compare_values(&left, &right).map(Ordering::is_gt),
                ComparisonOperator::GreaterOrEqual => compare_values(&left, &right).map(Ordering::is_ge),
            }
        }
        Expression::And(left, right) => match (effective_boolean(left, solution), effective_boolean(right, solution)) {
            (Some(false), _) | (_, Some(false)) => Some(false),
            (Some(true), Some(true)) => Some(true),
            _ => None,
        },
        Expression::Or(left, right) => match (effective_boolean(left, solution), effective_boolean(right, solution)) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => Some(false),
            _ => None,
        },
        Expression::Not(inner) => effective_boolean(inner, solution).map(|value| !value),
        Expression::Bound(variable) => Some(solution.contains_key(variable)),
    }
}
