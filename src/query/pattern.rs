//! Graph pattern building blocks.
//!
//! Displayed forms are SPARQL syntax.

use crate::core::{Identifier, Literal, Term};
use crate::error::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(String);

impl Variable {
    /// Variable names are ASCII letters, digits and `_`, not starting with a digit
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = chars.next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(Variable(name))
        } else {
            Err(Error::MalformedQuery(format!("invalid variable name: {:?}", name)))
        }
    }

    pub(crate) fn new_unchecked(name: &str) -> Self {
        Variable(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// A pattern position: a concrete term or a variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TermPattern {
    Term(Term),
    Variable(Variable),
}

impl TermPattern {
    pub fn iri(iri: impl Into<String>) -> Self {
        TermPattern::Term(Term::NamedNode(iri.into()))
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            TermPattern::Variable(variable) => Some(variable),
            TermPattern::Term(_) => None,
        }
    }
}

impl From<Variable> for TermPattern {
    fn from(variable: Variable) -> Self {
        TermPattern::Variable(variable)
    }
}

impl From<&Variable> for TermPattern {
    fn from(variable: &Variable) -> Self {
        TermPattern::Variable(variable.clone())
    }
}

impl From<Term> for TermPattern {
    fn from(term: Term) -> Self {
        TermPattern::Term(term)
    }
}

impl From<Identifier> for TermPattern {
    fn from(identifier: Identifier) -> Self {
        TermPattern::Term(identifier.into())
    }
}

impl From<&Identifier> for TermPattern {
    fn from(identifier: &Identifier) -> Self {
        TermPattern::Term(identifier.into())
    }
}

impl From<Literal> for TermPattern {
    fn from(literal: Literal) -> Self {
        TermPattern::Term(Term::Literal(literal))
    }
}

impl fmt::Display for TermPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermPattern::Term(term) => write!(f, "{}", term),
            TermPattern::Variable(variable) => write!(f, "{}", variable),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriplePattern {
    pub subject: TermPattern,
    pub predicate: TermPattern,
    pub object: TermPattern,
}

impl TriplePattern {
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        [&self.subject, &self.predicate, &self.object]
            .into_iter()
            .filter_map(TermPattern::as_variable)
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
        };
        f.write_str(symbol)
    }
}

/// Filter and order expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Variable(Variable),
    Constant(Term),
    Compare { operator: ComparisonOperator, left: Box<Expression>, right: Box<Expression> },
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Not(Box<Expression>),
    Bound(Variable),
}

impl Expression {
    pub fn compare(operator: ComparisonOperator, left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        Expression::Compare { operator, left: Box::new(left.into()), right: Box::new(right.into()) }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expression) -> Self {
        Expression::Not(Box::new(inner))
    }

    /// `lower <= variable <= upper`
    pub fn between(variable: &Variable, lower: impl Into<Term>, upper: impl Into<Term>) -> Self {
        Expression::and(
            Expression::compare(ComparisonOperator::GreaterOrEqual, variable.clone(), lower.into()),
            Expression::compare(ComparisonOperator::LessOrEqual, variable.clone(), upper.into()),
        )
    }

    pub fn variables(&self) -> Vec<&Variable> {
        match self {
            Expression::Variable(variable) | Expression::Bound(variable) => vec![variable],
            Expression::Constant(_) => Vec::new(),
            Expression::Compare { left, right, .. } | Expression::And(left, right) | Expression::Or(left, right) => {
                let mut variables = left.variables();
                variables.extend(right.variables());
                variables
            }
            Expression::Not(inner) => inner.variables(),
        }
    }

    pub(crate) fn constants(&self) -> Vec<&Term> {
        match self {
            Expression::Constant(term) => vec![term],
            Expression::Variable(_) | Expression::Bound(_) => Vec::new(),
            Expression::Compare { left, right, .. } | Expression::And(left, right) | Expression::Or(left, right) => {
                let mut constants = left.constants();
                constants.extend(right.constants());
                constants
            }
            Expression::Not(inner) => inner.constants(),
        }
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Expression::Variable(variable)
    }
}

impl From<&Variable> for Expression {
    fn from(variable: &Variable) -> Self {
        Expression::Variable(variable.clone())
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::Constant(term)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Constant(Term::Literal(literal))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable(variable) => write!(f, "{}", variable),
            Expression::Constant(term) => write!(f, "{}", term),
            Expression::Compare { operator, left, right } => write!(f, "({} {} {})", left, operator, right),
            Expression::And(left, right) => write!(f, "({} && {})", left, right),
            Expression::Or(left, right) => write!(f, "({} || {})", left, right),
            Expression::Not(inner) => write!(f, "(!{})", inner),
            Expression::Bound(variable) => write!(f, "BOUND({})", variable),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatternElement {
    Triple(TriplePattern),
    /// Evaluated against every solution of the whole pattern
    Filter(Expression),
    /// Restrict (or enumerate) a variable to a fixed set of terms
    Values { variable: Variable, terms: Vec<Term> },
}

/// Conjunction of pattern elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphPattern {
    pub elements: Vec<PatternElement>,
}

impl GraphPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triple(
        mut self,
        subject: impl Into<TermPattern>,
        predicate: impl Into<TermPattern>,
        object: impl Into<TermPattern>,
    ) -> Self {
        self.elements.push(PatternElement::Triple(TriplePattern {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }));
        self
    }

    pub fn filter(mut self, expression: Expression) -> Self {
        self.elements.push(PatternElement::Filter(expression));
        self
    }

    pub fn values(mut self, variable: Variable, terms: impl IntoIterator<Item = Term>) -> Self {
        self.elements.push(PatternElement::Values { variable, terms: terms.into_iter().collect() });
        self
    }

    pub fn extend(mut self, other: GraphPattern) -> Self {
        self.elements.extend(other.elements);
        self
    }
}
