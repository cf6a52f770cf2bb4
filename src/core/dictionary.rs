//! Term dictionary mapping RDF terms to dense integer ids

use crate::core::term::Term;
use crate::error::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    term_to_id: HashMap<Term, u32>,
    id_to_term: Vec<Term>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary { term_to_id: HashMap::new(), id_to_term: Vec::new() }
    }

    /// Return the id of `term`, assigning the next free id on first sight
    pub fn encode(&mut self, term: &Term) -> Result<u32> {
        if let Some(&id) = self.term_to_id.get(term) {
            return Ok(id);
        }
        let id = next_id(self.id_to_term.len())?;
        self.term_to_id.insert(term.clone(), id);
        self.id_to_term.push(term.clone());
        Ok(id)
    }

    /// Id of an already known term
    pub fn lookup(&self, term: &Term) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    pub fn decode(&self, id: u32) -> Option<&Term> {
        self.id_to_term.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.id_to_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_term.is_empty()
    }
}

fn next_id(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::InvariantViolation(format!("term dictionary is full at {} terms", len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::term::Literal;

    #[test]
    fn test_dictionary_encoding_decoding() {
        let mut dict = Dictionary::new();

        let subject_id = dict.encode(&Term::named("http://example.org/person/Alice")).unwrap();
        let predicate_id = dict.encode(&Term::named("http://schema.org/name")).unwrap();
        let object_id = dict.encode(&Term::Literal(Literal::new_simple("Alice"))).unwrap();

        assert_eq!(subject_id, 0);
        assert_eq!(predicate_id, 1);
        assert_eq!(object_id, 2);

        assert_eq!(dict.decode(subject_id), Some(&Term::named("http://example.org/person/Alice")));
        assert_eq!(dict.decode(object_id), Some(&Term::Literal(Literal::new_simple("Alice"))));
        assert_eq!(dict.decode(99), None);
    }

    #[test]
    fn test_encoding_is_stable() {
        let mut dict = Dictionary::new();
        let first = dict.encode(&Term::named("http://example.org/a")).unwrap();
        let second = dict.encode(&Term::named("http://example.org/a")).unwrap();
        assert_eq!(first, second);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_literals_and_iris_are_distinct() {
        let mut dict = Dictionary::new();
        let iri = dict.encode(&Term::named("http://example.org/a")).unwrap();
        let literal = dict.encode(&Term::Literal(Literal::new_simple("http://example.org/a"))).unwrap();
        assert_ne!(iri, literal);
        assert_eq!(dict.lookup(&Term::BlankNode("a".to_string())), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_id_space_exhaustion_is_an_error() {
        assert_eq!(next_id(u32::MAX as usize).unwrap(), u32::MAX);
        let overflow = next_id(u32::MAX as usize + 1);
        assert!(matches!(overflow, Err(Error::InvariantViolation(_))));
    }
}
