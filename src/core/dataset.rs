//! In-memory triple collection.
//!
//! Triples are dictionary-encoded and kept in insertion order. Inserting a
//! triple that is already present is a no-op, so the collection behaves as a
//! set. Lookups by subject and by predicate go through secondary indexes.

use crate::core::dictionary::Dictionary;
use crate::core::identifier::Identifier;
use crate::core::term::{Term, Triple};
use crate::error::Result;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EncodedTriple {
    subject: u32,
    predicate: u32,
    object: u32,
}

/// Borrowed view of a stored triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripleRef<'a> {
    pub subject: &'a Term,
    pub predicate: &'a Term,
    pub object: &'a Term,
}

impl TripleRef<'_> {
    pub fn to_triple(&self) -> Option<Triple> {
        let subject = self.subject.as_identifier()?;
        let predicate = match self.predicate {
            Term::NamedNode(iri) => iri.clone(),
            _ => return None,
        };
        Some(Triple::new(subject, predicate, self.object.clone()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct Dataset {
    dictionary: Dictionary,
    triples: Vec<EncodedTriple>,
    seen: HashSet<EncodedTriple>,
    by_subject: HashMap<u32, Vec<usize>>,
    by_predicate: HashMap<u32, Vec<usize>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `triples`, dropping duplicates
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Result<Self> {
        let mut dataset = Self::new();
        for triple in triples {
            dataset.insert(triple)?;
        }
        Ok(dataset)
    }

    /// Insert a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> Result<bool> {
        let encoded = EncodedTriple {
            subject: self.dictionary.encode(&Term::from(triple.subject))?,
            predicate: self.dictionary.encode(&Term::NamedNode(triple.predicate))?,
            object: self.dictionary.encode(&triple.object)?,
        };
        if !self.seen.insert(encoded) {
            return Ok(false);
        }
        let position = self.triples.len();
        self.triples.push(encoded);
        self.by_subject.entry(encoded.subject).or_default().push(position);
        self.by_predicate.entry(encoded.predicate).or_default().push(position);
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        let encoded = (
            self.dictionary.lookup(&Term::from(&triple.subject)),
            self.dictionary.lookup(&Term::NamedNode(triple.predicate.clone())),
            self.dictionary.lookup(&triple.object),
        );
        match encoded {
            (Some(subject), Some(predicate), Some(object)) => {
                self.seen.contains(&EncodedTriple { subject, predicate, object })
            }
            _ => false,
        }
    }

    /// All triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = TripleRef<'_>> + '_ {
        self.triples.iter().filter_map(move |encoded| self.decode(encoded))
    }

    /// Triples matching the given positions; `None` is a wildcard
    pub fn matching<'a>(
        &'a self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<TripleRef<'a>> {
        let mut ids = [None; 3];
        for (slot, term) in ids.iter_mut().zip([subject, predicate, object]) {
            if let Some(term) = term {
                match self.dictionary.lookup(term) {
                    Some(id) => *slot = Some(id),
                    None => return Vec::new(),
                }
            }
        }
        let [subject_id, predicate_id, object_id] = ids;

        let candidates: Box<dyn Iterator<Item = &'a EncodedTriple> + 'a> =
            match (subject_id, predicate_id) {
                (Some(id), _) => Box::new(self.positions(&self.by_subject, id)),
                (None, Some(id)) => Box::new(self.positions(&self.by_predicate, id)),
                (None, None) => Box::new(self.triples.iter()),
            };

        candidates
            .filter(|t| subject_id.map_or(true, |id| t.subject == id))
            .filter(|t| predicate_id.map_or(true, |id| t.predicate == id))
            .filter(|t| object_id.map_or(true, |id| t.object == id))
            .filter_map(|t| self.decode(t))
            .collect()
    }

    /// Objects of `subject` for `predicate`, in insertion order
    pub fn objects(&self, subject: &Identifier, predicate: &str) -> Vec<&Term> {
        self.matching(Some(&Term::from(subject)), Some(&Term::named(predicate)), None)
            .into_iter()
            .map(|t| t.object)
            .collect()
    }

    /// Distinct subjects in order of first appearance
    pub fn subjects(&self) -> Vec<Identifier> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .filter(|t| seen.insert(t.subject))
            .filter_map(|t| self.dictionary.decode(t.subject))
            .filter_map(Term::as_identifier)
            .collect()
    }

    /// Copy the triples reachable from `root` within `depth` hops.
    ///
    /// Depth 0 copies only the root's own triples; every further hop follows
    /// non-literal objects.
    pub fn describe(&self, root: &Identifier, depth: usize) -> Result<Dataset> {
        let mut described = Dataset::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([(Term::from(root), 0usize)]);

        while let Some((node, hop)) = queue.pop_front() {
            if !visited.insert(node.clone()) {
                continue;
            }
            for triple in self.matching(Some(&node), None, None) {
                if let Some(owned) = triple.to_triple() {
                    described.insert(owned)?;
                }
                if hop < depth && triple.object.as_identifier().is_some() {
                    queue.push_back((triple.object.clone(), hop + 1));
                }
            }
        }
        Ok(described)
    }

    fn positions<'a>(
        &'a self,
        index: &'a HashMap<u32, Vec<usize>>,
        id: u32,
    ) -> impl Iterator<Item = &'a EncodedTriple> + 'a {
        index.get(&id).into_iter().flatten().map(move |&position| &self.triples[position])
    }

    fn decode(&self, encoded: &EncodedTriple) -> Option<TripleRef<'_>> {
        Some(TripleRef {
            subject: self.dictionary.decode(encoded.subject)?,
            predicate: self.dictionary.decode(encoded.predicate)?,
            object: self.dictionary.decode(encoded.object)?,
        })
    }
}
