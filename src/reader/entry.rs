//! Corpus entry types.
//!
//! Triples and entity mappings are `|`-separated in the corpus:
//! `Aarhus_Airport | cityServed | "Aarhus, Denmark"`, `PATIENT-1 | "Aarhus, Denmark"`.
use std::str::FromStr;

use crate::error::Error;

/// Placeholder role prefixes, as they appear in templates (`AGENT-1`).
pub const ROLES: [&str; 3] = ["BRIDGE", "AGENT", "PATIENT"];

/// Replace dashes by underscores and strip surrounding quotes.
pub fn clean_term(term: &str) -> String {
    term.replace('-', "_").trim_matches('"').to_string()
}

/// (subject, predicate, object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    pub fn new(subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
        }
    }

    pub fn elements(&self) -> [&str; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// Triple with [clean_term] applied to each element.
    pub fn normalized(&self) -> Self {
        Self {
            subject: clean_term(&self.subject),
            predicate: clean_term(&self.predicate),
            object: clean_term(&self.object),
        }
    }

    /// tab-separated elements.
    pub fn to_tsv(&self) -> String {
        self.elements().join("\t")
    }
}

impl FromStr for Triple {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('|').map(str::trim).collect();
        match parts.as_slice() {
            [subject, predicate, object] => Ok(Self::new(subject, predicate, object)),
            _ => Err(Error::MalformedTriple(s.to_string())),
        }
    }
}

/// Placeholder to entity mapping of an entry, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMap {
    entries: Vec<(String, String)>,
}

impl EntityMap {
    /// Parse a `PLACEHOLDER | entity` line.
    pub fn parse_mapping(raw: &str) -> Result<(String, String), Error> {
        match raw.split_once('|') {
            Some((placeholder, entity)) if !placeholder.trim().is_empty() => {
                Ok((placeholder.trim().to_string(), entity.trim().to_string()))
            }
            _ => Err(Error::MalformedEntity(raw.to_string())),
        }
    }

    /// Insert a mapping. A placeholder that is already mapped gets the new entity.
    pub fn insert(&mut self, placeholder: String, entity: String) {
        match self.entries.iter_mut().find(|(p, _)| *p == placeholder) {
            Some(existing) => existing.1 = entity,
            None => self.entries.push((placeholder, entity)),
        }
    }

    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == placeholder)
            .map(|(_, e)| e.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, e)| (p.as_str(), e.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mappings used by a sentence: the placeholder appears in the template,
    /// or the placeholder or the entity is an element of one of the triples.
    pub fn restrict(&self, template: &str, triples: &[Triple]) -> EntityMap {
        let in_triples = |s: &str| triples.iter().any(|t| t.elements().contains(&s));
        let entries = self
            .entries
            .iter()
            .filter(|(p, e)| {
                template.contains(p.as_str()) || in_triples(p.as_str()) || in_triples(e.as_str())
            })
            .cloned()
            .collect();
        EntityMap { entries }
    }
}

impl FromIterator<(String, String)> for EntityMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = EntityMap::default();
        for (placeholder, entity) in iter {
            map.insert(placeholder, entity);
        }
        map
    }
}

/// One `<entry>` of the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub eid: String,
    pub category: Option<String>,
    pub size: Option<usize>,
    /// Modified triple set.
    pub triples: Vec<Triple>,
    pub entity_map: EntityMap,
    pub lexes: Vec<Lex>,
}

/// One realization (`<lex>`) of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lex {
    pub lid: Option<String>,
    pub comment: Option<String>,
    /// Raw triples, grouped by the sentence that verbalizes them.
    pub sorted_triples: Vec<Vec<String>>,
    pub text: Option<String>,
    pub template: Option<String>,
}

impl Lex {
    /// Realizations flagged as bad by annotators are skipped.
    pub fn is_bad(&self) -> bool {
        self.comment.as_deref() == Some("bad")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_triple() {
        let t: Triple = "Aarhus_Airport | cityServed | \"Aarhus, Denmark\""
            .parse()
            .unwrap();
        assert_eq!(t, Triple::new("Aarhus_Airport", "cityServed", "\"Aarhus, Denmark\""));
        assert_eq!(t.to_tsv(), "Aarhus_Airport\tcityServed\t\"Aarhus, Denmark\"");
    }

    #[test]
    fn malformed_triple() {
        assert!("a | b".parse::<Triple>().is_err());
        assert!("a | b | c | d".parse::<Triple>().is_err());
    }

    #[test]
    fn normalize() {
        let t = Triple::new("Al-Taqaddum_Air_Base", "runwayLength", "\"3684.0\"");
        assert_eq!(
            t.normalized(),
            Triple::new("Al_Taqaddum_Air_Base", "runwayLength", "3684.0")
        );
    }

    #[test]
    fn entity_mapping() {
        assert_eq!(
            EntityMap::parse_mapping("PATIENT-1 | \"Aarhus, Denmark\"").unwrap(),
            ("PATIENT-1".to_string(), "\"Aarhus, Denmark\"".to_string())
        );
        assert!(EntityMap::parse_mapping("PATIENT-1").is_err());
    }

    #[test]
    fn insert_overwrites() {
        let mut m = EntityMap::default();
        m.insert("AGENT-1".to_string(), "a".to_string());
        m.insert("AGENT-1".to_string(), "b".to_string());
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("AGENT-1"), Some("b"));
    }

    #[test]
    fn restrict() {
        let m: EntityMap = vec![
            ("AGENT-1".to_string(), "Aarhus_Airport".to_string()),
            ("PATIENT-1".to_string(), "Aarhus".to_string()),
            ("PATIENT-2".to_string(), "Denmark".to_string()),
            ("BRIDGE-1".to_string(), "Aarhus_Municipality".to_string()),
        ]
        .into_iter()
        .collect();
        let triples = vec![Triple::new("Aarhus_Airport", "cityServed", "Aarhus")];

        let restricted = m.restrict("AGENT-1 serves PATIENT-1 in PATIENT-2 .", &triples);
        let placeholders: Vec<&str> = restricted.iter().map(|(p, _)| p).collect();
        assert_eq!(placeholders, vec!["AGENT-1", "PATIENT-1", "PATIENT-2"]);

        // by triple only
        let restricted = m.restrict("It serves the city .", &triples);
        let placeholders: Vec<&str> = restricted.iter().map(|(p, _)| p).collect();
        assert_eq!(placeholders, vec!["AGENT-1", "PATIENT-1"]);
    }

    #[test]
    fn bad_lex() {
        let lex = Lex {
            comment: Some("bad".to_string()),
            ..Default::default()
        };
        assert!(lex.is_bad());
        assert!(!Lex::default().is_bad());
    }
}
