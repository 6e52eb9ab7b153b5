//! Training records.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entry::Triple;

/// Separates triples in [Record::triples].
pub const TRIPLE_DELIMITER: &str = ";;\t";
/// Separates the elements of a triple in [Record::triples].
pub const ELEMENT_DELIMITER: &str = "\t";

/// A sentence-level training record.
///
/// ```json
/// {
///     "triples": "Aarhus_Airport\tcityServed\tAarhus, Denmark",
///     "target": "The AGENT_1 is the airport of PATIENT_1 .",
///     "target_txt": "The Aarhus is the airport of Aarhus , Denmark .",
///     "ner2ent": {
///         "AGENT_1": "Aarhus_Airport",
///         "PATIENT_1": "Aarhus, Denmark"
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub triples: String,
    /// tokenized delexicalized template
    pub target: String,
    /// tokenized text
    pub target_txt: String,
    pub ner2ent: BTreeMap<String, String>,
}

impl Record {
    pub fn new(
        triples: &[Triple],
        target: String,
        target_txt: String,
        ner2ent: BTreeMap<String, String>,
    ) -> Self {
        let triples = triples
            .iter()
            .map(|t| t.elements().join(ELEMENT_DELIMITER))
            .collect::<Vec<_>>()
            .join(TRIPLE_DELIMITER);

        Self {
            triples,
            target,
            target_txt,
            ner2ent,
        }
    }

    /// Triples, as (subject, predicate, object) slices.
    pub fn triples(&self) -> Vec<Vec<&str>> {
        if self.triples.is_empty() {
            return Vec::new();
        }
        self.triples
            .split(TRIPLE_DELIMITER)
            .map(|t| t.split(ELEMENT_DELIMITER).collect())
            .collect()
    }

    /// Same record, other text.
    pub fn with_target_txt(self, target_txt: String) -> Self {
        Self { target_txt, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        let triples = vec![
            Triple::new("Aarhus_Airport", "cityServed", "Aarhus"),
            Triple::new("Aarhus", "country", "Denmark"),
        ];
        let ner2ent = vec![("AGENT_1".to_string(), "Aarhus_Airport".to_string())]
            .into_iter()
            .collect();
        Record::new(
            &triples,
            "AGENT_1 serves PATIENT_1 .".to_string(),
            "Aarhus Airport serves Aarhus .".to_string(),
            ner2ent,
        )
    }

    #[test]
    fn delimiters() {
        let r = record();
        assert_eq!(
            r.triples,
            "Aarhus_Airport\tcityServed\tAarhus;;\tAarhus\tcountry\tDenmark"
        );
        assert_eq!(
            r.triples(),
            vec![
                vec!["Aarhus_Airport", "cityServed", "Aarhus"],
                vec!["Aarhus", "country", "Denmark"]
            ]
        );
    }

    #[test]
    fn json_fields() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["target"], "AGENT_1 serves PATIENT_1 .");
        assert_eq!(value["target_txt"], "Aarhus Airport serves Aarhus .");
        assert_eq!(value["ner2ent"]["AGENT_1"], "Aarhus_Airport");
        assert!(value["triples"].is_string());
    }

    #[test]
    fn replace_text() {
        let r = record().with_target_txt("Aarhus Airport serves Aarhus city .".to_string());
        assert_eq!(r.target_txt, "Aarhus Airport serves Aarhus city .");
        assert_eq!(r.target, "AGENT_1 serves PATIENT_1 .");
    }
}
