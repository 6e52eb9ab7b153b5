//! Record extraction from one benchmark file.
//!
//! Each realization of an entry is cut into sentence groups (triples, text, template).
//! A realization whose texts, templates and triple groups do not align is counted as
//! dirty and dropped, as is a sentence group left without triples.
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::Error;
use crate::fixing::{SegmentationRepair, SentenceFixer, TemplateFixer, Transform};
use crate::nlp::Nlp;

use super::entry::{clean_term, EntityMap, Entry, Lex, Triple, ROLES};
use super::record::Record;
use super::xml;

/// Aligned (triples, text, template) unit of a realization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceGroup {
    pub triples: Vec<Triple>,
    pub text: String,
    pub template: String,
}

/// Extracts records from a benchmark file, counting dirty data along the way.
pub struct FileReader<'a, N: Nlp> {
    path: PathBuf,
    nlp: &'a N,
    template_fixer: TemplateFixer,
    sentence_fixer: SentenceFixer,
    segmentation: SegmentationRepair,
    dirty: usize,
}

impl<'a, N: Nlp> FileReader<'a, N> {
    pub fn new(path: &Path, nlp: &'a N) -> Self {
        Self {
            path: path.to_path_buf(),
            nlp,
            template_fixer: TemplateFixer,
            sentence_fixer: SentenceFixer,
            segmentation: SegmentationRepair,
            dirty: 0,
        }
    }

    /// Number of dropped sentence groups and realizations so far.
    pub fn dirty(&self) -> usize {
        self.dirty
    }

    /// Read, parse and extract every record of the file.
    pub fn read(mut self) -> Result<Vec<Record>, Error> {
        debug!("reading {:?}", self.path);
        let content = fs::read_to_string(&self.path)?;
        let entries = xml::parse_entries(&content)?;

        let mut records = Vec::new();
        for entry in &entries {
            records.extend(self.extract(entry)?);
        }

        if self.dirty > 0 {
            info!("file={:?} dirty={}", self.path, self.dirty);
        }
        Ok(records)
    }

    /// Records of an entry, one per aligned sentence group of its good realizations.
    pub fn extract(&mut self, entry: &Entry) -> Result<Vec<Record>, Error> {
        debug!(
            "entry {} (category={:?} size={:?} triples={} lexes={})",
            entry.eid,
            entry.category,
            entry.size,
            entry.triples.len(),
            entry.lexes.len()
        );
        let mut records = Vec::new();
        for lex in entry.lexes.iter().filter(|lex| !lex.is_bad()) {
            let groups = self.sentence_groups(lex);
            records.extend(self.records(groups, entry, lex)?);
        }
        Ok(records)
    }

    /// Records of the sentence groups of a realization.
    ///
    /// A group without triples is logged, counted as dirty and skipped.
    pub fn records(
        &mut self,
        groups: Vec<SentenceGroup>,
        entry: &Entry,
        lex: &Lex,
    ) -> Result<Vec<Record>, Error> {
        let mut records = Vec::with_capacity(groups.len());
        for group in groups {
            match self.record(group, entry, lex) {
                Ok(record) => records.push(record),
                Err(e @ Error::EmptySubgroup { .. }) => {
                    warn!("{}, skipping", e);
                    self.dirty += 1;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(records)
    }

    /// Align the triple groups of a realization with its text and template sentences.
    pub fn sentence_groups(&mut self, lex: &Lex) -> Vec<SentenceGroup> {
        let mut triple_groups = Vec::with_capacity(lex.sorted_triples.len());
        for sentence in &lex.sorted_triples {
            let triples: Result<Vec<Triple>, Error> = sentence.iter().map(|t| t.parse()).collect();
            match triples {
                Ok(triples) if !triples.is_empty() => triple_groups.push(triples),
                Ok(_) => self.dirty += 1,
                Err(e) => {
                    debug!("{:?} lex {:?}: {}", self.path, lex.lid, e);
                    self.dirty += 1;
                }
            }
        }
        if triple_groups.is_empty() {
            return Vec::new();
        }

        let (text, template) = match (&lex.text, &lex.template) {
            (Some(text), Some(template)) => (text, template),
            _ => {
                self.dirty += 1;
                return Vec::new();
            }
        };
        let text = self.sentence_fixer.transform_own(text.clone());

        let (texts, templates) = if triple_groups.len() == 1 {
            (vec![text], vec![template.clone()])
        } else {
            let texts = self
                .segmentation
                .transform_own(self.nlp.sent_tokenize(&text));
            (texts, self.nlp.sent_tokenize(template))
        };

        if texts.len() != triple_groups.len() || templates.len() != triple_groups.len() {
            self.dirty += 1;
            return Vec::new();
        }

        triple_groups
            .into_iter()
            .zip(texts)
            .zip(templates)
            .map(|((triples, text), template)| SentenceGroup {
                triples,
                text,
                template,
            })
            .collect()
    }

    /// Delexicalize, tokenize and normalize a sentence group.
    pub fn record(&self, group: SentenceGroup, entry: &Entry, lex: &Lex) -> Result<Record, Error> {
        if group.triples.is_empty() {
            return Err(Error::EmptySubgroup {
                file: self.path.clone(),
                entry: entry.eid.clone(),
                lex: lex.lid.clone(),
            });
        }

        let mut template = self.template_fixer.transform_own(group.template);
        let entity_map = entry.entity_map.restrict(&template, &group.triples);

        for (placeholder, _) in entity_map.iter() {
            template = template.replace(placeholder, &clean_term(placeholder));
        }
        for role in ROLES {
            template = template.replace(&format!("{}-", role), &format!("{}_", role));
        }

        let target = self.nlp.word_tokenize(&template);
        let target_txt = self.nlp.word_tokenize(&group.text);
        let triples: Vec<Triple> = group.triples.iter().map(Triple::normalized).collect();

        Ok(Record::new(
            &triples,
            target,
            target_txt,
            ner2ent(&entity_map),
        ))
    }
}

fn ner2ent(entity_map: &EntityMap) -> BTreeMap<String, String> {
    entity_map
        .iter()
        .map(|(placeholder, entity)| (clean_term(placeholder), clean_term(entity)))
        .collect()
}
