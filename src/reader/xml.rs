//! WebNLG XML parsing.
//!
//! Only the parts of the benchmark files that records are built from are kept:
//!
//! ```xml
//! <entry category="Airport" eid="Id1" size="1">
//!   <modifiedtripleset>
//!     <mtriple>Aarhus_Airport | cityServed | "Aarhus, Denmark"</mtriple>
//!   </modifiedtripleset>
//!   <lex comment="good" lid="Id1">
//!     <sortedtripleset>
//!       <sentence ID="1">
//!         <striple>Aarhus_Airport | cityServed | "Aarhus, Denmark"</striple>
//!       </sentence>
//!     </sortedtripleset>
//!     <text>The Aarhus is the airport of Aarhus, Denmark.</text>
//!     <template>The AGENT-1 is the airport of PATIENT-1 .</template>
//!   </lex>
//!   <entitymap>
//!     <entity>AGENT-1 | Aarhus_Airport</entity>
//!   </entitymap>
//! </entry>
//! ```
//!
//! Malformed triples and entity mappings of an entry are logged and skipped.
//! Sorted triples are kept raw, their validity being checked during record extraction.
use log::warn;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::entry::{EntityMap, Entry, Lex};
use crate::error::Error;

/// Parse every `<entry>` of a benchmark file.
pub fn parse_entries(content: &str) -> Result<Vec<Entry>, Error> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut entries = Vec::new();
    let mut entry: Option<Entry> = None;
    let mut lex: Option<Lex> = None;

    // names of the currently open elements
    let mut path: Vec<String> = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e);
                let parent = path.last().map(String::as_str).unwrap_or_default();
                match (parent, name.as_str()) {
                    (_, "entry") => entry = Some(entry_from_attributes(&e)?),
                    ("entry", "lex") => lex = Some(lex_from_attributes(&e)?),
                    ("sortedtripleset", "sentence") => {
                        if let Some(lex) = lex.as_mut() {
                            lex.sorted_triples.push(Vec::new());
                        }
                    }
                    _ => (),
                }
                text.clear();
                path.push(name);
            }
            Event::Empty(e) => {
                let name = element_name(&e);
                let parent = path.last().map(String::as_str).unwrap_or_default();
                match (parent, name.as_str()) {
                    ("entry", "lex") => {
                        if let Some(entry) = entry.as_mut() {
                            entry.lexes.push(lex_from_attributes(&e)?);
                        }
                    }
                    // a sentence that verbalizes no triple
                    ("sortedtripleset", "sentence") => {
                        if let Some(lex) = lex.as_mut() {
                            lex.sorted_triples.push(Vec::new());
                        }
                    }
                    _ => (),
                }
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
            Event::End(_) => {
                let name = path.pop().unwrap_or_default();
                let parent = path.last().map(String::as_str).unwrap_or_default();
                let value = std::mem::take(&mut text);
                let value = value.trim();

                match (parent, name.as_str()) {
                    ("modifiedtripleset", "mtriple") => {
                        if let Some(entry) = entry.as_mut() {
                            match value.parse() {
                                Ok(triple) => entry.triples.push(triple),
                                Err(e) => warn!("entry {}: {}", entry.eid, e),
                            }
                        }
                    }
                    ("entitymap", "entity") => {
                        if let Some(entry) = entry.as_mut() {
                            match EntityMap::parse_mapping(value) {
                                Ok((placeholder, entity)) => {
                                    entry.entity_map.insert(placeholder, entity)
                                }
                                Err(e) => warn!("entry {}: {}", entry.eid, e),
                            }
                        }
                    }
                    ("sentence", "striple") => {
                        if let Some(sentence) = lex.as_mut().and_then(|l| l.sorted_triples.last_mut())
                        {
                            sentence.push(value.to_string());
                        }
                    }
                    ("lex", "text") => set_field(&mut lex, |l| &mut l.text, value),
                    ("lex", "template") => set_field(&mut lex, |l| &mut l.template, value),
                    ("entry", "lex") => {
                        if let (Some(entry), Some(lex)) = (entry.as_mut(), lex.take()) {
                            entry.lexes.push(lex);
                        }
                    }
                    (_, "entry") => {
                        if let Some(entry) = entry.take() {
                            entries.push(entry);
                        }
                    }
                    _ => (),
                }
            }
            Event::Eof => break,
            _ => (),
        }
    }

    Ok(entries)
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn attribute(e: &BytesStart, name: &str) -> Result<Option<String>, Error> {
    match e.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn entry_from_attributes(e: &BytesStart) -> Result<Entry, Error> {
    let eid = attribute(e, "eid")?.unwrap_or_default();
    let size = match attribute(e, "size")? {
        Some(size) => Some(
            size.parse()
                .map_err(|_| Error::Custom(format!("entry {}: invalid size {:?}", eid, size)))?,
        ),
        None => None,
    };

    Ok(Entry {
        category: attribute(e, "category")?,
        size,
        eid,
        ..Default::default()
    })
}

fn lex_from_attributes(e: &BytesStart) -> Result<Lex, Error> {
    Ok(Lex {
        lid: attribute(e, "lid")?,
        comment: attribute(e, "comment")?,
        ..Default::default()
    })
}

/// Empty elements are considered absent.
fn set_field<F>(lex: &mut Option<Lex>, field: F, value: &str)
where
    F: FnOnce(&mut Lex) -> &mut Option<String>,
{
    if let Some(lex) = lex.as_mut() {
        if !value.is_empty() {
            *field(lex) = Some(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::entry::Triple;

    const BENCHMARK: &str = r#"<?xml version="1.0" ?>
<benchmark>
  <entries>
    <entry category="Airport" eid="Id1" size="1">
      <originaltripleset>
        <otriple>Aarhus_Airport | cityServed | "Aarhus, Denmark"@en</otriple>
      </originaltripleset>
      <modifiedtripleset>
        <mtriple>Aarhus_Airport | cityServed | "Aarhus, Denmark"</mtriple>
      </modifiedtripleset>
      <lex comment="good" lid="Id1">
        <sortedtripleset>
          <sentence ID="1">
            <striple>Aarhus_Airport | cityServed | "Aarhus, Denmark"</striple>
          </sentence>
        </sortedtripleset>
        <references>
          <reference entity="Aarhus_Airport" number="1" tag="AGENT-1" type="name">Aarhus Airport</reference>
        </references>
        <text>The Aarhus is the airport of Aarhus, Denmark.</text>
        <template>The AGENT-1 is the airport of PATIENT-1 .</template>
        <lexicalization>The AGENT-1 VP[aspect=simple,tense=present,voice=active,person=3rd,number=singular] be the airport of PATIENT-1 .</lexicalization>
      </lex>
      <lex comment="bad" lid="Id2">
        <sortedtripleset>
          <sentence ID="1"/>
        </sortedtripleset>
        <text/>
        <template></template>
      </lex>
      <entitymap>
        <entity>AGENT-1 | Aarhus_Airport</entity>
        <entity>PATIENT-1 | "Aarhus, Denmark"</entity>
        <entity>not a mapping</entity>
      </entitymap>
    </entry>
    <entry category="Astronaut" eid="Id2" size="1">
      <modifiedtripleset>
        <mtriple>Alan_Bean | occupation | Test_pilot &amp; astronaut</mtriple>
        <mtriple>broken</mtriple>
      </modifiedtripleset>
      <lex comment="good" lid="Id1"/>
      <entitymap/>
    </entry>
  </entries>
</benchmark>"#;

    #[test]
    fn entries() {
        let entries = parse_entries(BENCHMARK).unwrap();
        assert_eq!(entries.len(), 2);

        let entry = &entries[0];
        assert_eq!(entry.eid, "Id1");
        assert_eq!(entry.category.as_deref(), Some("Airport"));
        assert_eq!(entry.size, Some(1));
        assert_eq!(
            entry.triples,
            vec![Triple::new("Aarhus_Airport", "cityServed", "\"Aarhus, Denmark\"")]
        );
        assert_eq!(entry.entity_map.len(), 2);
        assert_eq!(entry.entity_map.get("PATIENT-1"), Some("\"Aarhus, Denmark\""));
    }

    #[test]
    fn lexes() {
        let entries = parse_entries(BENCHMARK).unwrap();
        let lexes = &entries[0].lexes;
        assert_eq!(lexes.len(), 2);

        let good = &lexes[0];
        assert_eq!(good.lid.as_deref(), Some("Id1"));
        assert!(!good.is_bad());
        assert_eq!(
            good.sorted_triples,
            vec![vec!["Aarhus_Airport | cityServed | \"Aarhus, Denmark\"".to_string()]]
        );
        assert_eq!(
            good.text.as_deref(),
            Some("The Aarhus is the airport of Aarhus, Denmark.")
        );
        assert_eq!(
            good.template.as_deref(),
            Some("The AGENT-1 is the airport of PATIENT-1 .")
        );

        let bad = &lexes[1];
        assert!(bad.is_bad());
        assert_eq!(bad.sorted_triples, vec![Vec::<String>::new()]);
        assert_eq!(bad.text, None);
        assert_eq!(bad.template, None);
    }

    #[test]
    fn escapes_and_empty_elements() {
        let entries = parse_entries(BENCHMARK).unwrap();
        let entry = &entries[1];
        assert_eq!(
            entry.triples,
            vec![Triple::new("Alan_Bean", "occupation", "Test_pilot & astronaut")]
        );
        assert!(entry.entity_map.is_empty());
        assert_eq!(entry.lexes.len(), 1);
        assert!(entry.lexes[0].sorted_triples.is_empty());
    }

    #[test]
    fn invalid_xml() {
        assert!(parse_entries("<entry eid=\"1\"><lex></entry>").is_err());
    }
}
