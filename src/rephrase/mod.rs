/*! Entity surface forms

Entities of the entity maps are canonical strings (`united states`, `2777.0 (metres)`),
while texts use acronyms, unit abbreviations or drop parenthetical asides.

- [rephrase] generates every plausible alternate form of an entity,
- [rephrase_if_must] generates the narrower forms obtained by dropping qualifiers and asides.

Both are single-pass: each rule sees the phrasings generated by the previous ones, but rules
are not iterated to a fixed point (an acronym substitution is never combined with a later
unit expansion of the same phrasing, for example).
!*/
mod number;

use std::collections::BTreeSet;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

use number::{numerals, UnitForms};

/// Canonical phrases and their abbreviations, applied in this order.
static REPHRASINGS: &[(&str, &[&str])] = &[
    (
        "united states",
        &["u.s.", "u.s.a.", "us", "usa", "america", "american"],
    ),
    ("united kingdom", &["u.k.", "uk"]),
    ("united states air force", &["usaf", "u.s.a.f"]),
    ("new york", &["ny", "n.y."]),
    ("new jersey", &["nj", "n.j."]),
    ("f.c.", &["fc"]),
    ("submarine", &["sub"]),
    ("world war ii", &["ww ii", "second world war"]),
    ("world war i", &["ww i", "first world war"]),
    ("greece", &["greek"]),
    ("canada", &["canadian"]),
    ("italy", &["italian"]),
    ("america", &["american"]),
    ("india", &["indian"]),
    ("singing", &["sings"]),
    ("conservative party (uk)", &["tories"]),
    ("ethiopia", &["ethiopian"]),
];

/// Qualifiers that can be dropped or shortened.
static MUST_REPHRASINGS: &[(&str, &str)] = &[
    (" language", ""),
    (" music", ""),
    ("kingdom of ", ""),
    ("new york city", "new york"),
    ("secretary of state of vermont", "secretary of vermont"),
];

lazy_static! {
    static ref NUMBER: Regex =
        Regex::new(r"^(-?([0-9]+|[0-9]{1,3}(,[0-9]{3})*)(\.[0-9]+)?)( (\((.*?)\)))?$")
            .expect("invalid number pattern");
    static ref TRAILING_PARENTHESIS: Regex =
        Regex::new(r"^(.* ?) \((.* ?)\)$").expect("invalid parenthesis pattern");
    static ref INNER_PARENTHESIS: Regex =
        Regex::new(r"^(.*?) \((.*?)\)( .*)?$").expect("invalid parenthesis pattern");
}

/// Every plausible surface form of `entity`, `entity` included.
///
/// Errors if `entity` is a number with a unit that is not known.
pub fn rephrase(entity: &str) -> Result<BTreeSet<String>, Error> {
    let mut phrasings = BTreeSet::new();
    phrasings.insert(entity.to_string());

    // acronyms, demonyms
    for (canonical, abbreviations) in REPHRASINGS {
        let matching: Vec<String> = phrasings
            .iter()
            .filter(|p| p.contains(canonical))
            .cloned()
            .collect();
        for p in matching {
            for abbreviation in abbreviations.iter() {
                phrasings.insert(p.replace(canonical, abbreviation));
            }
        }
    }

    // "a/b/c" -> every permutation
    for p in snapshot(&phrasings) {
        let parts: Vec<&str> = p.split('/').collect();
        if parts.len() < 2 {
            continue;
        }
        for permutation in parts.iter().permutations(parts.len()) {
            phrasings.insert(permutation.into_iter().join("/"));
        }
    }

    // "number (unit)" -> "number unit", "number unit-short"
    for p in snapshot(&phrasings) {
        if let Some(caps) = NUMBER.captures(&p) {
            let number: f64 = caps[1]
                .replace(',', "")
                .parse()
                .map_err(|e| Error::Custom(format!("{:?}: {}", &caps[1], e)))?;
            let numerals = numerals(number);

            match caps.get(7).map(|m| m.as_str()).filter(|u| !u.is_empty()) {
                Some(unit) => {
                    let forms = UnitForms::lookup(unit)?;
                    for numeral in &numerals {
                        if let Some(abbreviation) = forms.abbreviation {
                            phrasings.insert(format!("{} {}", numeral, abbreviation));
                            phrasings.insert(format!("{}{}", numeral, abbreviation));
                        }
                        for word in &forms.words {
                            phrasings.insert(format!("{} {}", numeral, word));
                        }
                    }
                }
                None => phrasings.extend(numerals),
            }
        }
    }

    // "word1 (word2)" -> "word1 word2", "word2 word1"
    for p in snapshot(&phrasings) {
        if let Some(caps) = TRAILING_PARENTHESIS.captures(&p) {
            phrasings.insert(format!("{} {}", &caps[1], &caps[2]));
            phrasings.insert(format!("{} {}", &caps[2], &caps[1]));
        }
    }

    phrasings.remove("");
    Ok(phrasings)
}

/// Narrower surface forms of `entity`, obtained by dropping qualifiers and parenthetical asides.
/// Never contains the empty string.
pub fn rephrase_if_must(entity: &str) -> BTreeSet<String> {
    let mut phrasings = BTreeSet::new();
    phrasings.insert(entity.to_string());

    for (from, to) in MUST_REPHRASINGS {
        let matching: Vec<String> = phrasings
            .iter()
            .filter(|p| p.contains(from))
            .cloned()
            .collect();
        for p in matching {
            phrasings.insert(p.replace(from, to));
        }
    }

    // "word1 (word2)" -> "word1"
    for p in snapshot(&phrasings) {
        if let Some(caps) = TRAILING_PARENTHESIS.captures(&p) {
            phrasings.insert(caps[1].to_string());
        }
    }

    // "word1 (word2) word3" -> "word1 word3"
    for p in snapshot(&phrasings) {
        if let Some(caps) = INNER_PARENTHESIS.captures(&p) {
            if let Some(rest) = caps.get(3) {
                phrasings.insert(format!("{}{}", &caps[1], rest.as_str()));
            }
        }
    }

    phrasings.remove("");
    phrasings
}

fn snapshot(phrasings: &BTreeSet<String>) -> Vec<String> {
    phrasings.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_itself() {
        for entity in ["Aarhus Airport", "2777.0 (metres)", "a/b", "united states"] {
            let phrasings = rephrase(entity).unwrap();
            assert!(phrasings.contains(entity));
            assert!(phrasings.iter().all(|p| !p.is_empty()));
        }
    }

    #[test]
    fn metres() {
        let phrasings = rephrase("2777.0 (metres)").unwrap();
        for expected in [
            "2777.0 m",
            "2777.0m",
            "2777.0 metres",
            "2,777.0 metres",
            "2777 m",
            "2777 meters",
            "2,777 meters",
        ] {
            assert!(phrasings.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn bare_number() {
        let phrasings = rephrase("12000.0").unwrap();
        for expected in ["12000.0", "12,000.0", "12000", "12,000"] {
            assert!(phrasings.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn grouped_number() {
        let phrasings = rephrase("1,000 (days)").unwrap();
        assert!(phrasings.contains("1000 days"));
        assert!(phrasings.contains("1,000.0 days"));
    }

    #[test]
    fn speed_units() {
        let phrasings = rephrase("7.5 (kilometreperseconds)").unwrap();
        assert!(phrasings.contains("7.5 km/s"));
        assert!(phrasings.contains("7.5 kilometres per second"));
        // not integral
        assert!(!phrasings.contains("7 km/s"));
    }

    #[test]
    fn unknown_unit() {
        assert!(matches!(
            rephrase("12.0 (furlongs)"),
            Err(Error::UnknownUnit(u)) if u == "furlongs"
        ));
    }

    #[test]
    fn acronyms() {
        let phrasings = rephrase("united states air force").unwrap();
        assert!(phrasings.contains("usaf"));
        assert!(phrasings.contains("us air force"));
        assert!(phrasings.contains("u.s.a. air force"));
    }

    #[test]
    fn slash_permutations() {
        let phrasings = rephrase("a/b/c").unwrap();
        for expected in ["a/b/c", "a/c/b", "b/a/c", "b/c/a", "c/a/b", "c/b/a"] {
            assert!(phrasings.contains(expected));
        }
        assert_eq!(phrasings.len(), 6);
    }

    #[test]
    fn parenthesis_reordering() {
        let phrasings = rephrase("Turkey (country)").unwrap();
        assert!(phrasings.contains("Turkey country"));
        assert!(phrasings.contains("country Turkey"));
    }

    #[test]
    fn must_parenthesis_drop() {
        let phrasings = rephrase_if_must("New York City (NYC)");
        assert!(phrasings.contains("New York City"));
        assert!(phrasings.contains("New York City (NYC)"));
        assert!(!phrasings.contains(""));
    }

    #[test]
    fn must_inner_parenthesis() {
        let phrasings = rephrase_if_must("Ataturk Monument (Izmir) statue");
        assert!(phrasings.contains("Ataturk Monument statue"));
    }

    #[test]
    fn must_qualifiers() {
        let phrasings = rephrase_if_must("english language");
        assert!(phrasings.contains("english"));

        let phrasings = rephrase_if_must("new york city");
        assert!(phrasings.contains("new york"));
    }

    #[test]
    fn must_never_empty() {
        let phrasings = rephrase_if_must("(aside)");
        assert!(phrasings.iter().all(|p| !p.is_empty()));
    }
}
