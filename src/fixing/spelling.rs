//! Misspelling correction of realization texts.
//!
//! A misspelling is only corrected when it stands as a whole word, that is when it is
//! delimited by a splittable character or by the start/end of the text.
use std::borrow::Cow;

use regex::Regex;

use crate::error::Error;

use super::misspellings::MISSPELLINGS;
use super::transform::Transform;

/// Characters a misspelled word can be delimited by.
const SPLITTABLES: &str = r#" .,:\-'()?!&;""#;

/// Upper bound of correction passes. Adjacent misspellings sharing a delimiter
/// need one pass each.
const MAX_PASSES: usize = 4;

#[derive(Debug, Clone)]
pub struct SpellingFixer {
    fixes: Vec<(Regex, String)>,
}

impl SpellingFixer {
    /// Build a fixer from (misspelling, fix) pairs.
    pub fn new<I, S>(fixes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let fixes = fixes
            .into_iter()
            .map(|(wrong, right)| {
                let pattern = format!(
                    "(^|[{sp}]){}([{sp}]|$)",
                    regex::escape(wrong.as_ref()),
                    sp = SPLITTABLES
                );
                let replacement = format!("${{1}}{}${{2}}", right.as_ref().replace('$', "$$"));
                Ok((Regex::new(&pattern)?, replacement))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self { fixes })
    }

    /// Fixer with the misspellings known to be in the corpus.
    pub fn from_corpus() -> Result<Self, Error> {
        Self::new(MISSPELLINGS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }
}

impl Transform<String> for SpellingFixer {
    fn transform_own(&self, mut text: String) -> String {
        for (re, replacement) in &self.fixes {
            for _ in 0..MAX_PASSES {
                let fixed = match re.replace_all(&text, replacement.as_str()) {
                    Cow::Borrowed(_) => break,
                    Cow::Owned(fixed) => fixed,
                };
                text = fixed;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_words_only() {
        let f = SpellingFixer::new(vec![("lenght", "length")]).unwrap();
        assert_eq!(
            f.transform_own("The runway lenght is 2 .".to_string()),
            "The runway length is 2 ."
        );
        // not a whole word
        assert_eq!(
            f.transform_own("lenghts of runways".to_string()),
            "lenghts of runways"
        );
    }

    #[test]
    fn text_boundaries() {
        let f = SpellingFixer::new(vec![("whic", "which")]).unwrap();
        assert_eq!(f.transform_own("whic".to_string()), "which");
        assert_eq!(f.transform_own("(whic)".to_string()), "(which)");
    }

    #[test]
    fn adjacent_misspellings() {
        let f = SpellingFixer::new(vec![("tboh", "both")]).unwrap();
        assert_eq!(f.transform_own("tboh tboh tboh".to_string()), "both both both");
    }

    #[test]
    fn dollar_in_fix_is_literal() {
        let f = SpellingFixer::new(vec![("usd", "$1")]).unwrap();
        assert_eq!(f.transform_own("5 usd".to_string()), "5 $1");
    }

    #[test]
    fn corpus_table() {
        let f = SpellingFixer::from_corpus().unwrap();
        assert_eq!(f.len(), 80);
        assert!(MISSPELLINGS.iter().all(|(wrong, _)| *wrong != "sequeled"));
        assert_eq!(
            f.transform_own("It was oprated by the youthclub .".to_string()),
            "It was operated by the youth club ."
        );
    }
}
