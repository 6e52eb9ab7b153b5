//! Sentence segmentation repair.
//!
//! The sentence splitter fails on a fixed, enumerable set of texts of the corpus.
//! Rather than trying to fix the splitter, the exact wrong splits are looked up
//! and replaced by the right ones.
use std::collections::HashMap;

use lazy_static::lazy_static;

use super::segmentation_table::SEGMENTATION_REPAIRS;
use super::transform::Transform;

lazy_static! {
    static ref REPAIRS: HashMap<Vec<String>, &'static [&'static str]> = SEGMENTATION_REPAIRS
        .iter()
        .map(|(wrong, right)| (wrong.iter().map(|s| s.to_string()).collect(), *right))
        .collect();
}

/// Replaces known wrong sentence splits by their correct counterpart.
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentationRepair;

impl SegmentationRepair {
    /// Get the corrected split of `sentences`, if it is a known wrong split.
    pub fn lookup(&self, sentences: &[String]) -> Option<&'static [&'static str]> {
        REPAIRS.get(sentences).copied()
    }
}

impl Transform<Vec<String>> for SegmentationRepair {
    fn transform_own(&self, sentences: Vec<String>) -> Vec<String> {
        match self.lookup(&sentences) {
            Some(right) => right.iter().map(|s| s.to_string()).collect(),
            None => sentences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(sentences: &[&str]) -> Vec<String> {
        sentences.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn alan_bean_bs() {
        let wrong = owned(&["Alan Bean was originally from Wheeler, Texas and graduated from UT Austin in 1955 with a B.S. He went on to work as a test pilot and became a crew member of the Apollo 12 mission before he @ retired ."]);
        let expected = owned(&[
            "Alan Bean was originally from Wheeler, Texas and graduated from UT Austin in 1955 with a B.S.",
            "He went on to work as a test pilot and became a crew member of the Apollo 12 mission before he @ retired .",
        ]);

        let repaired = SegmentationRepair.transform_own(wrong);
        assert_eq!(repaired, expected);
    }

    #[test]
    fn merges_oversplit() {
        let wrong = owned(&[
            "American @ Buzz Aldrin was born in Glen Ridge, New Jersey on January 20th, 1930.",
            "In 1963 he graduated from MIT with a Sc.",
            "D then became a fighter pilot and later a member of the Apollo 11 crew.",
        ]);
        let repaired = SegmentationRepair.transform_own(wrong);
        assert_eq!(repaired.len(), 2);
        assert_eq!(
            repaired[1],
            "In 1963 he graduated from MIT with a Sc. D then became a fighter pilot and later a member of the Apollo 11 crew."
        );
    }

    #[test]
    fn partial_match_is_not_repaired() {
        // only the first sentence of a known wrong split
        let sentences = owned(&["United States @ test pilot @ Alan Bean was born in Wheeler, Texas."]);
        assert_eq!(SegmentationRepair.transform_own(sentences.clone()), sentences);
    }

    #[test]
    fn table_has_no_duplicates() {
        assert_eq!(REPAIRS.len(), SEGMENTATION_REPAIRS.len());
    }

    #[test]
    fn repairs_change_the_split() {
        for (wrong, right) in SEGMENTATION_REPAIRS {
            assert_ne!(wrong.len(), right.len());
        }
    }
}
