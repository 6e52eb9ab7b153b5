/*! Tokenization and sentence splitting.

[Nlp] is what record extraction needs from an NLP toolkit. [RuleTokenizer] is the
built-in implementation, cutting sentences with the `sakurs` segmenter; its failures on the
corpus are corrected by [crate::fixing::SegmentationRepair].
!*/
mod tokenizer;

pub use tokenizer::RuleTokenizer;

pub trait Nlp {
    /// Split `text` into trimmed sentences.
    fn sent_tokenize(&self, text: &str) -> Vec<String>;

    /// Collapse whitespace, tokenize and join tokens with a single space.
    fn word_tokenize(&self, text: &str) -> String;
}
