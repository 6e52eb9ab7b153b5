//! English tokenizer.
//!
//! Sentences are cut at the boundaries found by the `sakurs` English segmenter.
//!
//! Words start from the Unicode word boundaries of the text: consecutive non-space
//! segments form a chunk, from which prefix punctuation, suffix punctuation, clitics and
//! sentence periods are peeled, before splitting on infix hyphens/slashes.
//! A chunk that is exactly a clitic (`'s`) is a single token.
//! A period is kept attached to abbreviations (`U.S.`, `Jr.`, `E.`), except on the very
//! last token of a text.
use std::{collections::HashSet, fmt, ops::Range};

use lazy_static::lazy_static;
use log::warn;
use sakurs_core::{Input, SentenceProcessor};
use unic_ucd::GeneralCategory;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

use super::Nlp;

static PREFIXES: &[&str] = &["\"", "'", "¡", "¿", "$", "£", "€"];

static SUFFIXES: &[&str] = &[",", ";", ":", "!", "?", "\"", "'", "%", "…"];

static CLITICS: &[&str] = &["n't", "n’t", "'s", "’s", "'re", "'ve", "'ll", "'d", "'m"];

lazy_static! {
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "Jr", "Sr", "Dr", "Mr", "Mrs", "Ms", "St", "Mt", "Ft", "Pa", "Co", "Corp", "Inc", "Ltd",
        "vs", "etc", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep", "Sept", "Oct",
        "Nov", "Dec", "Gen", "Gov", "Lt", "Col", "Sgt", "Capt", "Rev", "Prof",
    ]
    .into_iter()
    .collect();
}

/// Default [Nlp] implementation.
pub struct RuleTokenizer {
    sentencizer: SentenceProcessor,
}

impl RuleTokenizer {
    /// Tokenizer with an explicitly english sentence segmenter.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            sentencizer: SentenceProcessor::with_language("en")?,
        })
    }

    /// Byte ranges of the tokens of `text`.
    pub fn token_spans(&self, text: &str) -> Vec<Range<usize>> {
        let chunks = word_chunks(text);
        let nb_chunks = chunks.len();

        let mut spans = Vec::new();
        for (idx, chunk) in chunks.into_iter().enumerate() {
            split_chunk(text, chunk, idx + 1 == nb_chunks, &mut spans);
        }
        spans
    }

    pub fn tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.token_spans(text)
            .into_iter()
            .map(|span| &text[span])
            .collect()
    }
}

impl Default for RuleTokenizer {
    /// English is the segmenter's default language.
    fn default() -> Self {
        Self {
            sentencizer: SentenceProcessor::new(),
        }
    }
}

impl fmt::Debug for RuleTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTokenizer").finish()
    }
}

impl Nlp for RuleTokenizer {
    fn sent_tokenize(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let boundaries: Vec<usize> = match self.sentencizer.process(Input::from_text(text)) {
            Ok(output) => output.boundaries.into_iter().map(|b| b.offset).collect(),
            Err(e) => {
                warn!("could not segment {:?}: {}", text, e);
                Vec::new()
            }
        };
        cut_sentences(text, &boundaries)
    }

    fn word_tokenize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }
}

/// Cut `text` at the `boundaries` byte offsets, trimming sentences and dropping empty ones.
///
/// What follows the last boundary is a sentence too.
/// Offsets that are out of order or not on a char boundary are ignored.
fn cut_sentences(text: &str, boundaries: &[usize]) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for &end in boundaries.iter().chain(std::iter::once(&text.len())) {
        if end <= start {
            continue;
        }
        if let Some(sentence) = text.get(start..end) {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }
    }
    sentences
}

/// Runs of non-space word-bound segments.
fn word_chunks(text: &str) -> Vec<Range<usize>> {
    let mut chunks: Vec<Range<usize>> = Vec::new();
    let mut previous_end = None;
    for (idx, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        let end = idx + segment.len();
        match chunks.last_mut() {
            Some(chunk) if previous_end == Some(idx) => chunk.end = end,
            _ => chunks.push(idx..end),
        }
        previous_end = Some(end);
    }
    chunks
}

fn single_char(grapheme: &str) -> Option<char> {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Opening brackets and quotes, or one of [PREFIXES].
fn is_prefix(grapheme: &str) -> bool {
    PREFIXES.contains(&grapheme)
        || single_char(grapheme).map_or(false, |c| {
            matches!(
                GeneralCategory::of(c),
                GeneralCategory::OpenPunctuation | GeneralCategory::InitialPunctuation
            )
        })
}

/// Closing brackets and quotes, or one of [SUFFIXES].
fn is_suffix(grapheme: &str) -> bool {
    SUFFIXES.contains(&grapheme)
        || single_char(grapheme).map_or(false, |c| {
            matches!(
                GeneralCategory::of(c),
                GeneralCategory::ClosePunctuation | GeneralCategory::FinalPunctuation
            )
        })
}

fn is_clitic(chunk: &str) -> bool {
    let lower = chunk.to_lowercase();
    CLITICS.contains(&lower.as_str())
}

/// Split the `chunk` range of `text` into tokens, pushed into `spans`.
fn split_chunk(text: &str, chunk: Range<usize>, is_last: bool, spans: &mut Vec<Range<usize>>) {
    if is_clitic(&text[chunk.clone()]) {
        spans.push(chunk);
        return;
    }

    let offset = chunk.start;
    let graphemes: Vec<(usize, &str)> = text[chunk]
        .grapheme_indices(true)
        .map(|(idx, g)| (idx + offset, g))
        .collect();
    let end_of = |idx: usize| graphemes[idx].0 + graphemes[idx].1.len();

    let mut lo = 0;
    let mut hi = graphemes.len();

    while hi - lo > 1 && is_prefix(graphemes[lo].1) {
        spans.push(graphemes[lo].0..end_of(lo));
        lo += 1;
    }

    // collected from the end
    let mut suffixes = Vec::new();
    while hi - lo > 1 {
        let body = &text[graphemes[lo].0..end_of(hi - 1)];
        let last = graphemes[hi - 1].1;

        let peeled = if let Some(clitic) = CLITICS
            .iter()
            .find(|c| body.len() > c.len() && body.to_lowercase().ends_with(*c))
        {
            clitic.graphemes(true).count()
        } else if is_suffix(last) {
            1
        } else if last == "." {
            let stem = &body[..body.len() - 1];
            if body.len() > 3 && body.ends_with("...") {
                3
            } else if is_acronym(stem) || (!is_last && is_abbreviation(stem)) {
                0
            } else {
                1
            }
        } else {
            0
        };

        if peeled == 0 || peeled >= hi - lo {
            break;
        }
        suffixes.push(graphemes[hi - peeled].0..end_of(hi - 1));
        hi -= peeled;
    }

    if hi > lo {
        split_infixes(text, graphemes[lo].0..end_of(hi - 1), spans);
    }
    spans.extend(suffixes.into_iter().rev());
}

/// `U.S`, `D.C`
fn is_acronym(stem: &str) -> bool {
    stem.contains('.') && stem.chars().last().map_or(false, char::is_alphabetic)
}

/// `Jr`, `E`: a period following these is part of the token.
fn is_abbreviation(stem: &str) -> bool {
    single_char(stem).map_or(false, char::is_alphabetic) || ABBREVIATIONS.contains(stem)
}

/// Split hyphens between letters (`well-known`) and slashes/colons between a letter or digit
/// and a letter (`km/h`).
fn split_infixes(text: &str, body: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let chars: Vec<(usize, char)> = text[body.clone()]
        .char_indices()
        .map(|(idx, c)| (idx + body.start, c))
        .collect();

    let mut start = body.start;
    for window in chars.windows(3) {
        let (prev, (idx, c), next) = (window[0].1, window[1], window[2].1);
        let is_infix = match c {
            '-' | '–' | '—' => prev.is_alphabetic() && next.is_alphabetic(),
            '/' | ':' => prev.is_alphanumeric() && next.is_alphabetic(),
            _ => false,
        };
        if is_infix {
            if idx > start {
                spans.push(start..idx);
            }
            spans.push(idx..idx + c.len_utf8());
            start = idx + c.len_utf8();
        }
    }
    if body.end > start {
        spans.push(start..body.end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation() {
        let t = RuleTokenizer::default();
        assert_eq!(
            t.word_tokenize("Aarhus Airport serves the city of Aarhus, Denmark."),
            "Aarhus Airport serves the city of Aarhus , Denmark ."
        );
        assert_eq!(
            t.word_tokenize("It's 32.2 m long (about 100 ft)."),
            "It 's 32.2 m long ( about 100 ft ) ."
        );
        assert_eq!(
            t.word_tokenize("It is called «Tempodrom»."),
            "It is called « Tempodrom » ."
        );
    }

    #[test]
    fn collapses_whitespace() {
        let t = RuleTokenizer::default();
        assert_eq!(t.word_tokenize("  AGENT_1   is\n p  B . "), "AGENT_1 is p B .");
    }

    #[test]
    fn chunks_follow_word_bounds() {
        let text = " Aarhus Airport's  runway,\tAGENT-1 ";
        let chunks: Vec<&str> = word_chunks(text)
            .into_iter()
            .map(|chunk| &text[chunk])
            .collect();
        assert_eq!(chunks, vec!["Aarhus", "Airport's", "runway,", "AGENT-1"]);
    }

    #[test]
    fn abbreviations() {
        let t = RuleTokenizer::default();
        assert_eq!(t.word_tokenize("The U.S. is big."), "The U.S. is big .");
        assert_eq!(
            t.word_tokenize("Edwin E. Aldrin Jr. was born."),
            "Edwin E. Aldrin Jr. was born ."
        );
        // last token of the text
        assert_eq!(t.word_tokenize("A is p B."), "A is p B .");
        assert_eq!(t.word_tokenize("It is 2777.0."), "It is 2777.0 .");
        assert_eq!(t.word_tokenize("in Washington D.C."), "in Washington D.C.");
    }

    #[test]
    fn clitics_and_infixes() {
        let t = RuleTokenizer::default();
        assert_eq!(t.word_tokenize("It isn't well-known."), "It is n't well - known .");
        assert_eq!(t.word_tokenize("38.892 km/h"), "38.892 km / h");
        // placeholders are not split
        assert_eq!(t.word_tokenize("AGENT-1 is PATIENT-2."), "AGENT-1 is PATIENT-2 .");
    }

    #[test]
    fn standalone_clitics() {
        let t = RuleTokenizer::default();
        assert_eq!(
            t.word_tokenize("AGENT-1 's runway length is PATIENT-1 ."),
            "AGENT-1 's runway length is PATIENT-1 ."
        );
        assert_eq!(
            t.word_tokenize("they 're here and we 'VE left , I 'm sure"),
            "they 're here and we 'VE left , I 'm sure"
        );
        assert_eq!(t.word_tokenize("AGENT-1 ’s"), "AGENT-1 ’s");
        // a quoted word is still unquoted
        assert_eq!(t.word_tokenize("'sic'"), "' sic '");
    }

    #[test]
    fn sentences() {
        let t = RuleTokenizer::default();
        assert_eq!(
            t.sent_tokenize("AGENT-1 is in PATIENT-1 . AGENT-1 has PATIENT-2 ."),
            vec!["AGENT-1 is in PATIENT-1 .", "AGENT-1 has PATIENT-2 ."]
        );
        assert_eq!(
            t.sent_tokenize("Aarhus Airport serves Aarhus. Its runway length is 2777.0."),
            vec!["Aarhus Airport serves Aarhus.", "Its runway length is 2777.0."]
        );
        assert_eq!(
            t.sent_tokenize("Then he left!  Did he?"),
            vec!["Then he left!", "Did he?"]
        );
    }

    #[test]
    fn explicit_english() {
        let t = RuleTokenizer::new().unwrap();
        assert_eq!(
            t.sent_tokenize("Alpha is p Bravo. It is q Charlie-Delta."),
            vec!["Alpha is p Bravo.", "It is q Charlie-Delta."]
        );
    }

    #[test]
    fn cut_at_boundaries() {
        let text = "One. Two.  Three";
        assert_eq!(cut_sentences(text, &[4, 9]), vec!["One.", "Two.", "Three"]);
        // trailing boundary, duplicates and out of order offsets
        assert_eq!(
            cut_sentences(text, &[4, 4, 2, 9, text.len()]),
            vec!["One.", "Two.", "Three"]
        );
        assert_eq!(cut_sentences(text, &[]), vec![text]);
        // not a char boundary
        assert_eq!(cut_sentences("é. B", &[1, 3]), vec!["é.", "B"]);
    }

    #[test]
    fn empty() {
        let t = RuleTokenizer::default();
        assert!(t.sent_tokenize("   ").is_empty());
        assert_eq!(t.word_tokenize(""), "");
    }
}
