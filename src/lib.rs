/*! # webnlg-reader

Cleaning and normalization of the delexicalized WebNLG corpus into sentence-level
(triples, template, text, entity map) training records.

- [patching]: in-place repair of known malformed corpus lines,
- [reader]: XML parsing, record extraction and serialization of corpus splits,
- [fixing]: template, sentence segmentation and spelling repairs,
- [rephrase]: alternate surface forms of entities,
- [nlp]: tokenization and sentence splitting.
!*/
pub mod error;
pub mod fixing;
pub mod nlp;
pub mod patching;
pub mod pipeline;
pub mod reader;
pub mod rephrase;
