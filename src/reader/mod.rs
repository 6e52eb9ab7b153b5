/*! WebNLG corpus reading.

A split of the corpus (`<src>/train`, `<src>/dev`, `<src>/test`) is a tree of XML benchmark files.
[CorpusReader] patches them, extracts sentence-level [Record]s from each one with a [FileReader]
and writes them as a json array.

```no_run
use std::path::PathBuf;
use webnlg_reader::pipeline::Pipeline;
use webnlg_reader::reader::{CorpusReader, DataSetType};

let reader = CorpusReader::new(PathBuf::from("raw"), PathBuf::from("out"), DataSetType::Dev);
let records = reader.run().unwrap(); // writes out/valid.json
println!("{} records", records.len());
```
!*/
mod corpus;
mod entry;
mod extractor;
mod record;
mod xml;

pub use corpus::{recurse_files, CorpusReader, DataSetType};
pub use entry::{clean_term, EntityMap, Entry, Lex, Triple};
pub use extractor::{FileReader, SentenceGroup};
pub use record::Record;
pub use xml::parse_entries;
