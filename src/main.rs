//! # webnlg-reader
//!
//! Reads the delexicalized WebNLG corpus into sentence-level training records.
//!
//! ```sh
//! webnlg-reader 0.1.0
//! WebNLG corpus cleaning tool.
//!
//! USAGE:
//!     webnlg-reader <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help         Prints this message or the help of the given subcommand(s)
//!     patch        Fix known malformed lines of a raw corpus, in place
//!     read         Read, clean and tokenize corpus splits into json files
//!     rephrase     Print the surface forms of an entity
//! ```
use structopt::StructOpt;

use webnlg_reader::error::Error;
use webnlg_reader::fixing::SpellingFixer;
use webnlg_reader::nlp::RuleTokenizer;
use webnlg_reader::patching::LinePatcher;
use webnlg_reader::pipeline::Pipeline;
use webnlg_reader::reader::{recurse_files, CorpusReader, DataSetType};
use webnlg_reader::rephrase::{rephrase, rephrase_if_must};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::WebNlgReader::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::WebNlgReader::Read(r) => {
            let splits = if r.splits.is_empty() {
                DataSetType::ALL.to_vec()
            } else {
                r.splits
            };

            for split in splits {
                let spelling = if r.fix_spelling {
                    Some(SpellingFixer::from_corpus()?)
                } else {
                    None
                };
                let reader = CorpusReader::new(r.src.clone(), r.dst.clone(), split)
                    .with_nlp(RuleTokenizer::new()?)
                    .with_patching(!r.no_patch)
                    .with_spelling_fix(spelling);
                let records = reader.run()?;
                info!("{}: {} records in {:?}", split, records.len(), reader.output_path());
            }
        }

        cli::WebNlgReader::Patch(p) => {
            let files = recurse_files(&p.src)?;
            let patcher = LinePatcher::default();
            debug!("{} files with known defects", patcher.nb_files());
            let patched = patcher.patch_files(&files)?;
            info!("{} files patched out of {}", patched.len(), files.len());
        }

        cli::WebNlgReader::Rephrase(r) => {
            let phrasings = if r.must {
                rephrase_if_must(&r.entity)
            } else {
                rephrase(&r.entity)?
            };
            for phrasing in phrasings {
                println!("{}", phrasing);
            }
        }
    };
    Ok(())
}
