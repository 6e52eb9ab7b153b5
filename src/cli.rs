//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use webnlg_reader::reader::DataSetType;

#[derive(Debug, StructOpt)]
#[structopt(name = "webnlg-reader", about = "WebNLG corpus cleaning tool.")]
/// Holds every command that is callable by the `webnlg-reader` command.
pub enum WebNlgReader {
    #[structopt(about = "Read, clean and tokenize corpus splits into json files")]
    Read(Read),
    #[structopt(about = "Fix known malformed lines of a raw corpus, in place")]
    Patch(Patch),
    #[structopt(about = "Print the surface forms of an entity")]
    Rephrase(Rephrase),
}

#[derive(Debug, StructOpt)]
/// Read command and parameters.
pub struct Read {
    #[structopt(
        parse(from_os_str),
        help = "raw corpus location (holds train, dev and test folders)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of json files")]
    pub dst: PathBuf,
    #[structopt(
        short = "s",
        long = "split",
        help = "split to read (train, dev, test). Can be repeated. Defaults to every split."
    )]
    pub splits: Vec<DataSetType>,
    #[structopt(long = "fix-spelling", help = "correct known misspellings of texts")]
    pub fix_spelling: bool,
    #[structopt(long = "no-patch", help = "do not patch raw files before reading them")]
    pub no_patch: bool,
}

#[derive(Debug, StructOpt)]
pub struct Patch {
    #[structopt(parse(from_os_str), help = "raw corpus location (file or folder)")]
    pub src: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Rephrase {
    #[structopt(long = "must", help = "only drop qualifiers and parenthetical asides")]
    pub must: bool,
    #[structopt(help = "entity, as written in entity maps")]
    pub entity: String,
}
