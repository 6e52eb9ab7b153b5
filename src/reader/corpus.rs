//! Corpus reader: patch, read and serialize a whole split.
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info};
use serde::Serialize;

use crate::error::Error;
use crate::fixing::{SpellingFixer, Transform};
use crate::nlp::{Nlp, RuleTokenizer};
use crate::patching::LinePatcher;
use crate::pipeline::Pipeline;

use super::extractor::FileReader;
use super::record::Record;

/// Corpus split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSetType {
    Train,
    Dev,
    Test,
}

impl DataSetType {
    pub const ALL: [DataSetType; 3] = [DataSetType::Test, DataSetType::Train, DataSetType::Dev];

    /// Name of the split directory in the raw corpus.
    pub fn dir_name(&self) -> &'static str {
        match self {
            DataSetType::Train => "train",
            DataSetType::Dev => "dev",
            DataSetType::Test => "test",
        }
    }

    /// Name of the output file, without extension. The dev split is written as `valid`.
    pub fn output_stem(&self) -> &'static str {
        match self {
            DataSetType::Train => "train",
            DataSetType::Dev => "valid",
            DataSetType::Test => "test",
        }
    }
}

impl fmt::Display for DataSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for DataSetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "train" => Ok(DataSetType::Train),
            "dev" | "valid" => Ok(DataSetType::Dev),
            "test" => Ok(DataSetType::Test),
            _ => Err(Error::UnknownSplit(s.to_string())),
        }
    }
}

/// Every file under `path`, hidden files and directories excepted, sorted.
///
/// `path` itself is returned if it is a file.
pub fn recurse_files(path: &Path) -> Result<Vec<PathBuf>, Error> {
    if !fs::metadata(path)?.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut children = Vec::new();
    for child in fs::read_dir(path)? {
        let child = child?;
        if child.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        children.push(child.path());
    }
    children.sort();

    let mut files = Vec::new();
    for child in children {
        files.extend(recurse_files(&child)?);
    }
    Ok(files)
}

/// Reads a corpus split into records and writes them as json.
///
/// Raw files are expected in `<src>/<split>/`, records are written in `<dst>/<stem>.json`.
pub struct CorpusReader<N: Nlp = RuleTokenizer> {
    src: PathBuf,
    dst: PathBuf,
    split: DataSetType,
    nlp: N,
    patcher: Option<LinePatcher>,
    spelling: Option<SpellingFixer>,
}

impl CorpusReader<RuleTokenizer> {
    /// Reader with the built-in tokenizer and patches, without spelling correction.
    pub fn new(src: PathBuf, dst: PathBuf, split: DataSetType) -> Self {
        Self {
            src,
            dst,
            split,
            nlp: RuleTokenizer::default(),
            patcher: Some(LinePatcher::default()),
            spelling: None,
        }
    }
}

impl<N: Nlp> CorpusReader<N> {
    /// Use another tokenizer.
    pub fn with_nlp<M: Nlp>(self, nlp: M) -> CorpusReader<M> {
        CorpusReader {
            src: self.src,
            dst: self.dst,
            split: self.split,
            nlp,
            patcher: self.patcher,
            spelling: self.spelling,
        }
    }

    /// Enable (with the built-in patches) or disable patching of the raw files.
    pub fn with_patching(mut self, patching: bool) -> Self {
        self.patcher = patching.then(LinePatcher::default);
        self
    }

    /// Patch raw files with a custom patcher.
    pub fn with_patcher(mut self, patcher: LinePatcher) -> Self {
        self.patcher = Some(patcher);
        self
    }

    /// Correct misspellings of record texts.
    pub fn with_spelling_fix(mut self, spelling: Option<SpellingFixer>) -> Self {
        self.spelling = spelling;
        self
    }

    pub fn split(&self) -> DataSetType {
        self.split
    }

    pub fn split_dir(&self) -> PathBuf {
        self.src.join(self.split.dir_name())
    }

    pub fn output_path(&self) -> PathBuf {
        self.dst.join(format!("{}.json", self.split.output_stem()))
    }

    /// Patch (if enabled) and read every file of the split.
    pub fn read(&self) -> Result<Vec<Record>, Error> {
        let files = recurse_files(&self.split_dir())?;
        info!("{}: {} files", self.split, files.len());

        if let Some(patcher) = &self.patcher {
            debug!("{}: {} files with known defects", self.split, patcher.nb_files());
            let patched = patcher.patch_files(&files)?;
            if !patched.is_empty() {
                info!("{}: {} files patched", self.split, patched.len());
            }
        }

        let mut records = Vec::new();
        for file in &files {
            records.extend(FileReader::new(file, &self.nlp).read()?);
        }

        if let Some(spelling) = self.spelling.as_ref().filter(|s| !s.is_empty()) {
            debug!("{}: {} misspellings to fix", self.split, spelling.len());
            records = records
                .into_iter()
                .map(|r| {
                    let text = spelling.transform_own(r.target_txt.clone());
                    r.with_target_txt(text)
                })
                .collect();
        }

        info!("{}: {} records", self.split, records.len());
        Ok(records)
    }

    /// Write `records` as a 4-space indented json array, returning the written path.
    pub fn save(&self, records: &[Record]) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.dst)?;
        let path = self.output_path();

        let mut writer = BufWriter::new(File::create(&path)?);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records.serialize(&mut serializer)?;
        writer.flush()?;

        info!("{}: wrote {:?}", self.split, path);
        Ok(path)
    }
}

impl<N: Nlp> Pipeline<Vec<Record>> for CorpusReader<N> {
    fn run(&self) -> Result<Vec<Record>, Error> {
        let records = self.read()?;
        self.save(&records)?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_names() {
        assert_eq!(DataSetType::Dev.dir_name(), "dev");
        assert_eq!(DataSetType::Dev.output_stem(), "valid");
        assert_eq!(DataSetType::Train.output_stem(), "train");
        assert_eq!("valid".parse::<DataSetType>().unwrap(), DataSetType::Dev);
        assert_eq!("Test".parse::<DataSetType>().unwrap(), DataSetType::Test);
        assert!(matches!(
            "validation".parse::<DataSetType>(),
            Err(Error::UnknownSplit(_))
        ));
    }

    #[test]
    fn output_path() {
        let reader = CorpusReader::new(
            PathBuf::from("raw"),
            PathBuf::from("out"),
            DataSetType::Dev,
        );
        assert_eq!(reader.split_dir(), PathBuf::from("raw/dev"));
        assert_eq!(reader.output_path(), PathBuf::from("out/valid.json"));
    }

    #[test]
    fn recurse_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("2triples")).unwrap();
        fs::create_dir_all(root.join("1triples")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("2triples/b.xml"), "").unwrap();
        fs::write(root.join("1triples/a.xml"), "").unwrap();
        fs::write(root.join("1triples/.a.xml.swp"), "").unwrap();
        fs::write(root.join(".git/HEAD"), "").unwrap();

        let files = recurse_files(root).unwrap();
        assert_eq!(
            files,
            vec![root.join("1triples/a.xml"), root.join("2triples/b.xml")]
        );
    }

    #[test]
    fn recurse_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            recurse_files(&dir.path().join("nope")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn save_indentation() {
        let dir = tempfile::tempdir().unwrap();
        let reader = CorpusReader::new(
            dir.path().to_path_buf(),
            dir.path().join("out"),
            DataSetType::Test,
        );
        let record = Record::new(
            &[crate::reader::Triple::new("A", "p", "B")],
            "AGENT_1 is p B .".to_string(),
            "A is p B .".to_string(),
            Default::default(),
        );

        let path = reader.save(&[record.clone()]).unwrap();
        assert_eq!(path, dir.path().join("out/test.json"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n    {\n        \"triples\": \"A\\tp\\tB\","));
        let back: Vec<Record> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, vec![record]);
    }
}
