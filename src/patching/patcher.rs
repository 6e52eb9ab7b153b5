//! In-place line patching of raw corpus files.
use std::{
    borrow::Cow,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::error::Error;

use super::table::PATCHES;

/// What to do with a line matching a patch key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    Delete,
    /// Replacement for the trimmed content of the line.
    Replace(String),
}

/// line index -> (exact trimmed content, patch)
type LinePatches = HashMap<usize, Vec<(String, Patch)>>;

/// Rewrites known malformed lines of corpus files.
///
/// Lines are matched on (last three path components, 0-based line index, trimmed content),
/// so that a line that has already been patched (or that moved) is left untouched.
#[derive(Debug, Clone)]
pub struct LinePatcher {
    files: HashMap<String, LinePatches>,
}

impl LinePatcher {
    /// Build a patcher from `(file suffix, line index, trimmed line, patch)` entries.
    pub fn new<I, S>(patches: I) -> Self
    where
        I: IntoIterator<Item = (S, usize, S, Patch)>,
        S: Into<String>,
    {
        let mut files: HashMap<String, LinePatches> = HashMap::new();
        for (file, line, text, patch) in patches {
            files
                .entry(file.into())
                .or_default()
                .entry(line)
                .or_default()
                .push((text.into(), patch));
        }
        Self { files }
    }

    /// number of files that have at least one patch.
    pub fn nb_files(&self) -> usize {
        self.files.len()
    }

    /// Patch the file at `path` in place.
    ///
    /// Returns `true` if the file has been rewritten.
    /// Files that are not known are not even opened.
    pub fn patch_file(&self, path: &Path) -> Result<bool, Error> {
        let suffix = relative_suffix(path);
        let table = match self.files.get(&suffix) {
            Some(table) => table,
            None => return Ok(false),
        };

        let content = decode_ignore(&fs::read(path)?);
        let original: Vec<&str> = content.split_inclusive('\n').collect();
        let patched: Vec<Cow<str>> = original
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| Self::patch_line(table, idx, line))
            .collect();

        let unchanged = patched.len() == original.len()
            && patched
                .iter()
                .zip(original.iter())
                .all(|(new, old)| new == old);
        if unchanged {
            debug!("{:?}: nothing to patch", path);
            return Ok(false);
        }

        let nb_changes = original.len() - patched.len()
            + patched
                .iter()
                .filter(|line| matches!(line, Cow::Owned(_)))
                .count();
        fs::write(path, patched.concat())?;
        info!("patched {:?} ({} lines)", path, nb_changes);
        Ok(true)
    }

    /// Patch every file of the provided list, returning the rewritten ones.
    pub fn patch_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
        let mut rewritten = Vec::new();
        for path in paths {
            if self.patch_file(path)? {
                rewritten.push(path.clone());
            }
        }
        Ok(rewritten)
    }

    /// Returns `None` if the line has to be deleted.
    fn patch_line<'a>(table: &LinePatches, idx: usize, line: &'a str) -> Option<Cow<'a, str>> {
        let text = line.trim();
        let patch = table
            .get(&idx)
            .and_then(|candidates| candidates.iter().find(|(t, _)| t == text))
            .map(|(_, patch)| patch);

        match patch {
            None => Some(Cow::Borrowed(line)),
            Some(Patch::Delete) => None,
            Some(Patch::Replace(replacement)) if replacement.is_empty() => None,
            Some(Patch::Replace(replacement)) => Some(Cow::Owned(line.replace(text, replacement))),
        }
    }
}

impl Default for LinePatcher {
    /// Patcher holding the known defects of the WebNLG corpus.
    fn default() -> Self {
        Self::new(PATCHES.iter().map(|p| {
            let patch = match p.replacement {
                Some(r) => Patch::Replace(r.to_string()),
                None => Patch::Delete,
            };
            (p.file, p.line, p.text, patch)
        }))
    }
}

/// last three components of the path, `/`-joined (`test/5triples/Airport.xml`).
fn relative_suffix(path: &Path) -> String {
    let components: Vec<_> = path.iter().map(|c| c.to_string_lossy()).collect();
    let start = components.len().saturating_sub(3);
    components[start..].join("/")
}

/// UTF-8 decoding that drops invalid bytes instead of failing.
fn decode_ignore(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let skip = e.error_len().unwrap_or(rest.len());
                bytes = &rest[skip..];
            }
        }
    }
}
