/*! Raw corpus patching

The upstream corpus has a small, fixed set of malformed lines (missing sentence separators,
realizations mentioning triples they do not verbalize...).
They are fixed in place, before any parsing, by [LinePatcher].
!*/
mod patcher;
mod table;

pub use patcher::{LinePatcher, Patch};
