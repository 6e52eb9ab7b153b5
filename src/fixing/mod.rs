/*! Corpus data repairs.

Repairs are implemented as [Transform]s that take ownership of the data and give back the repaired one:

- [TemplateFixer]: placeholder typos and mis-joins in templates,
- [SentenceFixer]: raw texts that defeat sentence splitting,
- [SegmentationRepair]: known wrong sentence splits,
- [SpellingFixer]: misspelled words in texts.
!*/
mod misspellings;
mod segmentation;
mod segmentation_table;
mod spelling;
mod template;
mod transform;

pub use segmentation::SegmentationRepair;
pub use spelling::SpellingFixer;
pub use template::{SentenceFixer, TemplateFixer};
pub use transform::Transform;
