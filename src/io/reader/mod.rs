/*! Corpus reading utilities

- [line] classifies single lines and parses tokens and chunk boundaries.
- [annotation] groups lines of a file into sentences, following a [LineFormat].
- [format] holds the line formats used by the converters.
- [corpus] lists the recipes of a corpus and reads them as [Document]s.
!*/
pub mod annotation;
pub mod corpus;
pub mod format;
pub mod line;

pub use annotation::{read_sentences, AnnotationReader, LineFormat};
pub use corpus::{Corpus, Document};
pub use format::{CabochaFormat, TokenFormat};
pub use line::{ChunkArc, LineKind, Relation, Token};
