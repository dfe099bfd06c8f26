/*! Corpus processing

- [convert]: conversion of a corpus into parser/tagger input formats.
- [summary]: corpus statistics.
- [split]: train/valid/test splitting.
- [testgen]: CaboCha test set preparation.
- [reconcile]: gold/prediction merging for NER evaluation.
!*/
pub mod convert;
pub mod entities;
pub mod reconcile;
pub mod split;
pub mod summary;
pub mod testgen;

pub use convert::{convert, Target};
pub use summary::Summary;
