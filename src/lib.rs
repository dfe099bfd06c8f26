/*! # cpc-tools

Tools for an annotated Japanese recipe corpus:
conversion into the input formats of dependency parsers and NER evaluation tools,
dataset splitting and corpus statistics.
!*/
pub mod error;
pub mod io;
pub mod partition;
pub mod processing;
