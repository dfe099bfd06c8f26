/*!
# IO utilities

Annotated corpus loading, and saving into the formats expected by external parsers and taggers.
!*/
pub mod reader;
pub mod writer;
