/*! Line formats

[LineFormat] implementations used by the converters:

- [CabochaFormat] keeps the chunk structure, as raw (normalized) lines.
- [TokenFormat] drops chunks and parses tokens into [Token]s.
!*/
use super::annotation::LineFormat;
use super::line::{split_token_line, Token, EOS};
use crate::error::Error;

/// Head id of chunks with no dependency.
const NO_DEPENDENCY_HEAD: &str = "-2";

/// Head id of root chunks.
const ROOT_HEAD: &str = "-1";

/// Raw lines for the CaboCha chunk format.
///
/// - chunk lines keep their first four fields, with a `-2` head rewritten to `-1`.
/// - token lines lose their named entity tag.
/// - sentences end with `EOS`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CabochaFormat;

impl CabochaFormat {
    /// Normalize a chunk boundary line.
    pub fn normalize_chunk(line: &str) -> String {
        line.split(' ')
            .take(4)
            .enumerate()
            .map(|(idx, field)| match (idx, field.strip_prefix(NO_DEPENDENCY_HEAD)) {
                (2, Some(relation)) if !relation.starts_with(|c: char| c.is_ascii_digit()) => {
                    format!("{}{}", ROOT_HEAD, relation)
                }
                _ => field.to_string(),
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl LineFormat for CabochaFormat {
    type Item = String;

    fn chunk(&self, line: &str) -> Result<Option<String>, Error> {
        Ok(Some(Self::normalize_chunk(line)))
    }

    fn token(&self, line: &str) -> Result<String, Error> {
        let (surface, feature, _) = split_token_line(line)?;
        Ok(format!("{}\t{}", surface, feature))
    }

    fn end_of_sentence(&self) -> Option<String> {
        Some(EOS.to_string())
    }
}

/// Parsed tokens, chunk lines are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenFormat;

impl LineFormat for TokenFormat {
    type Item = Token;

    fn chunk(&self, _: &str) -> Result<Option<Token>, Error> {
        Ok(None)
    }

    fn token(&self, line: &str) -> Result<Token, Error> {
        Token::parse(line)
    }
}
