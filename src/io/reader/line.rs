/*! Line classification

Every line of an annotation file falls in exactly one [LineKind].
Categories are checked in a fixed order: comment, end of sentence, chunk boundary, token.

```text
# Title-ID:00001          <- comment
* 0 1D 0/1 Targ           <- chunk boundary
玉ねぎ	名詞,普通名詞,*	B-F  <- token
EOS                       <- end of sentence
```
!*/
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

/// End of sentence marker.
pub const EOS: &str = "EOS";

/// Prefixes of corpus metadata lines (`# Title-ID:`, `# Sentence-ID:`, `# Step-ID:`).
pub const COMMENT_PREFIXES: [&str; 3] = ["# Title", "# Sentence", "# Step"];

/// Prefix of chunk boundary lines.
pub const CHUNK_PREFIX: &str = "* ";

lazy_static! {
    static ref CHUNK_ARC: Regex =
        Regex::new(r"^\*\s(-?\d+)\s(-?\d+)([DPAIOR])\s(\d+/\d+)(?:\s(.*))?$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment,
    EndOfSentence,
    Chunk(&'a str),
    Token(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a single line (without its trailing newline).
    pub fn classify(line: &'a str) -> Self {
        if COMMENT_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            LineKind::Comment
        } else if line == EOS {
            LineKind::EndOfSentence
        } else if line.starts_with(CHUNK_PREFIX) {
            LineKind::Chunk(line)
        } else {
            LineKind::Token(line)
        }
    }
}

/// Annotated word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    surface: String,
    pos1: String,
    pos2: String,
    netag: String,
}

impl Token {
    pub fn new(surface: &str, pos1: &str, pos2: &str, netag: &str) -> Self {
        Self {
            surface: surface.to_string(),
            pos1: pos1.to_string(),
            pos2: pos2.to_string(),
            netag: netag.to_string(),
        }
    }

    /// Parse a `surface\tfeature,csv\tnetag` line.
    ///
    /// The line must have exactly three tab separated fields,
    /// and the feature string at least two comma separated ones.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let (surface, feature, netag) = split_token_line(line)?;
        let mut features = feature.split(',');
        match (features.next(), features.next()) {
            (Some(pos1), Some(pos2)) => Ok(Self::new(surface, pos1, pos2, netag)),
            _ => Err(Error::malformed(
                line,
                "feature string must have at least 2 comma separated fields",
            )),
        }
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Part of speech (e.g. 名詞).
    pub fn pos1(&self) -> &str {
        &self.pos1
    }

    /// Part of speech subtype (e.g. 普通名詞).
    pub fn pos2(&self) -> &str {
        &self.pos2
    }

    pub fn netag(&self) -> &str {
        &self.netag
    }
}

/// Split a token line into its three tab separated fields.
pub fn split_token_line(line: &str) -> Result<(&str, &str, &str), Error> {
    let fields: Vec<&str> = line.split('\t').collect();
    match fields.as_slice() {
        [surface, feature, netag] => Ok((*surface, *feature, *netag)),
        _ => Err(Error::malformed(
            line,
            format!("expected 3 tab separated fields, got {}", fields.len()),
        )),
    }
}

/// Chunk relation type.
///
/// `D` is the usual dependency, the others are corpus specific classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    D,
    P,
    A,
    I,
    O,
    R,
}

impl Relation {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "D" => Some(Relation::D),
            "P" => Some(Relation::P),
            "A" => Some(Relation::A),
            "I" => Some(Relation::I),
            "O" => Some(Relation::O),
            "R" => Some(Relation::R),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::D => "D",
            Relation::P => "P",
            Relation::A => "A",
            Relation::I => "I",
            Relation::O => "O",
            Relation::R => "R",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed chunk boundary line: `* <id> <head><relation> <ratio>[ <label>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkArc {
    pub id: i32,
    pub head: i32,
    pub relation: Relation,
    pub ratio: String,
    /// Dependency label trailing the four mandatory fields, if any.
    pub label: Option<String>,
}

impl ChunkArc {
    pub fn parse(line: &str) -> Result<Self, Error> {
        let caps = CHUNK_ARC
            .captures(line)
            .ok_or_else(|| Error::malformed(line, "not a valid chunk boundary line"))?;

        // the pattern only lets digits through, overflow is the only way to fail here.
        let number = |idx: usize| {
            caps[idx]
                .parse::<i32>()
                .map_err(|e| Error::malformed(line, format!("invalid chunk number: {}", e)))
        };

        Ok(Self {
            id: number(1)?,
            head: number(2)?,
            relation: Relation::from_tag(&caps[3])
                .ok_or_else(|| Error::malformed(line, "unknown relation"))?,
            ratio: caps[4].to_string(),
            label: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_priority() {
        assert_eq!(LineKind::classify("# Title-ID:0001"), LineKind::Comment);
        assert_eq!(LineKind::classify("# Sentence-ID:1"), LineKind::Comment);
        assert_eq!(LineKind::classify("# Step-ID:2"), LineKind::Comment);
        assert_eq!(LineKind::classify("EOS"), LineKind::EndOfSentence);
        assert_eq!(
            LineKind::classify("* 0 1D 0/1 Targ"),
            LineKind::Chunk("* 0 1D 0/1 Targ")
        );
        assert_eq!(LineKind::classify("EOS "), LineKind::Token("EOS "));
        assert_eq!(LineKind::classify("*\tx\tO"), LineKind::Token("*\tx\tO"));
    }

    #[test]
    fn unknown_comment_is_a_token_line() {
        let line = "# Author: someone";
        assert_eq!(LineKind::classify(line), LineKind::Token(line));
        assert!(Token::parse(line).is_err());
    }

    #[test]
    fn parse_token() {
        let token = Token::parse("word\tfeat1,feat2,feat3\tB-PER").unwrap();
        assert_eq!(token, Token::new("word", "feat1", "feat2", "B-PER"));
    }

    #[test]
    fn parse_token_field_count() {
        for line in ["word\tfeat1,feat2", "word\tfeat1,feat2\tO\textra", "word"] {
            match Token::parse(line) {
                Err(Error::MalformedLine { content, .. }) => assert_eq!(content, line),
                other => panic!("expected malformed line, got {:?}", other),
            }
        }
    }

    #[test]
    fn parse_token_short_feature() {
        assert!(Token::parse("word\tfeat1\tO").is_err());
    }

    #[test]
    fn parse_chunk_arc() {
        let arc = ChunkArc::parse("* 0 -1D 0/1 Agent").unwrap();
        assert_eq!(arc.id, 0);
        assert_eq!(arc.head, -1);
        assert_eq!(arc.relation, Relation::D);
        assert_eq!(arc.ratio, "0/1");
        assert_eq!(arc.label.as_deref(), Some("Agent"));

        let arc = ChunkArc::parse("* 3 -2O 1/2").unwrap();
        assert_eq!(arc.head, -2);
        assert_eq!(arc.relation, Relation::O);
        assert_eq!(arc.label, None);
    }

    #[test]
    fn parse_chunk_arc_invalid() {
        assert!(ChunkArc::parse("* 0 1X 0/1").is_err());
        assert!(ChunkArc::parse("* a b").is_err());
    }
}
