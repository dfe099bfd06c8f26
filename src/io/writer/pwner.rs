//! Slash tagged format.
//!
//! One sentence per line, tokens written as `surface/netag` and separated by spaces.
//! Spaces, slashes and ampersands of surfaces are replaced by their full-width counterparts
//! so that they can't be mistaken for separators.
use itertools::Itertools;

use super::WriterTrait;
use crate::io::reader::Token;
use crate::partition::Partition;

/// Replace separator characters of a surface with full-width ones.
pub fn escape_surface(surface: &str) -> String {
    surface
        .replace(' ', "\u{3000}")
        .replace('/', "\u{ff0f}")
        .replace('&', "\u{ff06}")
}

pub struct PwnerWriter;

impl WriterTrait for PwnerWriter {
    type Item = Token;

    const SENTENCE_SEPARATOR: &'static str = "\n";

    fn filename(partition: &Partition) -> String {
        format!("eng.iob.{}", partition.suffix())
    }

    fn sentence(sentence: &[Token]) -> String {
        sentence
            .iter()
            .map(|t| format!("{}/{}", escape_surface(t.surface()), t.netag()))
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::io::reader::Document;

    #[test]
    fn escape() {
        assert_eq!(escape_surface("a/b c"), "a／b　c");
        assert_eq!(escape_surface("R&B"), "R＆B");
    }

    #[test]
    fn sentence() {
        let tokens = vec![
            Token::new("a/b c", "名詞", "固有名詞", "LOC"),
            Token::new("に", "助詞", "格助詞", "O"),
        ];
        assert_eq!(PwnerWriter::sentence(&tokens), "a／b　c/LOC に/O");
    }

    #[test]
    fn serialize() {
        let dataset = vec![Document {
            path: PathBuf::from("0001"),
            sentences: vec![
                vec![Token::new("塩", "名詞", "普通名詞", "B-F")],
                vec![
                    Token::new("少々", "名詞", "副詞可能", "B-Q"),
                    Token::new("。", "補助記号", "句点", "O"),
                ],
            ],
        }];
        assert_eq!(
            PwnerWriter::serialize(&dataset),
            "塩/B-F\n少々/B-Q 。/O\n"
        );
        assert_eq!(PwnerWriter::filename(&Partition::Train), "eng.iob.train");
    }
}
