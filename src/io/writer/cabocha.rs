//! CaboCha chunk format.
//!
//! Sentences are the normalized lines produced by [CabochaFormat], one per line,
//! sentences ending with `EOS`.
//!
//! [CabochaFormat]: crate::io::reader::CabochaFormat
use super::WriterTrait;
use crate::partition::Partition;

pub struct CabochaWriter;

impl WriterTrait for CabochaWriter {
    type Item = String;

    const SENTENCE_SEPARATOR: &'static str = "\n";

    fn filename(partition: &Partition) -> String {
        format!("cabocha.{}", partition.suffix())
    }

    fn sentence(sentence: &[String]) -> String {
        sentence.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;
    use crate::io::reader::Document;

    fn document(sentences: Vec<Vec<&str>>) -> Document<String> {
        Document {
            path: PathBuf::from("0001"),
            sentences: sentences
                .into_iter()
                .map(|s| s.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn serialize() {
        let dataset = vec![
            document(vec![vec!["* 0 -1D 0/0", "a\tb,c", "EOS"]]),
            document(vec![
                vec!["* 0 1D 0/0", "d\te,f", "* 1 -1D 0/0", "g\th,i", "EOS"],
                vec!["j\tk,l"],
            ]),
        ];
        let expected = "* 0 -1D 0/0\na\tb,c\nEOS\n* 0 1D 0/0\nd\te,f\n* 1 -1D 0/0\ng\th,i\nEOS\nj\tk,l\n";
        assert_eq!(CabochaWriter::serialize(&dataset), expected);
    }

    #[test]
    fn write_overwrites() {
        let dst = tempdir().unwrap();
        let out = dst.path().join("out");
        let dataset = vec![document(vec![vec!["a\tb,c", "EOS"]])];

        std::fs::create_dir(&out).unwrap();
        std::fs::write(out.join("cabocha.testa"), "stale content").unwrap();

        let path = CabochaWriter::write(&dataset, &out, &Partition::Valid).unwrap();
        assert_eq!(path, out.join("cabocha.testa"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a\tb,c\nEOS\n");
    }
}
