//! CoNLL-2003 like IOB format.
//!
//! One token per line (`surface\tpos1\tpos2\tnetag`), sentences separated by a blank line.
use itertools::Itertools;

use super::WriterTrait;
use crate::io::reader::Token;
use crate::partition::Partition;

pub struct ConllWriter;

impl WriterTrait for ConllWriter {
    type Item = Token;

    const SENTENCE_SEPARATOR: &'static str = "\n\n";

    fn filename(partition: &Partition) -> String {
        format!("eng.iob.{}", partition.suffix())
    }

    fn sentence(sentence: &[Token]) -> String {
        sentence
            .iter()
            .map(|t| format!("{}\t{}\t{}\t{}", t.surface(), t.pos1(), t.pos2(), t.netag()))
            .join("\n")
    }
}
