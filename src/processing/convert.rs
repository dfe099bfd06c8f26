/*! Corpus conversion

Reads every recipe of a data directory and writes it in one of the target formats.
The partition (and thus the output file suffix) is the name of the data directory.
!*/
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::io::reader::{CabochaFormat, Corpus, TokenFormat};
use crate::io::writer::{CabochaWriter, ConllWriter, PwnerWriter, WriterTrait};
use crate::partition::Partition;

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// CaboCha chunk format.
    Cabocha,
    /// CoNLL-2003 IOB format.
    Conll2003,
    /// Slash tagged format.
    Pwner,
}

/// Convert the corpus at `data_dir` into `output_dir`.
///
/// Returns the path of the written file.
pub fn convert(data_dir: &Path, output_dir: &Path, target: Target) -> Result<PathBuf, Error> {
    let corpus = Corpus::new(data_dir)?;
    let partition = Partition::from_dir(data_dir);
    info!("[{}] converting {:?} to {:?}", partition, data_dir, target);

    match target {
        Target::Cabocha => {
            CabochaWriter::write(&corpus.documents(&CabochaFormat)?, output_dir, &partition)
        }
        Target::Conll2003 => {
            ConllWriter::write(&corpus.documents(&TokenFormat)?, output_dir, &partition)
        }
        Target::Pwner => {
            PwnerWriter::write(&corpus.documents(&TokenFormat)?, output_dir, &partition)
        }
    }
}
