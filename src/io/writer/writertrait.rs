use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::io::reader::Document;
use crate::partition::Partition;

pub trait WriterTrait {
    type Item;

    /// Separator between two serialized sentences.
    const SENTENCE_SEPARATOR: &'static str;

    /// Name of the output file for `partition`.
    fn filename(partition: &Partition) -> String;

    /// Serialize a single sentence.
    fn sentence(sentence: &[Self::Item]) -> String;

    /// Serialize a whole dataset, ending with a newline.
    fn serialize(dataset: &[Document<Self::Item>]) -> String {
        let mut serialized = dataset
            .iter()
            .flat_map(|document| document.sentences.iter())
            .map(|sentence| Self::sentence(sentence))
            .join(Self::SENTENCE_SEPARATOR);
        serialized.push('\n');
        serialized
    }

    /// Write `dataset` into `dst`, creating the directory if needed.
    ///
    /// An existing file is overwritten. Returns the path of the written file.
    fn write(
        dataset: &[Document<Self::Item>],
        dst: &Path,
        partition: &Partition,
    ) -> Result<PathBuf, Error> {
        std::fs::create_dir_all(dst)?;
        let path = dst.join(Self::filename(partition));

        info!("writing {} documents to {:?}", dataset.len(), path);
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(Self::serialize(dataset).as_bytes())?;
        writer.flush()?;

        Ok(path)
    }
}
