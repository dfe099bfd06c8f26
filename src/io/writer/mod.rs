/*!
# Format writers

Each writer serializes a dataset (a list of [Document]s) into a single file per partition:

- [CabochaWriter]: CaboCha chunk format, `cabocha.<partition>`.
- [ConllWriter]: CoNLL-2003 like IOB format, `eng.iob.<partition>`.
- [PwnerWriter]: slash tagged format, `eng.iob.<partition>`.

Writers implement [WriterTrait], which holds the file handling,
so that they only have to tell how a sentence is laid out.

[Document]: crate::io::reader::Document
!*/
mod cabocha;
mod conll;
mod pwner;
mod writertrait;

pub use cabocha::CabochaWriter;
pub use conll::ConllWriter;
pub use pwner::{escape_surface, PwnerWriter};
pub use writertrait::WriterTrait;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Error;

/// Open `path` for writing, or stdout.
pub fn output(path: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    let out: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|e| Error::file(path, e))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    Ok(out)
}
