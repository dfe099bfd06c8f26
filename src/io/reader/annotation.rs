/*! Annotation file reader

[AnnotationReader] implements [Iterator] on sentences of an annotation file.

The state machine is shared by every output format:
lines are classified with [LineKind], and what is kept of comment-free lines is decided by a [LineFormat].

- Sentences are sealed on `EOS`. An `EOS` with nothing buffered is ignored.
- At the end of the stream, a non-empty buffer is yielded even without a final `EOS`.
- Errors stop the iteration: the error is yielded, then `None`.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

use log::debug;

use super::line::LineKind;
use crate::error::Error;

/// Format specific handling of non-comment lines.
pub trait LineFormat {
    type Item;

    /// Transform a chunk boundary line. `None` drops it.
    fn chunk(&self, line: &str) -> Result<Option<Self::Item>, Error>;

    /// Transform a token line.
    fn token(&self, line: &str) -> Result<Self::Item, Error>;

    /// Item appended to a sentence sealed by an `EOS` marker.
    fn end_of_sentence(&self) -> Option<Self::Item> {
        None
    }
}

/// Reader that yields sentences (`Vec<F::Item>`) of an annotation stream.
#[derive(Debug)]
pub struct AnnotationReader<R, F> {
    path: Option<PathBuf>,
    lines: Lines<R>,
    format: F,
    line_number: usize,
    done: bool,
}

impl<F> AnnotationReader<BufReader<File>, F>
where
    F: LineFormat,
{
    /// Open an annotation file.
    pub fn open(path: &Path, format: F) -> Result<Self, Error> {
        debug!("reading {:?}", path);
        let file = File::open(path).map_err(|e| Error::file(path, e))?;
        let mut reader = Self::new(BufReader::new(file), format);
        reader.path = Some(path.to_path_buf());
        Ok(reader)
    }
}

impl<R, F> AnnotationReader<R, F>
where
    R: BufRead,
    F: LineFormat,
{
    pub fn new(reader: R, format: F) -> Self {
        Self {
            path: None,
            lines: reader.lines(),
            format,
            line_number: 0,
            done: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Feed a line to the current sentence.
    /// Returns `true` when the sentence is complete.
    fn feed(&self, line: &str, sentence: &mut Vec<F::Item>) -> Result<bool, Error> {
        match LineKind::classify(line) {
            LineKind::Comment => Ok(false),
            LineKind::EndOfSentence => {
                if sentence.is_empty() {
                    return Ok(false);
                }
                if let Some(item) = self.format.end_of_sentence() {
                    sentence.push(item);
                }
                Ok(true)
            }
            LineKind::Chunk(chunk) => {
                if let Some(item) = self.format.chunk(chunk)? {
                    sentence.push(item);
                }
                Ok(false)
            }
            LineKind::Token(token) => {
                sentence.push(self.format.token(token)?);
                Ok(false)
            }
        }
    }

    fn locate(&self, e: Error) -> Error {
        let e = e.at_line(self.line_number);
        match &self.path {
            Some(path) => e.in_file(path),
            None => e,
        }
    }
}

impl<R, F> Iterator for AnnotationReader<R, F>
where
    R: BufRead,
    F: LineFormat,
{
    type Item = Result<Vec<F::Item>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut sentence = Vec::new();
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(match &self.path {
                        Some(path) => Error::file(path, e),
                        None => Error::Io(e),
                    }));
                }
                // flush the eventual last sentence
                None => {
                    self.done = true;
                    if sentence.is_empty() {
                        return None;
                    }
                    return Some(Ok(sentence));
                }
            };
            self.line_number += 1;

            match self.feed(&line, &mut sentence) {
                Ok(true) => return Some(Ok(sentence)),
                Ok(false) => (),
                Err(e) => {
                    self.done = true;
                    return Some(Err(self.locate(e)));
                }
            }
        }
    }
}

/// Read every sentence of an annotation file.
pub fn read_sentences<F>(path: &Path, format: F) -> Result<Vec<Vec<F::Item>>, Error>
where
    F: LineFormat,
{
    AnnotationReader::open(path, format)?.collect()
}
