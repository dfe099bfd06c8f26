/*! Corpus statistics

Counts words, named entities, dependency labels and chunk relations over a whole corpus.

Files are read with the same [AnnotationReader] as the converters (through [SummaryFormat]),
so that statistics and converted data always agree on what a sentence is.

The textual report looks like this:

```text
# word
12345 2345
---

# netag
Ac	1,234
F	2,345
n_netags	3,579
n_netag_vocab	2
---

# dependency
Targ	123
n_deps	123
n_dep_vocab	1
n_chunks	456
---

# chunk
D	456
n_chunk_vocab	1
```
!*/
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use super::entities::entities;
use crate::error::Error;
use crate::io::reader::corpus::recipe_files;
use crate::io::reader::{read_sentences, ChunkArc, Corpus, LineFormat, Token};

/// Sentence element kept for statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Arc(ChunkArc),
    Token(Token),
}

/// Keeps both chunk boundaries (parsed) and tokens.
///
/// A chunk boundary line that can't be parsed is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct SummaryFormat;

impl LineFormat for SummaryFormat {
    type Item = Entry;

    fn chunk(&self, line: &str) -> Result<Option<Entry>, Error> {
        ChunkArc::parse(line).map(|arc| Some(Entry::Arc(arc)))
    }

    fn token(&self, line: &str) -> Result<Entry, Error> {
        Token::parse(line).map(Entry::Token)
    }
}

/// Frequency counters. Keys are kept sorted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub words: BTreeMap<String, usize>,
    pub netags: BTreeMap<String, usize>,
    pub dependencies: BTreeMap<String, usize>,
    pub chunks: BTreeMap<String, usize>,
}

fn increment(counter: &mut BTreeMap<String, usize>, key: &str) {
    match counter.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            counter.insert(key.to_string(), 1);
        }
    }
}

fn merge_counter(target: &mut BTreeMap<String, usize>, source: BTreeMap<String, usize>) {
    for (key, value) in source {
        *target.entry(key).or_insert(0) += value;
    }
}

impl Summary {
    /// Compute statistics over every recipe of a corpus.
    pub fn from_corpus(root: &Path) -> Result<Self, Error> {
        let corpus = Corpus::new(root)?;
        let mut summary = Summary::default();
        for recipe in corpus.recipes() {
            for file in recipe_files(recipe) {
                summary.merge(Summary::from_file(&file)?);
            }
        }
        info!(
            "{} words, {} entities, {} chunks",
            summary.n_words(),
            summary.n_netags(),
            summary.n_chunks()
        );
        Ok(summary)
    }

    /// Compute statistics of a single annotation file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        debug!("counting {:?}", path);
        let mut summary = Summary::default();
        for sentence in read_sentences(path, SummaryFormat)? {
            summary.add_sentence(&sentence);
        }
        Ok(summary)
    }

    pub fn add_sentence(&mut self, sentence: &[Entry]) {
        let mut tags = Vec::with_capacity(sentence.len());
        for entry in sentence {
            match entry {
                Entry::Arc(arc) => {
                    increment(&mut self.chunks, arc.relation.as_str());
                    if let Some(label) = &arc.label {
                        increment(&mut self.dependencies, label);
                    }
                }
                Entry::Token(token) => {
                    increment(&mut self.words, token.surface());
                    tags.push(token.netag());
                }
            }
        }

        for entity in entities(&tags) {
            increment(&mut self.netags, &entity.label);
        }
    }

    /// Add counts of `other` to `self`.
    pub fn merge(&mut self, other: Summary) {
        merge_counter(&mut self.words, other.words);
        merge_counter(&mut self.netags, other.netags);
        merge_counter(&mut self.dependencies, other.dependencies);
        merge_counter(&mut self.chunks, other.chunks);
    }

    pub fn n_words(&self) -> usize {
        self.words.values().sum()
    }

    pub fn n_vocab(&self) -> usize {
        self.words.len()
    }

    pub fn n_netags(&self) -> usize {
        self.netags.values().sum()
    }

    pub fn n_deps(&self) -> usize {
        self.dependencies.values().sum()
    }

    pub fn n_chunks(&self) -> usize {
        self.chunks.values().sum()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format a number with `,` as thousands separator.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

fn write_table(f: &mut fmt::Formatter<'_>, counter: &BTreeMap<String, usize>) -> fmt::Result {
    for (key, value) in counter {
        writeln!(f, "{}\t{}", key, thousands(*value))?;
    }
    Ok(())
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# word")?;
        writeln!(f, "{} {}", self.n_words(), self.n_vocab())?;
        writeln!(f, "---\n")?;

        writeln!(f, "# netag")?;
        write_table(f, &self.netags)?;
        writeln!(f, "n_netags\t{}", thousands(self.n_netags()))?;
        writeln!(f, "n_netag_vocab\t{}", thousands(self.netags.len()))?;
        writeln!(f, "---\n")?;

        writeln!(f, "# dependency")?;
        write_table(f, &self.dependencies)?;
        writeln!(f, "n_deps\t{}", thousands(self.n_deps()))?;
        writeln!(f, "n_dep_vocab\t{}", thousands(self.dependencies.len()))?;
        writeln!(f, "n_chunks\t{}", thousands(self.n_chunks()))?;
        writeln!(f, "---\n")?;

        writeln!(f, "# chunk")?;
        write_table(f, &self.chunks)?;
        writeln!(f, "n_chunk_vocab\t{}", thousands(self.chunks.len()))
    }
}
