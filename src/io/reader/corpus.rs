/*! Corpus reader

A corpus is a directory holding one subdirectory per recipe,
each of them containing a `title.txt` and a `step.txt` annotation file.

```text
cpc1.0/
├── 00001/
│   ├── title.txt
│   └── step.txt
└── 00002/
    ├── title.txt
    └── step.txt
```
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::annotation::{read_sentences, LineFormat};
use crate::error::Error;

pub const TITLE_FILE: &str = "title.txt";
pub const STEP_FILE: &str = "step.txt";

/// Sentences of a single recipe: title sentences, then step sentences.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<T> {
    pub path: PathBuf,
    pub sentences: Vec<Vec<T>>,
}

/// Annotation files of a recipe directory, in reading order.
pub fn recipe_files(recipe_dir: &Path) -> [PathBuf; 2] {
    [recipe_dir.join(TITLE_FILE), recipe_dir.join(STEP_FILE)]
}

impl<T> Document<T> {
    /// Read both annotation files of `recipe_dir`.
    pub fn read<F>(recipe_dir: &Path, format: &F) -> Result<Self, Error>
    where
        F: LineFormat<Item = T> + Clone,
    {
        let mut sentences = Vec::new();
        for file in recipe_files(recipe_dir) {
            sentences.append(&mut read_sentences(&file, format.clone())?);
        }

        Ok(Self {
            path: recipe_dir.to_path_buf(),
            sentences,
        })
    }
}

/// Recipe directories of a corpus root.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    recipes: Vec<PathBuf>,
}

impl Corpus {
    /// List recipe directories (direct subdirectories of `root`, sorted by name).
    ///
    /// Plain files at the root are ignored.
    pub fn new(root: &Path) -> Result<Self, Error> {
        let pattern = format!("{}/*", glob::Pattern::escape(&root.to_string_lossy()));
        debug!("looking for recipes with pattern {}", pattern);

        let mut recipes = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_dir() {
                recipes.push(path);
            }
        }

        info!("{} recipes found in {:?}", recipes.len(), root);
        Ok(Self {
            root: root.to_path_buf(),
            recipes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn recipes(&self) -> &[PathBuf] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Read every recipe of the corpus.
    ///
    /// Stops at the first error.
    pub fn documents<F>(&self, format: &F) -> Result<Vec<Document<F::Item>>, Error>
    where
        F: LineFormat + Clone,
    {
        self.recipes
            .iter()
            .map(|recipe| Document::read(recipe, format))
            .collect()
    }
}
