/*! splitting

Offline corpus splitting into train/valid/test partitions.

Recipes are shuffled with an explicitly seeded generator, so that a given seed always yields the same split.
Partition sizes follow a `train:valid:test` ratio. Test and validation sizes are rounded up:

- `n_test = ceil(n * test / (train + valid + test))`
- `n_valid = ceil((n - n_test) * valid / (train + valid))`
- `n_train = n - n_test - n_valid`

Each partition is then copied into `<dst>/<train|valid|test>/<recipe>`.
!*/
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Error;
use crate::io::reader::Corpus;
use crate::partition::Partition;

/// `train:valid:test` proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub train: u64,
    pub valid: u64,
    pub test: u64,
}

impl Default for Ratio {
    fn default() -> Self {
        Self {
            train: 8,
            valid: 1,
            test: 1,
        }
    }
}

impl FromStr for Ratio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Result<Vec<u64>, _> = s.split(':').map(|p| p.trim().parse::<u64>()).collect();
        let parts = parts.map_err(|e| {
            Error::Configuration(format!("invalid proportion {:?}: {}", s, e))
        })?;

        match parts.as_slice() {
            [train, valid, test] => match train
                .checked_add(*valid)
                .and_then(|sum| sum.checked_add(*test))
            {
                Some(0) => Err(Error::Configuration(format!(
                    "proportion {:?} sums to zero",
                    s
                ))),
                Some(_) => Ok(Self {
                    train: *train,
                    valid: *valid,
                    test: *test,
                }),
                None => Err(Error::Configuration(format!(
                    "proportion {:?} is too large",
                    s
                ))),
            },
            _ => Err(Error::Configuration(format!(
                "proportion {:?} must have the train:valid:test form",
                s
            ))),
        }
    }
}

/// Ceiling of `n * num / den`, computed on 128 bits.
/// Callers ensure `num <= den`, so the result fits back in a `u64`.
fn ceil_div(n: u64, num: u64, den: u64) -> u64 {
    if den == 0 {
        return 0;
    }
    let (n, num, den) = (n as u128, num as u128, den as u128);
    ((n * num + den - 1) / den) as u64
}

/// The three partitions of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<T> {
    pub train: Vec<T>,
    pub valid: Vec<T>,
    pub test: Vec<T>,
}

impl<T> Split<T> {
    /// Partitions along with their names.
    pub fn partitions(&self) -> [(Partition, &[T]); 3] {
        [
            (Partition::Train, self.train.as_slice()),
            (Partition::Valid, self.valid.as_slice()),
            (Partition::Test, self.test.as_slice()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Splitter {
    ratio: Ratio,
    seed: u64,
}

impl Splitter {
    pub fn new(ratio: Ratio, seed: u64) -> Self {
        Self { ratio, seed }
    }

    /// Sizes of the train, valid and test partitions for `n` items.
    pub fn sizes(&self, n: usize) -> (usize, usize, usize) {
        let Ratio { train, valid, test } = self.ratio;
        let n = n as u64;
        let n_test = ceil_div(n, test, train + valid + test).min(n);
        let n_valid = ceil_div(n - n_test, valid, train + valid).min(n - n_test);
        let n_train = n - n_test - n_valid;
        (n_train as usize, n_valid as usize, n_test as usize)
    }

    /// Shuffle `items` and split them.
    pub fn split<T: Clone>(&self, items: &[T]) -> Split<T> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut shuffled = items.to_vec();
        shuffled.shuffle(&mut rng);

        let (_, n_valid, n_test) = self.sizes(items.len());
        let train = shuffled.split_off(n_test + n_valid);
        let valid = shuffled.split_off(n_test);
        Split {
            train,
            valid,
            test: shuffled,
        }
    }
}

/// Recursively copy `src` into `dst`. `dst` must not exist.
fn copy_dir(src: &Path, dst: &Path) -> Result<(), Error> {
    fs::create_dir(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}

/// Split the corpus at `src` and copy partitions into `dst`.
pub fn split(src: &Path, dst: &Path, splitter: &Splitter) -> Result<Split<PathBuf>, Error> {
    let corpus = Corpus::new(src)?;
    let split = splitter.split(corpus.recipes());
    info!(
        "{} recipes split into {}, {}, {}",
        corpus.len(),
        split.train.len(),
        split.valid.len(),
        split.test.len()
    );

    for (partition, recipes) in split.partitions() {
        let target_dir = dst.join(partition.name());
        fs::create_dir_all(&target_dir)?;

        for recipe in recipes {
            let name = recipe
                .file_name()
                .ok_or_else(|| Error::Custom(format!("invalid recipe path {:?}", recipe)))?;
            debug!("copying {:?} to {:?}", recipe, target_dir);
            copy_dir(recipe, &target_dir.join(name))?;
        }
        info!("[{}] {} recipes copied", partition, recipes.len());
    }

    Ok(split)
}
