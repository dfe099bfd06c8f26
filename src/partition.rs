//! Dataset partitions and their output names.
use std::fmt;
use std::path::Path;

/// A dataset partition.
///
/// Validation and test data are named `testa` and `testb` in output file names,
/// following the CoNLL-2003 convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Partition {
    Train,
    Valid,
    Test,
    /// Any other directory name, used as is.
    Other(String),
}

impl Partition {
    pub fn from_name(name: &str) -> Self {
        match name {
            "train" => Partition::Train,
            "valid" => Partition::Valid,
            "test" => Partition::Test,
            other => Partition::Other(other.to_string()),
        }
    }

    /// Partition of a data directory, inferred from its last component.
    pub fn from_dir(dir: &Path) -> Self {
        let name = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_name(&name)
    }

    /// Directory name of the partition.
    pub fn name(&self) -> &str {
        match self {
            Partition::Train => "train",
            Partition::Valid => "valid",
            Partition::Test => "test",
            Partition::Other(name) => name,
        }
    }

    /// Suffix of output files (`cabocha.<suffix>`, `eng.iob.<suffix>`).
    pub fn suffix(&self) -> &str {
        match self {
            Partition::Train => "train",
            Partition::Valid => "testa",
            Partition::Test => "testb",
            Partition::Other(name) => name,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
