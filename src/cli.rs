//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "cpc-tools", about = "recipe corpus conversion tool.")]
/// Holds every command that is callable by the `cpc-tools` command.
pub enum CpcTools {
    #[structopt(name = "cabocha", about = "Build CaboCha chunk files (cabocha.<partition>)")]
    Cabocha(Convert),
    #[structopt(
        name = "conll2003",
        about = "Build CoNLL-2003 IOB files (eng.iob.<partition>)"
    )]
    Conll2003(Convert),
    #[structopt(name = "pwner", about = "Build slash tagged files (eng.iob.<partition>)")]
    Pwner(Convert),
    #[structopt(name = "cabocha-test-gen", about = "Prepare CaboCha input from a chunk file")]
    CabochaTestGen(CabochaTestGen),
    #[structopt(
        name = "pwner-to-conll2003",
        about = "Merge gold and predicted slash tagged files for evaluation"
    )]
    PwnerToConll2003(PwnerToConll2003),
    #[structopt(name = "split", about = "Split a corpus into train/valid/test")]
    Split(Split),
    #[structopt(
        name = "summary",
        about = "Count words, entities and dependencies of a corpus"
    )]
    Summary(Summary),
}

#[derive(Debug, StructOpt)]
/// Conversion commands parameters.
///
/// ```sh
/// cpc-tools-conll2003 0.1.0
/// Build CoNLL-2003 IOB files (eng.iob.<partition>)
///
/// USAGE:
///     cpc-tools conll2003 --data-dir <data-dir> --output-dir <output-dir>
/// ```
pub struct Convert {
    #[structopt(
        parse(from_os_str),
        long = "data-dir",
        help = "partition directory (train, valid or test) holding recipe directories"
    )]
    pub data_dir: PathBuf,
    #[structopt(parse(from_os_str), long = "output-dir", help = "output directory")]
    pub output_dir: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct CabochaTestGen {
    #[structopt(
        parse(from_os_str),
        long = "input",
        short = "i",
        help = "chunk file. Reads stdin if not specified."
    )]
    pub input: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "output",
        short = "o",
        help = "output file. Writes to stdout if not specified."
    )]
    pub output: Option<PathBuf>,
    #[structopt(
        long = "output-layer",
        short = "O",
        default_value = "2",
        help = "1: tokens only, 2: chunks with normal dependencies"
    )]
    pub output_layer: u8,
}

#[derive(Debug, StructOpt)]
pub struct PwnerToConll2003 {
    #[structopt(parse(from_os_str), long = "gold-file", help = "gold slash tagged file")]
    pub gold_file: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "pred-file",
        help = "predicted slash tagged file"
    )]
    pub pred_file: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output",
        short = "o",
        help = "output file. Writes to stdout if not specified."
    )]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Split command and parameters.
pub struct Split {
    #[structopt(
        parse(from_os_str),
        long = "corpus-dir",
        default_value = "./cpc1.0",
        help = "source corpus location"
    )]
    pub corpus_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output-dir",
        default_value = "./outputs",
        help = "destination of train/valid/test directories"
    )]
    pub output_dir: PathBuf,
    #[structopt(
        long = "proportion",
        default_value = "8:1:1",
        help = "train:valid:test proportion"
    )]
    pub proportion: String,
    #[structopt(long = "seed", default_value = "0", help = "shuffling seed")]
    pub seed: u64,
}

#[derive(Debug, StructOpt)]
pub struct Summary {
    #[structopt(
        parse(from_os_str),
        long = "corpus-root",
        default_value = "./cpc1.0",
        help = "corpus location"
    )]
    pub corpus_root: PathBuf,
    #[structopt(long = "json", help = "print counters as JSON")]
    pub json: bool,
}
