//! # cpc-tools
//!
//! Conversion, splitting and statistics tools for the annotated recipe corpus.
//!
//! ## Getting started
//!
//! ```sh
//! cpc-tools 0.1.0
//! recipe corpus conversion tool.
//!
//! USAGE:
//!     cpc-tools <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     cabocha               Build CaboCha chunk files (cabocha.<partition>)
//!     cabocha-test-gen      Prepare CaboCha input from a chunk file
//!     conll2003             Build CoNLL-2003 IOB files (eng.iob.<partition>)
//!     help                  Prints this message or the help of the given subcommand(s)
//!     pwner                 Build slash tagged files (eng.iob.<partition>)
//!     pwner-to-conll2003    Merge gold and predicted slash tagged files for evaluation
//!     split                 Split a corpus into train/valid/test
//!     summary               Count words, entities and dependencies of a corpus
//! ```
//!
//! Log verbosity is set through `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::fs::File;
use std::io::BufReader;

use cpc_tools::error::Error;
use cpc_tools::io::writer::output;
use cpc_tools::processing::{self, reconcile, split, testgen, Summary, Target};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn run_convert(c: cli::Convert, target: Target) -> Result<(), Error> {
    let path = processing::convert(&c.data_dir, &c.output_dir, target)?;
    info!("wrote {:?}", path);
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::CpcTools::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::CpcTools::Cabocha(c) => run_convert(c, Target::Cabocha)?,
        cli::CpcTools::Conll2003(c) => run_convert(c, Target::Conll2003)?,
        cli::CpcTools::Pwner(c) => run_convert(c, Target::Pwner)?,

        cli::CpcTools::CabochaTestGen(t) => {
            testgen::generate_files(t.input.as_deref(), t.output.as_deref(), t.output_layer)?
        }

        cli::CpcTools::PwnerToConll2003(r) => {
            let gold = BufReader::new(
                File::open(&r.gold_file).map_err(|e| Error::file(&r.gold_file, e))?,
            );
            let pred = BufReader::new(
                File::open(&r.pred_file).map_err(|e| Error::file(&r.pred_file, e))?,
            );
            let nb_lines = reconcile::reconcile(gold, pred, output(r.output.as_deref())?)?;
            info!("{} lines reconciled", nb_lines);
        }

        cli::CpcTools::Split(s) => {
            let ratio: split::Ratio = s.proportion.parse()?;
            let splitter = split::Splitter::new(ratio, s.seed);
            let result = split::split(&s.corpus_dir, &s.output_dir, &splitter)?;

            println!(
                "Total: {} recipes found",
                result.train.len() + result.valid.len() + result.test.len()
            );
            println!("Proportion: {}", s.proportion);
            println!(
                "{}, {}, {}",
                result.train.len(),
                result.valid.len(),
                result.test.len()
            );
        }

        cli::CpcTools::Summary(s) => {
            let summary = Summary::from_corpus(&s.corpus_root)?;
            if s.json {
                println!("{}", summary.to_json()?);
            } else {
                print!("{}", summary);
            }
        }
    };
    Ok(())
}
