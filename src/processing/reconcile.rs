/*! Gold/prediction reconciliation

Merges a gold and a predicted slash tagged file (one sentence per line, `surface/tag` tokens)
into the four column format read by CoNLL evaluation scripts:

```text
玉ねぎ _ B-F B-F
を _ O O
```

Each input line becomes a block of token lines followed by a blank line.
Both files must line up: same number of lines, same number of tokens per line.
!*/
use std::io::{BufRead, Write};

use itertools::{EitherOrBoth, Itertools};

use crate::error::Error;

fn tokens(line: &str) -> Vec<&str> {
    let line = line.trim_end_matches(' ');
    if line.is_empty() {
        Vec::new()
    } else {
        line.split(' ').collect()
    }
}

/// Split a `surface/tag` token.
fn split_token(token: &str) -> Result<(&str, &str), Error> {
    let mut fields = token.split('/');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(surface), Some(tag), None) => Ok((surface, tag)),
        _ => Err(Error::malformed(token, "expected a single `/` in token")),
    }
}

/// Write the reconciled form of `gold` and `pred` into `output`.
///
/// Returns the number of reconciled lines.
pub fn reconcile<G, P, W>(gold: G, pred: P, mut output: W) -> Result<usize, Error>
where
    G: BufRead,
    P: BufRead,
    W: Write,
{
    let mut nb_lines = 0;
    for (idx, pair) in gold.lines().zip_longest(pred.lines()).enumerate() {
        let line_number = idx + 1;
        let (gold_line, pred_line) = match pair {
            EitherOrBoth::Both(g, p) => (g?, p?),
            EitherOrBoth::Left(g) => {
                return Err(Error::Alignment {
                    line: line_number,
                    gold: tokens(&g?).len(),
                    pred: 0,
                })
            }
            EitherOrBoth::Right(p) => {
                return Err(Error::Alignment {
                    line: line_number,
                    gold: 0,
                    pred: tokens(&p?).len(),
                })
            }
        };

        let golds = tokens(&gold_line);
        let preds = tokens(&pred_line);
        if golds.len() != preds.len() {
            return Err(Error::Alignment {
                line: line_number,
                gold: golds.len(),
                pred: preds.len(),
            });
        }

        for (g, p) in golds.iter().zip(preds.iter()) {
            let (surface, gold_tag) = split_token(g).map_err(|e| e.at_line(line_number))?;
            let (_, pred_tag) = split_token(p).map_err(|e| e.at_line(line_number))?;
            writeln!(output, "{} _ {} {}", surface, gold_tag, pred_tag)?;
        }
        writeln!(output)?;
        nb_lines += 1;
    }

    output.flush()?;
    Ok(nb_lines)
}
