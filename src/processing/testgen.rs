/*! CaboCha test set generation

Prepares annotated data to be fed to CaboCha.
The output layer tells what is kept of chunk boundary lines:

- [OutputLayer::Tokens] (`1`): chunk lines are dropped, leaving tokens only.
- [OutputLayer::Chunks] (`2`): chunk lines are kept as `* <id> -1D`, since CaboCha only knows about normal dependencies.

Every other line is passed through.
!*/
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Error;
use crate::io::reader::{ChunkArc, LineKind};
use crate::io::writer::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayer {
    Tokens,
    Chunks,
}

impl TryFrom<u8> for OutputLayer {
    type Error = Error;

    fn try_from(layer: u8) -> Result<Self, Self::Error> {
        match layer {
            1 => Ok(OutputLayer::Tokens),
            2 => Ok(OutputLayer::Chunks),
            other => Err(Error::Configuration(format!(
                "unsupported output layer {} (expected 1 or 2)",
                other
            ))),
        }
    }
}

/// Rewrite `input` into `output`, following `layer`.
pub fn generate<R, W>(input: R, mut output: W, layer: OutputLayer) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        match (LineKind::classify(&line), layer) {
            (LineKind::Chunk(_), OutputLayer::Tokens) => continue,
            (LineKind::Chunk(chunk), OutputLayer::Chunks) => {
                let arc = ChunkArc::parse(chunk).map_err(|e| e.at_line(idx + 1))?;
                writeln!(output, "* {} -1D", arc.id)?;
            }
            _ => writeln!(output, "{}", line)?,
        }
    }
    output.flush()?;
    Ok(())
}

/// Rewrite the `input` file (or stdin) into the `output` file (or stdout).
///
/// `layer` is checked before any file is opened or created.
pub fn generate_files(
    input: Option<&Path>,
    output_path: Option<&Path>,
    layer: u8,
) -> Result<(), Error> {
    let layer = OutputLayer::try_from(layer)?;
    let out = output(output_path)?;
    match input {
        Some(input) => {
            let file = File::open(input).map_err(|e| Error::file(input, e))?;
            generate(BufReader::new(file), out, layer)
        }
        None => generate(io::stdin().lock(), out, layer),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const INPUT: &str = "* 0 1D 0/1
玉ねぎ\t名詞,普通名詞,*
* 1 -1O 0/0
切る\t動詞,一般,*
EOS
";

    fn run(layer: OutputLayer) -> String {
        let mut out = Vec::new();
        generate(Cursor::new(INPUT), &mut out, layer).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn layers() {
        assert!(matches!(OutputLayer::try_from(1), Ok(OutputLayer::Tokens)));
        assert!(matches!(OutputLayer::try_from(2), Ok(OutputLayer::Chunks)));
        assert!(matches!(
            OutputLayer::try_from(3),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn tokens_only() {
        assert_eq!(
            run(OutputLayer::Tokens),
            "玉ねぎ\t名詞,普通名詞,*\n切る\t動詞,一般,*\nEOS\n"
        );
    }

    #[test]
    fn normal_dependencies() {
        assert_eq!(
            run(OutputLayer::Chunks),
            "* 0 -1D\n玉ねぎ\t名詞,普通名詞,*\n* 1 -1D\n切る\t動詞,一般,*\nEOS\n"
        );
    }

    #[test]
    fn bad_layer_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("test.cabocha");
        std::fs::write(&input, INPUT).unwrap();
        let out = dir.path().join("out.cabocha");

        assert!(matches!(
            generate_files(Some(&input), Some(&out), 3),
            Err(Error::Configuration(_))
        ));
        assert!(!out.exists());

        // the layer is checked before the input is opened, too
        let missing = dir.path().join("missing.cabocha");
        assert!(matches!(
            generate_files(Some(&missing), Some(&out), 0),
            Err(Error::Configuration(_))
        ));
        assert!(!out.exists());
    }

    #[test]
    fn generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("test.cabocha");
        std::fs::write(&input, INPUT).unwrap();
        let out = dir.path().join("out.cabocha");

        generate_files(Some(&input), Some(&out), 1).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "玉ねぎ\t名詞,普通名詞,*\n切る\t動詞,一般,*\nEOS\n"
        );
    }

    #[test]
    fn malformed_chunk() {
        let mut out = Vec::new();
        let res = generate(Cursor::new("EOS\n* x\n"), &mut out, OutputLayer::Chunks);
        assert!(matches!(res, Err(Error::MalformedLine { line: 2, .. })));
    }
}
