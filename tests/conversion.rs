use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use cpc_tools::error::Error;
use cpc_tools::io::reader::{ChunkArc, Corpus, LineKind, TokenFormat};
use cpc_tools::processing::{convert, Summary, Target};
use tempfile::tempdir;

const TITLE: &str = "# Title-ID:00001
* 0 -1D 0/0 Root
鶏/肉 の&煮物\t名詞,普通名詞,*\tB-F
EOS
";

const STEP: &str = "# Step-ID:00001-1
# Sentence-ID:1
* 0 1D 0/1 Targ
玉ねぎ\t名詞,普通名詞,*\tB-F
を\t助詞,格助詞,*\tO
* 1 -2P 0/0 Other trailing
切る\t動詞,一般,*\tB-Ac
EOS
EOS
# Sentence-ID:2
* 0 -1A 0/0
塩\t名詞,普通名詞,*\tB-F
少々\t名詞,副詞可能,*\tI-F
";

/// `<root>/<partition>/<recipe>/{title,step}.txt`
fn corpus(root: &Path, partition: &str, recipes: &[&str]) -> PathBuf {
    let data_dir = root.join(partition);
    for recipe in recipes {
        let dir = data_dir.join(recipe);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("title.txt"), TITLE).unwrap();
        fs::write(dir.join("step.txt"), STEP).unwrap();
    }
    data_dir
}

/// Relation distribution of the chunk boundary lines of `input`.
fn relations(input: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for line in input.lines() {
        if let LineKind::Chunk(chunk) = LineKind::classify(line) {
            let arc = ChunkArc::parse(chunk).unwrap();
            *counts.entry(arc.relation.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[test_log::test]
fn cabocha() {
    let root = tempdir().unwrap();
    let data_dir = corpus(root.path(), "train", &["00001"]);
    let out = root.path().join("cabocha");

    let path = convert(&data_dir, &out, Target::Cabocha).unwrap();
    assert_eq!(path, out.join("cabocha.train"));

    let expected = "* 0 -1D 0/0
鶏/肉 の&煮物\t名詞,普通名詞,*
EOS
* 0 1D 0/1
玉ねぎ\t名詞,普通名詞,*
を\t助詞,格助詞,*
* 1 -1P 0/0
切る\t動詞,一般,*
EOS
* 0 -1A 0/0
塩\t名詞,普通名詞,*
少々\t名詞,副詞可能,*
";
    assert_eq!(fs::read_to_string(path).unwrap(), expected);
}

#[test]
fn cabocha_keeps_chunk_relations() {
    let root = tempdir().unwrap();
    let data_dir = corpus(root.path(), "train", &["00001"]);
    let out = root.path().join("cabocha");
    let path = convert(&data_dir, &out, Target::Cabocha).unwrap();

    let original = relations(&format!("{}{}", TITLE, STEP));
    let converted = relations(&fs::read_to_string(path).unwrap());
    assert_eq!(original, converted);
    assert_eq!(converted.get("D"), Some(&2));
}

#[test]
fn conll2003() {
    let root = tempdir().unwrap();
    let data_dir = corpus(root.path(), "valid", &["00001", "00002"]);
    let out = root.path().join("conll");

    let path = convert(&data_dir, &out, Target::Conll2003).unwrap();
    assert_eq!(path, out.join("eng.iob.testa"));

    let content = fs::read_to_string(path).unwrap();
    let sentences: Vec<&str> = content.trim_end().split("\n\n").collect();
    // 3 sentences per recipe
    assert_eq!(sentences.len(), 6);
    assert_eq!(
        sentences[1],
        "玉ねぎ\t名詞\t普通名詞\tB-F\nを\t助詞\t格助詞\tO\n切る\t動詞\t一般\tB-Ac"
    );
}

#[test]
fn pwner() {
    let root = tempdir().unwrap();
    let data_dir = corpus(root.path(), "test", &["00001"]);
    let out = root.path().join("pwner");

    let path = convert(&data_dir, &out, Target::Pwner).unwrap();
    assert_eq!(path, out.join("eng.iob.testb"));
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "鶏／肉　の＆煮物/B-F\n玉ねぎ/B-F を/O 切る/B-Ac\n塩/B-F 少々/I-F\n"
    );
}

#[test]
fn malformed_corpus() {
    let root = tempdir().unwrap();
    let data_dir = corpus(root.path(), "train", &["00001"]);
    fs::write(data_dir.join("00001").join("step.txt"), "玉ねぎ\tB-F\nEOS\n").unwrap();

    match convert(&data_dir, &root.path().join("out"), Target::Conll2003) {
        Err(Error::MalformedLine { path, line, .. }) => {
            assert_eq!(path, Some(data_dir.join("00001").join("step.txt")));
            assert_eq!(line, 1);
        }
        other => panic!("expected a malformed line, got {:?}", other),
    }
}

#[test]
fn sentence_count_matches_markers() {
    let root = tempdir().unwrap();
    let data_dir = corpus(root.path(), "train", &["00001"]);
    let documents = Corpus::new(&data_dir)
        .unwrap()
        .documents(&TokenFormat)
        .unwrap();

    // markers preceded by content, plus the trailing sentence of step.txt
    let markers = format!("{}{}", TITLE, STEP)
        .lines()
        .scan(false, |has_content, line| {
            Some(match LineKind::classify(line) {
                LineKind::EndOfSentence => std::mem::replace(has_content, false),
                LineKind::Token(_) => {
                    *has_content = true;
                    false
                }
                _ => false,
            })
        })
        .filter(|sealed| *sealed)
        .count();
    assert_eq!(markers, 2);
    assert_eq!(documents[0].sentences.len(), markers + 1);
}

#[test]
fn summary() {
    let root = tempdir().unwrap();
    let data_dir = corpus(root.path(), "train", &["00001", "00002"]);

    let summary = Summary::from_corpus(&data_dir).unwrap();
    assert_eq!(summary.n_words(), 12);
    assert_eq!(summary.n_vocab(), 6);
    assert_eq!(summary.netags.get("F"), Some(&6));
    assert_eq!(summary.netags.get("Ac"), Some(&2));
    assert_eq!(summary.chunks.get("D"), Some(&4));
    assert_eq!(summary.chunks.get("P"), Some(&2));
    assert_eq!(summary.chunks.get("A"), Some(&2));
    assert_eq!(summary.dependencies.get("Root"), Some(&2));
    assert_eq!(summary.dependencies.get("Other trailing"), Some(&2));

    let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
    assert_eq!(json["netags"]["F"], 6);
}
