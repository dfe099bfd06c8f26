/*! Named entity spans

Reconstructs entity spans from per-token tags, following the chunking rules of seqeval
(IOB1/IOB2, plus `E`/`S` for IOBES tagged data).

A tag is a one letter prefix, optionally followed by `-` and a type (`B-PER`, `I-PER`, `O`).
Tags without a type get the `_` type.
!*/

/// Entity span over `[start, end)` token indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Split a tag into its prefix and type.
fn split_tag(tag: &str) -> (char, &str) {
    let mut chars = tag.chars();
    let prefix = match chars.next() {
        Some(c) => c,
        None => return ('O', "_"),
    };
    let rest = chars.as_str();
    let kind = match rest.split_once('-') {
        Some((_, kind)) => kind,
        None => rest,
    };
    if kind.is_empty() {
        (prefix, "_")
    } else {
        (prefix, kind)
    }
}

/// Whether a chunk ended just before the current tag.
fn end_of_chunk(prev_tag: char, tag: char, prev_type: &str, kind: &str) -> bool {
    match (prev_tag, tag) {
        ('E', _) | ('S', _) => true,
        ('B', 'B') | ('B', 'S') | ('B', 'O') => true,
        ('I', 'B') | ('I', 'S') | ('I', 'O') => true,
        _ => prev_tag != 'O' && prev_tag != '.' && prev_type != kind,
    }
}

/// Whether a chunk starts at the current tag.
fn start_of_chunk(prev_tag: char, tag: char, prev_type: &str, kind: &str) -> bool {
    match (prev_tag, tag) {
        (_, 'B') | (_, 'S') => true,
        ('E', 'E') | ('E', 'I') => true,
        ('S', 'E') | ('S', 'I') => true,
        ('O', 'E') | ('O', 'I') => true,
        _ => tag != 'O' && tag != '.' && prev_type != kind,
    }
}

/// Extract entity spans of a tag sequence.
pub fn entities<S>(tags: &[S]) -> Vec<Entity>
where
    S: AsRef<str>,
{
    let mut spans = Vec::new();
    let mut prev_tag = 'O';
    let mut prev_type = "";
    let mut begin = 0;

    // an extra `O` closes the eventual last chunk
    let tags = tags
        .iter()
        .map(|tag| tag.as_ref())
        .chain(std::iter::once("O"));
    for (idx, raw) in tags.enumerate() {
        let (tag, kind) = split_tag(raw);

        if end_of_chunk(prev_tag, tag, prev_type, kind) {
            spans.push(Entity {
                label: prev_type.to_string(),
                start: begin,
                end: idx,
            });
        }
        if start_of_chunk(prev_tag, tag, prev_type, kind) {
            begin = idx;
        }

        prev_tag = tag;
        prev_type = kind;
    }

    spans
}
