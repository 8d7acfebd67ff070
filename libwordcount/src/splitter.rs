use errors::*;

pub const DEFAULT_CHUNK_COUNT: usize = 3;

/// `Chunk` is a contiguous run of corpus lines, borrowed from the corpus it was split from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    index: usize,
    lines: Vec<&'a str>,
}

impl<'a> Chunk<'a> {
    /// 1-based position of the chunk in the corpus.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The chunk's lines joined with `\n`. No trailing newline is added.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn validate_chunk_count(chunk_count: usize) -> Result<()> {
    if chunk_count == 0 {
        return Err(ErrorKind::InvalidChunkCount(chunk_count).into());
    }
    Ok(())
}

/// `split` partitions the lines of `corpus` into `chunk_count` contiguous chunks.
///
/// Lines are separated by `\n` and empty segments are kept, so a trailing newline yields a final
/// empty line. With `total` lines, the first `total % chunk_count` chunks get one line more than
/// the rest. When there are fewer lines than chunks the trailing chunks are empty.
pub fn split(corpus: &str, chunk_count: usize) -> Result<Vec<Chunk>> {
    validate_chunk_count(chunk_count)?;

    let lines: Vec<&str> = corpus.split('\n').collect();
    let base = lines.len() / chunk_count;
    let remainder = lines.len() % chunk_count;

    let mut chunks = Vec::with_capacity(chunk_count);
    let mut start = 0;
    for i in 0..chunk_count {
        let mut end = start + base;
        if i < remainder {
            end += 1;
        }
        chunks.push(Chunk {
            index: i + 1,
            lines: lines[start..end].to_vec(),
        });
        start = end;
    }

    Ok(chunks)
}
