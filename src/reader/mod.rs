//! Instruction reader – every line of every input file, in order, as one
//! stream. Falls back to stdin when no file is named.

use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Map CLI arguments to sources. No arguments means stdin, and so does `-`.
pub fn sources_from_args(paths: &[PathBuf]) -> Vec<Source> {
    if paths.is_empty() {
        return vec![Source::Stdin];
    }
    paths
        .iter()
        .map(|p| {
            if p.as_os_str() == "-" {
                Source::Stdin
            } else {
                Source::File(p.clone())
            }
        })
        .collect()
}

/// One physical input line, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub origin: String,
    /// 1-based, restarts for every source.
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(origin: impl Into<String>, number: usize, text: &str) -> Self {
        Self {
            origin: origin.into(),
            number,
            text: text.trim().to_string(),
        }
    }
}

struct OpenSource {
    source: Source,
    reader: Box<dyn BufRead>,
    number: usize,
}

/// Lazy, one-pass line iterator over a list of sources.
///
/// A source is only opened once the previous one is exhausted. The first
/// I/O error is yielded and ends the stream.
pub struct LineReader {
    pending: std::vec::IntoIter<Source>,
    current: Option<OpenSource>,
    failed: bool,
}

impl LineReader {
    pub fn new(sources: Vec<Source>) -> Self {
        Self {
            pending: sources.into_iter(),
            current: None,
            failed: false,
        }
    }
}

fn open(source: &Source) -> Result<Box<dyn BufRead>> {
    match source {
        Source::Stdin => Ok(Box::new(io::stdin().lock())),
        Source::File(path) => open_file(path),
    }
}

fn open_file(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Reading {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

impl Iterator for LineReader {
    type Item = Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed {
                return None;
            }

            if self.current.is_none() {
                let source = self.pending.next()?;
                match open(&source) {
                    Ok(reader) => {
                        log::info!("reading {source}");
                        self.current = Some(OpenSource {
                            source,
                            reader,
                            number: 0,
                        });
                    }
                    Err(e) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                }
            }
            let Some(open_src) = self.current.as_mut() else {
                continue;
            };

            let mut buf = String::new();
            match open_src.reader.read_line(&mut buf) {
                Ok(0) => self.current = None,
                Ok(_) => {
                    open_src.number += 1;
                    let line =
                        SourceLine::new(open_src.source.to_string(), open_src.number, &buf);
                    return Some(Ok(line));
                }
                Err(e) => {
                    self.failed = true;
                    let err = anyhow::Error::new(e)
                        .context(format!("Reading {}", open_src.source));
                    return Some(Err(err));
                }
            }
        }
    }
}
