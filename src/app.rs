//! File pipeline around the core.
//!
//! The core only maps strings to strings. This module is the collaborator
//! that gets those strings in and out:
//!
//! ```text
//! RunConfig ── PathSource::resolve ──► ResolvedPaths
//!                 (ArgsSource | PromptSource)
//! prepare()  ── readiness gate: token pattern + default corpus built
//! run()      ── read input ─► transform ─► write output ─► Outcome
//! ```
//!
//! Every failure here aborts the run with an [`AppError`]; nothing is
//! swallowed.

use crate::engine::{Corpus, Substituter};
use crate::{TransformError, default_corpus};
use std::fmt;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Path meaning "stdin" for input or "stdout" for output.
pub const STDIO_PATH: &str = "-";

/// Extension appended to prompted output paths that have none.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Which of the two paths a message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Input,
    Output,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Input => f.write_str("input"),
            PathKind::Output => f.write_str("output"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no {0} file was given")]
    MissingPath(PathKind),
    #[error("no {0} file was selected. Exiting.")]
    NoSelection(PathKind),
    #[error("error reading the {0} path: {1}")]
    Prompt(PathKind, #[source] io::Error),
    #[error("error reading file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("error writing to file '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl AppError {
    /// Process exit code for this error: 2 for selection/argument problems,
    /// 1 for everything that went wrong while running.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::MissingPath(_) | AppError::NoSelection(_) => 2,
            _ => 1,
        }
    }
}

/// Paths as given by the user; either may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

/// Both paths, ready to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ResolvedPaths {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIO_PATH
    }

    pub fn writes_stdout(&self) -> bool {
        self.output.as_os_str() == STDIO_PATH
    }
}

/// Strategy for filling in the paths a [`RunConfig`] leaves open.
pub trait PathSource {
    fn resolve(&mut self, config: &RunConfig) -> Result<ResolvedPaths, AppError>;
}

/// Uses only what was given; a missing path is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgsSource;

impl PathSource for ArgsSource {
    fn resolve(&mut self, config: &RunConfig) -> Result<ResolvedPaths, AppError> {
        let input = config.input_path.clone().ok_or(AppError::MissingPath(PathKind::Input))?;
        let output = config.output_path.clone().ok_or(AppError::MissingPath(PathKind::Output))?;
        Ok(ResolvedPaths { input, output })
    }
}

/// Asks on a terminal for any path the config leaves open.
///
/// An empty answer aborts. A prompted output path without an extension gets
/// [`DEFAULT_EXTENSION`].
pub struct PromptSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        PromptSource { reader, writer }
    }

    fn ask(&mut self, kind: PathKind, question: &str) -> Result<PathBuf, AppError> {
        write!(self.writer, "{question}: ").and_then(|_| self.writer.flush()).map_err(|e| AppError::Prompt(kind, e))?;

        let mut line = String::new();
        self.reader.read_line(&mut line).map_err(|e| AppError::Prompt(kind, e))?;
        let answer = line.trim();
        if answer.is_empty() {
            return Err(AppError::NoSelection(kind));
        }
        Ok(PathBuf::from(answer))
    }
}

impl<R: BufRead, W: Write> PathSource for PromptSource<R, W> {
    fn resolve(&mut self, config: &RunConfig) -> Result<ResolvedPaths, AppError> {
        let input = match &config.input_path {
            Some(path) => path.clone(),
            None => self.ask(PathKind::Input, "Select a file for Nurdsem Ragesum")?,
        };
        let output = match &config.output_path {
            Some(path) => path.clone(),
            None => with_default_extension(self.ask(PathKind::Output, "Select a destination for the transformed file")?),
        };
        Ok(ResolvedPaths { input, output })
    }
}

fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.as_os_str() == STDIO_PATH || path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Readiness gate: build everything the core depends on before any input is
/// read.
pub fn prepare() -> Result<&'static Corpus, AppError> {
    let corpus = default_corpus()?;
    tracing::debug!(corpus_len = corpus.len(), "core ready");
    Ok(corpus)
}

/// What a finished run did.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub paths: ResolvedPaths,
    pub tokens: usize,
    pub wraps: usize,
    pub soft_failures: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
    /// Time spent in the substitution pass.
    pub elapsed: Duration,
}

/// Read, transform and write.
pub fn run(corpus: &Corpus, paths: ResolvedPaths) -> Result<Outcome, AppError> {
    let input = read_input(&paths.input)?;
    tracing::info!(path = %paths.input.display(), bytes = input.len(), "read input");

    let result = Substituter::new(corpus).run(&input);
    write_output(&paths.output, &result.text)?;
    tracing::info!(path = %paths.output.display(), bytes = result.text.len(), "wrote output");

    Ok(Outcome {
        tokens: result.metrics.tokens,
        wraps: result.metrics.wraps,
        soft_failures: result.failures.len(),
        bytes_in: input.len(),
        bytes_out: result.text.len(),
        elapsed: result.metrics.total,
        paths,
    })
}

fn read_input(path: &Path) -> Result<String, AppError> {
    let read_err = |source| AppError::Read { path: path.to_path_buf(), source };
    if path.as_os_str() == STDIO_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(read_err)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

fn write_output(path: &Path, text: &str) -> Result<(), AppError> {
    let write_err = |source| AppError::Write { path: path.to_path_buf(), source };
    if path.as_os_str() == STDIO_PATH {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()).map_err(write_err)
    } else {
        std::fs::write(path, text).map_err(write_err)
    }
}
