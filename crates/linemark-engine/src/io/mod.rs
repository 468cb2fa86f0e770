use crate::transducer::LineTransducer;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Part of the output a read belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Header,
    Body,
    Footer,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Header => "header",
            Phase::Body => "body",
            Phase::Footer => "footer",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Failed to read {phase} from {}: {source}", .path.display())]
    Read {
        phase: Phase,
        path: PathBuf,
        source: io::Error,
    },
    #[error("Cannot open output {} for writing: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// How far a phase got. A read error ends the phase early but is not fatal.
#[derive(Debug, Default)]
pub struct PhaseOutcome {
    pub lines: usize,
    pub error: Option<IoError>,
}

/// Summary of one conversion run.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub header_lines: usize,
    pub body_lines: usize,
    pub footer_lines: usize,
    /// Read failures, in phase order. Each one cut its phase short.
    pub read_errors: Vec<IoError>,
}

impl ConversionReport {
    fn record(&mut self, phase: Phase, outcome: PhaseOutcome) {
        match phase {
            Phase::Header => self.header_lines = outcome.lines,
            Phase::Body => self.body_lines = outcome.lines,
            Phase::Footer => self.footer_lines = outcome.lines,
        }
        if let Some(err) = outcome.error {
            log::error!("{err}");
            self.read_errors.push(err);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.read_errors.is_empty()
    }
}

/// Copies lines from `reader` to `out`, passing each through `map`. Each line
/// is flushed before the next one is read.
///
/// Only write failures are returned as errors; a read failure stops the copy
/// and is reported in the outcome. `source` names the reader in that error.
pub fn stream_lines<R, W, F>(
    phase: Phase,
    source: &Path,
    reader: R,
    out: &mut W,
    mut map: F,
) -> Result<PhaseOutcome, IoError>
where
    R: BufRead,
    W: Write + ?Sized,
    F: FnMut(&str) -> String,
{
    let mut lines = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                return Ok(PhaseOutcome {
                    lines,
                    error: Some(IoError::Read {
                        phase,
                        path: source.to_path_buf(),
                        source: err,
                    }),
                });
            }
        };
        writeln!(out, "{}", map(&line))?;
        out.flush()?;
        lines += 1;
    }
    log::debug!("{phase}: {lines} lines from {}", source.display());
    Ok(PhaseOutcome { lines, error: None })
}

/// Opens `path` and streams it with [`stream_lines`]. A file that cannot be
/// opened is a read failure of the phase.
pub fn stream_file<W, F>(phase: Phase, path: &Path, out: &mut W, map: F) -> Result<PhaseOutcome, IoError>
where
    W: Write + ?Sized,
    F: FnMut(&str) -> String,
{
    match File::open(path) {
        Ok(file) => stream_lines(phase, path, BufReader::new(file), out, map),
        Err(source) => Ok(PhaseOutcome {
            lines: 0,
            error: Some(IoError::Read {
                phase,
                path: path.to_path_buf(),
                source,
            }),
        }),
    }
}

/// Opens the output destination. Fails before anything is converted.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, IoError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| IoError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })
}

/// Derives the HTML file name for an input: a `.md` or `.markdown` extension
/// is replaced, anything else gets `.html` appended.
pub fn html_output_path(input: &Path) -> PathBuf {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some("md" | "markdown") => input.with_extension("html"),
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push(".html");
            PathBuf::from(name)
        }
    }
}

/// Streams header, converted body and footer to an output sink.
#[derive(Debug, Clone)]
pub struct Converter {
    header: PathBuf,
    footer: PathBuf,
}

impl Converter {
    pub fn new(header: impl Into<PathBuf>, footer: impl Into<PathBuf>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Converts the file at `input`.
    pub fn convert<W: Write + ?Sized>(&self, input: &Path, out: &mut W) -> Result<ConversionReport, IoError> {
        self.convert_with(out, |out, transducer| {
            stream_file(Phase::Body, input, out, |line| transducer.transform(line))
        })
    }

    /// Converts lines from an already open reader.
    pub fn convert_reader<R, W>(&self, input: R, out: &mut W) -> Result<ConversionReport, IoError>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        self.convert_with(out, |out, transducer| {
            stream_lines(Phase::Body, Path::new("<input>"), input, out, |line| {
                transducer.transform(line)
            })
        })
    }

    fn convert_with<W, F>(&self, out: &mut W, body: F) -> Result<ConversionReport, IoError>
    where
        W: Write + ?Sized,
        F: FnOnce(&mut W, &mut LineTransducer) -> Result<PhaseOutcome, IoError>,
    {
        let mut report = ConversionReport::default();

        let header = stream_file(Phase::Header, &self.header, out, str::to_string)?;
        report.record(Phase::Header, header);

        let mut transducer = LineTransducer::new();
        let body = body(out, &mut transducer)?;
        report.record(Phase::Body, body);

        let footer = stream_file(Phase::Footer, &self.footer, out, str::to_string)?;
        report.record(Phase::Footer, footer);

        out.flush()?;
        log::info!(
            "Converted {} lines ({} header, {} footer)",
            report.body_lines,
            report.header_lines,
            report.footer_lines
        );
        Ok(report)
    }
}
