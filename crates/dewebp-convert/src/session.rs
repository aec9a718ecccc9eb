//! Conversion session: the selected settings plus the result list.
//!
//! A [`Session`] is the single owner of mutable converter state. Front
//! ends dispatch files through it, run each [`Dispatched`] job on their
//! own scheduler, and hand successful results back with
//! [`Session::accept`].

use tracing::{info, warn};

use crate::convert;
use crate::intake::{self, IntakeError, MediaTyped};
use crate::results::ResultList;
use crate::types::{ConversionResult, ConvertConfig, ConvertError, EncodedImage, OutputFormat};

/// A file accepted for conversion, paired with the settings captured
/// when it was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched<F> {
    /// The accepted input file.
    pub file: F,
    /// Settings in effect at dispatch time.
    pub config: ConvertConfig,
}

/// An in-memory input file with its declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Original file name.
    pub name: String,
    /// Declared media type, if the platform reported one.
    pub media_type: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl InputFile {
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.map(str::to_owned),
            bytes,
        }
    }
}

impl MediaTyped for InputFile {
    fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

impl<F> Dispatched<F> {
    /// Convert `bytes` read from this job's file with the captured
    /// settings, naming the result after `name`.
    ///
    /// Front ends that read file contents asynchronously call this once
    /// the bytes are available.
    ///
    /// # Errors
    ///
    /// Returns the [`ConvertError`] for this file only.
    pub fn convert(&self, name: &str, bytes: &[u8]) -> Result<ConversionResult, ConvertError> {
        convert::convert(name, bytes, &self.config)
    }
}

impl Dispatched<InputFile> {
    /// Convert the in-memory file with its captured settings.
    ///
    /// # Errors
    ///
    /// Returns the [`ConvertError`] for this file only.
    pub fn run(&self) -> Result<ConversionResult, ConvertError> {
        self.convert(&self.file.name, &self.file.bytes)
    }
}

/// A file that could not be converted, kept for display until the
/// session is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Input file name.
    pub file: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Outcome of converting a batch of in-memory files.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output names of the results appended, in order.
    pub converted: Vec<String>,
    /// Input names that failed, with the reason.
    pub failed: Vec<(String, ConvertError)>,
}

/// Converter state owned by one front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session<R = EncodedImage> {
    config: ConvertConfig,
    results: ResultList<R>,
    failures: Vec<Failure>,
}

impl<R> Session<R> {
    /// A session with the given settings and no results.
    #[must_use]
    pub const fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            results: ResultList::new(),
            failures: Vec::new(),
        }
    }

    /// Currently selected output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.config.format
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> ConvertConfig {
        self.config
    }

    /// Change the output format for future dispatches.
    ///
    /// Existing results and already-dispatched jobs keep their format.
    pub const fn select_format(&mut self, format: OutputFormat) {
        self.config.format = format;
    }

    #[must_use]
    pub const fn results(&self) -> &ResultList<R> {
        &self.results
    }

    /// Failures recorded since the last [`Self::clear`], oldest first.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Filter `files` and pair each accepted file with the current
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::NoWebpFiles`] when nothing qualifies. The
    /// result list and recorded failures are not touched in either case,
    /// so jobs still running from an earlier batch keep reporting into
    /// the same list.
    pub fn dispatch<F: MediaTyped>(
        &self,
        files: Vec<F>,
    ) -> Result<Vec<Dispatched<F>>, IntakeError> {
        let accepted = intake::select_webp(files)?;
        let config = self.config;
        info!(count = accepted.len(), format = %config.format, "dispatching conversions");
        Ok(accepted
            .into_iter()
            .map(|file| Dispatched { file, config })
            .collect())
    }

    /// Append a finished conversion.
    pub fn accept(&mut self, result: ConversionResult<R>) {
        self.results.push(result);
    }

    /// Record a file that could not be converted.
    pub fn record_failure(&mut self, file: impl Into<String>, reason: impl Into<String>) {
        self.failures.push(Failure {
            file: file.into(),
            reason: reason.into(),
        });
    }

    /// Remove one result; out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<ConversionResult<R>> {
        self.results.remove_at(index)
    }

    /// Remove every result and every recorded failure.
    pub fn clear(&mut self) {
        self.results.clear();
        self.failures.clear();
    }
}

impl<R> Default for Session<R> {
    fn default() -> Self {
        Self::new(ConvertConfig::default())
    }
}

impl Session {
    /// Dispatch and convert a batch of in-memory files in order.
    ///
    /// Each file is converted independently: a failure is recorded in the
    /// report and in [`Self::failures`], and the remaining files still run.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::NoWebpFiles`] when nothing qualifies.
    pub fn convert_batch(&mut self, files: Vec<InputFile>) -> Result<BatchReport, IntakeError> {
        let jobs = self.dispatch(files)?;
        let mut report = BatchReport::default();
        for job in jobs {
            match job.run() {
                Ok(result) => {
                    report.converted.push(result.name().to_owned());
                    self.accept(result);
                }
                Err(e) => {
                    warn!(file = %job.file.name, error = %e, "conversion failed");
                    self.record_failure(job.file.name.clone(), e.to_string());
                    report.failed.push((job.file.name, e));
                }
            }
        }
        Ok(report)
    }
}
