//! Round sinks for simulation results.
//!
//! Files are keyed by session seed so reruns with the same seed overwrite
//! their own results instead of piling up.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, RoundMetrics};
use crate::types::OutputFormat;

type SinkResult = Result<(), Box<dyn std::error::Error>>;

/// Destination for finished rounds.
pub trait RoundSink {
    fn label(&self) -> &'static str;
    fn path(&self) -> &Path;
    fn accept(&mut self, metrics: &RoundMetrics) -> SinkResult;
    fn close(self: Box<Self>) -> SinkResult;
}

/// One JSON object per round, optionally gzip-compressed.
struct JsonlSink {
    path: PathBuf,
    out: Box<dyn Write + Send>,
}

impl JsonlSink {
    fn create(dir: &Path, stem: &str, compress: bool) -> Result<Self, std::io::Error> {
        if compress {
            let path = dir.join(format!("{stem}.jsonl.gz"));
            let encoder = GzEncoder::new(File::create(&path)?, Compression::default());
            Ok(Self {
                path,
                out: Box::new(BufWriter::new(encoder)),
            })
        } else {
            let path = dir.join(format!("{stem}.jsonl"));
            let file = File::create(&path)?;
            Ok(Self {
                path,
                out: Box::new(BufWriter::new(file)),
            })
        }
    }
}

impl RoundSink for JsonlSink {
    fn label(&self) -> &'static str {
        "round details"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn accept(&mut self, metrics: &RoundMetrics) -> SinkResult {
        serde_json::to_writer(&mut self.out, metrics)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn close(mut self: Box<Self>) -> SinkResult {
        self.out.flush()?;
        Ok(())
    }
}

/// Flat per-round summary rows; the header comes from `CsvSummaryRow`.
struct CsvSink {
    path: PathBuf,
    out: csv::Writer<BufWriter<File>>,
}

impl CsvSink {
    fn create(dir: &Path, stem: &str) -> Result<Self, std::io::Error> {
        let path = dir.join(format!("{stem}_summary.csv"));
        let out = csv::Writer::from_writer(BufWriter::new(File::create(&path)?));
        Ok(Self { path, out })
    }
}

impl RoundSink for CsvSink {
    fn label(&self) -> &'static str {
        "summary csv"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn accept(&mut self, metrics: &RoundMetrics) -> SinkResult {
        self.out.serialize(CsvSummaryRow::from(metrics))?;
        // Rows are flushed per round so an interrupted run keeps what it played.
        self.out.flush()?;
        Ok(())
    }

    fn close(mut self: Box<Self>) -> SinkResult {
        self.out.flush()?;
        Ok(())
    }
}

/// Fans each round out to every sink the chosen format enables.
pub struct OutputWriter {
    sinks: Vec<Box<dyn RoundSink>>,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: OutputFormat,
        compress: bool,
        session_seed: u64,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;
        let stem = format!("session_{session_seed:016x}");

        let mut sinks: Vec<Box<dyn RoundSink>> = Vec::new();
        if format.wants_jsonl() {
            sinks.push(Box::new(JsonlSink::create(dir, &stem, compress)?));
        }
        if format.wants_csv() {
            sinks.push(Box::new(CsvSink::create(dir, &stem)?));
        }
        Ok(Self { sinks })
    }

    /// Offers the round to every sink; the first failure is returned after
    /// the remaining sinks have still been written.
    pub fn write_round(&mut self, metrics: &RoundMetrics) -> SinkResult {
        let mut first_err = None;
        for sink in &mut self.sinks {
            if let Err(err) = sink.accept(metrics) {
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    pub fn outputs(&self) -> Vec<(&'static str, PathBuf)> {
        self.sinks
            .iter()
            .map(|sink| (sink.label(), sink.path().to_path_buf()))
            .collect()
    }

    pub fn finish(self) -> SinkResult {
        for sink in self.sinks {
            sink.close()?;
        }
        Ok(())
    }
}
