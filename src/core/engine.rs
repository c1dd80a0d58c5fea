use crate::core::{Pipeline, RunSummary, SkippedLine};
use crate::utils::error::{NameSortError, Result};

/// Drives a [`Pipeline`] through extract, transform and load. The first
/// failing stage ends the run.
pub struct SortEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SortEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::debug!("Extracting names...");
        let parsed = match self.pipeline.extract() {
            Ok(parsed) => parsed,
            Err(e) => {
                if let NameSortError::NoValidData { skipped, .. } = &e {
                    log_skipped(skipped);
                }
                return Err(e);
            }
        };
        log_skipped(&parsed.skipped);
        tracing::debug!(
            "Extracted {} names, skipped {} lines",
            parsed.records.len(),
            parsed.skipped.len()
        );
        let lines_skipped = parsed.skipped.len();

        tracing::debug!("Sorting names...");
        let sorted = self.pipeline.transform(parsed.records)?;
        let names_sorted = sorted.len();

        tracing::debug!("Emitting names...");
        let output_path = self.pipeline.load(sorted)?;

        Ok(RunSummary {
            names_sorted,
            lines_skipped,
            output_path,
        })
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }
}

fn log_skipped(skipped: &[SkippedLine]) {
    for line in skipped {
        tracing::warn!(
            line = line.line_number,
            "Ignore this invalid name: {}",
            line.content
        );
    }
}
