//! Generation reports and where they go

use evo_core::{FitnessSummary, StatsError};
use std::fmt;

/// Emitted once per generation boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub generation: u64,
    pub summary: Result<FitnessSummary, StatsError>,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.summary {
            Ok(summary) => write!(
                f,
                "generation {}: avg fitness {:.2}, max fitness {:.2} ({} animals)",
                self.generation, summary.average, summary.max, summary.population
            ),
            Err(err) => write!(f, "generation {}: {}", self.generation, err),
        }
    }
}

/// Line-oriented report consumer.
pub trait ReportSink {
    fn emit(&mut self, report: &GenerationReport);
}

/// Sends reports to `tracing`; empty populations become warnings.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn emit(&mut self, report: &GenerationReport) {
        match &report.summary {
            Ok(summary) => tracing::info!(
                generation = report.generation,
                average = summary.average,
                max = summary.max,
                "{report}"
            ),
            Err(_) => tracing::warn!(generation = report.generation, "{report}"),
        }
    }
}

impl ReportSink for Vec<GenerationReport> {
    fn emit(&mut self, report: &GenerationReport) {
        self.push(report.clone());
    }
}
