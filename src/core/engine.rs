use crate::core::{AssembledOutput, Pipeline};
use crate::utils::error::Result;
use std::time::Instant;

pub struct AmalgamEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AmalgamEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Load and assemble without touching the destination.
    pub fn plan(&self) -> Result<AssembledOutput> {
        tracing::info!("Loading fragments...");
        let fragments = self.pipeline.extract()?;
        tracing::info!("Loaded {} fragments", fragments.len());

        tracing::info!("Filtering and assembling...");
        let output = self.pipeline.transform(fragments)?;
        tracing::info!(
            "Assembled {} lines ({} preamble)",
            output.report.output_lines,
            output.report.preamble_lines
        );

        Ok(output)
    }

    pub fn run(&self) -> Result<String> {
        let start = Instant::now();
        let output = self.plan()?;

        tracing::info!("Writing output...");
        let destination = self.pipeline.load(output)?;
        tracing::info!("Output saved to: {} in {:?}", destination, start.elapsed());

        Ok(destination)
    }
}
