use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Reading roll data...");
        let grid = self.pipeline.extract()?;
        tracing::info!("Read {} players x {} rounds", grid.players(), grid.rounds());

        tracing::info!("Scoring game...");
        let outcome = self.pipeline.transform(grid)?;
        tracing::info!(
            "Team A {} - Team B {}",
            outcome.team_a.total,
            outcome.team_b.total
        );

        tracing::info!("Writing report...");
        let report_path = self.pipeline.load(outcome)?;
        tracing::info!("Report saved to: {}", report_path);

        Ok(report_path)
    }
}
