use crate::config::OutputFormat;
use crate::core::reader::read_results;
use crate::core::report::{render_csv, render_json, render_report, report_file_name};
use crate::core::scoring::score_game;
use crate::core::{ConfigProvider, GameOutcome, Pipeline, ResultGrid, RollSource, Storage};
use crate::domain::model::GameShape;
use crate::utils::error::Result;
use std::path::Path;

/// Scores one opened roll file and writes its reports through `Storage`.
pub struct DicePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    source: RollSource,
    shape: GameShape,
}

impl<S: Storage, C: ConfigProvider> DicePipeline<S, C> {
    pub fn new(storage: S, config: C, source: RollSource) -> Self {
        Self::with_shape(storage, config, source, GameShape::STANDARD)
    }

    pub fn with_shape(storage: S, config: C, source: RollSource, shape: GameShape) -> Self {
        Self {
            storage,
            config,
            source,
            shape,
        }
    }

    fn output_name(&self, extension: &str) -> String {
        let name = report_file_name(&self.source.name, extension);
        match self.config.output_dir() {
            Some(dir) => Path::new(&name)
                .file_name()
                .map_or_else(|| Path::new(dir).join(&name), |file| Path::new(dir).join(file))
                .to_string_lossy()
                .into_owned(),
            None => name,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for DicePipeline<S, C> {
    fn extract(&self) -> Result<ResultGrid> {
        tracing::debug!("Decoding roll data from {}", self.source.name);
        Ok(read_results(self.source.content.lines(), &self.shape))
    }

    fn transform(&self, grid: ResultGrid) -> Result<GameOutcome> {
        Ok(score_game(grid, &self.shape, &self.source.name))
    }

    fn load(&self, outcome: GameOutcome) -> Result<String> {
        let report_path = self.output_name(self.config.report_extension());
        let report = render_report(&outcome, &self.shape);

        tracing::debug!("Writing report ({} bytes) to {}", report.len(), report_path);
        self.storage.write_file(&report_path, report.as_bytes())?;

        for format in self.config.output_formats() {
            let (path, body) = match format {
                OutputFormat::Report => continue,
                OutputFormat::Json => (self.output_name("json"), render_json(&outcome, &self.shape)?),
                OutputFormat::Csv => (self.output_name("csv"), render_csv(&outcome, &self.shape)?),
            };
            tracing::debug!("Writing {:?} export to {}", format, path);
            self.storage.write_file(&path, body.as_bytes())?;
        }

        Ok(report_path)
    }
}
