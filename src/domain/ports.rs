use crate::config::OutputFormat;
use crate::domain::model::{GameOutcome, ResultGrid};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn report_extension(&self) -> &str;
    fn output_dir(&self) -> Option<&str>;
    fn output_formats(&self) -> &[OutputFormat];
    fn max_open_attempts(&self) -> u32;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ResultGrid>;
    fn transform(&self, grid: ResultGrid) -> Result<GameOutcome>;
    fn load(&self, outcome: GameOutcome) -> Result<String>;
}
