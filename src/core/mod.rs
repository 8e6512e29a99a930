pub mod decoder;
pub mod engine;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod scoring;

pub use crate::domain::model::{GameOutcome, ResultGrid, RollSource};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
