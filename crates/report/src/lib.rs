pub mod export;
pub mod pipeline;
pub mod reader;

pub use pipeline::{run, AnalysisReport};
