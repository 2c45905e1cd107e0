pub mod api;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod organize;
pub mod pipeline;
pub mod report;
pub mod store;
pub mod types;
pub mod validation;

pub use api::SliceExtractor;
pub use cli::report::TextReport;
pub use error::{DicurateError, Result};
pub use organize::CollisionPolicy;
pub use pipeline::{run, PipelineConfig, PipelineOutcome};
pub use report::{Histogram, SummaryStats, ThicknessStats};
pub use store::MetadataStore;
pub use types::*;
