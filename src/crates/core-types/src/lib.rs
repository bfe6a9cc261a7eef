//! PatentPro shared DTOs
//!
//! Plain data shapes passed between the request adapter, the core workspaces
//! and the CLI. No behavior lives here beyond small accessors.

pub mod analysis;
pub mod media;
pub mod view;

pub use analysis::{AnalysisResult, GroundingSource, RequestConfig};
pub use media::MediaAttachment;
pub use view::AppView;
