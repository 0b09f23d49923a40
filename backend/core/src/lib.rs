pub mod error;
pub mod traits;
pub mod types;

pub use error::GeoError;
pub use traits::{ChatProvider, ChatReply, ChatRequest, UserContent};
pub use types::AnalysisResult;
