pub mod codegen;
pub mod commands;
pub mod encode;
pub mod mime;
pub mod ocr;
pub mod pipeline;
pub mod prompts;

pub use codegen::CommandGenerationStage;
pub use commands::{filter_commands, is_command_line, strip_code_fences};
pub use encode::{data_uri, encode_base64};
pub use mime::{detect_mime_type, resolve_mime, sniff_image_mime};
pub use ocr::RecognitionStage;
pub use pipeline::AnalysisPipeline;
