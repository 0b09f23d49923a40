//! Config defaults applied when an environment key is unset.

/// Origins trusted regardless of operator configuration.
pub const DEFAULT_TRUSTED_ORIGINS: &[&str] = &[
    "http://localhost:*",
    "http://127.0.0.1:*",
    "https://*.workers.dev",
];

/// OpenAI-compatible endpoint used for both stages.
pub const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";

/// Vision model for the recognition stage.
pub const DEFAULT_OCR_MODEL: &str = "qwen3-vl-plus";

/// Text model for the command-generation stage.
pub const DEFAULT_CODEGEN_MODEL: &str = "deepseek-r1";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 8787;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_LOG_DIR: &str = "logs";
