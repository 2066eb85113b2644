use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const COMPLETIONS_PATH: &str = "/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_VISION_MODEL: &str = "deepseek-vl";

pub const ENV_API_KEY: &str = "DEEPSEEK_API_KEY";
pub const ENV_BASE_URL: &str = "DEEPSEEK_BASE_URL";
pub const ENV_MODEL: &str = "DEEPSEEK_MODEL";
pub const ENV_VISION_MODEL: &str = "DEEPSEEK_VISION_MODEL";

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const READ_TIMEOUT: Duration = Duration::from_secs(60);

pub const SSE_DATA_PREFIX: &str = "data: ";
pub const SSE_DONE: &str = "[DONE]";

// History grows to HISTORY_LIMIT entries, then snaps back to the newest HISTORY_RETAIN.
pub const HISTORY_LIMIT: usize = 10;
pub const HISTORY_RETAIN: usize = 6;

pub const COT_INSTRUCTION: &str =
    "Please reason step by step, using a chain of thought, to analyse the following:\n";
pub const EMAIL_INSTRUCTION: &str =
    "Please rewrite the following as a professional English email:\n\n";
pub const REVISE_INSTRUCTION: &str =
    "Please revise the following and point out every change you made:\n\n";
pub const DEFAULT_IMAGE_QUERY: &str = "Describe the content of this image";

pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

pub const CMD_QUIT: &str = "quit";
pub const CMD_EXIT: &str = "exit";
pub const CMD_CLEAR: &str = "clear";
pub const CMD_IMAGE: &str = "image";
pub const CMD_FILE: &str = "file";
