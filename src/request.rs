use crate::chat::{ChatMessage, ChatRequestBody, ContentPart, ImageUrl, MessageContent};
use crate::constants::{COT_INSTRUCTION, EMAIL_INSTRUCTION, REVISE_INSTRUCTION};
use crate::files::image_mime_type;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOperation {
    #[default]
    Default,
    Email,
    Revise,
}

impl FileOperation {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "email" => FileOperation::Email,
            "revise" => FileOperation::Revise,
            _ => FileOperation::Default,
        }
    }

    pub fn apply(self, content: &str) -> String {
        match self {
            FileOperation::Default => content.to_string(),
            FileOperation::Email => format!("{}{}", EMAIL_INSTRUCTION, content),
            FileOperation::Revise => format!("{}{}", REVISE_INSTRUCTION, content),
        }
    }
}

/// One unit of user input, as handed to [`crate::session::Session::exchange`].
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    Text { prompt: String, use_cot: bool },
    File { path: PathBuf, operation: FileOperation },
    Image { path: PathBuf, query: Option<String> },
}

pub fn apply_cot(prompt: &str, use_cot: bool) -> String {
    if use_cot {
        format!("{}{}", COT_INSTRUCTION, prompt)
    } else {
        prompt.to_string()
    }
}

pub fn build_text_request(history: Vec<ChatMessage>, prompt: &str, model: &str) -> ChatRequestBody {
    let mut messages = history;
    messages.push(ChatMessage::user(prompt));
    ChatRequestBody {
        model: model.to_string(),
        messages,
        stream: true,
    }
}

pub fn build_image_request(
    image_path: &Path,
    image_base64: &str,
    query: Option<&str>,
    model: &str,
) -> ChatRequestBody {
    let mut parts = Vec::with_capacity(2);
    if let Some(text) = query {
        parts.push(ContentPart::Text {
            text: text.to_string(),
        });
    }
    parts.push(ContentPart::ImageUrl {
        image_url: ImageUrl {
            url: format!("data:{};base64,{}", image_mime_type(image_path), image_base64),
        },
    });

    ChatRequestBody {
        model: model.to_string(),
        messages: vec![ChatMessage::user(MessageContent::Parts(parts))],
        stream: true,
    }
}

/// Text stored in history in place of the image payload.
pub fn image_history_record(image_path: &Path, query: Option<&str>) -> String {
    format!(
        "Image: {}, query: {}",
        image_path.display(),
        query.unwrap_or("none")
    )
}
