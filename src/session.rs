use crate::chat::{ChatRequestBody, MessageContent};
use crate::config::Config;
use crate::error::AgentError;
use crate::files::{encode_image, read_text_file};
use crate::history::ConversationHistory;
use crate::request::{
    apply_cot, build_image_request, build_text_request, image_history_record, Prompt,
};
use crate::stream::{decode_stream, Fragment};
use crate::utils::{build_headers, create_spinner};
use futures::stream::{self, BoxStream, StreamExt};
use reqwest::{header::HeaderMap, Client};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub response: String,
    /// False when the exchange ended on a diagnostic and was not recorded.
    pub completed: bool,
}

/// Owns the credential, HTTP client and rolling history for one process run.
pub struct Session {
    config: Config,
    client: Client,
    headers: HeaderMap,
    history: ConversationHistory,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, AgentError> {
        let headers = build_headers(&config.api_key)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| AgentError::Configuration(format!("cannot build HTTP client: {}", e)))?;

        Ok(Session {
            config,
            client,
            headers,
            history: ConversationHistory::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Sends one streaming completion request. Failures before the body
    /// arrives come back as a single diagnostic fragment.
    pub async fn open_stream(&self, body: &ChatRequestBody) -> BoxStream<'static, Fragment> {
        let url = self.config.completions_url();
        log::debug!(
            "POST {} model={} messages={}",
            url,
            body.model,
            body.messages.len()
        );

        let spinner = create_spinner("green", "Waiting for response...".to_string());
        let result = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await;
        spinner.finish_and_clear();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                log::warn!("request to {} failed: {}", url, e);
                return stream::once(async move { Fragment::transport(e.to_string()) }).boxed();
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            log::warn!("request to {} returned {}", url, status);
            let message = format!("failed with status code {}: {}", status, text.trim());
            return stream::once(async move { Fragment::transport(message) }).boxed();
        }

        decode_stream(response.bytes_stream(), Some(self.config.read_timeout)).boxed()
    }

    /// Runs one request/response cycle, writing fragments to `out` as they
    /// arrive. History is only updated once the stream finished without a
    /// diagnostic.
    pub async fn exchange<W: Write>(
        &mut self,
        prompt: Prompt,
        out: &mut W,
    ) -> io::Result<ExchangeOutcome> {
        let (body, record) = match self.prepare(prompt).await {
            Ok(prepared) => prepared,
            Err(e) => {
                log::warn!("{}", e);
                write!(out, "{}", e)?;
                out.flush()?;
                return Ok(ExchangeOutcome {
                    response: String::new(),
                    completed: false,
                });
            }
        };

        let mut fragments = self.open_stream(&body).await;
        let mut response = String::new();
        let mut completed = true;
        while let Some(fragment) = fragments.next().await {
            write!(out, "{}", fragment)?;
            out.flush()?;
            if fragment.is_diagnostic() {
                completed = false;
            } else {
                response.push_str(fragment.as_str());
            }
        }

        if completed {
            self.history.append_exchange(record, response.clone());
        }
        Ok(ExchangeOutcome {
            response,
            completed,
        })
    }

    async fn prepare(
        &self,
        prompt: Prompt,
    ) -> Result<(ChatRequestBody, MessageContent), AgentError> {
        match prompt {
            Prompt::Text { prompt, use_cot } => {
                let text = apply_cot(&prompt, use_cot);
                let body = build_text_request(
                    self.history.snapshot_for_request(),
                    &text,
                    &self.config.model,
                );
                Ok((body, text.into()))
            }
            Prompt::File { path, operation } => {
                let content = read_text_file(&path).await?;
                let text = operation.apply(&content);
                let body = build_text_request(
                    self.history.snapshot_for_request(),
                    &text,
                    &self.config.model,
                );
                Ok((body, text.into()))
            }
            Prompt::Image { path, query } => {
                let image_base64 = encode_image(&path).await?;
                let body = build_image_request(
                    &path,
                    &image_base64,
                    query.as_deref(),
                    &self.config.vision_model,
                );
                Ok((body, image_history_record(&path, query.as_deref()).into()))
            }
        }
    }
}
