//! Decoding of `data: ` lines from a streaming chat-completions response.
//!
//! Everything this module yields is printable: model text arrives as
//! [`Fragment::Text`], and a broken transport becomes a single
//! [`Fragment::Diagnostic`] that ends the sequence.

use std::fmt;
use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};

use crate::chat::ChatStreamChunk;
use crate::constants::{SSE_DATA_PREFIX, SSE_DONE};
use crate::error::AgentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Diagnostic(String),
}

impl Fragment {
    pub fn transport(message: impl Into<String>) -> Self {
        Fragment::Diagnostic(AgentError::Transport(message.into()).to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Text(text) | Fragment::Diagnostic(text) => text,
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Fragment::Diagnostic(_))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Skip,
    Text(String),
    Done,
}

pub fn decode_line(line: &str) -> LineOutcome {
    let payload = match line.strip_prefix(SSE_DATA_PREFIX) {
        Some(payload) => payload,
        None => return LineOutcome::Skip,
    };
    if payload == SSE_DONE {
        return LineOutcome::Done;
    }

    let chunk: ChatStreamChunk = match serde_json::from_str(payload) {
        Ok(chunk) => chunk,
        Err(e) => {
            log::debug!("skipping malformed stream line ({}): {}", e, payload);
            return LineOutcome::Skip;
        }
    };

    chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .filter(|content| !content.is_empty())
        .map_or(LineOutcome::Skip, LineOutcome::Text)
}

struct DecoderState<S> {
    body: S,
    buffer: Vec<u8>,
    read_timeout: Option<Duration>,
    exhausted: bool,
}

impl<S> DecoderState<S> {
    fn take_line(&mut self) -> Option<String> {
        let raw = match self.buffer.iter().position(|&b| b == b'\n') {
            Some(idx) => {
                let mut raw: Vec<u8> = self.buffer.drain(..=idx).collect();
                raw.pop();
                raw
            }
            None if self.exhausted && !self.buffer.is_empty() => std::mem::take(&mut self.buffer),
            None => return None,
        };
        let text = String::from_utf8_lossy(&raw);
        let text: &str = &text;
        Some(text.strip_suffix('\r').unwrap_or(text).to_string())
    }
}

/// Turns a response body into a lazy sequence of fragments.
///
/// The sequence ends on the `[DONE]` sentinel, when the body runs out, or
/// after the one diagnostic produced by a failed or stalled read.
pub fn decode_stream<S, B, E>(body: S, read_timeout: Option<Duration>) -> impl Stream<Item = Fragment>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: fmt::Display,
{
    let state = DecoderState {
        body,
        buffer: Vec::new(),
        read_timeout,
        exhausted: false,
    };

    stream::unfold(Some(state), |state| async move {
        let mut state = state?;
        loop {
            if let Some(line) = state.take_line() {
                log::trace!("stream line: {}", line);
                match decode_line(&line) {
                    LineOutcome::Text(text) => return Some((Fragment::Text(text), Some(state))),
                    LineOutcome::Skip => continue,
                    LineOutcome::Done => return None,
                }
            }
            if state.exhausted {
                return None;
            }

            let next = match state.read_timeout {
                Some(limit) => match tokio::time::timeout(limit, state.body.next()).await {
                    Ok(next) => next,
                    Err(_) => {
                        log::warn!("no stream data within {:?}", limit);
                        let message =
                            format!("no data received for {} seconds", limit.as_secs());
                        return Some((Fragment::transport(message), None));
                    }
                },
                None => state.body.next().await,
            };

            match next {
                Some(Ok(chunk)) => state.buffer.extend_from_slice(chunk.as_ref()),
                Some(Err(e)) => {
                    log::warn!("stream read failed: {}", e);
                    return Some((Fragment::transport(e.to_string()), None));
                }
                None => state.exhausted = true,
            }
        }
    })
}
