//! LLM-backed move source with random fallback.

use super::random::RandomSource;
use super::{BoardFull, Choice, MoveSource};
use crate::config::AiConfig;
use crate::games::tictactoe::{Board, Mark, Position};
use crate::llm_client::{LlmClient, LlmError};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// Why the suggestion strategy produced no usable move.
///
/// Every variant is recovered by falling back to [`RandomSource`]; none
/// of them stops the game.
#[derive(Debug, Display, Error)]
pub enum SuggestionError {
    /// The strategy is disabled, usually a missing API credential.
    #[display("{reason}")]
    Disabled {
        /// Why the strategy is unavailable.
        reason: String,
    },
    /// The API call itself failed.
    #[display("{_0}")]
    Api(LlmError),
    /// The reply contained no decimal digit.
    #[display("no digit in model reply {reply:?}")]
    NoDigit {
        /// The reply that could not be parsed.
        reply: String,
    },
    /// The reply named a cell that is not an empty square.
    #[display("model suggested unplayable cell {index}")]
    NotPlayable {
        /// The suggested index.
        index: usize,
    },
}

/// Extracts a playable position from a model reply.
///
/// Takes the first decimal digit found anywhere in the text and accepts
/// it only when it names a currently-empty cell.
pub fn extract_suggestion(reply: &str, board: &Board) -> Result<Position, SuggestionError> {
    let digit = reply
        .chars()
        .find(|c| c.is_ascii_digit())
        .ok_or_else(|| SuggestionError::NoDigit {
            reply: reply.to_string(),
        })?;
    // to_digit cannot fail after is_ascii_digit
    let index = digit.to_digit(10).unwrap_or(0) as usize;
    Position::from_index(index)
        .filter(|pos| board.is_empty(*pos))
        .ok_or(SuggestionError::NotPlayable { index })
}

/// Asks an LLM for the next cell, degrading to a random pick on any
/// failure.
pub struct LlmSource {
    client: Option<LlmClient>,
    disabled_reason: Option<String>,
    label: String,
}

impl LlmSource {
    /// Creates a source backed by the given client.
    pub fn new(client: LlmClient) -> Self {
        let label = format!("LLM ({})", client.config().model());
        Self {
            client: Some(client),
            disabled_reason: None,
            label,
        }
    }

    /// Creates a source whose suggestion strategy is unavailable.
    ///
    /// Every turn falls through to the random pick and carries `reason`
    /// as an advisory.
    pub fn disabled(reason: impl Into<String>) -> Self {
        Self {
            client: None,
            disabled_reason: Some(reason.into()),
            label: "LLM (offline)".to_string(),
        }
    }

    /// Builds a source from configuration.
    ///
    /// A missing credential disables the suggestion strategy instead of
    /// failing: the game must stay playable without a key.
    pub fn from_config(config: &AiConfig) -> Self {
        match config.create_llm_config() {
            Ok(llm_config) => Self::new(LlmClient::new(llm_config)),
            Err(e) => {
                warn!(error = %e, "suggestion strategy disabled");
                Self::disabled(e.message)
            }
        }
    }

    /// Requests one suggestion from the model.
    #[instrument(skip(self, board))]
    async fn suggest(&self, board: &Board, mark: Mark) -> Result<Position, SuggestionError> {
        let client = self.client.as_ref().ok_or_else(|| SuggestionError::Disabled {
            reason: self
                .disabled_reason
                .clone()
                .unwrap_or_else(|| "suggestion strategy unavailable".to_string()),
        })?;

        let open: Vec<String> = Position::valid_moves(board)
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect();

        let system = "You are a tic-tac-toe engine. When asked for a move, \
                      reply with a single digit 0-8 and nothing else.";
        let user = format!(
            "You play as {mark}. The board is a row-major list of cells 0-8, \
             underscores are empty.\nBoard: [{}]\nOpen cells: [{}]\nReply with \
             exactly one digit naming an open cell.",
            board.describe(),
            open.join(", "),
        );

        debug!(board = %board.describe(), "requesting move suggestion");
        let reply = client
            .generate(system, &user)
            .await
            .map_err(SuggestionError::Api)?;

        let position = extract_suggestion(&reply, board)?;
        info!(position = %position, reply = %reply.trim(), "model suggested move");
        Ok(position)
    }
}

#[async_trait::async_trait]
impl MoveSource for LlmSource {
    async fn choose(&self, board: &Board, mark: Mark) -> Result<Choice, BoardFull> {
        match self.suggest(board, mark).await {
            Ok(position) => Ok(Choice {
                position,
                advisory: None,
            }),
            Err(err) => {
                warn!(error = %err, "suggestion unavailable, falling back to random");
                let position = RandomSource::pick(board)?;
                Ok(Choice {
                    position,
                    advisory: Some(err.to_string()),
                })
            }
        }
    }

    fn name(&self) -> &str {
        &self.label
    }
}
