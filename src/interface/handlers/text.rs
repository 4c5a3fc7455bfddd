//! # Text Interaction Handler
//!
//! The default path: blank input short-circuits with a prompt, everything
//! else goes to the completion endpoint and comes back as a card.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::traits::{ChatSurface, CompletionProvider};
use crate::interface::cards;
use crate::strings::messages;

pub async fn handle_text_query(
    completion: &Arc<dyn CompletionProvider>,
    chat: &impl ChatSurface,
    message: &str,
) -> Result<()> {
    if message.trim().is_empty() {
        return chat
            .send_text(messages::EMPTY_PROMPT)
            .await
            .map_err(|e| anyhow::anyhow!(e));
    }

    chat.send_text(messages::TEXT_PROCESSING)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let answer = completion.complete(message).await;

    chat.send_card(cards::response_card(&answer, false))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
