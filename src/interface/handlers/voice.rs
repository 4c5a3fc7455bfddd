//! # Voice Interaction Handler
//!
//! The trigger-phrase path: interim notice, completion call on the residual
//! query, then speech synthesis of the reply. Synthesis never gates delivery;
//! a failed synthesis is logged and the card ships without audio anyway.

use anyhow::Result;
use std::sync::Arc;

use crate::application::router;
use crate::domain::traits::{ChatSurface, CompletionProvider, SpeechSynthesizer};
use crate::interface::cards;
use crate::strings::messages;

pub async fn handle_voice_query(
    completion: &Arc<dyn CompletionProvider>,
    speech: &Arc<dyn SpeechSynthesizer>,
    chat: &impl ChatSurface,
    message: &str,
) -> Result<()> {
    chat.send_text(messages::VOICE_PROCESSING)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let query = router::strip_trigger(message);
    if query.is_empty() {
        return chat
            .send_text(messages::VOICE_GREETING)
            .await
            .map_err(|e| anyhow::anyhow!(e));
    }

    let answer = completion.complete(&query).await;

    if !speech.synthesize(&answer).await {
        tracing::warn!("Speech synthesis failed; reply delivered without audio");
    }

    chat.send_card(cards::response_card(&answer, true))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
