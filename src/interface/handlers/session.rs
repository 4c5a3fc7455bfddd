//! # Voice Session Handlers
//!
//! Session start/stop acknowledgements. Neither path touches the completion
//! or speech clients; the session itself lives on the Teams side.

use anyhow::Result;

use crate::domain::traits::ChatSurface;
use crate::interface::cards;
use crate::strings::messages;

pub async fn handle_start_voice(chat: &impl ChatSurface) -> Result<()> {
    chat.send_card(cards::session_start_card())
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_stop_voice(chat: &impl ChatSurface) -> Result<()> {
    chat.send_text(messages::VOICE_STOPPED)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
