//! # Welcome Handler
//!
//! Greets members added to the conversation with the capabilities card.
//! The bot's own membership event is skipped.

use anyhow::Result;

use crate::domain::traits::ChatSurface;
use crate::infrastructure::teams::Activity;
use crate::interface::cards;

pub async fn handle_members_added(activity: &Activity, chat: &impl ChatSurface) -> Result<()> {
    let bot_id = activity
        .recipient
        .as_ref()
        .map(|account| account.id.as_str())
        .unwrap_or_default();

    for member in &activity.members_added {
        if member.id != bot_id {
            chat.send_card(cards::welcome_card())
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}
