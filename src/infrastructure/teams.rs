//! # Teams Connector Adapter
//!
//! Bot Framework wire model and the outbound connector implementing the
//! `ChatSurface` trait. Inbound activities arrive through the HTTP surface
//! (`server.rs`); replies are posted back to the conversation on the
//! `serviceUrl` the inbound activity carried.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::traits::ChatSurface;
use crate::domain::types::AdaptiveCard;

pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

const ACTIVITY_MESSAGE: &str = "message";
const ACTIVITY_CONVERSATION_UPDATE: &str = "conversationUpdate";

/// HTTP client reused across requests
fn http_client() -> &'static Client {
    use std::sync::OnceLock;
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| Client::builder().build().expect("Failed to create HTTP client"))
}

/// A Bot Framework activity, reduced to the fields this bot reads and writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<ChannelAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<ChannelAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members_added: Vec<ChannelAccount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Activity {
    pub fn is_message(&self) -> bool {
        self.kind == ACTIVITY_MESSAGE
    }

    pub fn is_conversation_update(&self) -> bool {
        self.kind == ACTIVITY_CONVERSATION_UPDATE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelAccount {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationAccount {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub content: serde_json::Value,
}

/// Outbound reply channel for one conversation, built from the inbound
/// activity that opened the turn.
#[derive(Clone)]
pub struct TeamsConnector {
    service_url: String,
    conversation: ConversationAccount,
    bot: Option<ChannelAccount>,
    user: Option<ChannelAccount>,
    reply_to_id: Option<String>,
    token: Option<String>,
}

impl TeamsConnector {
    /// Derive the reply route from an inbound activity. Fails only when the
    /// activity carries no service URL or conversation to answer into.
    pub fn from_activity(activity: &Activity, token: Option<String>) -> Result<Self> {
        let service_url = activity
            .service_url
            .clone()
            .context("activity carries no serviceUrl")?;
        let conversation = activity
            .conversation
            .clone()
            .context("activity carries no conversation")?;

        Ok(Self {
            service_url: service_url.trim_end_matches('/').to_string(),
            conversation,
            bot: activity.recipient.clone(),
            user: activity.from.clone(),
            reply_to_id: activity.id.clone(),
            token,
        })
    }

    /// Skeleton reply with the from/recipient roles swapped relative to the
    /// inbound activity.
    fn reply_activity(&self) -> Activity {
        Activity {
            kind: ACTIVITY_MESSAGE.to_string(),
            from: self.bot.clone(),
            recipient: self.user.clone(),
            conversation: Some(self.conversation.clone()),
            reply_to_id: self.reply_to_id.clone(),
            ..Default::default()
        }
    }

    async fn post_activity(&self, activity: Activity) -> Result<(), String> {
        let url = format!(
            "{}/v3/conversations/{}/activities",
            self.service_url, self.conversation.id
        );

        let mut request = http_client().post(&url).json(&activity);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(format!("connector rejected activity: HTTP {}", status))
        }
    }
}

#[async_trait]
impl ChatSurface for TeamsConnector {
    fn conversation_id(&self) -> String {
        self.conversation.id.clone()
    }

    async fn send_text(&self, content: &str) -> Result<(), String> {
        tracing::info!(
            "Bot sending message to {}: {}",
            self.conversation_id(),
            content
        );
        let mut activity = self.reply_activity();
        activity.text = Some(content.to_string());
        self.post_activity(activity).await
    }

    async fn send_card(&self, card: AdaptiveCard) -> Result<(), String> {
        tracing::info!("Bot sending card to {}", self.conversation_id());
        let content = serde_json::to_value(&card).map_err(|e| e.to_string())?;
        let mut activity = self.reply_activity();
        activity.attachments = vec![Attachment {
            content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
            content,
        }];
        self.post_activity(activity).await
    }
}
