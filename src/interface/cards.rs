//! # Card Renderers
//!
//! Pure builders for the Adaptive Card payloads the bot sends. No I/O, no
//! external state; each function is a fixed mapping from its inputs to a card.

use crate::domain::types::{AdaptiveCard, CardAction, CardElement, Fact, TextBlock};

/// Static card describing the bot's capabilities, sent when a member joins.
pub fn welcome_card() -> AdaptiveCard {
    AdaptiveCard::new(vec![
        CardElement::TextBlock(TextBlock {
            text: "🎤 AI Foundry Voice Bot".to_string(),
            weight: Some("Bolder"),
            size: Some("Large"),
            color: Some("Accent"),
            ..Default::default()
        }),
        CardElement::TextBlock(TextBlock {
            text: "Your voice-enabled AI assistant for Teams calls".to_string(),
            wrap: true,
            spacing: Some("Medium"),
            ..Default::default()
        }),
        CardElement::FactSet {
            facts: vec![
                Fact {
                    title: "Voice Commands:".to_string(),
                    value: "Say 'Hey AI Foundry' to start".to_string(),
                },
                Fact {
                    title: "Text Commands:".to_string(),
                    value: "'start voice' or 'stop voice'".to_string(),
                },
                Fact {
                    title: "Features:".to_string(),
                    value: "Real-time voice interaction during calls".to_string(),
                },
            ],
        },
    ])
    .with_actions(vec![CardAction::Submit {
        title: "Start Voice Session".to_string(),
        data: serde_json::json!({"action": "startVoice"}),
    }])
}

/// Static card confirming a voice session is active.
pub fn session_start_card() -> AdaptiveCard {
    AdaptiveCard::new(vec![
        CardElement::TextBlock(TextBlock {
            text: "🎤 Voice Session Active".to_string(),
            weight: Some("Bolder"),
            size: Some("Medium"),
            color: Some("Good"),
            ..Default::default()
        }),
        CardElement::TextBlock(TextBlock {
            text: "You can now speak to the AI Foundry agent. Say 'Hey AI Foundry' \
                   followed by your question."
                .to_string(),
            wrap: true,
            ..Default::default()
        }),
        CardElement::TextBlock(TextBlock {
            text: "💡 Tip: Speak clearly and wait for the response before asking your \
                   next question."
                .to_string(),
            wrap: true,
            is_subtle: true,
            ..Default::default()
        }),
    ])
}

/// Render a completion reply. When `has_audio` is set, a small status line
/// announces that the spoken version is on its way.
pub fn response_card(text: &str, has_audio: bool) -> AdaptiveCard {
    let mut body = vec![
        CardElement::TextBlock(TextBlock {
            text: "🤖 AI Foundry Response".to_string(),
            weight: Some("Bolder"),
            size: Some("Medium"),
            color: Some("Accent"),
            ..Default::default()
        }),
        CardElement::TextBlock(TextBlock {
            text: text.to_string(),
            wrap: true,
            spacing: Some("Medium"),
            ..Default::default()
        }),
    ];

    if has_audio {
        body.push(CardElement::TextBlock(TextBlock {
            text: "🔊 Audio response is being processed...".to_string(),
            size: Some("Small"),
            wrap: true,
            ..Default::default()
        }));
    }

    AdaptiveCard::new(body)
}
