//! WebSocket messages for live conversion.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages exchanged over the live socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveMessage {
    /// Client request to convert a snippet
    Convert {
        /// Markup to convert
        html: String,
    },

    /// Result of a `convert` request
    Converted {
        /// JSX source, absent for blank input
        jsx: Option<String>,
    },

    /// A watched file was converted again
    FileConverted {
        /// Path relative to the watched directory
        path: String,
        /// JSX source, absent for a blank file
        jsx: Option<String>,
    },

    /// A request or a watched file could not be converted
    Error {
        /// Human readable reason
        message: String,
    },

    /// Connection established
    Connected,
}

impl LiveMessage {
    /// Convert a snippet into the matching reply.
    pub fn from_conversion(html: &str) -> Self {
        match jsxify::convert(html) {
            Ok(jsx) => LiveMessage::Converted { jsx },
            Err(e) => LiveMessage::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Build the reply to a raw client message.
pub fn reply(text: &str) -> LiveMessage {
    match serde_json::from_str::<LiveMessage>(text) {
        Ok(LiveMessage::Convert { html }) => LiveMessage::from_conversion(&html),
        Ok(other) => LiveMessage::Error {
            message: format!("Unexpected message: {:?}", other),
        },
        Err(e) => LiveMessage::Error {
            message: format!("Invalid message: {}", e),
        },
    }
}

/// Hub for broadcasting messages to all connected clients.
#[derive(Debug, Clone)]
pub struct LiveHub {
    sender: broadcast::Sender<LiveMessage>,
}

impl LiveHub {
    /// Create a new hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: LiveMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    /// Subscribe to broadcast messages.
    pub fn subscribe(&self) -> broadcast::Receiver<LiveMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for LiveHub {
    fn default() -> Self {
        Self::new()
    }
}
