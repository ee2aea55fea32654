//! Message queue producer abstractions.
//!
//! A send goes through three scoped resources: a [`Connection`] from a
//! [`ConnectionFactory`], a [`Session`] opened on it, and the configured
//! [`Queue`]. Sessions are closed before their connection.

pub mod redis;

use std::fmt;

use async_trait::async_trait;

use crate::errors::MessagingError;

pub use self::redis::RedisConnectionFactory;

/// Named destination that text messages are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue(String);

impl Queue {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of broker connections. Each call opens a fresh connection.
#[async_trait]
pub trait ConnectionFactory: Send + Sync {
    async fn create_connection(&self) -> Result<Box<dyn Connection>, MessagingError>;
}

#[async_trait]
pub trait Connection: Send {
    /// Open a non-transacted, auto-acknowledge session.
    async fn create_session(&mut self) -> Result<Box<dyn Session>, MessagingError>;

    /// Release the connection. Closing twice is harmless.
    async fn close(&mut self) -> Result<(), MessagingError>;
}

#[async_trait]
pub trait Session: Send {
    /// Send `text` to `queue`, returning once the broker has accepted it.
    async fn send_text(&mut self, queue: &Queue, text: &str) -> Result<(), MessagingError>;

    /// Release the session. Closing twice is harmless.
    async fn close(&mut self) -> Result<(), MessagingError>;
}
