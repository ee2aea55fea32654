//! Redis list used as the message queue.
//!
//! A connection is a dedicated multiplexed connection opened per send; a
//! session is a handle on it; sending is `RPUSH <queue> <text>`.

use async_trait::async_trait;
use log::debug;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

use crate::errors::MessagingError;
use crate::messaging::{Connection, ConnectionFactory, Queue, Session};

pub struct RedisConnectionFactory {
    client: Client,
}

impl RedisConnectionFactory {
    /// Parse `url`. No connection is made until [`ConnectionFactory::create_connection`].
    pub fn open(url: &str) -> Result<Self, MessagingError> {
        let client = Client::open(url)
            .map_err(|e| MessagingError::Connect(format!("invalid broker URL: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ConnectionFactory for RedisConnectionFactory {
    async fn create_connection(&self) -> Result<Box<dyn Connection>, MessagingError> {
        debug!("Opening Redis connection...");
        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| MessagingError::Connect(e.to_string()))?;
        Ok(Box::new(RedisConnection { conn: Some(conn) }))
    }
}

struct RedisConnection {
    conn: Option<MultiplexedConnection>,
}

#[async_trait]
impl Connection for RedisConnection {
    async fn create_session(&mut self) -> Result<Box<dyn Session>, MessagingError> {
        let conn = self
            .conn
            .clone()
            .ok_or_else(|| MessagingError::Session("connection is closed".to_string()))?;
        Ok(Box::new(RedisSession { conn: Some(conn) }))
    }

    async fn close(&mut self) -> Result<(), MessagingError> {
        if self.conn.take().is_some() {
            debug!("Redis connection closed");
        }
        Ok(())
    }
}

struct RedisSession {
    conn: Option<MultiplexedConnection>,
}

#[async_trait]
impl Session for RedisSession {
    async fn send_text(&mut self, queue: &Queue, text: &str) -> Result<(), MessagingError> {
        let conn = self
            .conn
            .as_mut()
            .ok_or_else(|| MessagingError::Send("session is closed".to_string()))?;
        let depth: i64 = conn
            .rpush(queue.name(), text)
            .await
            .map_err(|e| MessagingError::Send(e.to_string()))?;
        debug!("Queue {} now holds {} message(s)", queue, depth);
        Ok(())
    }

    async fn close(&mut self) -> Result<(), MessagingError> {
        self.conn.take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::services::MessageService;

    // Run with: cargo test -- --ignored (needs BROKER_URL or a local server)
    fn broker_url() -> String {
        std::env::var("BROKER_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
    }

    fn unique_queue() -> Queue {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        Queue::new(format!("test_queue_{}", nanos))
    }

    #[test]
    fn test_open_rejects_malformed_url() {
        let err = RedisConnectionFactory::open("not a url").err();
        assert!(matches!(err, Some(MessagingError::Connect(_))));
    }

    #[actix_web::test]
    async fn test_unreachable_broker_fails_to_connect() {
        // Port 1 is reserved; nothing listens there.
        let factory = RedisConnectionFactory::open("redis://127.0.0.1:1").unwrap();
        let result = factory.create_connection().await;
        assert!(matches!(result, Err(MessagingError::Connect(_))));
    }

    #[actix_web::test]
    #[ignore] // Requires Redis
    async fn test_send_message_lands_on_queue() {
        let url = broker_url();
        let queue = unique_queue();
        let factory = Arc::new(RedisConnectionFactory::open(&url).unwrap());
        let service = MessageService::new(factory, queue.clone());

        service.send_message("ping").await.unwrap();
        service.send_message("pong").await.unwrap();

        let client = Client::open(url.as_str()).unwrap();
        let mut conn = client.get_multiplexed_async_connection().await.unwrap();
        let messages: Vec<String> = conn.lrange(queue.name(), 0, -1).await.unwrap();
        let _: () = conn.del(queue.name()).await.unwrap();

        assert_eq!(messages, vec!["ping", "pong"]);
    }

    #[actix_web::test]
    #[ignore] // Requires Redis
    async fn test_closed_handles_refuse_work() {
        let factory = RedisConnectionFactory::open(&broker_url()).unwrap();
        let queue = unique_queue();

        let mut connection = factory.create_connection().await.unwrap();
        let mut session = connection.create_session().await.unwrap();
        session.close().await.unwrap();
        session.close().await.unwrap();
        assert!(matches!(
            session.send_text(&queue, "late").await,
            Err(MessagingError::Send(_))
        ));

        connection.close().await.unwrap();
        connection.close().await.unwrap();
        assert!(matches!(
            connection.create_session().await,
            Err(MessagingError::Session(_))
        ));
    }
}
