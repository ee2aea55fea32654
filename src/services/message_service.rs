//! One-shot queue producer: connect, send one text message, disconnect.

use std::sync::Arc;

use log::{info, warn};

use crate::errors::MessagingError;
use crate::messaging::{Connection, ConnectionFactory, Queue};

pub struct MessageService {
    factory: Arc<dyn ConnectionFactory>,
    queue: Queue,
}

impl MessageService {
    pub fn new(factory: Arc<dyn ConnectionFactory>, queue: Queue) -> Self {
        Self { factory, queue }
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Send `text` to the configured queue over a connection opened for this
    /// call alone.
    ///
    /// The session and then the connection are closed on every path out. The
    /// first failure is returned; a close failure is only returned when
    /// nothing failed before it.
    pub async fn send_message(&self, text: &str) -> Result<(), MessagingError> {
        let mut connection = self.factory.create_connection().await?;

        let sent = self.send_on(connection.as_mut(), text).await;
        let closed = connection.close().await;

        settle(sent, closed, "connection")
    }

    async fn send_on(
        &self,
        connection: &mut dyn Connection,
        text: &str,
    ) -> Result<(), MessagingError> {
        let mut session = connection.create_session().await?;

        let sent = session.send_text(&self.queue, text).await;
        // The broker has the message at this point, whatever the release does.
        if sent.is_ok() {
            info!("Message sent: {}", text);
        }
        let closed = session.close().await;

        settle(sent, closed, "session")
    }
}

/// Combine an operation's outcome with the outcome of releasing its resource.
fn settle(
    outcome: Result<(), MessagingError>,
    release: Result<(), MessagingError>,
    resource: &str,
) -> Result<(), MessagingError> {
    match (outcome, release) {
        (Err(err), Err(release_err)) => {
            warn!("Ignoring failure to close {} after error: {}", resource, release_err);
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), release) => release,
    }
}
