//! Send a single text message to the configured queue and exit.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::error;

use user_queue_service::config::CONFIG;
use user_queue_service::messaging::{Queue, RedisConnectionFactory};
use user_queue_service::services::MessageService;

#[derive(Debug, Parser)]
#[command(name = "send-message", about = "Send one text message to a queue")]
struct Args {
    /// Message body
    text: String,

    /// Destination queue (defaults to QUEUE_NAME)
    #[arg(long)]
    queue: Option<String>,

    /// Broker endpoint (defaults to BROKER_URL)
    #[arg(long)]
    broker_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();
    let broker_url = args.broker_url.unwrap_or_else(|| CONFIG.broker_url.clone());
    let queue = Queue::new(args.queue.unwrap_or_else(|| CONFIG.queue_name.clone()));

    let factory = match RedisConnectionFactory::open(&broker_url) {
        Ok(factory) => factory,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let service = MessageService::new(Arc::new(factory), queue);
    match service.send_message(&args.text).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Sending to queue {} failed: {}", service.queue(), e);
            ExitCode::FAILURE
        }
    }
}
