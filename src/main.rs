//! Ferrobank server entry point
//!
//! Bootstraps config, logging, the connection pool, the background task
//! processor and the HTTP gateway.

use std::sync::Arc;

use ferrobank::config::AppConfig;
use ferrobank::db::Database;
use ferrobank::gateway;
use ferrobank::gateway::state::AppState;
use ferrobank::logging::init_logging;
use ferrobank::store::Store;
use ferrobank::worker::{QueueDistributor, TaskProcessor};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(&get_env())?;
    let _guard = init_logging(&config);

    let db = Database::connect(&config.database).await?;
    let store = Store::new(db.pool().clone());

    let (distributor, task_receiver) = QueueDistributor::new(config.verify_email.queue_size);
    let processor = TaskProcessor::new(store.clone(), task_receiver);
    tokio::spawn(processor.run());

    let state = Arc::new(AppState::new(store, Arc::new(distributor)));
    gateway::serve(&config.gateway, state).await
}
