//! Background task hand-off
//!
//! The gateway never sends email inline. Side-effect work is described as a
//! [`Task`], pushed through a [`TaskDistributor`] and consumed by a
//! [`TaskProcessor`] loop. The distributor call is cheap enough to run
//! inside a transaction boundary, which is exactly how the user-creation
//! workflow uses it: a failed hand-off rolls the user row back.

use async_trait::async_trait;
use rand::Rng;
use rand::distributions::Alphanumeric;
use tokio::sync::mpsc;

use crate::store::{Store, StoreError};
use crate::user::{UserRepo, VerifyEmailRepo};

/// A unit of background work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    SendVerifyEmail { username: String },
}

/// Task hand-off errors
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Task queue is full or closed")]
    QueueUnavailable,
}

impl From<TaskError> for StoreError {
    fn from(e: TaskError) -> Self {
        StoreError::Internal(e.to_string())
    }
}

/// Hands tasks to the background processor
#[async_trait]
pub trait TaskDistributor: Send + Sync {
    async fn distribute_send_verify_email(&self, username: &str) -> Result<(), TaskError>;
}

/// In-process distributor backed by a bounded channel
pub struct QueueDistributor {
    sender: mpsc::Sender<Task>,
}

impl QueueDistributor {
    /// Create the distributor and the receiving end for the processor
    pub fn new(queue_size: usize) -> (Self, mpsc::Receiver<Task>) {
        let (sender, receiver) = mpsc::channel(queue_size);
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl TaskDistributor for QueueDistributor {
    async fn distribute_send_verify_email(&self, username: &str) -> Result<(), TaskError> {
        self.sender
            .send(Task::SendVerifyEmail {
                username: username.to_string(),
            })
            .await
            .map_err(|_| TaskError::QueueUnavailable)?;

        tracing::info!(username, task = "send_verify_email", "enqueued task");
        Ok(())
    }
}

/// Consumes tasks until the channel closes
pub struct TaskProcessor {
    store: Store,
    receiver: mpsc::Receiver<Task>,
}

impl TaskProcessor {
    pub fn new(store: Store, receiver: mpsc::Receiver<Task>) -> Self {
        Self { store, receiver }
    }

    /// Run the processing loop; meant to be spawned as its own task
    pub async fn run(mut self) {
        while let Some(task) = self.receiver.recv().await {
            if let Err(e) = self.process(task.clone()).await {
                tracing::error!(?task, error = %e, "failed to process task");
            }
        }
        tracing::info!("task processor stopped: distributor dropped");
    }

    async fn process(&self, task: Task) -> Result<(), StoreError> {
        match task {
            Task::SendVerifyEmail { username } => {
                let user = UserRepo::get(self.store.pool(), &username)
                    .await?
                    .ok_or_else(|| StoreError::NotFound(format!("user {username} not found")))?;

                let secret_code = random_secret_code(32);
                let verify_email = VerifyEmailRepo::create(
                    self.store.pool(),
                    &user.username,
                    &user.email,
                    &secret_code,
                )
                .await?;

                // TODO: wire an SMTP sender; until then the verification
                // link is only logged.
                tracing::info!(
                    username = %user.username,
                    email = %user.email,
                    email_id = verify_email.id,
                    "verification email ready: /v1/verify_email?email_id={}&secret_code={}",
                    verify_email.id,
                    secret_code,
                );
                Ok(())
            }
        }
    }
}

fn random_secret_code(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_code_shape() {
        let code = random_secret_code(32);
        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

        // Two draws colliding would mean the generator is broken.
        assert_ne!(random_secret_code(32), random_secret_code(32));
    }

    #[tokio::test]
    async fn test_distributor_enqueues() {
        let (distributor, mut receiver) = QueueDistributor::new(4);
        distributor
            .distribute_send_verify_email("alice")
            .await
            .expect("Should enqueue");

        let task = receiver.recv().await.expect("Task should arrive");
        assert_eq!(
            task,
            Task::SendVerifyEmail {
                username: "alice".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_distributor_reports_closed_queue() {
        let (distributor, receiver) = QueueDistributor::new(4);
        drop(receiver);

        let err = distributor
            .distribute_send_verify_email("alice")
            .await
            .expect_err("Closed queue should error");
        assert!(matches!(err, TaskError::QueueUnavailable));
    }
}
