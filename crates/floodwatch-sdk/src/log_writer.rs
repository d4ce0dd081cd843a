//! Fire-and-forget prediction log
//!
//! Records are queued on a bounded channel and written by a background task.
//! A write failure is logged once and dropped; it never reaches the caller
//! that produced the prediction. When the queue is full new records are
//! discarded instead of applying back-pressure to request handling.

use crate::error::{Result, SdkError};
use floodwatch_core::PredictionRecord;
use floodwatch_repository::PredictionLog;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

/// Default queue bound
pub const DEFAULT_LOG_CAPACITY: usize = 1024;

/// Async prediction writer that queues inserts to avoid blocking responses
#[derive(Clone)]
pub struct PredictionLogWriter {
    sender: mpsc::Sender<PredictionRecord>,
}

impl PredictionLogWriter {
    /// Create a writer and spawn its background task on the current runtime
    pub fn new(log: Arc<dyn PredictionLog>, capacity: usize) -> Result<Self> {
        Self::spawn(log, capacity).map(|(writer, _)| writer)
    }

    /// Like [`PredictionLogWriter::new`], also returning the background task.
    ///
    /// The task finishes once every clone of the writer has been dropped and
    /// the queue is drained, so awaiting it flushes pending records.
    pub fn spawn(
        log: Arc<dyn PredictionLog>,
        capacity: usize,
    ) -> Result<(Self, JoinHandle<()>)> {
        if capacity == 0 {
            return Err(SdkError::ConfigError(
                "prediction log capacity must be greater than zero".to_string(),
            ));
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            SdkError::ConfigError(format!("prediction log requires a Tokio runtime: {}", e))
        })?;

        let (sender, receiver) = mpsc::channel(capacity);
        let handle = runtime.spawn(Self::process_records(receiver, log));

        tracing::debug!(
            "PredictionLogWriter created (capacity {}), background task spawned",
            capacity
        );

        Ok((Self { sender }, handle))
    }

    /// Queue a record without waiting.
    ///
    /// Fails when the queue is full or the background task is gone.
    pub fn submit(&self, record: PredictionRecord) -> Result<()> {
        self.sender.try_send(record).map_err(|e| match e {
            TrySendError::Full(_) => SdkError::LogQueue("queue is full".to_string()),
            TrySendError::Closed(_) => SdkError::LogQueue("writer task has stopped".to_string()),
        })
    }

    async fn process_records(
        mut receiver: mpsc::Receiver<PredictionRecord>,
        log: Arc<dyn PredictionLog>,
    ) {
        while let Some(record) = receiver.recv().await {
            match log.insert_prediction(&record).await {
                Ok(()) => tracing::debug!(
                    "Logged prediction ({} {:.2})",
                    record.predicted_risk_label,
                    record.predicted_risk_score
                ),
                Err(e) => tracing::error!("Failed to log prediction: {}", e),
            }
        }

        tracing::debug!("Prediction log writer stopped (channel closed)");
    }
}
