//! Flood-risk prediction service

use crate::error::Result;
use crate::log_writer::PredictionLogWriter;
use floodwatch_core::{PredictionInput, PredictionRecord, PredictionResult, RiskModel};
use serde_json::Value;
use std::sync::Arc;

/// Validates requests, scores them against a shared [`RiskModel`] and
/// hands each result to the prediction log.
#[derive(Clone)]
pub struct RiskPredictionService {
    model: Arc<RiskModel>,
    log_writer: Option<PredictionLogWriter>,
}

impl RiskPredictionService {
    /// Create a service with no prediction log
    pub fn new(model: Arc<RiskModel>) -> Self {
        Self {
            model,
            log_writer: None,
        }
    }

    /// Attach a prediction log writer
    pub fn with_log_writer(mut self, writer: PredictionLogWriter) -> Self {
        self.log_writer = Some(writer);
        self
    }

    pub fn model(&self) -> &RiskModel {
        &self.model
    }

    /// Validate an untyped request body and predict.
    ///
    /// Only validation can fail; logging problems are reported through
    /// tracing and never change the returned result.
    pub fn predict_json(&self, body: &Value) -> Result<PredictionResult> {
        let input = PredictionInput::from_json(body)?;
        Ok(self.predict(&input))
    }

    /// Predict for an already validated input
    pub fn predict(&self, input: &PredictionInput) -> PredictionResult {
        for warning in self.model.range_warnings(input) {
            tracing::warn!("{}", warning);
        }

        let result = self.model.predict(input);
        tracing::info!(
            "Prediction {} (score {:.2})",
            result.risk_label,
            result.risk_score
        );

        if let Some(ref writer) = self.log_writer {
            if let Err(e) = writer.submit(PredictionRecord::new(*input, &result)) {
                tracing::warn!("Dropping prediction log record: {}", e);
            }
        }

        result
    }
}
