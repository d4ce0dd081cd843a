//! Assembled Floodwatch engine

use crate::prediction::RiskPredictionService;
use crate::shelters::ShelterRankingService;

/// Both services, ready to serve requests.
///
/// Built with [`crate::FloodwatchBuilder`]. Cloning is cheap: the model and
/// the repositories are shared.
#[derive(Clone)]
pub struct Floodwatch {
    predictions: RiskPredictionService,
    shelters: ShelterRankingService,
}

impl Floodwatch {
    pub(crate) fn new(predictions: RiskPredictionService, shelters: ShelterRankingService) -> Self {
        Self {
            predictions,
            shelters,
        }
    }

    pub fn predictions(&self) -> &RiskPredictionService {
        &self.predictions
    }

    pub fn shelters(&self) -> &ShelterRankingService {
        &self.shelters
    }
}
