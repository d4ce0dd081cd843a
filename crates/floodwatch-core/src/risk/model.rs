//! Risk model: weighted scoring and classification
//!
//! A `RiskModel` is built once (built-in table or a model export file),
//! validated, and then only read.
//!
//! # Model export format
//!
//! ```json
//! {
//!   "feature_columns": ["rainfall_mm_last_24h", "..."],
//!   "feature_weights": [0.22, "..."],
//!   "feature_ranges": {
//!     "rainfall_mm_last_24h": {"min": 0, "max": 300, "risk_direction": "higher"}
//!   },
//!   "thresholds": {"low_medium": 0.35, "medium_high": 0.65}
//! }
//! ```
//!
//! `feature_weights` may also be an object keyed by feature name, in which
//! case `feature_columns` is optional. Files ending in `.yaml`/`.yml` are
//! parsed as YAML.

use super::explanation::compose_explanation;
use super::feature::{Feature, FeatureSpec, RiskDirection, DEFAULT_FEATURE_SPECS};
use crate::error::{ModelError, Result};
use crate::types::{PredictionInput, PredictionResult, RiskLabel};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Tolerance for the weight-sum invariant
const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Score cut-offs between labels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RiskThresholds {
    pub low_medium: f64,
    pub medium_high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_medium: 0.35,
            medium_high: 0.65,
        }
    }
}

impl RiskThresholds {
    /// `score < low_medium` is Low, `score >= medium_high` is High, Medium in between
    pub fn classify(&self, score: f64) -> RiskLabel {
        if score < self.low_medium {
            RiskLabel::Low
        } else if score < self.medium_high {
            RiskLabel::Medium
        } else {
            RiskLabel::High
        }
    }
}

/// A raw value outside its feature's declared range
#[derive(Debug, Clone, PartialEq)]
pub struct RangeWarning {
    pub feature: Feature,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field {} value {} is outside expected range [{}, {}]",
            self.feature, self.value, self.min, self.max
        )
    }
}

/// Immutable feature table plus thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct RiskModel {
    /// Indexed by `Feature::index()`
    specs: [FeatureSpec; Feature::COUNT],
    thresholds: RiskThresholds,
}

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            specs: DEFAULT_FEATURE_SPECS,
            thresholds: RiskThresholds::default(),
        }
    }
}

impl RiskModel {
    /// Build and validate a model from an arbitrary table
    pub fn new(specs: Vec<FeatureSpec>, thresholds: RiskThresholds) -> Result<Self> {
        let mut slots: [Option<FeatureSpec>; Feature::COUNT] = [None; Feature::COUNT];
        for spec in specs {
            let slot = &mut slots[spec.feature.index()];
            if slot.is_some() {
                return Err(ModelError::DuplicateFeature(spec.feature.key()));
            }
            *slot = Some(spec);
        }

        let mut table = DEFAULT_FEATURE_SPECS;
        for (entry, (slot, feature)) in table.iter_mut().zip(slots.into_iter().zip(Feature::ALL)) {
            *entry = slot.ok_or(ModelError::MissingFeature(feature.key()))?;
        }

        let model = Self {
            specs: table,
            thresholds,
        };
        model.validate()?;
        Ok(model)
    }

    /// Load a model export from disk (JSON, or YAML by extension)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let export: ModelExport = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        log::debug!("Loaded risk model export from {}", path.display());
        export.into_model()
    }

    /// Parse a JSON model export
    pub fn from_export_json(content: &str) -> Result<Self> {
        let export: ModelExport = serde_json::from_str(content)?;
        export.into_model()
    }

    fn validate(&self) -> Result<()> {
        for spec in &self.specs {
            let key = spec.feature.key();
            if !(spec.min.is_finite() && spec.max.is_finite() && spec.min < spec.max) {
                return Err(ModelError::InvalidRange {
                    feature: key,
                    min: spec.min,
                    max: spec.max,
                });
            }
            if !spec.weight.is_finite() || spec.weight < 0.0 {
                return Err(ModelError::InvalidWeight {
                    feature: key,
                    weight: spec.weight,
                });
            }
        }

        let total: f64 = self.specs.iter().map(|s| s.weight).sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ModelError::WeightSum(total));
        }

        let RiskThresholds {
            low_medium,
            medium_high,
        } = self.thresholds;
        if !(0.0 < low_medium && low_medium < medium_high && medium_high < 1.0) {
            return Err(ModelError::InvalidThresholds {
                low_medium,
                medium_high,
            });
        }

        Ok(())
    }

    pub fn specs(&self) -> &[FeatureSpec] {
        &self.specs
    }

    pub fn spec(&self, feature: Feature) -> &FeatureSpec {
        &self.specs[feature.index()]
    }

    pub fn thresholds(&self) -> RiskThresholds {
        self.thresholds
    }

    /// Weighted sum of normalized features, clamped to [0, 1] (unrounded)
    pub fn score(&self, input: &PredictionInput) -> f64 {
        self.specs
            .iter()
            .map(|spec| spec.normalize(input.value(spec.feature)) * spec.weight)
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }

    pub fn classify(&self, score: f64) -> RiskLabel {
        self.thresholds.classify(score)
    }

    /// Features whose raw value lies outside the declared range.
    /// These are clamped during scoring, never rejected.
    pub fn range_warnings(&self, input: &PredictionInput) -> Vec<RangeWarning> {
        self.specs
            .iter()
            .filter_map(|spec| {
                let value = input.value(spec.feature);
                (!spec.contains(value)).then(|| RangeWarning {
                    feature: spec.feature,
                    value,
                    min: spec.min,
                    max: spec.max,
                })
            })
            .collect()
    }

    /// Score, classify and explain. Classification uses the unrounded score.
    pub fn predict(&self, input: &PredictionInput) -> PredictionResult {
        let score = self.score(input);
        let label = self.classify(score);
        PredictionResult {
            risk_label: label,
            risk_score: (score * 100.0).round() / 100.0,
            explanation: compose_explanation(input, label),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ModelExport {
    #[serde(default)]
    feature_columns: Vec<String>,
    feature_weights: WeightsExport,
    feature_ranges: HashMap<String, RangeExport>,
    #[serde(default)]
    thresholds: RiskThresholds,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WeightsExport {
    Positional(Vec<f64>),
    Named(HashMap<String, f64>),
}

#[derive(Debug, Deserialize)]
struct RangeExport {
    min: f64,
    max: f64,
    #[serde(alias = "riskDirection")]
    risk_direction: RiskDirection,
}

impl ModelExport {
    fn into_model(self) -> Result<RiskModel> {
        let weights: Vec<(String, f64)> = match self.feature_weights {
            WeightsExport::Positional(weights) => {
                if weights.len() != self.feature_columns.len() {
                    return Err(ModelError::WeightCountMismatch {
                        columns: self.feature_columns.len(),
                        weights: weights.len(),
                    });
                }
                self.feature_columns.into_iter().zip(weights).collect()
            }
            WeightsExport::Named(weights) => weights.into_iter().collect(),
        };

        let mut ranges = self.feature_ranges;
        let mut specs = Vec::with_capacity(weights.len());
        for (name, weight) in weights {
            let feature: Feature = name.parse().map_err(ModelError::UnknownFeature)?;
            let range = ranges
                .remove(feature.key())
                .ok_or(ModelError::MissingFeature(feature.key()))?;
            specs.push(FeatureSpec {
                feature,
                min: range.min,
                max: range.max,
                risk_direction: range.risk_direction,
                weight,
            });
        }

        if let Some(extra) = ranges.into_keys().next() {
            return Err(ModelError::UnknownFeature(extra));
        }

        RiskModel::new(specs, self.thresholds)
    }
}
