//! Flood-risk scoring
//!
//! Two independent tracks produce a prediction:
//! - score path: normalize each feature against its declared range, apply
//!   weights, classify against fixed thresholds
//! - explanation path: compare raw values against fixed alarm thresholds
//!
//! The tracks are not reconciled; an explanation may cite a factor that did
//! not drive the label.

pub mod explanation;
pub mod feature;
pub mod model;

pub use explanation::{alarm_factors, compose_explanation};
pub use feature::{Feature, FeatureSpec, RiskDirection, DEFAULT_FEATURE_SPECS};
pub use model::{RangeWarning, RiskModel, RiskThresholds};
