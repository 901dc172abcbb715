//! Classifier gateway for VIA (visual inspection with acetic acid) cervical
//! screening images.
//!
//! An image goes to a remote classification model. The best label is mapped
//! to a `Low | Medium | High` suspicion level with a fixed recommendation.
//! Every failure is folded into a safe sentinel result.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub use enums::suspicion_level::SuspicionLevel;
pub use services::classifier_gateway::ClassifierGateway;
pub use structs::analysis_request::AnalysisRequest;
pub use structs::analysis_result::AnalysisResult;
