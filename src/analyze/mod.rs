pub mod features;
pub mod reasoning;
pub mod score;

use crate::types::features::CodeFeatures;
use crate::types::report::Analysis;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};

/// Probability reported when analysis itself fails.
pub const DEGRADED_PROBABILITY: f64 = 50.0;

/// Analyzes one block of source text.
///
/// Total over all string inputs: extraction, scoring, and explanation run
/// under a panic guard, and any failure degrades to the fallback result
/// instead of propagating to the caller.
pub fn analyze(source: &str) -> Analysis {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let features = features::extract(source);
        let probability = score::probability(&features, &score::Weights::default());
        let reasoning = reasoning::render(&features, probability);
        Analysis {
            probability,
            reasoning,
            features,
            degraded: false,
        }
    }));

    match outcome {
        Ok(analysis) => {
            debug!(probability = analysis.probability, "analysis complete");
            analysis
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("analysis failed: {message}");
            Analysis {
                probability: DEGRADED_PROBABILITY,
                reasoning: format!("Error during analysis: {message}"),
                features: CodeFeatures::default(),
                degraded: true,
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown analysis failure".to_string()
    }
}
