// SPDX-License-Identifier: MPL-2.0
//! Slide discovery: find which candidate slide images actually exist.
//!
//! Discovery is driven entirely by probing. There is no manifest and no
//! directory listing: naming templates are expanded into candidates, every
//! candidate is loaded through an [`AssetSource`], and the ones that turn out
//! to be images become the [`ResolvedSequence`](crate::domain::slides::ResolvedSequence).
//!
//! # Pipeline
//!
//! 1. [`candidates::generate`] - templates x slide numbers (+ extra paths)
//! 2. [`probe::probe`] - load with timeout, sniff image signature
//! 3. [`resolver::resolve`] - bounded fan-out, barrier join, dedup, sort
//!
//! [`AssetSource`]: crate::application::port::AssetSource

pub mod candidates;
pub mod ordering;
pub mod probe;
pub mod resolver;

pub use probe::ProbeOutcome;
pub use resolver::{reduce, reduce_with, resolve, Resolution, ResolveReport, ResolverOptions};

use crate::application::port::AssetSource;
use crate::domain::slides::{CandidatePath, MaxSlides, NamingTemplate};

/// Everything needed to run discovery once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPlan {
    /// Naming conventions to try.
    pub templates: Vec<NamingTemplate>,
    /// Highest slide number tried per template.
    pub max_slides: MaxSlides,
    /// Locations probed as-is, without a slide number.
    pub extra_paths: Vec<String>,
    /// Concurrency and timeout.
    pub options: ResolverOptions,
}

impl DiscoveryPlan {
    /// Expands the plan into candidates.
    #[must_use]
    pub fn candidates(&self) -> Vec<CandidatePath> {
        candidates::generate(&self.templates, self.max_slides, &self.extra_paths)
    }

    /// Runs discovery against `source`.
    pub async fn run<S: AssetSource>(&self, source: &S) -> Resolution {
        resolve(source, self.candidates(), self.options).await
    }
}

/// Owned variant of [`DiscoveryPlan::run`] for spawning as a background task.
pub async fn discover<S: AssetSource>(source: S, plan: DiscoveryPlan) -> Resolution {
    plan.run(&source).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeSource;

    #[tokio::test]
    async fn plan_runs_against_source() {
        let plan = DiscoveryPlan {
            templates: vec![NamingTemplate::parse("deck/{NN}.png").expect("valid template")],
            max_slides: MaxSlides::new(4),
            extra_paths: Vec::new(),
            options: ResolverOptions::default(),
        };
        let source = FakeSource::with_images(["deck/02.png", "deck/04.png"]);

        let resolution = discover(source, plan).await;

        assert_eq!(
            resolution.sequence.locations(),
            vec!["deck/02.png", "deck/04.png"]
        );
        assert_eq!(resolution.report.probes_issued, 4);
    }
}
