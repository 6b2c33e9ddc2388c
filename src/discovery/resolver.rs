// SPDX-License-Identifier: MPL-2.0
//! Fan-out probing with a barrier join.
//!
//! [`resolve`] probes every candidate, waits until all of them have settled,
//! then deduplicates and sorts the survivors. Nothing is published before the
//! join, so a late probe can never reorder a sequence already on screen.

use super::ordering::{ordering_key, sort_assets};
use super::probe::{probe, ProbeOutcome};
use crate::application::port::AssetSource;
use crate::domain::slides::{
    CandidatePath, ConfirmedAsset, OrderingKey, ProbeConcurrency, ProbeTimeout, ResolvedSequence,
};
use futures_util::stream::{self, StreamExt};
use std::collections::HashSet;

/// Tuning knobs for a discovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverOptions {
    /// Maximum probes in flight.
    pub concurrency: ProbeConcurrency,
    /// Per-probe timeout.
    pub timeout: ProbeTimeout,
}

/// Counters describing one discovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveReport {
    /// Probes issued, one per candidate.
    pub probes_issued: usize,
    /// Probes that found an image.
    pub found: usize,
    /// Probes that found nothing usable.
    pub missing: usize,
    /// Probes abandoned after the timeout.
    pub timed_out: usize,
    /// Found candidates dropped because their location was already confirmed.
    pub duplicates_collapsed: usize,
    /// Confirmed assets whose key was parsed from the location.
    pub inferred_keys: usize,
    /// Confirmed assets with no usable key.
    pub unparsed_keys: usize,
}

/// Outcome of a discovery run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Deduplicated, ordered slides.
    pub sequence: ResolvedSequence,
    /// Run statistics.
    pub report: ResolveReport,
}

/// Probes `candidates` through `source` and returns the resolved sequence.
///
/// Probes run concurrently up to `options.concurrency`. Results are gathered in
/// candidate order, which keeps the output identical across runs against an
/// unchanged source.
pub async fn resolve<S: AssetSource>(
    source: &S,
    candidates: Vec<CandidatePath>,
    options: ResolverOptions,
) -> Resolution {
    tracing::info!(
        root = %source.describe(),
        candidates = candidates.len(),
        concurrency = options.concurrency.value(),
        "probing slide candidates"
    );

    let settled: Vec<(CandidatePath, ProbeOutcome)> = stream::iter(candidates)
        .map(|candidate| async move {
            let outcome = probe(source, candidate.location(), options.timeout).await;
            (candidate, outcome)
        })
        .buffered(options.concurrency.value())
        .collect()
        .await;

    let resolution = reduce_with(settled, |location| source.identity(location));
    tracing::info!(
        slides = resolution.sequence.len(),
        missing = resolution.report.missing,
        timed_out = resolution.report.timed_out,
        duplicates = resolution.report.duplicates_collapsed,
        "slide discovery finished"
    );
    resolution
}

/// Reduces settled probes to a [`Resolution`], treating each distinct
/// location string as a distinct resource.
#[must_use]
pub fn reduce(settled: Vec<(CandidatePath, ProbeOutcome)>) -> Resolution {
    reduce_with(settled, str::to_string)
}

/// Reduces settled probes to a [`Resolution`].
///
/// Drops non-found results, keeps the first occurrence of each `identity` and
/// sorts by ordering key.
pub fn reduce_with<F>(settled: Vec<(CandidatePath, ProbeOutcome)>, identity: F) -> Resolution
where
    F: Fn(&str) -> String,
{
    let mut report = ResolveReport {
        probes_issued: settled.len(),
        ..ResolveReport::default()
    };
    let mut seen: HashSet<String> = HashSet::new();
    let mut assets = Vec::new();

    for (candidate, outcome) in settled {
        match outcome {
            ProbeOutcome::Found => report.found += 1,
            ProbeOutcome::Missing => {
                report.missing += 1;
                continue;
            }
            ProbeOutcome::TimedOut => {
                report.timed_out += 1;
                continue;
            }
        }

        if !seen.insert(identity(candidate.location())) {
            report.duplicates_collapsed += 1;
            continue;
        }

        let key = ordering_key(&candidate);
        match key {
            OrderingKey::Explicit(_) => {}
            OrderingKey::Inferred(number) => {
                report.inferred_keys += 1;
                tracing::debug!(location = candidate.location(), number, "slide number inferred from path");
            }
            OrderingKey::Unparsed => {
                report.unparsed_keys += 1;
                tracing::warn!(
                    location = candidate.location(),
                    "no slide number in path, sorting first"
                );
            }
        }

        assets.push(ConfirmedAsset::new(candidate.location(), key));
    }

    sort_assets(&mut assets);

    Resolution {
        sequence: ResolvedSequence::from_sorted(assets),
        report,
    }
}
