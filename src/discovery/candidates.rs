// SPDX-License-Identifier: MPL-2.0
//! Candidate generation from naming templates.

use crate::domain::slides::{CandidatePath, MaxSlides, NamingTemplate};

/// Expands every template for every slide number from 1 to `max`.
///
/// Produces exactly `max * templates.len()` candidates, followed by one bare
/// candidate per entry of `extra_paths`. Fixed templates (no placeholder)
/// yield bare candidates because the slide number is not part of the location.
#[must_use]
pub fn generate(
    templates: &[NamingTemplate],
    max: MaxSlides,
    extra_paths: &[String],
) -> Vec<CandidatePath> {
    let mut candidates = Vec::with_capacity(max.value() as usize * templates.len() + extra_paths.len());

    for number in max.numbers() {
        for template in templates {
            let location = template.expand(number);
            let candidate = if template.is_parameterized() {
                CandidatePath::from_template(location, number)
            } else {
                CandidatePath::bare(location)
            };
            candidates.push(candidate);
        }
    }

    candidates.extend(
        extra_paths
            .iter()
            .map(|path| path.trim())
            .filter(|path| !path.is_empty())
            .map(CandidatePath::bare),
    );

    candidates
}
