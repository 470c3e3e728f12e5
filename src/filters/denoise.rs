//! Run-length denoising for piecewise-constant profiles.
//!
//! The profile is split into sections of equal consecutive values. Sections
//! shorter than the required run length are absorbed into a neighbour until
//! every section is long enough or only one remains:
//!
//! - the first section merges into the next one, the last into the previous;
//! - interior sections merge into the neighbour with the larger value (ties go
//!   to the previous neighbour), which keeps the profile conservative for
//!   speed planning;
//! - neighbours that end up with equal values are coalesced.
//!
//! Short sections are always taken left to right. Every absorption removes at
//! least one section, which bounds the loop by the initial section count.

use crate::error::{ensure_finite, CurvatureError};
use crate::types::CurvatureProfile;
use log::debug;

/// Maximal run of equal values.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Section {
    start: usize,
    value: f64,
    len: usize,
}

fn split_sections(values: &[f64]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    for (i, &value) in values.iter().enumerate() {
        match sections.last_mut() {
            Some(last) if last.value == value => last.len += 1,
            _ => sections.push(Section {
                start: i,
                value,
                len: 1,
            }),
        }
    }
    sections
}

/// Index of the neighbour that absorbs the short section at `idx`.
fn absorbing_neighbour(sections: &[Section], idx: usize) -> usize {
    if idx == 0 {
        return 1;
    }
    if idx == sections.len() - 1 {
        return idx - 1;
    }
    if sections[idx + 1].value > sections[idx - 1].value {
        idx + 1
    } else {
        idx - 1
    }
}

/// Folds section `idx` into its neighbour and coalesces equal neighbours that
/// become adjacent. Returns the number of sections removed.
fn absorb(sections: &mut Vec<Section>, idx: usize) -> usize {
    let before = sections.len();
    let target = absorbing_neighbour(sections, idx);
    let short = sections.remove(idx);
    let target = if target > idx { target - 1 } else { target };
    let section = &mut sections[target];
    section.len += short.len;
    section.start = section.start.min(short.start);

    // Removing an interior section can make its two neighbours adjacent.
    if idx > 0 && idx < sections.len() && sections[idx - 1].value == sections[idx].value {
        let next = sections.remove(idx);
        sections[idx - 1].len += next.len;
    }
    before - sections.len()
}

/// Removes runs shorter than `min_run_length` by merging them into adjacent
/// runs.
///
/// `min_run_length = 1` returns the input unchanged. When the whole profile is
/// shorter than `min_run_length` it collapses into a single run. The output
/// has the input's length and contains only values drawn from the input.
pub fn denoise(input: &[f64], min_run_length: usize) -> Result<CurvatureProfile, CurvatureError> {
    if min_run_length == 0 {
        return Err(CurvatureError::invalid(
            "min_run_length",
            "must be at least 1",
        ));
    }
    ensure_finite(input)?;
    if min_run_length == 1 || input.is_empty() {
        return Ok(input.to_vec());
    }

    let mut sections = split_sections(input);
    let initial = sections.len();
    let mut merges = 0usize;
    while sections.len() > 1 {
        let Some(idx) = sections.iter().position(|s| s.len < min_run_length) else {
            break;
        };
        let removed = absorb(&mut sections, idx);
        debug_assert!(removed >= 1);
        merges += 1;
    }
    debug!(
        "denoise: {} -> {} sections after {} merges (min run {})",
        initial,
        sections.len(),
        merges,
        min_run_length
    );

    let mut output = Vec::with_capacity(input.len());
    for section in &sections {
        debug_assert_eq!(section.start, output.len());
        output.resize(output.len() + section.len, section.value);
    }
    Ok(output)
}
