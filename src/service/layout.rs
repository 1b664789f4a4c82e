//! Day layout engine. Resolved candidates are sorted by start time,
//! grouped into overlap clusters, packed into columns within each cluster,
//! and annotated with the geometry the renderer consumes.

use crate::config::ViewConfig;
use crate::models::time::{to_minutes, TimeError};
use crate::service::resolver::Candidate;

#[derive(Debug, Clone)]
pub struct LaidOutEvent {
    pub candidate: Candidate,
    pub start_minutes: u32,
    pub end_minutes: u32,
    /// 0-based column within the cluster.
    pub column_index: usize,
    /// Column count of the cluster this event landed in.
    pub total_columns: usize,
    pub top: f32,
    pub height: f32,
    pub left_percent: f32,
    pub width_percent: f32,
}

struct Timed {
    candidate: Candidate,
    start_minutes: u32,
    end_minutes: u32,
    column_index: usize,
    total_columns: usize,
}

// Strict overlap: touching endpoints do not count.
fn overlaps(a: &Timed, b: &Timed) -> bool {
    a.start_minutes.max(b.start_minutes) < a.end_minutes.min(b.end_minutes)
}

/// Lays out one day's worth of candidates. Zero- and negative-duration
/// candidates are dropped silently; malformed time strings are a caller
/// bug and surface as an error.
pub fn layout_day(
    candidates: &[Candidate],
    view: &ViewConfig,
) -> Result<Vec<LaidOutEvent>, TimeError> {
    let mut timed = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let start_minutes = to_minutes(&candidate.start)?;
        let end_minutes = to_minutes(&candidate.end)?;
        if end_minutes <= start_minutes {
            continue;
        }
        timed.push(Timed {
            candidate: candidate.clone(),
            start_minutes,
            end_minutes,
            column_index: 0,
            total_columns: 1,
        });
    }
    timed.sort_by_key(|t| t.start_minutes);

    for cluster in cluster_by_overlap(&timed) {
        pack_columns(&mut timed, &cluster);
    }

    Ok(timed
        .into_iter()
        .map(|t| {
            let width_percent = 100.0 / t.total_columns as f32;
            LaidOutEvent {
                top: view.top_of(t.start_minutes),
                height: (t.end_minutes - t.start_minutes) as f32
                    * view.pixels_per_minute as f32,
                left_percent: t.column_index as f32 * width_percent,
                width_percent,
                candidate: t.candidate,
                start_minutes: t.start_minutes,
                end_minutes: t.end_minutes,
                column_index: t.column_index,
                total_columns: t.total_columns,
            }
        })
        .collect())
}

/// Groups events into clusters by comparing every unplaced event against a
/// seed. This deliberately does NOT take the transitive closure: a chain
/// A-B-C where A and C do not overlap ends up as {A, B} and {C}, matching
/// the layout existing stored data was built against.
fn cluster_by_overlap(timed: &[Timed]) -> Vec<Vec<usize>> {
    let mut placed = vec![false; timed.len()];
    let mut clusters = Vec::new();
    for seed in 0..timed.len() {
        if placed[seed] {
            continue;
        }
        let cluster: Vec<usize> = (0..timed.len())
            .filter(|&other| !placed[other] && overlaps(&timed[seed], &timed[other]))
            .collect();
        for &idx in &cluster {
            placed[idx] = true;
        }
        clusters.push(cluster);
    }
    clusters
}

/// Greedy first-fit packing. Cluster members arrive in start order; each
/// goes into the first column whose last event ends at or before its start
/// (touching shares a column), else opens a new column.
fn pack_columns(timed: &mut [Timed], cluster: &[usize]) {
    let mut column_ends: Vec<u32> = Vec::new();
    for &idx in cluster {
        let start = timed[idx].start_minutes;
        let column = match column_ends.iter().position(|&end| end <= start) {
            Some(column) => {
                column_ends[column] = timed[idx].end_minutes;
                column
            }
            None => {
                column_ends.push(timed[idx].end_minutes);
                column_ends.len() - 1
            }
        };
        timed[idx].column_index = column;
    }
    for &idx in cluster {
        timed[idx].total_columns = column_ends.len();
    }
}
