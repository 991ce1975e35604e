//! Nearest-in-time selection.

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::Observation;

/// Pick the record closest to `reference - target_offset`.
///
/// Equidistant records resolve to the later timestamp. Returns `None` for an
/// empty input; the caller decides which "no data" condition that is.
pub fn select_closest<'a, I>(records: I, target_offset: TimeDelta, reference: DateTime<Utc>) -> Option<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let target = reference - target_offset;
    let mut best: Option<(&'a Observation, TimeDelta)> = None;

    for obs in records {
        let distance = (obs.timestamp - target).abs();
        let better = match best {
            None => true,
            Some((current, best_distance)) => {
                distance < best_distance || (distance == best_distance && obs.timestamp > current.timestamp)
            }
        };
        if better {
            best = Some((obs, distance));
        }
    }

    best.map(|(obs, _)| obs)
}
