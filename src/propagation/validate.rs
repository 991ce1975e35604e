//! Record validity.

use crate::domain::Observation;

/// A record is usable when both MUF and foF2 are present.
///
/// `fmin` is optional; without it the absorption check is skipped.
pub fn is_valid(obs: &Observation) -> bool {
    obs.muf.is_some() && obs.fof2.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn obs(muf: Option<f64>, fof2: Option<f64>, fmin: Option<f64>) -> Observation {
        Observation {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            muf,
            fof2,
            fmin,
        }
    }

    #[test]
    fn requires_muf_and_fof2() {
        assert!(is_valid(&obs(Some(14.0), Some(7.0), Some(1.0))));
        assert!(!is_valid(&obs(None, Some(7.0), Some(1.0))));
        assert!(!is_valid(&obs(Some(14.0), None, Some(1.0))));
        assert!(!is_valid(&obs(None, None, None)));
    }

    #[test]
    fn missing_fmin_does_not_invalidate() {
        assert!(is_valid(&obs(Some(14.0), Some(7.0), None)));
    }
}
