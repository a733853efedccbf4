use std::time::Duration;

/// One skipped point and how long after the transition start its pulse begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TransitStep {
    pub index: usize,
    #[serde(serialize_with = "serialize_millis")]
    pub delay: Duration,
}

/// Pulses for the points strictly between `previous` and `current`, in travel order.
///
/// The window is split into `skipped + 2` equal slots of whole milliseconds (the remainder
/// is dropped); the first and last belong to the departing and arriving points, so no
/// pulse starts after the transition window.
pub fn transit_schedule(previous: usize, current: usize, duration: Duration) -> Vec<TransitStep> {
    let skipped = previous.abs_diff(current).saturating_sub(1);
    if skipped == 0 {
        return Vec::new();
    }

    let slots = u128::try_from(skipped + 2).unwrap_or(u128::MAX);
    let unit_ms = u64::try_from(duration.as_millis() / slots).unwrap_or(u64::MAX);
    let unit = Duration::from_millis(unit_ms);

    let indices: Box<dyn Iterator<Item = usize>> = if current > previous {
        Box::new(previous + 1..current)
    } else {
        Box::new((current + 1..previous).rev())
    };

    let mut delay = Duration::ZERO;
    indices
        .map(|index| {
            delay += unit;
            TransitStep { index, delay }
        })
        .collect()
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_nanos() as f64 / 1e6)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/transit.rs"]
mod tests;
