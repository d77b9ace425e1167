//! Damage accumulation and failure timing common to all revetments.

/// Cumulative damage after a step.
#[inline]
pub fn damage(previous_damage: f64, increment_damage: f64) -> f64 {
    previous_damage + increment_damage
}

/// Whether the failure number is crossed during this step.
///
/// A step crosses failure when the damage at its start is below the
/// failure number and the damage at its end has reached it.
#[inline]
pub fn failure_crossed(previous_damage: f64, damage: f64, failure_number: f64) -> bool {
    previous_damage < failure_number && damage >= failure_number
}

/// Moment within `[begin_time, end_time]` at which the failure number is reached.
///
/// The damage is assumed to grow linearly over the step. Returns `None`
/// if the step does not cross the failure number.
pub fn time_of_failure(
    previous_damage: f64,
    increment_damage: f64,
    failure_number: f64,
    begin_time: f64,
    end_time: f64,
) -> Option<f64> {
    let damage = damage(previous_damage, increment_damage);
    if !failure_crossed(previous_damage, damage, failure_number) {
        return None;
    }

    let fraction = ((failure_number - previous_damage) / increment_damage).clamp(0.0, 1.0);
    Some(begin_time + fraction * (end_time - begin_time))
}
