use std::time::Duration;
use std::time::Instant;

use crate::config::TimingConfig;
use crate::light::Light;

/// The light cycle: current light, its timing table and the instant of the
/// most recent change. All mutation goes through [`Simulation::advance_if_due`].
pub struct Simulation {
    light: Light,
    timing: TimingConfig,
    last_change: Instant,
}

impl Simulation {
    pub fn new(timing: TimingConfig, now: Instant) -> Self {
        Self {
            light: Light::Red,
            timing,
            last_change: now,
        }
    }

    pub fn light(&self) -> Light {
        self.light
    }

    pub fn dwell(&self) -> Duration {
        self.timing.dwell(self.light)
    }

    /// Advance to the next light if the current one has dwelled long enough.
    /// Returns whether the light changed, i.e. whether a redraw is needed.
    pub fn advance_if_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_change) < self.dwell() {
            return false;
        }

        self.light = self.light.next();
        self.last_change = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use std::time::Instant;

    use super::Simulation;
    use crate::config::TimingConfig;
    use crate::light::Light;

    fn simulation(t0: Instant) -> Simulation {
        Simulation::new(TimingConfig::default(), t0)
    }

    #[test]
    fn test_starts_red() {
        let sim = simulation(Instant::now());
        assert_eq!(sim.light(), Light::Red);
        assert_eq!(sim.dwell(), Duration::from_secs(1));
    }

    #[test]
    fn test_no_advance_before_dwell_expires() {
        let t0 = Instant::now();
        let mut sim = simulation(t0);

        assert!(!sim.advance_if_due(t0 + Duration::from_millis(500)));
        assert_eq!(sim.light(), Light::Red);
    }

    #[test]
    fn test_advances_exactly_at_dwell() {
        let t0 = Instant::now();
        let mut sim = simulation(t0);

        assert!(sim.advance_if_due(t0 + Duration::from_secs(1)));
        assert_eq!(sim.light(), Light::Yellow);

        // last_change was restamped, so yellow waits its own full second
        assert!(!sim.advance_if_due(t0 + Duration::from_millis(1900)));
        assert!(sim.advance_if_due(t0 + Duration::from_secs(2)));
        assert_eq!(sim.light(), Light::Green);
    }

    #[test]
    fn test_green_dwells_longest_then_wraps_to_red() {
        let t0 = Instant::now();
        let mut sim = simulation(t0);

        sim.advance_if_due(t0 + Duration::from_secs(1));
        sim.advance_if_due(t0 + Duration::from_secs(2));
        assert_eq!(sim.light(), Light::Green);
        assert_eq!(sim.dwell(), Duration::from_millis(5250));

        let green_since = t0 + Duration::from_secs(2);
        assert!(!sim.advance_if_due(green_since + Duration::from_secs(5)));
        assert!(sim.advance_if_due(green_since + Duration::from_millis(5250)));
        assert_eq!(sim.light(), Light::Red);
        assert_eq!(sim.dwell(), Duration::from_secs(1));
    }

    #[test]
    fn test_stale_clock_reads_do_not_go_backwards() {
        let t0 = Instant::now();
        let mut sim = simulation(t0 + Duration::from_secs(5));

        // a `now` before last_change saturates to zero elapsed time
        assert!(!sim.advance_if_due(t0));
        assert_eq!(sim.light(), Light::Red);
    }

    #[test]
    fn test_full_cycle_under_polling() {
        let t0 = Instant::now();
        let mut sim = simulation(t0);

        let mut sampled = Vec::new();
        for tick in 0..=75 {
            let now = t0 + Duration::from_millis(tick * 100);
            sim.advance_if_due(now);

            if matches!(tick, 9 | 11 | 22 | 75) {
                sampled.push((tick, sim.light()));
            }
        }

        assert_eq!(
            sampled,
            vec![
                (9, Light::Red),
                (11, Light::Yellow),
                (22, Light::Green),
                (75, Light::Red),
            ]
        );
    }
}
