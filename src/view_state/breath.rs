//! Box-breathing countdown: 4 in, 4 hold, 4 out.

/// Seconds in each phase.
pub const BREATH_COUNT_START: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreathPhase {
    #[default]
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    pub fn next(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Exhale",
        }
    }
}

/// Phase plus seconds left in it. Driven by a one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathCycle {
    phase: BreathPhase,
    seconds_remaining: u8,
}

impl Default for BreathCycle {
    fn default() -> Self {
        Self {
            phase: BreathPhase::Inhale,
            seconds_remaining: BREATH_COUNT_START,
        }
    }
}

impl BreathCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one second. At 1 the phase rolls over and the count resets.
    pub fn tick(&mut self) {
        if self.seconds_remaining > 1 {
            self.seconds_remaining -= 1;
        } else {
            self.phase = self.phase.next();
            self.seconds_remaining = BREATH_COUNT_START;
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn seconds_remaining(&self) -> u8 {
        self.seconds_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(ticks: usize) -> BreathCycle {
        let mut cycle = BreathCycle::new();
        for _ in 0..ticks {
            cycle.tick();
        }
        cycle
    }

    #[test]
    fn test_counts_down_within_phase() {
        let cycle = after(3);
        assert_eq!(cycle.phase(), BreathPhase::Inhale);
        assert_eq!(cycle.seconds_remaining(), 1);
    }

    #[test]
    fn test_four_ticks_reach_hold() {
        let cycle = after(4);
        assert_eq!(cycle.phase(), BreathPhase::Hold);
        assert_eq!(cycle.seconds_remaining(), 4);
    }

    #[test]
    fn test_eight_ticks_reach_exhale() {
        assert_eq!(after(8).phase(), BreathPhase::Exhale);
    }

    #[test]
    fn test_twelve_ticks_complete_cycle() {
        assert_eq!(after(12), BreathCycle::new());
        assert_eq!(after(24), BreathCycle::new());
    }

    #[test]
    fn test_count_stays_in_range() {
        let mut cycle = BreathCycle::new();
        for _ in 0..100 {
            cycle.tick();
            assert!((1..=4).contains(&cycle.seconds_remaining()));
        }
    }
}
