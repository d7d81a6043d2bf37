//! # Animated Counter
//!
//! A statistic counts up from zero to its target over [`COUNTER_DURATION_MS`]
//! in [`COUNTER_STEPS`] equal increments. The caller drives it by calling
//! [`CounterAnimation::tick`] every [`CounterAnimation::interval_ms`] once the
//! section first becomes visible.

use crate::utils::format_stat;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    step_value: f64,
    steps: u32,
    current: f64,
    displayed: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self::with_steps(target, COUNTER_STEPS)
    }

    pub fn with_steps(target: f64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            step_value: target / f64::from(steps),
            steps,
            current: 0.0,
            displayed: 0.0,
            done: false,
        }
    }

    /// Milliseconds between ticks.
    pub fn interval_ms(&self) -> u32 {
        COUNTER_DURATION_MS / self.steps
    }

    /// Advance one step and return the value to display.
    ///
    /// Intermediate values are floored. The step that reaches or passes the
    /// target displays the target exactly; later ticks change nothing.
    pub fn tick(&mut self) -> f64 {
        if self.done {
            return self.displayed;
        }
        self.current += self.step_value;
        if self.current >= self.target {
            self.displayed = self.target;
            self.done = true;
        } else {
            self.displayed = self.current.floor();
        }
        self.displayed
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Current value rendered the way the stats section shows it.
    pub fn render(&self) -> String {
        format_stat(self.displayed, self.target.fract() != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut CounterAnimation) -> Vec<f64> {
        let mut seen = Vec::new();
        // Float accumulation may need one step past the nominal count.
        for _ in 0..=COUNTER_STEPS + 1 {
            seen.push(counter.tick());
            if counter.is_done() {
                break;
            }
        }
        seen
    }

    #[test]
    fn test_reaches_target_exactly_and_stops() {
        let mut counter = CounterAnimation::new(50_000.0);
        let seen = run_to_end(&mut counter);

        assert!(counter.is_done());
        assert_eq!(counter.displayed(), 50_000.0);
        assert!(seen.iter().all(|v| *v <= 50_000.0));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(counter.tick(), 50_000.0);
        assert_eq!(counter.tick(), 50_000.0);
    }

    #[test]
    fn test_fractional_target() {
        let mut counter = CounterAnimation::new(99.2);
        counter.tick();
        assert_eq!(counter.render(), "1.0");

        run_to_end(&mut counter);
        assert_eq!(counter.displayed(), 99.2);
        assert_eq!(counter.render(), "99.2");
    }

    #[test]
    fn test_render_whole_target() {
        let mut counter = CounterAnimation::new(120_000.0);
        assert_eq!(counter.render(), "0");
        run_to_end(&mut counter);
        assert_eq!(counter.render(), "120K");
    }

    #[test]
    fn test_zero_target_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(0.0);
        assert_eq!(counter.tick(), 0.0);
        assert!(counter.is_done());
    }

    #[test]
    fn test_interval() {
        assert_eq!(CounterAnimation::new(24.0).interval_ms(), 33);
        assert_eq!(CounterAnimation::with_steps(24.0, 0).interval_ms(), COUNTER_DURATION_MS);
    }
}
