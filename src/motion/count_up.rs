use super::easing::ease_out_quart;

/// A number that counts from `start` to `end` once its trigger fires.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    pub start: f64,
    pub end: f64,
    /// Seconds from first frame to `end`.
    pub duration: f64,
    /// Seconds between the trigger and the first frame.
    pub delay: f64,
    pub decimals: usize,
    pub prefix: String,
    pub suffix: String,
}

impl CountUp {
    pub fn new(end: f64) -> Self {
        Self {
            start: 0.0,
            end,
            duration: 2.0,
            delay: 0.0,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn starting_at(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Value at linear progress `p`. Exactly `end` once `p` reaches 1.
    pub fn value_at_progress(&self, p: f64) -> f64 {
        if p >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * ease_out_quart(p)
    }

    /// Value `elapsed` seconds after the trigger fired.
    pub fn value_at(&self, elapsed: f64) -> f64 {
        let running = elapsed - self.delay;
        if running <= 0.0 {
            return self.start;
        }
        if self.duration <= 0.0 {
            return self.end;
        }
        self.value_at_progress(running / self.duration)
    }

    pub fn is_done(&self, elapsed: f64) -> bool {
        elapsed - self.delay >= self.duration
    }

    /// Render `value` with prefix, suffix and the configured precision.
    ///
    /// Integers are floored so the display never shows the end value early.
    pub fn format(&self, value: f64) -> String {
        let body = if self.decimals > 0 {
            format!("{:.*}", self.decimals, value)
        } else {
            format!("{}", value.floor() as i64)
        };
        format!("{}{}{}", self.prefix, body, self.suffix)
    }

    pub fn display_at(&self, elapsed: f64) -> String {
        self.format(self.value_at(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_end() {
        let counter = CountUp::new(99.0).starting_at(0.0).duration(2.0);
        assert_eq!(counter.value_at_progress(1.0), 99.0);
        assert_eq!(counter.value_at(2.0), 99.0);
        assert_eq!(counter.value_at(50.0), 99.0);
        assert_eq!(counter.display_at(2.0), "99");
    }

    #[test]
    fn odd_ranges_have_no_residue() {
        let counter = CountUp::new(0.3).starting_at(0.1).duration(0.7);
        assert_eq!(counter.value_at(0.7), 0.3);
    }

    #[test]
    fn waits_for_delay() {
        let counter = CountUp::new(12.0).delay(0.45).duration(2.5);
        assert_eq!(counter.value_at(0.0), 0.0);
        assert_eq!(counter.value_at(0.45), 0.0);
        assert!(counter.value_at(0.5) > 0.0);
        assert!(!counter.is_done(2.9));
        assert!(counter.is_done(3.0));
    }

    #[test]
    fn follows_quartic_ease_out() {
        let counter = CountUp::new(100.0).duration(2.0);
        assert!((counter.value_at(1.0) - 93.75).abs() < 1e-9);
        let mut prev = -1.0;
        for i in 0..=40 {
            let v = counter.value_at(i as f64 * 0.05);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn formatting() {
        let counter = CountUp::new(99.0).suffix("%");
        assert_eq!(counter.format(98.7), "98%");
        let precise = CountUp::new(4.5).decimals(1).prefix("~");
        assert_eq!(precise.format(4.46), "~4.5");
        assert_eq!(precise.display_at(10.0), "~4.5");
    }

    #[test]
    fn zero_duration_is_immediate() {
        let counter = CountUp::new(7.0).duration(0.0);
        assert_eq!(counter.value_at(0.01), 7.0);
    }
}
