use std::fmt;

/// Number of lamps on an LED bar gauge.
pub const SEGMENTS: i32 = 5;

/// Bar of LEDs lighting up in proportion to a charge level.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LedGauge {
    count: i32,
    max: i32,
}

impl LedGauge {
    /// Make a gauge showing `count` out of `max`.
    ///
    /// The count is clamped to `[0, max]`. A gauge with a non-positive
    /// maximum never lights up.
    pub fn new(count: i32, max: i32) -> Self {
        let max = max.max(0);
        LedGauge {
            count: count.clamp(0, max),
            max,
        }
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// How many segments are lit. Any nonzero charge lights at least one.
    pub fn active_segments(&self) -> i32 {
        if self.max == 0 {
            return 0;
        }

        // Widen so that large maxima can't overflow. Both operands are
        // non-negative here, so this rounds up.
        let (count, max) = (self.count as i64, self.max as i64);
        let lit = (count * SEGMENTS as i64 + max - 1) / max;
        lit.min(SEGMENTS as i64) as i32
    }

    /// Per-segment lit state, bottom segment first.
    pub fn segments(&self) -> impl Iterator<Item = bool> {
        let lit = self.active_segments();
        (0..SEGMENTS).map(move |i| i < lit)
    }
}

impl fmt::Display for LedGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for lit in self.segments() {
            write!(f, "{}", if lit { '█' } else { '░' })?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn segment_counts() {
        assert_eq!(LedGauge::new(10, 99).active_segments(), 1);
        assert_eq!(LedGauge::new(99, 99).active_segments(), 5);
        assert_eq!(LedGauge::new(0, 99).active_segments(), 0);
        assert_eq!(LedGauge::new(1, 99).active_segments(), 1);
        assert_eq!(LedGauge::new(40, 100).active_segments(), 2);
        assert_eq!(LedGauge::new(41, 100).active_segments(), 3);
        assert_eq!(LedGauge::new(500, 99).active_segments(), 5);
        assert_eq!(LedGauge::new(-3, 99).active_segments(), 0);
        assert_eq!(LedGauge::new(10, 0).active_segments(), 0);
        assert_eq!(LedGauge::new(10, -5).active_segments(), 0);
    }

    #[test]
    fn clamping() {
        let gauge = LedGauge::new(150, 99);
        assert_eq!(gauge.count(), 99);
        assert_eq!(gauge.max(), 99);
        assert_eq!(LedGauge::new(-1, 99).count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(LedGauge::new(10, 99).to_string(), "[█░░░░]");
        assert_eq!(LedGauge::new(99, 99).to_string(), "[█████]");
        assert_eq!(LedGauge::new(0, 99).to_string(), "[░░░░░]");
    }

    #[quickcheck]
    fn segments_in_range(count: i32, max: i32) -> bool {
        let lit = LedGauge::new(count, max).active_segments();
        (0..=SEGMENTS).contains(&lit)
    }
}
