use core::{
    fmt::{self, Debug},
    marker::PhantomData,
};
use std::time::{Duration, Instant};

pub trait Metric {
    type Unit: Debug;
    type Start;

    const UNIT_NAME: &'static str = "unknown";

    fn start(&mut self) -> Self::Start;
    fn end(&mut self, start: Self::Start) -> Self::Unit;
    fn print(u: &Self::Unit, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(u, f)
    }
}

/// Formats a [`Metric::Unit`] with its metric's [`Metric::print`].
pub struct MetricFmtAdapter<'u, M: Metric>(&'u M::Unit, PhantomData<fn() -> M>);

impl<'u, M: Metric> MetricFmtAdapter<'u, M> {
    pub fn new(u: &'u M::Unit) -> Self {
        MetricFmtAdapter(u, PhantomData)
    }
}

impl<M: Metric> fmt::Display for MetricFmtAdapter<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        M::print(self.0, f)
    }
}

/// A placeholder metric that just returns 1.
///
/// Handy when the output of a run has to be byte-for-byte predictable.
#[derive(Debug, Default)]
pub struct NoOpMetric;

impl Metric for NoOpMetric {
    type Unit = u32;
    type Start = ();

    fn start(&mut self) {}
    fn end(&mut self, (): ()) -> u32 {
        1
    }
}

/// Elapsed time on the monotonic clock, printed in whole milliseconds.
///
/// [`Instant`] never goes backwards, so adjustments to the time of day
/// made while a benchmark is running don't skew the result.
#[derive(Debug, Default)]
pub struct WallClock;

impl Metric for WallClock {
    type Start = Instant;
    type Unit = Duration;

    const UNIT_NAME: &'static str = "ms";

    fn start(&mut self) -> Instant {
        Instant::now()
    }

    fn end(&mut self, s: Instant) -> Duration {
        s.elapsed()
    }

    fn print(u: &Duration, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&u.as_millis(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_prints_truncated_millis() {
        let d = Duration::from_micros(12_999);
        assert_eq!(MetricFmtAdapter::<WallClock>::new(&d).to_string(), "12");
        assert_eq!(MetricFmtAdapter::<WallClock>::new(&Duration::ZERO).to_string(), "0");
    }

    #[test]
    fn wall_clock_is_monotonic() {
        let mut m = WallClock;
        let start = m.start();
        let first = m.end(start);
        let second = m.end(start);
        assert!(second >= first);
    }

    #[test]
    fn no_op_always_measures_one() {
        let mut m = NoOpMetric;
        let s = m.start();
        assert_eq!(m.end(s), 1);
        assert_eq!(MetricFmtAdapter::<NoOpMetric>::new(&1).to_string(), "1");
    }
}
