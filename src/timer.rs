use crate::{Metric, Reporter};

/// Measures the region between [`ScopedTimer::start`] and the guard going
/// out of scope.
///
/// The measurement is handed to the reporter from `Drop`, so a timed region
/// that unwinds still reports exactly once.
#[must_use = "the region is measured until the timer is dropped"]
pub struct ScopedTimer<'t, M: Metric, R: Reporter<M> + ?Sized> {
    label: &'static str,
    metric: &'t mut M,
    reporter: &'t mut R,
    start: Option<M::Start>,
}

impl<'t, M: Metric, R: Reporter<M> + ?Sized> ScopedTimer<'t, M, R> {
    pub fn start(label: &'static str, metric: &'t mut M, reporter: &'t mut R) -> Self {
        let start = Some(metric.start());
        ScopedTimer {
            label,
            metric,
            reporter,
            start,
        }
    }
}

impl<M: Metric, R: Reporter<M> + ?Sized> Drop for ScopedTimer<'_, M, R> {
    fn drop(&mut self) {
        if let Some(start) = self.start.take() {
            let measurement = self.metric.end(start);
            self.reporter.measured(self.label, measurement);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;
    use crate::NoOpMetric;

    #[derive(Default)]
    struct Recorder(Vec<(&'static str, u32)>);

    impl Reporter<NoOpMetric> for Recorder {
        fn measured(&mut self, label: &'static str, measurement: u32) {
            self.0.push((label, measurement));
        }
    }

    #[test]
    fn reports_once_on_scope_exit() {
        let (mut m, mut r) = (NoOpMetric, Recorder::default());
        {
            let _t = ScopedTimer::start("region", &mut m, &mut r);
        }
        assert_eq!(r.0, [("region", 1)]);
    }

    #[test]
    fn reports_while_unwinding() {
        let (mut m, mut r) = (NoOpMetric, Recorder::default());
        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            let _t = ScopedTimer::start("doomed", &mut m, &mut r);
            panic!("boom");
        }));
        assert!(res.is_err());
        assert_eq!(r.0, [("doomed", 1)]);
    }
}
