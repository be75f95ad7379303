use crate::Metric;

#[allow(unused_variables)]
pub trait Reporter<M: Metric> {
    /// Called once per timed region, when the region ends.
    fn measured(&mut self, label: &'static str, measurement: M::Unit) {}

    /// Called after the last timed region of a run.
    fn ended(&mut self) {}
}

/// A placeholder reporter that does nothing.
pub struct NoOpReporter;

impl<M: Metric> Reporter<M> for NoOpReporter {}

mod line;
pub use line::*;
