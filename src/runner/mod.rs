use tracing::debug;

use crate::{
    config::{Profile, Settings},
    strategy::{BoxedFn, InlineCall, VirtualCall},
    Metric, Reporter,
};

pub mod support;
pub use support::invoke_all;

mod single;
pub use single::{run_single, Outcome};

/// Runs every strategy once against identically drawn populations.
///
/// ```
/// use fnbench::{config::{Profile, Settings}, BenchmarkRunner, LineReporter, NoOpMetric};
///
/// let mut out = Vec::new();
/// let outcomes = BenchmarkRunner::new(Settings::new(Profile::Debug, 1))
///     .set_entities(10)
///     .set_repeats(3)
///     .run(&mut NoOpMetric, &mut LineReporter::new_with_io_write(&mut out));
///
/// assert_eq!(outcomes.len(), 3);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Box<dyn Fn>: 1 unknown\nInlineFn: 1 unknown\ndyn Updateable: 1 unknown\n",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkRunner {
    settings: Settings,
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new(Settings::new(Profile::of_build(), 1))
    }
}

impl BenchmarkRunner {
    pub const fn new(settings: Settings) -> Self {
        BenchmarkRunner { settings }
    }

    pub const fn set_entities(mut self, entities: usize) -> Self {
        self.settings.entities = entities;
        self
    }

    pub const fn set_repeats(mut self, repeats: usize) -> Self {
        self.settings.repeats = repeats;
        self
    }

    pub const fn set_seed(mut self, seed: u64) -> Self {
        self.settings.seed = seed;
        self
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// `Box<dyn Fn>`, then `InlineFn`, then `dyn Updateable`: one measurement
    /// each, in that order.
    pub fn run<M, R>(&self, metric: &mut M, reporter: &mut R) -> Vec<Outcome>
    where
        M: Metric,
        R: Reporter<M> + ?Sized,
    {
        let s = &self.settings;
        debug!(
            entities = s.entities,
            repeats = s.repeats,
            seed = s.seed,
            "running all strategies"
        );

        let outcomes = vec![
            run_single::<BoxedFn, _, _>(s, metric, reporter),
            run_single::<InlineCall, _, _>(s, metric, reporter),
            run_single::<VirtualCall, _, _>(s, metric, reporter),
        ];

        reporter.ended();
        outcomes
    }
}
