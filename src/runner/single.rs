use std::hint::black_box;

use tracing::debug;

use super::support::invoke_all;
use crate::{
    config::Settings,
    entity::TypeCounted,
    population::{Layout, Slots, Tally},
    strategy::Strategy,
    timer::ScopedTimer,
    Metric, Reporter,
};

/// What one strategy's run left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub label: &'static str,
    pub layout: Layout,
    pub tally: Tally,
}

/// Builds a fresh population for `S`, times `settings.repeats` passes over
/// it and reports the measurement under [`Strategy::LABEL`].
///
/// Everything allocated here is freed before returning, so consecutive runs
/// don't share entities.
pub fn run_single<S, M, R>(settings: &Settings, metric: &mut M, reporter: &mut R) -> Outcome
where
    S: Strategy,
    M: Metric,
    R: Reporter<M> + ?Sized,
{
    let slots = Slots::for_layout(Layout::draw(settings.entities, settings.seed));
    let population = S::bind(&slots);

    debug!(
        strategy = S::LABEL,
        entities = population.len(),
        repeats = settings.repeats,
        "starting timed region"
    );
    let baseline = TypeCounted::calls();
    {
        let _timer = ScopedTimer::start(S::LABEL, metric, reporter);
        invoke_all(&population, settings.repeats, settings.tick);
    }
    drop(population);

    Outcome {
        label: S::LABEL,
        layout: slots.layout().clone(),
        tally: black_box(slots.tally(baseline)),
    }
}
