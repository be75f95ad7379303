use std::hint::black_box;

use crate::strategy::Invoke;

/// The invocation loop: `repeats` full passes over `population`, in order,
/// calling every element with `dt`.
///
/// The slice goes through [`black_box`] once per pass so the passes can't
/// be merged or hoisted; the calls themselves mutate counters the caller
/// reads afterwards.
pub fn invoke_all<H: Invoke>(population: &[H], repeats: usize, dt: f32) {
    for _ in 0..repeats {
        for handle in black_box(population) {
            handle.invoke(dt);
        }
    }
}
