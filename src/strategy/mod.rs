//! The three ways of calling `update(0.016)` on every entity.
//!
//! Each [`Strategy`] turns the same [`Slots`] into a population of its own
//! handle type. The invocation loop is generic over [`Invoke`], so the only
//! indirect call left per element is the one the strategy is about.

use crate::population::Slots;

mod boxed_fn;
pub use boxed_fn::BoxedFn;

mod inline;
pub use inline::InlineCall;

mod virtual_call;
pub use virtual_call::VirtualCall;

/// Something the invocation loop can call with a time delta.
pub trait Invoke {
    fn invoke(&self, dt: f32);
}

pub trait Strategy {
    /// Printed next to this strategy's measurement.
    const LABEL: &'static str;

    type Handle<'s>: Invoke;

    /// One handle per slot, in draw order, each calling exactly its own
    /// entity.
    fn bind(slots: &Slots) -> Vec<Self::Handle<'_>>;
}
