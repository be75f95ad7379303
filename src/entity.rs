//! The two kinds of object every population is drawn from.
//!
//! They only differ in where their call counter lives, which is enough to
//! keep the compiler from proving that a population is homogeneous.

use core::cell::Cell;

/// The one capability every entity exposes.
pub trait Updateable {
    fn update(&self, dt: f32);
}

/// Counts its own calls.
#[derive(Debug, Default)]
pub struct InstanceCounted {
    calls: Cell<u64>,
}

impl InstanceCounted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    /// A callable bound to this entity's [`Updateable::update`].
    ///
    /// Only valid while `self` stays put, which the borrow enforces.
    pub fn bind(&self) -> impl Fn(f32) + Clone + '_ {
        move |dt: f32| self.update(dt)
    }
}

impl Updateable for InstanceCounted {
    fn update(&self, _dt: f32) {
        self.calls.set(self.calls.get() + 1);
    }
}

thread_local! {
    static TYPE_COUNTED_CALLS: Cell<u64> = const { Cell::new(0) };
}

/// Counts calls in one counter per type and per thread.
///
/// Every `TypeCounted` updated on a given thread bumps that thread's counter;
/// other threads have counters of their own. The counter is never reset;
/// callers interested in a single run take the difference of
/// [`TypeCounted::calls`] before and after, on the same thread.
#[derive(Debug, Default)]
pub struct TypeCounted;

impl TypeCounted {
    pub fn new() -> Self {
        TypeCounted
    }

    pub fn calls() -> u64 {
        TYPE_COUNTED_CALLS.with(Cell::get)
    }

    /// See [`InstanceCounted::bind`].
    pub fn bind(&self) -> impl Fn(f32) + Clone + '_ {
        move |dt: f32| self.update(dt)
    }
}

impl Updateable for TypeCounted {
    fn update(&self, _dt: f32) {
        TYPE_COUNTED_CALLS.with(|c| c.set(c.get() + 1));
    }
}
