use super::{Invoke, Strategy};
use crate::population::Slots;

/// Calls through the standard library's erased callable, `Box<dyn Fn>`.
pub struct BoxedFn;

impl Invoke for Box<dyn Fn(f32) + '_> {
    #[inline(always)]
    fn invoke(&self, dt: f32) {
        self(dt)
    }
}

fn boxed<'s>(f: impl Fn(f32) + 's) -> Box<dyn Fn(f32) + 's> {
    Box::new(f)
}

impl Strategy for BoxedFn {
    const LABEL: &'static str = "Box<dyn Fn>";

    type Handle<'s> = Box<dyn Fn(f32) + 's>;

    fn bind(slots: &Slots) -> Vec<Self::Handle<'_>> {
        slots.handles(|e| boxed(e.bind()), |e| boxed(e.bind()))
    }
}
