use super::{Invoke, Strategy};
use crate::{entity::Updateable, population::Slots};

/// Calls through `&dyn Updateable`, one vtable lookup per call.
pub struct VirtualCall;

impl<'a> Invoke for &'a (dyn Updateable + 'a) {
    #[inline(always)]
    fn invoke(&self, dt: f32) {
        (**self).update(dt)
    }
}

fn as_dyn<T: Updateable>(e: &T) -> &dyn Updateable {
    e
}

impl Strategy for VirtualCall {
    const LABEL: &'static str = "dyn Updateable";

    type Handle<'s> = &'s dyn Updateable;

    fn bind(slots: &Slots) -> Vec<Self::Handle<'_>> {
        slots.handles(as_dyn, as_dyn)
    }
}
