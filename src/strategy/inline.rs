use super::{Invoke, Strategy};
use crate::{inline_fn::InlineFn, population::Slots};

/// Calls through [`InlineFn`].
pub struct InlineCall;

impl<const N: usize> Invoke for InlineFn<'_, f32, (), N> {
    #[inline(always)]
    fn invoke(&self, dt: f32) {
        self.call(dt)
    }
}

impl Strategy for InlineCall {
    const LABEL: &'static str = "InlineFn";

    type Handle<'s> = InlineFn<'s, f32>;

    fn bind(slots: &Slots) -> Vec<Self::Handle<'_>> {
        slots.handles(|e| InlineFn::new(e.bind()), |e| InlineFn::new(e.bind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entity::{InstanceCounted, TypeCounted},
        population::{Layout, Variant},
    };

    #[test]
    fn entity_closures_are_stored_inline() {
        fn fits<F: Fn(f32)>(_: &F) -> bool {
            InlineFn::<'_, f32>::fits_inline::<F>()
        }

        assert!(fits(&InstanceCounted::new().bind()));
        assert!(fits(&TypeCounted::new().bind()));
    }

    #[test]
    fn each_handle_hits_its_own_entity() {
        let slots = Slots::for_layout(Layout::draw(32, 9));
        let len = slots.layout().len();

        // Reversed copies; the originals are gone before anything is called.
        let handles = InlineCall::bind(&slots);
        let reversed: Vec<_> = handles.iter().rev().cloned().collect();
        drop(handles);

        let before = TypeCounted::calls();
        for (j, h) in reversed.iter().enumerate() {
            for _ in 0..=j {
                h.invoke(0.016);
            }
        }

        // Slot `k` sits at `len - 1 - k` in `reversed`, so it got `len - k` calls.
        let calls_for = |wanted: Variant| -> Vec<u64> {
            let variants = slots.layout().variants();
            (0..len)
                .filter(|&k| variants[k] == wanted)
                .map(|k| (len - k) as u64)
                .collect()
        };
        let tally = slots.tally(before);
        assert_eq!(tally.instance_calls, calls_for(Variant::InstanceCounted));
        assert_eq!(tally.shared_calls, calls_for(Variant::TypeCounted).iter().sum::<u64>());
    }
}
