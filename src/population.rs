//! Reproducible heterogeneous populations.
//!
//! A [`Layout`] is the random draw of which kind of entity goes in each
//! slot. [`Slots`] owns one entity per slot, segregated by kind, and hands
//! out handles in draw order.

use rand::{distributions::Uniform, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::entity::{InstanceCounted, TypeCounted};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    InstanceCounted,
    TypeCounted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    variants: Vec<Variant>,
}

impl Layout {
    /// Draws `len` variants uniformly, one independent coin flip per slot.
    ///
    /// The same `(len, seed)` always yields the same layout. The split is
    /// not balanced.
    pub fn draw(len: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let coin = Uniform::new_inclusive(0u8, 1);

        let variants = (0..len)
            .map(|_| match rng.sample(&coin) {
                1 => Variant::InstanceCounted,
                _ => Variant::TypeCounted,
            })
            .collect();
        let layout = Layout { variants };

        debug!(
            len,
            seed,
            instance_counted = layout.count(Variant::InstanceCounted),
            type_counted = layout.count(Variant::TypeCounted),
            "drew population layout"
        );
        layout
    }

    pub fn from_variants(variants: Vec<Variant>) -> Self {
        Layout { variants }
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn count(&self, variant: Variant) -> usize {
        self.variants.iter().filter(|v| **v == variant).count()
    }
}

/// Owning storage for one population's entities.
///
/// Every entity is allocated up front and never moved or replaced, so
/// handles borrowed from here stay valid for as long as the borrow lasts.
#[derive(Debug)]
pub struct Slots {
    layout: Layout,
    instance: Vec<Box<InstanceCounted>>,
    shared: Vec<Box<TypeCounted>>,
}

impl Slots {
    pub fn for_layout(layout: Layout) -> Self {
        let mut instance = Vec::with_capacity(layout.count(Variant::InstanceCounted));
        let mut shared = Vec::with_capacity(layout.count(Variant::TypeCounted));
        for v in layout.variants() {
            match v {
                Variant::InstanceCounted => instance.push(Box::new(InstanceCounted::new())),
                Variant::TypeCounted => shared.push(Box::new(TypeCounted::new())),
            }
        }

        Slots {
            layout,
            instance,
            shared,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// One handle per slot, in draw order.
    pub fn handles<'s, H>(
        &'s self,
        mut bind_instance: impl FnMut(&'s InstanceCounted) -> H,
        mut bind_shared: impl FnMut(&'s TypeCounted) -> H,
    ) -> Vec<H> {
        let (mut next_instance, mut next_shared) = (0, 0);
        let mut handles = Vec::with_capacity(self.layout.len());

        for v in self.layout.variants() {
            let handle = match v {
                Variant::InstanceCounted => {
                    next_instance += 1;
                    bind_instance(&self.instance[next_instance - 1])
                }
                Variant::TypeCounted => {
                    next_shared += 1;
                    bind_shared(&self.shared[next_shared - 1])
                }
            };
            handles.push(handle);
        }

        handles
    }

    /// Call counts since `shared_baseline` was read from
    /// [`TypeCounted::calls`].
    pub fn tally(&self, shared_baseline: u64) -> Tally {
        Tally {
            instance_calls: self.instance.iter().map(|e| e.calls()).collect(),
            shared_calls: TypeCounted::calls().wrapping_sub(shared_baseline),
            type_counted: self.shared.len(),
        }
    }
}

/// Where the calls of one run ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    /// One counter per `InstanceCounted` entity, in slot order.
    pub instance_calls: Vec<u64>,
    /// The shared `TypeCounted` counter's growth during the run.
    pub shared_calls: u64,
    /// How many `TypeCounted` entities fed `shared_calls`.
    pub type_counted: usize,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.instance_calls.iter().sum::<u64>() + self.shared_calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Updateable;

    fn as_dyn<T: Updateable>(e: &T) -> &dyn Updateable {
        e
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(Layout::draw(1000, 7), Layout::draw(1000, 7));
        assert_eq!(Layout::draw(1000, 7).len(), 1000);
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(Layout::draw(1000, 1), Layout::draw(1000, 2));
    }

    #[test]
    fn both_variants_show_up() {
        let layout = Layout::draw(1000, 1);
        let a = layout.count(Variant::InstanceCounted);
        let b = layout.count(Variant::TypeCounted);
        assert_eq!(a + b, 1000);
        assert!(a > 0 && b > 0, "{a} / {b}");
    }

    #[test]
    fn empty_layout() {
        let layout = Layout::draw(0, 1);
        assert!(layout.is_empty());
        let slots = Slots::for_layout(layout);
        assert!(slots.handles(|_| (), |_| ()).is_empty());
    }

    #[test]
    fn handles_follow_draw_order() {
        use Variant::{InstanceCounted as A, TypeCounted as B};
        let layout = Layout::from_variants(vec![B, A, A, B]);
        let slots = Slots::for_layout(layout.clone());

        let kinds = slots.handles(|_| A, |_| B);
        assert_eq!(kinds, layout.variants());
    }

    #[test]
    fn handles_refer_to_distinct_instances() {
        use Variant::{InstanceCounted as A, TypeCounted as B};
        let slots = Slots::for_layout(Layout::from_variants(vec![A, B, A]));
        let before = TypeCounted::calls();

        let handles = slots.handles(as_dyn, as_dyn);
        handles[2].update(0.016);
        handles[2].update(0.016);
        handles[1].update(0.016);

        let tally = slots.tally(before);
        assert_eq!(tally.instance_calls, [0, 2]);
        assert_eq!(tally.shared_calls, 1);
        assert_eq!(tally.type_counted, 1);
        assert_eq!(tally.total(), 3);
    }
}
