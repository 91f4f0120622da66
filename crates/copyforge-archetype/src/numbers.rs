//! Numeric placeholder sources
//!
//! `{{number.*}}` tokens are marketing flavour ("join 1,250+ customers").
//! Their values come from an injected [`NumberSource`] so tests and
//! reproducible runs can pin them with a seed.

use std::collections::BTreeMap;
use std::fmt::Debug;

use copyforge_model::Fingerprint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::placeholder::NumberSlot;

/// Supplies values for numeric placeholders
///
/// # Contract
/// For a given source, `value(slot, scope)` must return the same number every
/// time it is called with the same arguments.
pub trait NumberSource: Send + Sync + Debug {
    /// Value for `slot` within `scope` (usually the archetype id)
    fn value(&self, slot: NumberSlot, scope: &str) -> u64;
}

/// Seeded pseudo-random numbers
///
/// The value depends only on the seed, the scope and the slot, so every
/// token of one slot inside one archetype renders the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededNumbers {
    seed: u64,
}

impl SeededNumbers {
    /// Source with a fixed seed
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Source seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed in use
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl NumberSource for SeededNumbers {
    fn value(&self, slot: NumberSlot, scope: &str) -> u64 {
        let salt = Fingerprint::compute_parts([scope, slot.key()]).prefix_u64();
        let mut rng = StdRng::seed_from_u64(self.seed ^ salt);
        let (lo, hi, step) = slot.range();
        lo + rng.random_range(0..=(hi - lo) / step) * step
    }
}

/// Constant numbers per slot, for tests and previews
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedNumbers {
    values: BTreeMap<NumberSlot, u64>,
}

impl FixedNumbers {
    /// Every slot renders its lower bound unless overridden
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin one slot
    #[must_use]
    pub fn with(mut self, slot: NumberSlot, value: u64) -> Self {
        self.values.insert(slot, value);
        self
    }
}

impl NumberSource for FixedNumbers {
    fn value(&self, slot: NumberSlot, _scope: &str) -> u64 {
        self.values
            .get(&slot)
            .copied()
            .unwrap_or_else(|| slot.range().0)
    }
}
