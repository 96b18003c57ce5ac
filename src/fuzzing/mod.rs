//! Module for testing using fuzzing (quickcheck)

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::test::{count_nodes, invariants_hold};
use crate::*;
use num_traits::PrimInt;
use quickcheck::Arbitrary;

mod basic;
mod traversals;

#[cfg(miri)]
const DEFAULT_NUM_TESTS: usize = 10;
#[cfg(not(miri))]
const DEFAULT_NUM_TESTS: usize = 10000;
const DEFAULT_GEN_SIZE: usize = 100;

fn proptest_runner<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F) {
    let num_tests: usize = std::env::var("QUICKCHECK_TESTS")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_NUM_TESTS);

    let gen_size: usize = std::env::var("QUICKCHECK_GENERATOR_SIZE")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_GEN_SIZE);

    let mut gen = quickcheck::Gen::new(gen_size);

    // sample all inputs
    for _ in 0..num_tests {
        let input = A::arbitrary(&mut gen);
        let input_c = input.clone();
        let success = f(input_c);
        if !success {
            shrink_failure(f, input)
        }
    }
}

fn shrink_failure<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F, input: A) -> ! {
    for i in input.shrink() {
        let i_c = i.clone();
        let success = f(i_c);
        if !success {
            shrink_failure(f, i)
        }
    }
    // all shrunken inputs pass, so `input` is minimal
    panic!(
        "[QUICKCHECK] Test case failed!\n  Minimal input:\n    {:?}",
        input
    );
}

#[allow(missing_docs)]
#[macro_export]
macro_rules! qc {
    ($name:ident, $f:ident) => {
        #[test]
        fn $name() {
            proptest_runner($f)
        }
    };
}

/// A 32-bit key drawn from a few dense neighborhoods, such that generated keys often share long
/// prefixes and collide.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
struct TestKey(u32);

impl Debug for TestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0b{:032b}", self.0)
    }
}

impl Arbitrary for TestKey {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let random = u32::arbitrary(g);
        let base = *g
            .choose(&[0, 0x8000_0000, 0xffff_ff00, 0x0a0b_0c00, random])
            .unwrap();
        let offset = u8::arbitrary(g) as u32;
        Self(base ^ offset)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(TestKey))
    }
}

impl Key for TestKey {
    type R = u32;

    fn repr(&self) -> u32 {
        self.0
    }
}

/// Reference model: the first value inserted for each key.
fn model<K: Ord + Copy, T: Clone>(list: &[(K, T)]) -> BTreeMap<K, T> {
    let mut map = BTreeMap::new();
    for (k, t) in list {
        map.entry(*k).or_insert_with(|| t.clone());
    }
    map
}

/// The key a closest-match search must return: the key itself if present, otherwise the
/// neighbor (below or above) that shares the longer bit-prefix with it.
fn model_closest<R: PrimInt, T>(map: &BTreeMap<R, T>, key: R) -> Option<R> {
    if map.contains_key(&key) {
        return Some(key);
    }
    let below = map.range(..key).next_back().map(|(k, _)| *k);
    let above = map.range(key..).next().map(|(k, _)| *k);
    match (below, above) {
        (Some(b), Some(a)) if (b ^ key).leading_zeros() > (a ^ key).leading_zeros() => Some(b),
        (_, Some(a)) => Some(a),
        (b, None) => b,
    }
}

fn build<K: Key, T: Clone>(list: &[(K, T)]) -> BitTrie<K, T> {
    list.iter().cloned().collect()
}
