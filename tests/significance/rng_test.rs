// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infosig::significance::{seeded_rng, shuffle_in_place, unit_uniform, with_default_rng};
use std::collections::HashMap;

#[test]
fn unit_uniform_stays_in_half_open_interval() {
    let mut rng = seeded_rng(11);
    let draws: Vec<f64> = (0..10_000).map(|_| unit_uniform(&mut rng)).collect();
    assert!(draws.iter().all(|&u| (0.0..1.0).contains(&u)));
    let mean = draws.iter().sum::<f64>() / draws.len() as f64;
    assert!((mean - 0.5).abs() < 0.02, "mean = {mean}");
}

#[test]
fn shuffle_preserves_the_multiset() {
    let original = vec![0, 0, 1, 2, 2, 2, 5, 9];
    let mut shuffled = original.clone();
    let mut rng = seeded_rng(3);
    shuffle_in_place(&mut shuffled, &mut rng);

    let mut a = original.clone();
    let mut b = shuffled.clone();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn shuffle_is_reproducible_with_the_same_seed() {
    let mut first = (0..32).collect::<Vec<i32>>();
    let mut second = first.clone();
    shuffle_in_place(&mut first, &mut seeded_rng(2019));
    shuffle_in_place(&mut second, &mut seeded_rng(2019));
    assert_eq!(first, second);
}

#[test]
fn shuffle_visits_all_orderings_evenly() {
    let mut rng = seeded_rng(99);
    let mut seen: HashMap<Vec<i32>, usize> = HashMap::new();
    for _ in 0..6000 {
        let mut xs = vec![0, 1, 2];
        shuffle_in_place(&mut xs, &mut rng);
        *seen.entry(xs).or_insert(0) += 1;
    }
    assert_eq!(seen.len(), 6);
    for (ordering, count) in seen {
        assert!((800..=1200).contains(&count), "{ordering:?} seen {count} times");
    }
}

#[test]
fn shuffle_of_short_series_is_a_no_op() {
    let mut rng = seeded_rng(1);
    let mut empty: Vec<i32> = Vec::new();
    shuffle_in_place(&mut empty, &mut rng);
    assert!(empty.is_empty());
    let mut single = vec![4];
    shuffle_in_place(&mut single, &mut rng);
    assert_eq!(single, vec![4]);
}

#[test]
fn default_generator_is_shared_and_usable() {
    let u = with_default_rng(|rng| unit_uniform(rng));
    assert!((0.0..1.0).contains(&u));
    let mut xs = vec![3, 1, 2];
    with_default_rng(|rng| shuffle_in_place(&mut xs, rng));
    xs.sort_unstable();
    assert_eq!(xs, vec![1, 2, 3]);
}
