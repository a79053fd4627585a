use std::collections::BTreeMap;
use std::ops::Bound;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

#[test]
fn test_empty() {
    let t: Llrb<i32, i32> = Llrb::new("empty");
    assert_eq!(t.len(), 0);
    assert!(t.is_empty());
    assert_eq!(t.get(&1), None);
    assert_eq!(t.min(), None);
    assert_eq!(t.max(), None);
    assert_eq!(t.iter().count(), 0);
    t.validate().unwrap();
}

#[test]
fn test_single_node() {
    let mut t = Llrb::new("single");
    t.put(10, "ten").unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t.get(&10), Some(&"ten"));
    assert_eq!(t.min(), Some((&10, &"ten")));
    assert_eq!(t.max(), Some((&10, &"ten")));
    t.validate().unwrap();

    let (k, v) = t.remove(&10).unwrap();
    assert_eq!((k, v), (10, "ten"));
    assert!(t.is_empty());
    t.validate().unwrap();
}

// Alabama/Kentucky: two-entry tree exercises insert, get, and replace.
#[test]
fn test_alabama_kentucky() {
    let mut t = Llrb::new("states");
    t.put("Alabama", 1819).unwrap();
    t.put("Kentucky", 1792).unwrap();
    t.validate().unwrap();

    assert_eq!(t.get(&"Alabama"), Some(&1819));
    assert_eq!(t.get(&"Kentucky"), Some(&1792));
    assert_eq!(t.min(), Some((&"Alabama", &1819)));
    assert_eq!(t.max(), Some((&"Kentucky", &1792)));

    assert_eq!(t.put("Alabama", 1820), Err(Error::AlreadyContains));
    assert_eq!(t.set("Alabama", 1820), Some(1819));
    assert_eq!(t.get(&"Alabama"), Some(&1820));
}

// Connecticut/California/Alabama: three-entry tree, checks rotation keeps
// ascending order on iteration.
#[test]
fn test_connecticut_california_alabama() {
    let mut t = Llrb::new("states");
    for (name, year) in [("Connecticut", 1788), ("California", 1850), ("Alabama", 1819)] {
        t.set(name, year);
    }
    t.validate().unwrap();

    let got: Vec<_> = t.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(
        got,
        vec![
            ("Alabama", 1819),
            ("California", 1850),
            ("Connecticut", 1788),
        ]
    );
}

const SEVEN_STATES: [(&str, u32); 7] = [
    ("Delaware", 1787),
    ("Pennsylvania", 1787),
    ("New Jersey", 1787),
    ("Georgia", 1788),
    ("Connecticut", 1788),
    ("Massachusetts", 1788),
    ("Maryland", 1788),
];

#[test]
fn test_seven_state_tree() {
    let mut t = Llrb::new("states");
    for (name, year) in SEVEN_STATES {
        t.set(name, year);
    }
    t.validate().unwrap();
    assert_eq!(t.len(), 7);

    let mut expect: Vec<_> = SEVEN_STATES.to_vec();
    expect.sort();
    let got: Vec<_> = t.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(got, expect);
}

#[test]
fn test_five_state_pop_min_drain() {
    let mut t = Llrb::new("states");
    let five = [
        ("Alabama", 1819),
        ("Kentucky", 1792),
        ("Ohio", 1803),
        ("Maine", 1820),
        ("Missouri", 1821),
    ];
    for (name, year) in five {
        t.set(name, year);
    }
    t.validate().unwrap();

    let mut drained = Vec::new();
    while let Some(pair) = t.pop_min() {
        drained.push(pair);
        t.validate().unwrap();
    }
    assert!(t.is_empty());

    let mut expect = five.to_vec();
    expect.sort();
    assert_eq!(drained, expect);
}

#[test]
fn test_five_state_pop_max_drain() {
    let mut t = Llrb::new("states");
    let five = [
        ("Alabama", 1819),
        ("Kentucky", 1792),
        ("Ohio", 1803),
        ("Maine", 1820),
        ("Missouri", 1821),
    ];
    for (name, year) in five {
        t.set(name, year);
    }
    t.validate().unwrap();

    let mut drained = Vec::new();
    while let Some(pair) = t.pop_max() {
        drained.push(pair);
        t.validate().unwrap();
    }
    assert!(t.is_empty());

    let mut expect = five.to_vec();
    expect.sort();
    expect.reverse();
    assert_eq!(drained, expect);
}

#[test]
fn test_minnesota_removal() {
    let mut t = Llrb::new("states");
    for (name, year) in [
        ("Minnesota", 1858),
        ("Iowa", 1846),
        ("Wisconsin", 1848),
        ("Illinois", 1818),
    ] {
        t.set(name, year);
    }
    t.validate().unwrap();

    let removed = t.remove(&"Minnesota").unwrap();
    assert_eq!(removed, ("Minnesota", 1858));
    assert_eq!(t.get(&"Minnesota"), None);
    t.validate().unwrap();
    assert_eq!(t.len(), 3);

    assert_eq!(t.remove(&"Minnesota"), Err(Error::DoesNotContain));
}

#[test]
fn test_ceiling_floor_higher_lower() {
    let mut t = Llrb::new("states");
    for (name, year) in SEVEN_STATES {
        t.set(name, year);
    }

    // "Na" falls strictly between "Massachusetts" and "New Jersey".
    assert_eq!(t.ceiling(&"Na"), Some((&"New Jersey", &1787)));
    assert_eq!(t.floor(&"Na"), Some((&"Massachusetts", &1788)));
    assert_eq!(t.higher(&"Na"), Some((&"New Jersey", &1787)));
    assert_eq!(t.lower(&"Na"), Some((&"Massachusetts", &1788)));

    // Exact-match probes.
    assert_eq!(t.ceiling(&"Georgia"), Some((&"Georgia", &1788)));
    assert_eq!(t.floor(&"Georgia"), Some((&"Georgia", &1788)));
    assert_eq!(t.higher(&"Georgia"), Some((&"Maryland", &1788)));
    assert_eq!(t.lower(&"Georgia"), Some((&"Delaware", &1787)));

    // Below the minimum and above the maximum.
    let (min_key, _) = t.min().unwrap();
    let (max_key, _) = t.max().unwrap();
    assert_eq!(t.lower(min_key), None);
    assert_eq!(t.higher(max_key), None);
    assert_eq!(t.ceiling(max_key), Some((max_key, t.get(max_key).unwrap())));
    assert_eq!(t.floor(min_key), Some((min_key, t.get(min_key).unwrap())));
}

#[test]
fn test_range_and_reverse() {
    let mut t = Llrb::new("states");
    for (name, year) in SEVEN_STATES {
        t.set(name, year);
    }

    let got: Vec<_> = t
        .range(Bound::Included("Georgia"), Bound::Included("Massachusetts"))
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(got, vec!["Georgia", "Maryland", "Massachusetts"]);

    let got_rev: Vec<_> = t
        .range_rev(Bound::Included("Georgia"), Bound::Included("Massachusetts"))
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(got_rev, vec!["Massachusetts", "Maryland", "Georgia"]);
}

#[test]
fn test_range_and_reverse_excluded_bounds() {
    let mut t = Llrb::new("states");
    for (name, year) in SEVEN_STATES {
        t.set(name, year);
    }

    // Excluded bounds must drop the endpoint keys themselves.
    let got: Vec<_> = t
        .range(Bound::Excluded("Georgia"), Bound::Excluded("Massachusetts"))
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(got, vec!["Maryland"]);

    let got_rev: Vec<_> = t
        .range_rev(Bound::Excluded("Georgia"), Bound::Excluded("Massachusetts"))
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(got_rev, vec!["Maryland"]);

    // Mixed bounds: included low, excluded high, and vice versa.
    let got_mixed: Vec<_> = t
        .range(Bound::Included("Georgia"), Bound::Excluded("Massachusetts"))
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(got_mixed, vec!["Georgia", "Maryland"]);

    let got_rev_mixed: Vec<_> = t
        .range_rev(Bound::Excluded("Georgia"), Bound::Included("Massachusetts"))
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(got_rev_mixed, vec!["Massachusetts", "Maryland"]);

    // Unbounded on one side.
    let got_unbounded_low: Vec<_> = t
        .range(Bound::Unbounded, Bound::Excluded("Georgia"))
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(got_unbounded_low, vec!["Connecticut", "Delaware"]);
}

#[test]
fn test_get_key_for_value_and_contains_value() {
    let mut t = Llrb::new("states");
    t.set("Alabama", 1819);
    t.set("Maine", 1820);
    t.set("Missouri", 1821);

    assert_eq!(t.get_key_for_value(&1820), Some(&"Maine"));
    assert!(t.contains_value(&1819));
    assert!(!t.contains_value(&1900));
}

#[test]
fn test_replace_value_preserves_shape() {
    let mut t = Llrb::new("states");
    t.set("Alabama", 1819);
    t.set("Maine", 1820);

    let old = t.replace_value(&"Alabama", 1900).unwrap();
    assert_eq!(old, 1819);
    assert_eq!(t.get(&"Alabama"), Some(&1900));
    assert_eq!(t.len(), 2);

    assert_eq!(t.replace_value(&"Vermont", 1791), Err(Error::DoesNotContain));
}

#[test]
fn test_clear() {
    let mut t = Llrb::new("states");
    t.set("Alabama", 1819);
    t.set("Maine", 1820);
    t.clear();
    assert!(t.is_empty());
    assert_eq!(t.get(&"Alabama"), None);
}

#[test]
fn test_randomized_against_btreemap() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut model: BTreeMap<u32, u32> = BTreeMap::new();
    let mut t: Llrb<u32, u32> = Llrb::new("random");

    for _ in 0..5000 {
        let key: u32 = rng.gen_range(0..500);
        let value: u32 = rng.gen();
        match rng.gen_range(0..4) {
            0 => {
                let prior = model.insert(key, value);
                let got = t.set(key, value);
                assert_eq!(got, prior);
            }
            1 => {
                let removed_model = model.remove(&key);
                let removed_tree = t.remove(&key).ok();
                assert_eq!(removed_tree, removed_model.map(|v| (key, v)));
            }
            2 => {
                assert_eq!(t.get(&key), model.get(&key));
            }
            _ => {
                let popped = t.pop_min();
                let expect = model.iter().next().map(|(&k, &v)| (k, v));
                assert_eq!(popped, expect);
                if let Some((k, _)) = popped {
                    model.remove(&k);
                }
            }
        }
    }

    assert_eq!(t.len(), model.len());
    let got: Vec<_> = t.iter().map(|(k, v)| (*k, *v)).collect();
    let expect: Vec<_> = model.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(got, expect);
    t.validate().unwrap();
}

#[test]
fn test_custom_comparator_reverse_order() {
    struct Reversed;
    impl KeyCompare<i32> for Reversed {
        fn compare(&self, a: &i32, b: &i32) -> std::cmp::Ordering {
            b.cmp(a)
        }
    }

    let mut t = Llrb::new_with("reversed", Reversed);
    for n in [5, 1, 9, 3, 7] {
        t.set(n, n.to_string());
    }
    let got: Vec<_> = t.iter().map(|(k, _)| *k).collect();
    assert_eq!(got, vec![9, 7, 5, 3, 1]);
}
