use std::cmp::Ordering;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::*;

#[test]
fn test_make_and_init() {
    let a: MutableArray<i32> = MutableArray::make(5, 7).unwrap();
    assert_eq!(a.to_vec(), vec![7, 7, 7, 7, 7]);

    let b: MutableArray<i32> = MutableArray::init(5, |i| i as i32 * 2).unwrap();
    assert_eq!(b.to_vec(), vec![0, 2, 4, 6, 8]);

    assert!(MutableArray::<i32>::make(-1, 0).is_err());
    assert!(MutableArray::<i32>::init(-1, |i| i as i32).is_err());
}

#[test]
fn test_get_set_negative_index() {
    let mut a = MutableArray::from_vec(vec![10, 20, 30]);
    assert_eq!(*a.get(-1), 30);
    assert_eq!(*a.get(0), 10);
    a.set(-1, 99);
    assert_eq!(a.to_vec(), vec![10, 20, 99]);
}

#[test]
fn test_copy_is_independent() {
    let a = MutableArray::from_vec(vec![1, 2, 3]);
    let mut b = a.copy();
    b.set(0, 100);
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
    assert_eq!(b.to_vec(), vec![100, 2, 3]);
}

#[test]
fn test_slice_clamps_end_only() {
    let a = MutableArray::from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(a.slice(1, 3).to_vec(), vec![2, 3]);
    assert_eq!(a.slice(1, 1000).to_vec(), vec![2, 3, 4, 5]);
    assert_eq!(a.slice(3, 1).to_vec(), Vec::<i32>::new());
    assert_eq!(a.slice(5, 5).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_append() {
    let a = MutableArray::from_vec(vec![1, 2]);
    let b = MutableArray::from_vec(vec![3, 4, 5]);
    assert_eq!(a.append(&b).to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_reverse() {
    let a = MutableArray::from_vec(vec![1, 2, 3]);
    assert_eq!(a.reverse().to_vec(), vec![3, 2, 1]);
}

#[test]
fn test_map_filter_reduce() {
    let a = MutableArray::from_vec(vec![1, 2, 3, 4]);
    assert_eq!(a.map(|v| v * 10).to_vec(), vec![10, 20, 30, 40]);
    assert_eq!(a.filter(|v| v % 2 == 0).to_vec(), vec![2, 4]);
    assert_eq!(a.reduce(0, |acc, v| acc + v), 10);
    assert_eq!(a.reduce_right(String::new(), |acc, v| format!("{}{}", acc, v)), "4321");
}

#[test]
fn test_every_some_count_find() {
    let a = MutableArray::from_vec(vec![2, 4, 6, 7]);
    assert!(!a.every(|v| v % 2 == 0));
    assert!(a.some(|v| v % 2 != 0));
    assert_eq!(a.count(|v| v % 2 == 0), 3);
    assert_eq!(a.find(|v| *v > 5), Some(&6));
    assert_eq!(a.find_index(|v| *v > 5), Some(2));
    assert!(a.contains(&7));
    assert!(!a.contains(&100));
}

#[test]
fn test_flat_map_zip_unique() {
    let a = MutableArray::from_vec(vec![1, 2, 3]);
    let flat = a.flat_map(|v| MutableArray::from_vec(vec![*v, *v]));
    assert_eq!(flat.to_vec(), vec![1, 1, 2, 2, 3, 3]);

    let b = MutableArray::from_vec(vec!["a", "b"]);
    let c = MutableArray::from_vec(vec![1, 2, 3]);
    assert_eq!(b.zip(&c).to_vec(), vec![("a", 1), ("b", 2)]);
    assert_eq!(
        b.zip_with(&c, |s, n| format!("{}{}", s, n)).to_vec(),
        vec!["a1".to_string(), "b2".to_string()]
    );

    let dups = MutableArray::from_vec(vec![1, 2, 2, 3, 1]);
    assert_eq!(dups.unique().to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_fill_and_fill_range() {
    let mut a = MutableArray::from_vec(vec![0; 5]);
    a.fill(9);
    assert_eq!(a.to_vec(), vec![9, 9, 9, 9, 9]);

    let mut b = MutableArray::from_vec(vec![1, 2, 3, 4, 5]);
    b.fill_range(0, 1, 3).unwrap();
    assert_eq!(b.to_vec(), vec![1, 0, 0, 4, 5]);

    let mut c = MutableArray::from_vec(vec![1, 2, 3, 4, 5]);
    c.fill_range(0, -2, -1).unwrap();
    assert_eq!(c.to_vec(), vec![1, 2, 3, 0, 5]);

    let mut d = MutableArray::from_vec(vec![1, 2, 3]);
    assert!(d.fill_range(0, 4, 4).is_err());
    assert!(d.fill_range(0, 2, 1).is_err());
    // stop clamps to length.
    d.fill_range(9, 1, 100).unwrap();
    assert_eq!(d.to_vec(), vec![1, 9, 9]);
}

#[test]
fn test_sort_matches_std_sort() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.gen_range(0..64);
        let v: Vec<i32> = (0..n).map(|_| rng.gen_range(-100..100)).collect();
        let mut a = MutableArray::from_vec(v.clone());
        a.sort(|x, y| x.cmp(y));
        let mut expect = v;
        expect.sort();
        assert_eq!(a.to_vec(), expect);
    }
}

#[test]
fn test_sort_comparator_can_reverse_order() {
    let mut a = MutableArray::from_vec(vec![3, 1, 4, 1, 5]);
    a.sort(|x, y| y.cmp(x));
    assert_eq!(a.to_vec(), vec![5, 4, 3, 1, 1]);
}

#[test]
fn test_rotate_left_and_right() {
    let mut a = MutableArray::from_vec(vec![1, 2, 3, 4, 5]);
    a.rotate(2);
    assert_eq!(a.to_vec(), vec![3, 4, 5, 1, 2]);

    let mut b = MutableArray::from_vec(vec![1, 2, 3, 4, 5]);
    b.rotate(-1);
    assert_eq!(b.to_vec(), vec![5, 1, 2, 3, 4]);

    let mut c = MutableArray::from_vec(vec![1, 2, 3, 4, 5]);
    c.rotate(0);
    assert_eq!(c.to_vec(), vec![1, 2, 3, 4, 5]);

    let mut empty: MutableArray<i32> = MutableArray::empty();
    empty.rotate(3);
    assert_eq!(empty.to_vec(), Vec::<i32>::new());
}

#[test]
fn test_rotate_matches_reference_for_random_shifts() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.gen_range(1..40);
        let v: Vec<i32> = (0..n).collect();
        let shift: isize = rng.gen_range(-80..80);

        let mut a = MutableArray::from_vec(v.clone());
        a.rotate(shift);

        let len = v.len() as isize;
        let k = (((shift % len) + len) % len) as usize;
        let mut expect = v.clone();
        expect.rotate_left(k);

        assert_eq!(a.to_vec(), expect, "n={} shift={}", n, shift);
    }
}

#[test]
fn test_to_vec_from_vec_roundtrip() {
    let v = vec![5, 4, 3, 2, 1];
    let a = MutableArray::from_vec(v.clone());
    assert_eq!(a.to_vec(), v);
}

#[test]
fn ordering_contract_sanity() {
    // Documents the comparator contract used by `sort`: negative => Less.
    let cmp = |a: &i32, b: &i32| a.cmp(b);
    assert_eq!(cmp(&1, &2), Ordering::Less);
    assert_eq!(cmp(&2, &2), Ordering::Equal);
    assert_eq!(cmp(&3, &2), Ordering::Greater);
}
