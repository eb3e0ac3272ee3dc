use super::*;

#[test]
fn test_for_each_visits_ascending_order() {
    let a = PersistentArray::from_fn(100, |i| i as i32).unwrap();
    let mut seen = Vec::new();
    a.for_each(|v| seen.push(*v));
    assert_eq!(seen, (0..100).collect::<Vec<i32>>());
}

#[test]
fn test_map_preserves_length() {
    let a = PersistentArray::from_fn(50, |i| i as i32).unwrap();
    let b = a.map(|v| v * 2);
    assert_eq!(b.len(), a.len());
    assert_eq!(b.to_vec(), (0..50).map(|i| i * 2).collect::<Vec<i32>>());
}

#[test]
fn test_reduce_matches_vec_fold() {
    let a = PersistentArray::from_fn(40, |i| i as i64).unwrap();
    let sum = a.reduce(0i64, |acc, v| acc + v);
    let expect: i64 = (0..40).sum();
    assert_eq!(sum, expect);
}

#[test]
fn test_reduce_right_descends() {
    let a = PersistentArray::from_vec(vec![1, 2, 3]);
    let s = a.reduce_right(String::new(), |v, acc| format!("{}{}", acc, v));
    assert_eq!(s, "321");
}

#[test]
fn test_filter_every_some_count() {
    let a = PersistentArray::from_fn(20, |i| i as i32).unwrap();
    let evens = a.filter(|v| v % 2 == 0);
    assert_eq!(evens.to_vec(), (0..20).step_by(2).collect::<Vec<i32>>());
    assert!(!a.every(|v| *v % 2 == 0));
    assert!(a.some(|v| *v > 15));
    assert_eq!(a.count(|v| *v % 2 == 0), 10);
}

#[test]
fn test_find_and_find_index() {
    let a = PersistentArray::from_fn(20, |i| i as i32 * 3).unwrap();
    assert_eq!(a.find(|v| *v > 10), Some(12));
    assert_eq!(a.find_index(|v| *v > 10), Some(4));
    assert_eq!(a.find(|v| *v > 1000), None);
    assert_eq!(a.find_index(|v| *v > 1000), None);
}

#[test]
fn test_contains() {
    let a = PersistentArray::from_vec(vec![1, 2, 3]);
    assert!(a.contains(&2));
    assert!(!a.contains(&99));
}

#[test]
fn test_reverse_involution() {
    let a = PersistentArray::from_fn(77, |i| i as i32).unwrap();
    assert_eq!(a.reverse().reverse().to_vec(), a.to_vec());
    assert_eq!(
        a.reverse().to_vec(),
        (0..77).rev().collect::<Vec<i32>>()
    );
}

#[test]
fn test_zip_with_shorter_wins() {
    let a = PersistentArray::from_vec(vec![1, 2, 3]);
    let b = PersistentArray::from_vec(vec![4, 5]);
    let z = a.zip_with(&b, |x, y| x * y);
    assert_eq!(z.to_vec(), vec![4, 10]);
}

#[test]
fn test_zip_and_unzip() {
    let a = PersistentArray::from_vec(vec!["a", "b", "c"]);
    let b = PersistentArray::from_vec(vec![1, 2, 3]);
    let z = a.zip(&b);
    assert_eq!(z.to_vec(), vec![("a", 1), ("b", 2), ("c", 3)]);

    let (xs, ys) = z.unzip();
    assert_eq!(xs.to_vec(), a.to_vec());
    assert_eq!(ys.to_vec(), b.to_vec());
}

#[test]
fn test_unique_keeps_first_occurrence() {
    let a = PersistentArray::from_vec(vec![1, 2, 2, 3, 1, 4]);
    assert_eq!(a.unique().to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_join_and_product() {
    let a = PersistentArray::from_vec(vec![1, 2, 3, 4]);
    assert_eq!(a.join(","), "1,2,3,4");
    assert_eq!(a.product(), 24);
}

#[test]
fn test_rotate_literal_scenarios() {
    let a = PersistentArray::from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(a.rotate(2).to_vec(), vec![3, 4, 5, 1, 2]);
    assert_eq!(a.rotate(-1).to_vec(), vec![5, 1, 2, 3, 4]);
}

#[test]
fn test_rotate_laws() {
    let a = PersistentArray::from_fn(30, |i| i as i32).unwrap();
    assert_eq!(a.rotate(a.len() as isize).to_vec(), a.to_vec());
    assert_eq!(
        a.rotate(7).to_vec(),
        a.rotate(7 + a.len() as isize).to_vec()
    );
    let mut rotated = a.rotate(11).to_vec();
    let mut original = a.to_vec();
    rotated.sort();
    original.sort();
    assert_eq!(rotated, original);
}

#[test]
fn test_rotate_empty_is_noop() {
    let a: PersistentArray<i32> = PersistentArray::empty();
    assert_eq!(a.rotate(5).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_sort_matches_vec_sort() {
    let a = PersistentArray::from_vec(vec![5, 3, 1, 4, 1, 5, 9, 2, 6]);
    let sorted = a.sort(|x, y| x.cmp(y));
    let mut expect = a.to_vec();
    expect.sort();
    assert_eq!(sorted.to_vec(), expect);
}

#[test]
fn test_flat_map() {
    let a = PersistentArray::from_vec(vec![1, 2, 3]);
    let doubled = a.flat_map(|v| PersistentArray::from_vec(vec![*v, *v]));
    assert_eq!(doubled.to_vec(), vec![1, 1, 2, 2, 3, 3]);
}

#[test]
fn test_cycle() {
    let a = PersistentArray::from_vec(vec![1, 2]);
    assert_eq!(a.cycle(3).to_vec(), vec![1, 2, 1, 2, 1, 2]);
    assert_eq!(a.cycle(0).to_vec(), Vec::<i32>::new());
}
