//! Behavior shared by every ring-backed container, checked through the public
//! API against `std` models.

use std::collections::VecDeque;

use planck_stdx::array::Array;
use planck_stdx::deque::Deque;
use planck_stdx::map::Map;
use planck_stdx::ring::RingBuffer;
use planck_stdx::set::Set;
use planck_stdx::vector::Vector;
use planck_stdx::{CapacityError, Cursor};

/// Small deterministic generator so runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (self.0 >> 33) as u32
    }
}

#[test]
fn len_never_exceeds_capacity() {
    let mut v = Vector::<u32, 7>::new();
    let mut d = Deque::<u32, 7>::new();
    let mut rng = Lcg(1);
    for _ in 0..1_000 {
        let x = rng.next();
        v.push_back(x);
        if x % 2 == 0 {
            d.push_front(x);
        } else {
            d.push_back(x);
        }
        assert!(v.len() <= 7);
        assert!(d.len() <= 7);
        assert_eq!(v.iter().count(), v.len());
        assert_eq!(d.iter().rev().count(), d.len());
    }
    assert!(v.is_full());
}

#[test]
fn push_back_is_fifo_eviction() {
    let mut d = Deque::<u32, 5>::new();
    for v in 0..13 {
        d.push_back(v);
    }
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), [8, 9, 10, 11, 12]);
}

#[test]
fn push_front_evicts_from_back() {
    let mut d = Deque::<u32, 3>::new();
    for v in 0..5 {
        d.push_front(v);
    }
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), [4, 3, 2]);
}

#[test]
fn erase_middle_of_five() {
    let mut v: Vector<i32, 5> = [1, 2, 3, 4, 5].into();
    let next = v.erase(v.cursor_at(2));
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5]);
    assert_eq!(v.len(), 4);
    assert_eq!(v[next], 4);
    assert_eq!(v.at(next), Some(&4));
}

#[test]
fn deque_matches_vecdeque_under_random_workload() {
    const N: usize = 6;
    let mut ours = Deque::<u32, N>::new();
    let mut model: VecDeque<u32> = VecDeque::new();
    let mut rng = Lcg(42);

    for _ in 0..5_000 {
        let op = rng.next() % 9;
        let x = rng.next() % 100;
        match op {
            0 | 1 => {
                ours.push_back(x);
                model.push_back(x);
                if model.len() > N {
                    model.pop_front();
                }
            }
            2 | 3 => {
                ours.push_front(x);
                model.push_front(x);
                if model.len() > N {
                    model.pop_back();
                }
            }
            4 => assert_eq!(ours.pop_front(), model.pop_front()),
            5 => assert_eq!(ours.pop_back(), model.pop_back()),
            6 if !model.is_empty() => {
                let i = x as usize % model.len();
                assert_eq!(ours.remove(i), model.remove(i));
            }
            7 => {
                let i = x as usize % (model.len() + 1);
                ours.insert_at(i, x);
                model.insert(i, x);
                if model.len() > N {
                    if i == model.len() - 1 {
                        model.pop_front();
                    } else {
                        model.pop_back();
                    }
                }
            }
            _ => {
                ours.retain(|v| v % 5 != 0);
                model.retain(|v| v % 5 != 0);
            }
        }
        assert!(ours.iter().eq(model.iter()));
        assert_eq!(ours.front(), model.front());
        assert_eq!(ours.back(), model.back());
    }
}

#[test]
fn cursors_walk_and_compare() {
    let mut d = Deque::<u32, 4>::new();
    for v in 0..10 {
        d.push_back(v);
    }
    d.push_front(99);

    let begin = d.begin();
    let end = d.end();
    assert!(begin < end);
    assert_eq!(end - begin, 4);

    let mut c = end;
    let mut backwards = Vec::new();
    while c != begin {
        c.dec();
        backwards.push(d[c]);
    }
    assert_eq!(backwards, [8, 7, 6, 99]);

    let mut c = begin;
    assert_eq!(d[c.post_inc()], 99);
    assert_eq!(d[c], 6);
    assert_eq!(d[begin + 3], 8);
}

#[test]
fn cursors_from_different_containers_never_compare_equal() {
    let a: Vector<u8, 4> = [1, 2].into();
    let b: Vector<u8, 4> = [1, 2].into();
    assert_ne!(a.begin(), b.begin());
    assert_eq!(a.begin().partial_cmp(&b.begin()), None);
    assert!(!b.is_valid(&a.begin()));
    assert_eq!(Cursor::<u8>::default(), Cursor::sentinel());
}

#[test]
fn equality_ignores_internal_offsets() {
    let straight: Deque<u32, 4> = [1, 2, 3].into();
    let mut rotated = Deque::<u32, 4>::new();
    rotated.push_back(0);
    for v in 1..=3 {
        rotated.push_back(v);
    }
    let _ = rotated.pop_front();
    let mut wrapped = Deque::<u32, 4>::new();
    wrapped.push_front(3);
    wrapped.push_front(2);
    wrapped.push_front(1);
    assert_eq!(straight, rotated);
    assert_eq!(straight, wrapped);
}

#[test]
fn clones_are_independent() {
    let mut original: Deque<String, 3> = ["a", "b"].map(String::from).into();
    let copy = original.clone();
    original.push_front("z".into());
    original[1].push('!');
    assert_eq!(copy.iter().map(String::as_str).collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(original.iter().map(String::as_str).collect::<Vec<_>>(), ["z", "a!", "b"]);
}

#[test]
fn steady_push_pop_wraps_many_times() {
    // Each step moves both cursors forward by one.
    let mut ring = RingBuffer::<u16, 3>::new();
    ring.push_back(0);
    ring.push_back(1);
    for v in 2..200_000u32 {
        ring.push_back((v % 65_536) as u16);
        let _ = ring.pop_front();
    }
    let tail = 199_999u32;
    assert_eq!(
        ring.iter().copied().collect::<Vec<_>>(),
        [((tail - 1) % 65_536) as u16, (tail % 65_536) as u16]
    );
}

#[test]
fn array_length_is_fixed() {
    let mut a = Array::<u8, 5>::new();
    a.fill(3);
    assert_eq!(a.len(), 5);
    assert_eq!(a.iter().map(|&x| u32::from(x)).sum::<u32>(), 15);
    let b: Array<u8, 5> = [3; 5].into();
    assert_eq!(a, b);
}

#[test]
fn try_api_reports_full_containers() {
    let mut v: Vector<u8, 1> = [1].into();
    let err: CapacityError<u8> = v.try_push_back(2).unwrap_err();
    assert_eq!(err.to_string(), "capacity overflow");
    assert_eq!(err.into_inner(), 2);

    let mut set: Set<u8, 1> = [1].into_iter().collect();
    assert!(set.try_insert(2).is_err());
}

#[test]
fn map_keeps_insertion_order_and_evicts_oldest() {
    let mut map = Map::<&str, u32, 3>::new();
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);
    map.insert("d", 4);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["b", "c", "d"]);
    assert_eq!(map.get("a"), None);
}

#[test]
fn owned_iteration() {
    let d: Deque<String, 4> = ["x", "y"].map(String::from).into();
    let collected: Vec<String> = d.into_iter().rev().collect();
    assert_eq!(collected, ["y", "x"]);
}
