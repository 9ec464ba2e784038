//! Algebraic properties of the chain operators over a handful of inputs

use std::collections::BTreeSet;

use rlinq::from;

fn samples() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![7],
        vec![3, 3, 3],
        vec![5, -2, 9, 0, 5, 1, -2, 8],
        (0..50).map(|i| (i * 37) % 11 - 5).collect(),
    ]
}

#[test]
fn test_where_matches_std_filter() {
    for s in samples() {
        let got = from(&s).where_(|x| *x > 0).to_vec();
        let want: Vec<i32> = s.iter().copied().filter(|x| *x > 0).collect();
        assert_eq!(got, want);
        assert_eq!(from(&s).where_(|_| true).to_vec(), s);
    }
}

#[test]
fn test_select_is_elementwise() {
    for s in samples() {
        let got = from(&s).select(|x| x * 2 + 1).to_vec();
        let want: Vec<i32> = s.iter().map(|x| x * 2 + 1).collect();
        assert_eq!(got, want);
    }
}

#[test]
fn test_skip_and_take_split_the_sequence() {
    for s in samples() {
        for k in 0..=s.len() + 2 {
            let head = from(&s).take(k).to_vec();
            let tail = from(&s).skip(k).to_vec();
            assert_eq!(head.len(), k.min(s.len()));
            assert_eq!(tail.len(), s.len() - k.min(s.len()));
            let rebuilt: Vec<i32> = head.into_iter().chain(tail).collect();
            assert_eq!(rebuilt, s);
        }
    }
}

#[test]
fn test_skip_while_and_take_while_split_the_sequence() {
    for s in samples() {
        let head = from(&s).take_while(|x| *x != 0).to_vec();
        let tail = from(&s).skip_while(|x| *x != 0).to_vec();
        let rebuilt: Vec<i32> = head.into_iter().chain(tail).collect();
        assert_eq!(rebuilt, s);
    }
}

#[test]
fn test_distinct_is_the_sorted_set_and_idempotent() {
    for s in samples().into_iter().filter(|s| !s.is_empty()) {
        let once = from(&s).distinct().expect("distinct failed");
        let want: Vec<i32> = s.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        assert_eq!(once.to_vec(), want);
        let twice = once.distinct().expect("distinct failed");
        assert_eq!(twice.to_vec(), want);
    }
}

#[test]
fn test_concat_count_adds_up() {
    let all = samples();
    for a in &all {
        for b in &all {
            assert_eq!(from(a).concat(b).count(), a.len() + b.len());
        }
    }
}

#[test]
fn test_zip_pairs_positionally_or_fails() {
    let all = samples();
    for a in &all {
        for b in &all {
            match from(a).zip(b) {
                Ok(q) => {
                    assert_eq!(a.len(), b.len());
                    let want: Vec<(i32, i32)> = a.iter().copied().zip(b.iter().copied()).collect();
                    assert_eq!(q.to_vec(), want);
                }
                Err(e) => {
                    assert_ne!(a.len(), b.len());
                    assert_eq!(e.message(), "Sequences have different lengths");
                }
            }
        }
    }
}

#[test]
fn test_order_by_equals_stable_sort() {
    for s in samples() {
        let got = from(&s).order_by(|x| x.abs()).expect("order_by failed").to_vec();
        let mut want = s.clone();
        want.sort_by_key(|x| x.abs());
        assert_eq!(got, want);
    }
}
