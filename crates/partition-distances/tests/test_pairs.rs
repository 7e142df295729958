use float_cmp::approx_eq;
use test_case::test_case;

use partition_distances::pairs;

#[test_case(&[("a", "b")], &[("a", "b")], 1.0; "same pair")]
#[test_case(&[("b", "a")], &[("a", "b")], 1.0; "reversed pair")]
#[test_case(&[("b", "a")], &[("a", "b"), ("c", "d")], 1.0; "subset")]
#[test_case(&[("a", "c")], &[("a", "b"), ("c", "d")], 0.0; "no match")]
#[test_case(&[("b", "a"), ("d", "e")], &[("a", "b"), ("c", "d")], 0.5; "half")]
#[test_case(&[], &[("a", "b"), ("c", "d")], 0.0; "empty result")]
fn precision(result: &[(&str, &str)], standard: &[(&str, &str)], expected: f64) {
    let precision: f64 = pairs::precision(result, standard);
    assert!(approx_eq!(f64, precision, expected));
}

#[test_case(&[("a", "b")], &[("a", "b")], 1.0; "same pair")]
#[test_case(&[("b", "a"), ("c", "d")], &[("a", "b")], 1.0; "superset")]
#[test_case(&[("a", "b")], &[("a", "b"), ("c", "d")], 0.5; "half")]
#[test_case(&[("d", "e")], &[("a", "b"), ("c", "d")], 0.0; "no match")]
#[test_case(&[("a", "b")], &[], 0.0; "empty standard")]
fn recall(result: &[(&str, &str)], standard: &[(&str, &str)], expected: f64) {
    let recall: f64 = pairs::recall(result, standard);
    assert!(approx_eq!(f64, recall, expected));
}

#[test_case(&[("a", "b")], &[("a", "b")], 1.0; "same pair")]
#[test_case(&[("b", "a")], &[("a", "b")], 1.0; "reversed pair")]
#[test_case(&[("a", "b")], &[("a", "b"), ("c", "d")], 2.0 / 3.0; "half recall")]
#[test_case(&[("d", "e")], &[("a", "b"), ("c", "d")], 0.0; "no match")]
#[test_case(&[], &[("a", "b"), ("c", "d")], 0.0; "empty result")]
fn f1(result: &[(&str, &str)], standard: &[(&str, &str)], expected: f64) {
    let f1: f64 = pairs::f1(result, standard);
    assert!(approx_eq!(f64, f1, expected, epsilon = 1e-12));
}

#[test]
fn repeated_pairs_count_once() {
    let result = [(1, 2), (2, 1), (1, 2), (3, 4)];
    let standard = [(1, 2), (5, 6)];

    let precision: f32 = pairs::precision(&result, &standard);
    let recall: f32 = pairs::recall(&result, &standard);
    assert!(approx_eq!(f32, precision, 0.5));
    assert!(approx_eq!(f32, recall, 0.5));
}
