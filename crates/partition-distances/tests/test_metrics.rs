use float_cmp::approx_eq;
use test_case::test_case;

use partition_distances::{
    metrics::{self, slices, Evaluation},
    Clustering, Item, MetricsError, Partition,
};

fn gold() -> Partition<&'static str> {
    Partition::new(vec![
        vec!["a", "b"],
        vec!["c", "d"],
        vec!["e", "f", "g", "h", "i", "j"],
    ])
}

/// Four results of increasing quality against the same gold standard.
fn four_slices() -> (Clustering<&'static str>, Clustering<&'static str>) {
    let result = Clustering::new(vec![
        Partition::from_items(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"].map(Item::token)),
        Partition::from_items(vec![
            Item::token("a"),
            Item::cluster(["b", "c"]),
            Item::cluster(["d", "e"]),
            Item::cluster(["f", "g"]),
            Item::cluster(["h", "i"]),
            Item::token("j"),
        ]),
        Partition::new(vec![
            vec!["a", "b"],
            vec!["c", "d", "e"],
            vec!["f", "g", "h", "i", "j"],
        ]),
        gold(),
    ]);
    let standard = Clustering::new(vec![gold(), gold(), gold(), gold()]);
    (result, standard)
}

#[test]
fn pairwise_f1_over_slices() {
    let (result, standard) = four_slices();
    let expected = [0.0, 4.0 / 21.0, 24.0 / 31.0, 1.0];

    let f1: Vec<f64> = slices::pairwise_f1(&result, &standard).unwrap();
    assert_eq!(f1.len(), expected.len());
    for (&actual, &expected) in f1.iter().zip(expected.iter()) {
        assert!(approx_eq!(f64, actual, expected, epsilon = 1e-12), "{actual} != {expected}");
    }

    let par_f1: Vec<f64> = slices::par_pairwise_f1(&result, &standard).unwrap();
    assert_eq!(f1, par_f1);
}

#[test]
fn pairwise_precision_and_recall() {
    let (result, standard) = four_slices();
    let expected_precision = [0.0, 0.5, 6.0 / 7.0, 1.0];
    let expected_recall = [0.0, 2.0 / 17.0, 12.0 / 17.0, 1.0];

    let precision: Vec<f64> = slices::pairwise_precision(&result, &standard).unwrap();
    let recall: Vec<f64> = slices::par_pairwise_recall(&result, &standard).unwrap();

    for (&actual, &expected) in precision.iter().zip(expected_precision.iter()) {
        assert!(approx_eq!(f64, actual, expected, epsilon = 1e-12), "{actual} != {expected}");
    }
    for (&actual, &expected) in recall.iter().zip(expected_recall.iter()) {
        assert!(approx_eq!(f64, actual, expected, epsilon = 1e-12), "{actual} != {expected}");
    }
}

#[test]
fn variation_of_information() {
    let result = Partition::new(vec![
        vec!["a", "b"],
        vec!["c", "d"],
        vec!["e", "f", "g"],
        vec!["h", "i", "j"],
    ]);

    let vi: f64 = metrics::variation_of_information(&result, &gold()).unwrap();
    assert!(approx_eq!(f64, vi, 0.415_888_308_335_967_2, epsilon = 1e-12));

    let vi: f64 = metrics::variation_of_information(&gold(), &gold()).unwrap();
    assert!(approx_eq!(f64, vi, 0.0));

    let result = Clustering::from(result);
    let standard = Clustering::from(gold());
    let vi: Vec<f32> = slices::variation_of_information(&result, &standard).unwrap();
    assert!(approx_eq!(f32, vi[0], 0.415_888_3, epsilon = 1e-6));
}

#[test]
fn basic_merge_distance_summed_over_slices() {
    let result = Clustering::new(vec![
        Partition::new(vec![
            vec!["a"],
            vec!["b"],
            vec!["c"],
            vec!["d"],
            vec!["e", "f", "g", "h", "i", "j"],
        ]),
        Partition::new(vec![
            vec!["a", "b"],
            vec!["c", "d"],
            vec!["e", "f", "g"],
            vec!["h", "i", "j"],
        ]),
    ]);
    let standard = Clustering::new(vec![gold(), gold()]);

    let distance: f64 = slices::basic_merge_distance(&result, &standard).unwrap();
    assert!(approx_eq!(f64, distance, 3.0));

    let distance: f64 = slices::par_basic_merge_distance(&result, &standard).unwrap();
    assert!(approx_eq!(f64, distance, 3.0));
}

#[test]
fn exact_slice() {
    let standard = Clustering::new(vec![
        Partition::new(vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f", "g"]]),
        Partition::new(vec![vec!["h", "i", "j"]]),
    ]);

    let f1: Vec<f64> = slices::pairwise_f1(&standard, &standard).unwrap();
    assert_eq!(f1, vec![1.0, 1.0]);
}

#[test]
fn slices_are_truncated() {
    let (result, standard) = four_slices();
    let standard = Clustering::new(standard.slices()[..2].to_vec());

    let f1: Vec<f64> = slices::pairwise_f1(&result, &standard).unwrap();
    assert_eq!(f1.len(), 2);
}

#[test_case(Partition::default(), Partition::default(); "both empty")]
#[test_case(Partition::new(vec![vec![1], vec![2]]), Partition::new(vec![vec![1], vec![2]]); "singletons")]
#[test_case(Partition::new(vec![vec![1], vec![2]]), Partition::default(); "empty standard")]
fn vanishing_denominators(result: Partition<i32>, standard: Partition<i32>) {
    let precision: f64 = metrics::pairwise_precision(&result, &standard).unwrap();
    let recall: f64 = metrics::pairwise_recall(&result, &standard).unwrap();
    let f1: f64 = metrics::pairwise_f1(&result, &standard).unwrap();
    let vi: f64 = metrics::variation_of_information(&result, &standard).unwrap();
    let bmd: f64 = metrics::basic_merge_distance(&result, &standard).unwrap();

    for score in [precision, recall, f1, vi, bmd] {
        assert!(approx_eq!(f64, score, 0.0));
    }
}

#[test]
fn evaluation() {
    let (result, standard) = four_slices();

    let evaluations: Vec<Evaluation<f64>> = slices::evaluate(&result, &standard).unwrap();
    let par_evaluations: Vec<Evaluation<f64>> = slices::par_evaluate(&result, &standard).unwrap();
    assert_eq!(evaluations, par_evaluations);

    let third = evaluations[2];
    assert!(approx_eq!(f64, third.basic_merge_distance, 2.0));
    assert!(approx_eq!(f64, third.pairwise_precision, 6.0 / 7.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, third.pairwise_f1, 24.0 / 31.0, epsilon = 1e-12));

    let last = evaluations[3];
    assert!(approx_eq!(f64, last.basic_merge_distance, 0.0));
    assert!(approx_eq!(f64, last.pairwise_f1, 1.0));
    assert_eq!(last.summary_line(), "BMD=0.0 P=1.000 R=1.000 F1=1.000 VI=0.0000");
    assert!(last.to_string().lines().any(|l| l.contains("pairwise F1") && l.ends_with("1.0000")));
}

#[test]
fn failing_slice() {
    let (result, mut standard) = four_slices();
    let mut partitions = standard.slices().to_vec();
    partitions[2] = Partition::new(vec![vec!["a", "b", "z"]]);
    standard = Clustering::new(partitions);

    for outcome in [
        slices::pairwise_f1::<_, f64>(&result, &standard),
        slices::par_pairwise_f1::<_, f64>(&result, &standard),
    ] {
        match outcome {
            Err(MetricsError::Slice { index, source }) => {
                assert_eq!(index, 2);
                assert!(matches!(*source, MetricsError::MissingToken { ref token } if token == "\"z\""));
            }
            other => panic!("expected a slice error, got {other:?}"),
        }
    }
}
