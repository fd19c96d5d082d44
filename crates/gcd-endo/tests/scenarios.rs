//! End-to-end enumeration and classification for small domains.

use gcd_endo::{
    classify_all, enumerate_valid, enumerate_with_stats, report, ClassificationRecord, Domain,
    ImageSet, SelfMap,
};

fn run(n: usize) -> Vec<ClassificationRecord> {
    let m = Domain::new(n);
    classify_all(m, &enumerate_valid(m))
}

fn set(values: &[usize]) -> ImageSet {
    values.iter().copied().collect()
}

// =============================================================================
// Fixed scenarios
// =============================================================================

#[test]
fn n0_single_map() {
    let records = run(0);
    assert_eq!(records.len(), 1);

    let r = &records[0];
    assert_eq!(r.function.values(), &[0]);
    assert!(r.is_idempotent);
    assert_eq!(r.direct_image, set(&[0]));
    assert_eq!(r.extended_image, set(&[0]));
    assert!(r.is_i_regular);
}

#[test]
fn n1_zero_and_identity() {
    let records = run(1);
    assert_eq!(records.len(), 2);

    let (a, b) = (&records[0], &records[1]);
    assert_eq!(a.function.values(), &[0, 0]);
    assert!(a.is_idempotent);
    assert_eq!(a.direct_image, set(&[0]));
    assert_eq!(a.extended_image, set(&[0]));
    assert!(a.is_i_regular);

    assert_eq!(b.function.values(), &[0, 1]);
    assert!(b.is_idempotent);
    assert_eq!(b.direct_image, set(&[0, 1]));
    assert_eq!(b.extended_image, set(&[0, 1]));
    assert!(b.is_i_regular);
}

#[test]
fn n2_full_table() {
    let got: Vec<(Vec<usize>, bool, ImageSet, ImageSet, bool)> = run(2)
        .into_iter()
        .map(|r| {
            (
                r.function.values().to_vec(),
                r.is_idempotent,
                r.direct_image,
                r.extended_image,
                r.is_i_regular,
            )
        })
        .collect();

    let expected = vec![
        (vec![0, 0, 0], true, set(&[0]), set(&[0]), true),
        (vec![0, 1, 0], true, set(&[0, 1]), set(&[0, 1, 2]), false),
        (vec![0, 1, 1], true, set(&[0, 1]), set(&[0, 1, 2]), false),
        (vec![0, 1, 2], true, set(&[0, 1, 2]), set(&[0, 1, 2]), true),
        (vec![0, 2, 0], false, set(&[0, 2]), set(&[0, 2]), true),
        (vec![0, 2, 2], true, set(&[0, 2]), set(&[0, 2]), true),
    ];
    assert_eq!(got, expected);
}

// =============================================================================
// Invariants across n
// =============================================================================

#[test]
fn identity_and_zero_always_present() {
    for n in 0..=5 {
        let m = Domain::new(n);
        let records = run(n);
        let all: ImageSet = m.elements().collect();

        let identity = records
            .iter()
            .find(|r| r.function == SelfMap::identity(m))
            .unwrap_or_else(|| panic!("identity missing for n={n}"));
        assert!(identity.is_idempotent);
        assert!(identity.is_i_regular);
        assert_eq!(identity.direct_image, all);
        assert_eq!(identity.extended_image, all);

        let zero = records
            .iter()
            .find(|r| r.function == SelfMap::zero(m))
            .unwrap_or_else(|| panic!("zero map missing for n={n}"));
        assert!(zero.is_idempotent);
    }
}

#[test]
fn image_chain_and_regularity_definition() {
    for n in 0..=5 {
        let m = Domain::new(n);
        let all: ImageSet = m.elements().collect();
        for r in run(n) {
            assert!(r.direct_image.is_subset(&r.extended_image), "{}", r.function);
            assert!(r.extended_image.is_subset(&all), "{}", r.function);
            assert_eq!(r.is_i_regular, r.direct_image == r.extended_image);
        }
    }
}

#[test]
fn every_output_fixes_zero() {
    for n in 0..=5 {
        assert!(enumerate_valid(Domain::new(n)).iter().all(|f| f[0] == 0));
    }
}

#[test]
fn enumeration_is_deterministic() {
    for n in 0..=4 {
        let m = Domain::new(n);
        assert_eq!(enumerate_valid(m), enumerate_valid(m));
        assert_eq!(
            report::render_table(&run(n)),
            report::render_table(&run(n))
        );
    }
}

#[test]
fn output_is_sorted_in_generation_order() {
    let maps = enumerate_valid(Domain::new(4));
    assert!(maps.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn stats_account_for_every_candidate() {
    let m = Domain::new(4);
    let (maps, stats) = enumerate_with_stats(m);
    assert_eq!(stats.examined, 3125);
    assert_eq!(stats.rejected_nonzero, 2500);
    assert_eq!(stats.accepted as usize, maps.len());
    assert_eq!(
        stats.rejected_endomorphism,
        stats.examined - stats.rejected_nonzero - stats.accepted
    );
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn table_n0() {
    let table = report::render_table(&run(0));
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Function"));
    assert_eq!(lines[1].len(), 65);
    assert_eq!(
        lines[2],
        "(0,)            | Yes        | {0}           | {0}              | Yes"
    );
}

#[test]
fn table_n2_rows() {
    let table = report::render_table(&run(2));
    let rows: Vec<&str> = table.lines().skip(2).collect();
    assert_eq!(
        rows,
        vec![
            "(0, 0, 0)       | Yes        | {0}           | {0}              | Yes",
            "(0, 1, 0)       | Yes        | {0, 1}        | {0, 1, 2}        | No",
            "(0, 1, 1)       | Yes        | {0, 1}        | {0, 1, 2}        | No",
            "(0, 1, 2)       | Yes        | {0, 1, 2}     | {0, 1, 2}        | Yes",
            "(0, 2, 0)       | No         | {0, 2}        | {0, 2}           | Yes",
            "(0, 2, 2)       | Yes        | {0, 2}        | {0, 2}           | Yes",
        ]
    );
}
