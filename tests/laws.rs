//! Property-based tests for the algebraic laws of both effect shapes.

use confluence::prelude::*;
use confluence::{reader, task};
use proptest::prelude::*;

fn outcome() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok),
        "[a-z]{0,4}".prop_map(Err),
    ]
}

fn run_task<T: Task>(t: T) -> Result<T::Output, T::Error> {
    tokio_test::block_on(t.run())
}

fn expected_zip(a: &Result<i32, String>, b: &Result<i32, String>) -> Result<(i32, i32), String> {
    match (a, b) {
        (Err(e), _) | (Ok(_), Err(e)) => Err(e.clone()),
        (Ok(x), Ok(y)) => Ok((*x, *y)),
    }
}

fn expected_zip_validated(
    a: &Result<i32, String>,
    b: &Result<i32, String>,
) -> Result<(i32, i32), String> {
    match (a, b) {
        (Err(e1), Err(e2)) => Err(format!("{}{}", e1, e2)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e.clone()),
        (Ok(x), Ok(y)) => Ok((*x, *y)),
    }
}

proptest! {
    // ==================== Functor laws ====================

    #[test]
    fn prop_reader_functor_identity(r in outcome()) {
        let mapped = reader::from_result::<_, _, ()>(r.clone()).map(|x| x);
        prop_assert_eq!(mapped.run(&()), r);
    }

    #[test]
    fn prop_reader_functor_composition(r in outcome(), k in any::<i32>(), m in any::<i32>()) {
        let f = move |x: i32| x.wrapping_add(k);
        let g = move |x: i32| x.wrapping_mul(m);

        let chained = reader::from_result::<_, _, ()>(r.clone()).map(f).map(g);
        let composed = reader::from_result::<_, _, ()>(r).map(move |x| g(f(x)));
        prop_assert_eq!(chained.run(&()), composed.run(&()));
    }

    #[test]
    fn prop_task_functor_identity(r in outcome()) {
        prop_assert_eq!(run_task(task::from_result(r.clone()).map(|x| x)), r);
    }

    #[test]
    fn prop_task_functor_composition(r in outcome(), k in any::<i32>(), m in any::<i32>()) {
        let f = move |x: i32| x.wrapping_add(k);
        let g = move |x: i32| x.wrapping_mul(m);

        let chained = run_task(task::from_result(r.clone()).map(f).map(g));
        let composed = run_task(task::from_result(r).map(move |x| g(f(x))));
        prop_assert_eq!(chained, composed);
    }

    #[test]
    fn prop_result_bimap_matches_map_then_map_left(r in outcome()) {
        let both = r.clone().bimap(|e| e.len(), |n| n.wrapping_sub(1));
        let separate = r.map(|n| n.wrapping_sub(1)).map_left(|e| e.len());
        prop_assert_eq!(both, separate);
    }

    // ==================== Combining rule ====================

    #[test]
    fn prop_semigroup_associative(
        a in "[a-z]{0,4}",
        b in "[a-z]{0,4}",
        c in "[a-z]{0,4}",
        xs in prop::collection::vec(any::<i8>(), 0..4),
        ys in prop::collection::vec(any::<i8>(), 0..4),
        zs in prop::collection::vec(any::<i8>(), 0..4),
    ) {
        let left = (a.clone(), xs.clone())
            .combine((b.clone(), ys.clone()))
            .combine((c.clone(), zs.clone()));
        let right = (a, xs).combine((b, ys).combine((c, zs)));
        prop_assert_eq!(left, right);
    }

    // ==================== Applicative strategies ====================

    #[test]
    fn prop_zip_is_fail_fast_left_first(a in outcome(), b in outcome()) {
        let expected = expected_zip(&a, &b);

        let sync = reader::from_result::<_, _, ()>(a.clone())
            .zip(reader::from_result(b.clone()))
            .run(&());
        prop_assert_eq!(&sync, &expected);

        let par = run_task(task::from_result(a.clone()).zip(Parallel, task::from_result(b.clone())));
        let seq = run_task(task::from_result(a).zip(Sequential, task::from_result(b)));
        prop_assert_eq!(&par, &expected);
        prop_assert_eq!(&seq, &expected);
    }

    #[test]
    fn prop_zip_validated_accumulates(a in outcome(), b in outcome()) {
        let expected = expected_zip_validated(&a, &b);

        let sync = reader::from_result::<_, _, ()>(a.clone())
            .zip_validated(reader::from_result(b.clone()))
            .run(&());
        prop_assert_eq!(&sync, &expected);

        let par = run_task(
            task::from_result(a.clone()).zip_validated(Parallel, task::from_result(b.clone())),
        );
        let seq = run_task(task::from_result(a).zip_validated(Sequential, task::from_result(b)));
        prop_assert_eq!(&par, &expected);
        prop_assert_eq!(&seq, &expected);
    }

    // ==================== Execution modes ====================

    #[test]
    fn prop_sequence_modes_agree(
        outcomes in prop::collection::vec(outcome(), 0..12),
        limit in 0usize..5,
    ) {
        let expected: Result<Vec<i32>, String> = outcomes.iter().cloned().collect();
        let tasks = || outcomes.iter().cloned().map(task::from_result).collect::<Vec<_>>();

        prop_assert_eq!(&run_task(task::sequence(Parallel, tasks())), &expected);
        prop_assert_eq!(&run_task(task::sequence(Sequential, tasks())), &expected);
        prop_assert_eq!(&run_task(task::sequence(Bounded::new(limit), tasks())), &expected);

        let readers = outcomes.iter().cloned().map(reader::from_result::<_, _, ()>);
        prop_assert_eq!(&reader::sequence(readers).run(&()), &expected);
    }

    #[test]
    fn prop_sequence_validated_modes_agree(
        outcomes in prop::collection::vec(outcome(), 0..12),
        limit in 0usize..5,
    ) {
        let errors: Vec<String> = outcomes.iter().filter_map(|r| r.clone().err()).collect();
        let expected = if errors.is_empty() {
            Ok(outcomes.iter().filter_map(|r| r.clone().ok()).collect::<Vec<_>>())
        } else {
            Err(errors.concat())
        };
        let tasks = || outcomes.iter().cloned().map(task::from_result).collect::<Vec<_>>();

        prop_assert_eq!(&run_task(task::sequence_validated(Parallel, tasks())), &expected);
        prop_assert_eq!(&run_task(task::sequence_validated(Sequential, tasks())), &expected);
        prop_assert_eq!(
            &run_task(task::sequence_validated(Bounded::new(limit), tasks())),
            &expected
        );
    }
}
