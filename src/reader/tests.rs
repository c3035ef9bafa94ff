use std::cell::Cell;

use super::*;
use crate::record::Record;

#[derive(Clone, Debug, PartialEq)]
struct Env {
    a: i32,
}

// ==================== Functor / Bifunctor ====================

#[test]
fn test_map() {
    let double = |n: i32| n * 2;
    assert_eq!(pure::<_, String, ()>(1).map(double).run(&()), Ok(2));
}

#[test]
fn test_map_err() {
    let len = |s: String| s.len();
    assert_eq!(pure::<i32, String, ()>(1).map_err(len).run(&()), Ok(1));
    assert_eq!(
        fail::<i32, _, ()>("aa".to_string()).map_err(len).run(&()),
        Err(2)
    );
}

#[test]
fn test_bimap() {
    let len = |s: String| s.len();
    let double = |n: i32| n * 2;
    assert_eq!(
        pure::<i32, String, ()>(1).bimap(len, double).run(&()),
        Ok(2)
    );
    assert_eq!(
        fail::<i32, _, ()>("aaa".to_string())
            .bimap(len, double)
            .run(&()),
        Err(3)
    );
}

// ==================== Chain ====================

#[test]
fn test_and_then() {
    let check = |s: &'static str| {
        if s.len() > 2 {
            from_result::<usize, String, ()>(Ok(s.len()))
        } else {
            from_result(Err("foo".to_string()))
        }
    };

    assert_eq!(pure::<_, String, ()>("foo").and_then(check).run(&()), Ok(3));
    assert_eq!(
        pure::<_, String, ()>("a").and_then(check).run(&()),
        Err("foo".to_string())
    );
}

#[test]
fn test_and_then_short_circuits_without_calling_continuation() {
    let calls = Cell::new(0);
    let r = fail::<i32, _, ()>("boom".to_string()).and_then(|x| {
        calls.set(calls.get() + 1);
        pure(x)
    });

    assert_eq!(r.run(&()), Err("boom".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_tap_keeps_original_value() {
    let r = pure::<_, String, ()>(1).tap(|n| pure(n * 2));
    assert_eq!(r.run(&()), Ok(1));

    let r = pure::<i32, _, ()>(1).tap(|_| fail::<(), _, ()>("tap failed".to_string()));
    assert_eq!(r.run(&()), Err("tap failed".to_string()));
}

#[test]
fn test_flatten() {
    let nested = pure::<_, String, ()>(pure::<_, String, ()>("a"));
    assert_eq!(nested.flatten().run(&()), Ok("a"));
}

// ==================== Constructors ====================

#[test]
fn test_from_option() {
    let none = from_option::<i32, _, ()>(None, || "none");
    let some = from_option::<_, &str, ()>(Some(1), || "none");
    assert_eq!(none.run(&()), Err("none"));
    assert_eq!(some.run(&()), Ok(1));
}

#[test]
fn test_from_predicate() {
    let gt2 = |n: i32| from_predicate::<_, _, ()>(n, |n| *n >= 2, |n| format!("Invalid number {}", n));
    assert_eq!(gt2(3).run(&()), Ok(3));
    assert_eq!(gt2(1).run(&()), Err("Invalid number 1".to_string()));
}

#[test]
fn test_filter_or_else() {
    let r = pure::<_, _, ()>(12).filter_or_else(|n| *n > 10, |_| "a");
    assert_eq!(r.run(&()), Ok(12));

    let r = pure::<_, _, ()>(7).filter_or_else(|n| *n > 10, |_| "a");
    assert_eq!(r.run(&()), Err("a"));
}

#[test]
fn test_filter_or_else_receives_rejected_value() {
    let r = pure::<_, String, ()>(7).filter_or_else(|n| *n > 10, |n| format!("{} is too small", n));
    assert_eq!(r.run(&()), Err("7 is too small".to_string()));
}

// ==================== Elimination ====================

#[test]
fn test_fold() {
    let fold = |r: FromResult<i32, String, ()>| r.fold(|s| s.len() as i32, |n| n * 2);
    assert_eq!(fold(from_result(Ok(1))).run(&()), Ok(2));
    assert_eq!(fold(from_result(Err("aaa".to_string()))).run(&()), Ok(3));
}

#[test]
fn test_get_or_else() {
    let r = pure::<_, String, ()>(1).get_or_else(|s| s.len());
    assert_eq!(r.run(&()), Ok(1));

    let r = fail::<usize, _, ()>("aaa".to_string()).get_or_else(|s| s.len());
    assert_eq!(r.run(&()), Ok(3));
}

#[test]
fn test_swap() {
    assert_eq!(pure::<_, String, ()>(1).swap().run(&()), Err(1));
    assert_eq!(fail::<i32, _, ()>("a").swap().run(&()), Ok("a"));
}

// ==================== Recovery / Alternative ====================

#[test]
fn test_or_else() {
    let handler = |s: String| {
        if s.len() > 2 {
            from_result::<i32, i32, ()>(Ok(1))
        } else {
            from_result(Err(2))
        }
    };

    assert_eq!(pure::<i32, String, ()>(1).or_else(handler).run(&()), Ok(1));
    assert_eq!(
        fail::<i32, _, ()>("foo".to_string()).or_else(handler).run(&()),
        Ok(1)
    );
    assert_eq!(
        fail::<i32, _, ()>("f".to_string()).or_else(handler).run(&()),
        Err(2)
    );
}

#[test]
fn test_alt() {
    let r = pure::<_, i32, ()>("a").alt(|| pure("b"));
    assert_eq!(r.run(&()), Ok("a"));

    let r = fail::<&str, _, ()>(1).alt(|| pure("b"));
    assert_eq!(r.run(&()), Ok("b"));
}

#[test]
fn test_alt_does_not_evaluate_fallback_on_success() {
    let calls = Cell::new(0);
    let r = pure::<_, String, ()>(1).alt(|| {
        calls.set(calls.get() + 1);
        pure(2)
    });

    assert_eq!(r.run(&()), Ok(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_alt_validated() {
    let r = fail::<i32, _, ()>("a".to_string()).alt_validated(|| fail("b".to_string()));
    assert_eq!(r.run(&()), Err("ab".to_string()));

    let r = fail::<i32, _, ()>("a".to_string()).alt_validated(|| pure(2));
    assert_eq!(r.run(&()), Ok(2));

    let r = pure::<_, String, ()>(1).alt_validated(|| fail("b".to_string()));
    assert_eq!(r.run(&()), Ok(1));
}

// ==================== Environment ====================

#[test]
fn test_ask() {
    assert_eq!(ask::<String, Env>().run(&Env { a: 1 }), Ok(Env { a: 1 }));
}

#[test]
fn test_asks() {
    let r = asks::<_, String, _, _>(|env: &Env| env.a);
    assert_eq!(r.run(&Env { a: 1 }), Ok(1));
}

#[test]
fn test_local() {
    let inner = from_fn(|env: &Env| Ok::<_, String>(env.a));
    let outer = inner.local(|n: &i32| Env { a: *n });
    assert_eq!(outer.run(&1), Ok(1));

    let outer = local(
        |n: &i32| Env { a: n * 10 },
        asks::<_, String, _, _>(|env: &Env| env.a),
    );
    assert_eq!(outer.run(&4), Ok(40));
}

#[test]
fn test_run_is_repeatable() {
    let r = asks::<_, String, _, _>(|env: &Env| env.a)
        .map(|a| a + 1)
        .and_then(|a| from_predicate(a, |a| *a > 0, |_| "negative".to_string()));

    let env = Env { a: 41 };
    assert_eq!(r.run(&env), r.run(&env));
    assert_eq!(r.run(&env), Ok(42));
    assert_eq!(r.run(&Env { a: -5 }), Err("negative".to_string()));
}

// ==================== Applicative ====================

#[test]
fn test_zip() {
    let r = pure::<_, String, ()>(1).zip(pure("b"));
    assert_eq!(r.run(&()), Ok((1, "b")));
}

#[test]
fn test_zip_is_fail_fast_left_first() {
    let calls = Cell::new(0);
    let right = from_fn(|_: &()| {
        calls.set(calls.get() + 1);
        Err::<i32, _>("right".to_string())
    });
    let r = fail::<i32, _, ()>("left".to_string()).zip(&right);

    assert_eq!(r.run(&()), Err("left".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_zip_validated() {
    let r = fail::<i32, _, ()>("a".to_string()).zip_validated(fail::<i32, _, ()>("b".to_string()));
    assert_eq!(r.run(&()), Err("ab".to_string()));

    let r = fail::<i32, _, ()>("a".to_string()).zip_validated(pure::<_, String, ()>(2));
    assert_eq!(r.run(&()), Err("a".to_string()));

    let r = pure::<_, String, ()>(1).zip_validated(fail::<i32, _, ()>("b".to_string()));
    assert_eq!(r.run(&()), Err("b".to_string()));

    let r = pure::<_, String, ()>(1).zip_validated(pure(2));
    assert_eq!(r.run(&()), Ok((1, 2)));
}

#[test]
fn test_zip_validated_evaluates_both_sides() {
    let calls = Cell::new(0);
    let right = from_fn(|_: &()| {
        calls.set(calls.get() + 1);
        Ok::<_, String>(2)
    });
    let r = fail::<i32, _, ()>("a".to_string()).zip_validated(&right);

    assert_eq!(r.run(&()), Err("a".to_string()));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_zip_left_and_right() {
    assert_eq!(pure::<_, String, ()>("a").zip_left(pure("b")).run(&()), Ok("a"));
    assert_eq!(pure::<_, String, ()>("a").zip_right(pure("b")).run(&()), Ok("b"));
}

// ==================== Record building ====================

#[test]
fn test_do_notation() {
    let r = pure::<_, String, ()>(1)
        .bind_to("a")
        .bind("b", |_| pure("b"));

    let record = r.run(&()).expect("record");
    assert_eq!(record.get::<i32>("a"), Some(&1));
    assert_eq!(record.get::<&str>("b"), Some(&"b"));
    assert_eq!(record.names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_bind_reads_earlier_fields() {
    let r = asks::<_, String, _, _>(|env: &Env| env.a)
        .bind_to("a")
        .bind("double", |record: &Record| {
            let a = record.get::<i32>("a").copied().unwrap_or_default();
            pure(a * 2)
        });

    let record = r.run(&Env { a: 21 }).expect("record");
    assert_eq!(record.get::<i32>("double"), Some(&42));
}

#[test]
fn test_bind_skips_later_steps_after_failure() {
    let calls = Cell::new(0);
    let r = fail::<i32, _, ()>("no a".to_string())
        .bind_to("a")
        .bind("b", |_| {
            calls.set(calls.get() + 1);
            pure("b")
        });

    assert_eq!(r.run(&()).map(|rec| rec.len()), Err("no a".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_ap_s() {
    let r = pure::<_, String, ()>(1).bind_to("a").ap_s("b", pure("b"));

    let record = r.run(&()).expect("record");
    assert_eq!(record.get::<i32>("a"), Some(&1));
    assert_eq!(record.get::<&str>("b"), Some(&"b"));
}

#[test]
fn test_ap_s_fails_fast() {
    let r = pure::<_, String, ()>(1)
        .bind_to("a")
        .ap_s("b", fail::<&str, _, ()>("no b".to_string()));
    assert_eq!(r.run(&()).map(|rec| rec.len()), Err("no b".to_string()));
}

// ==================== Sequencing ====================

#[test]
fn test_sequence() {
    let all = sequence(vec![pure::<_, String, ()>(1), pure(2)]);
    assert_eq!(all.run(&()), Ok(vec![1, 2]));

    let all = sequence(vec![
        from_result::<i32, _, ()>(Ok(1)),
        from_result(Err("a".to_string())),
    ]);
    assert_eq!(all.run(&()), Err("a".to_string()));
}

#[test]
fn test_sequence_empty() {
    let all = sequence(Vec::<Pure<i32, String, ()>>::new());
    assert_eq!(all.run(&()), Ok(vec![]));
}

#[test]
fn test_traverse_reports_first_failure_in_order() {
    let visited = Cell::new(0);
    let all = traverse(0..10, |x: &i32| {
        visited.set(visited.get() + 1);
        from_predicate::<_, _, ()>(*x, |x| *x > 5, |x| *x)
    });

    assert_eq!(all.run(&()), Err(0));
    assert_eq!(visited.get(), 1);

    let all = traverse(0..10, |x: &i32| pure::<_, i32, ()>(*x));
    assert_eq!(all.run(&()), Ok((0..10).collect::<Vec<_>>()));
}

#[test]
fn test_sequence_validated_combines_in_order() {
    let all = sequence_validated(vec![
        from_result::<i32, _, ()>(Err("a".to_string())),
        from_result(Ok(1)),
        from_result(Err("b".to_string())),
    ]);
    assert_eq!(all.run(&()), Err("ab".to_string()));

    let all = sequence_validated(vec![pure::<_, String, ()>(1), pure(2)]);
    assert_eq!(all.run(&()), Ok(vec![1, 2]));
}

// ==================== Boxing ====================

#[test]
fn test_boxed_readers_in_collection() {
    let readers: Vec<BoxedReader<(), i32, String>> = vec![
        pure::<_, String, ()>(1).boxed(),
        pure::<_, String, ()>(2).map(|x| x * 2).boxed(),
        asks::<_, String, (), _>(|_| 3).boxed(),
    ];

    assert_eq!(sequence(readers).run(&()), Ok(vec![1, 4, 3]));
}

fn countdown(n: i32) -> BoxedReader<(), i32, String> {
    if n <= 0 {
        pure(0).boxed()
    } else {
        pure(n)
            .and_then(move |x| countdown(x - 1).map(move |sum| x + sum))
            .boxed()
    }
}

#[test]
fn test_recursive_boxed_reader() {
    assert_eq!(countdown(4).run(&()), Ok(10));
}
