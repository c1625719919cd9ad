//! Scripted scenarios driving the shelf list from outside the crate.
//!
//! Each scenario exercises the public surface the way an application
//! would: literal inputs, asserted outcomes, and `OutOfRange` probes.
//! The process exits non-zero when any scenario fails.

use std::process::ExitCode;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use shelf::ArrayList;
use shelf_harness::{check, expect_out_of_range, Failure, Scenario};

fn basic_operations() -> Result<(), Failure> {
    let mut list = ArrayList::new();
    check!(list.len() == 0);
    check!(list.is_empty());

    list.add(0, 10).unwrap();
    check!(list.len() == 1);
    check!(!list.is_empty());
    check!(list.get(0) == Ok(&10));

    list.add(0, 5).unwrap();
    check!(list.len() == 2);
    check!(list.get(0) == Ok(&5));
    check!(list.get(1) == Ok(&10));

    list.add(1, 7).unwrap();
    check!(list.len() == 3);
    check!(list.get(0) == Ok(&5));
    check!(list.get(1) == Ok(&7));
    check!(list.get(2) == Ok(&10));

    check!(list.set(1, 8) == Ok(7));
    check!(list.get(1) == Ok(&8));

    check!(list.remove(0) == Ok(5));
    check!(list.len() == 2);
    check!(list.get(0) == Ok(&8));
    check!(list.get(1) == Ok(&10));

    check!(list.remove(list.len() - 1) == Ok(10));
    check!(list.len() == 1);
    check!(list.get(0) == Ok(&8));

    check!(list.remove(0) == Ok(8));
    check!(list.is_empty());
    Ok(())
}

fn bounds_and_errors() -> Result<(), Failure> {
    let mut list: ArrayList<i32> = ArrayList::new();

    expect_out_of_range!(list.get(0));
    expect_out_of_range!(list.set(0, 1));
    expect_out_of_range!(list.remove(0));
    expect_out_of_range!(list.add(1, 1));

    // A failed call must leave the list untouched.
    check!(list.is_empty());
    check!(list.capacity() == 0);

    list.add(0, 42).unwrap();
    expect_out_of_range!(list.get(1));
    expect_out_of_range!(list.add(2, 1));
    check!(list.len() == 1);
    check!(list.get(0) == Ok(&42));
    Ok(())
}

fn resize_behavior() -> Result<(), Failure> {
    let mut list = ArrayList::new();
    const N: usize = 1000;

    for i in 0..N {
        list.add(i, i).unwrap();
        check!(list.len() == i + 1);
        check!(list.get(i) == Ok(&i));
    }

    for i in 0..N - 1 {
        let value = list.remove(list.len() - 1).unwrap();
        check!(value == N - 1 - i);
    }
    check!(list.len() == 1);
    check!(list.get(0) == Ok(&0));
    check!(list.capacity() <= 4);

    for i in 1..=N {
        list.add(i, i * 10).unwrap();
        if i % 100 == 0 {
            check!(list.get(i) == Ok(&(i * 10)));
            check!(list.len() == i + 1);
        }
    }
    Ok(())
}

/// Random insert/remove/set sequence checked against `Vec` with a fixed
/// seed, so a failure reproduces exactly.
fn randomized_soak() -> Result<(), Failure> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_CAFE);
    let mut list = ArrayList::new();
    let mut model: Vec<i64> = Vec::new();

    for step in 0..20_000 {
        let value = step as i64;
        match rng.random_range(0..10) {
            // Bias toward inserts so the list actually grows.
            0..=4 => {
                let i = rng.random_range(0..=model.len());
                list.add(i, value).unwrap();
                model.insert(i, value);
            }
            5..=7 if !model.is_empty() => {
                let i = rng.random_range(0..model.len());
                check!(list.remove(i) == Ok(model.remove(i)));
            }
            8 if !model.is_empty() => {
                let i = rng.random_range(0..model.len());
                let prior = std::mem::replace(&mut model[i], value);
                check!(list.set(i, value) == Ok(prior));
            }
            _ if !model.is_empty() => {
                let i = rng.random_range(0..model.len());
                check!(list.get(i) == Ok(&model[i]));
            }
            _ => {}
        }
        check!(list.len() == model.len());
        check!(list.capacity() >= list.len());
    }

    for (i, expected) in model.iter().enumerate() {
        check!(list.get(i) == Ok(expected));
    }
    Ok(())
}

fn main() -> ExitCode {
    let scenarios = [
        Scenario {
            name: "basic_operations",
            run: basic_operations,
        },
        Scenario {
            name: "bounds_and_errors",
            run: bounds_and_errors,
        },
        Scenario {
            name: "resize_behavior",
            run: resize_behavior,
        },
        Scenario {
            name: "randomized_soak",
            run: randomized_soak,
        },
    ];

    if shelf_harness::run_scenarios(&scenarios) == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
