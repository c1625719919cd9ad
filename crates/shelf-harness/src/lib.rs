//! Scenario reporting for the shelf harness.
//!
//! A scenario is a named function that drives the list through a
//! scripted sequence and checks outcomes. The runner prints one
//! coloured PASS/FAIL line per scenario with its duration, then an
//! aggregate count; the process exits non-zero when any scenario fails.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::{Duration, Instant};

use shelf::ListError;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// A failed check: what was expected and where in the scenario source.
#[derive(Debug)]
pub struct Failure {
    /// Human-readable description, usually the failed expression.
    pub message: String,
    /// Source location of the failed check, `file:line`.
    pub location: String,
}

impl Failure {
    /// Build a failure for a check at the given source location.
    pub fn new(message: impl Into<String>, file: &str, line: u32) -> Self {
        Self {
            message: message.into(),
            location: format!("{file}:{line}"),
        }
    }
}

/// A named scenario to run against the list.
pub struct Scenario {
    /// Name printed on the report line.
    pub name: &'static str,
    /// The scenario body. `Err` marks the scenario failed.
    pub run: fn() -> Result<(), Failure>,
}

/// Fail the scenario unless `condition` holds.
#[macro_export]
macro_rules! check {
    ($condition:expr) => {
        if !$condition {
            return Err($crate::Failure::new(
                stringify!($condition),
                file!(),
                line!(),
            ));
        }
    };
}

/// Fail the scenario unless `result` is an `OutOfRange` error.
pub fn expect_out_of_range<T: std::fmt::Debug>(
    result: Result<T, ListError>,
    expression: &str,
    file: &str,
    line: u32,
) -> Result<(), Failure> {
    match result {
        Err(ListError::OutOfRange { .. }) => Ok(()),
        Ok(value) => Err(Failure::new(
            format!("expected OutOfRange for {expression}, got Ok({value:?})"),
            file,
            line,
        )),
    }
}

/// Fail the scenario unless `$result` is an `OutOfRange` error.
#[macro_export]
macro_rules! expect_out_of_range {
    ($result:expr) => {
        $crate::expect_out_of_range($result, stringify!($result), file!(), line!())?
    };
}

fn format_duration(delta: Duration) -> String {
    format!("{:.3}s", delta.as_secs_f64())
}

/// Run every scenario, print the report, and return the number that failed.
pub fn run_scenarios(scenarios: &[Scenario]) -> usize {
    let suite_start = Instant::now();
    let mut passed = 0;

    for scenario in scenarios {
        let start = Instant::now();
        match (scenario.run)() {
            Ok(()) => {
                passed += 1;
                println!(
                    "{GREEN}[PASS]{RESET} {} ({})",
                    scenario.name,
                    format_duration(start.elapsed()),
                );
            }
            Err(failure) => {
                println!(
                    "{RED}[FAIL]{RESET} {} - {} ({}) ({})",
                    scenario.name,
                    failure.message,
                    failure.location,
                    format_duration(start.elapsed()),
                );
            }
        }
    }

    let colour = if passed == scenarios.len() { GREEN } else { RED };
    println!(
        "{colour}{passed}/{} scenarios passed{RESET} ({})",
        scenarios.len(),
        format_duration(suite_start.elapsed()),
    );

    scenarios.len() - passed
}
