use std::cell::Cell;

use rail_pipeline::{PipelineError, Rail};

#[test]
fn chain_threads_success_values() {
    let rail = Rail::<i32>::success(2).chain(|x| Ok(x + 3)).chain(|x| Ok(x * 10));

    assert!(rail.is_success());
    assert!(!rail.is_failure());
    assert_eq!(rail.value(), Some(&50));
    assert_eq!(rail.error(), None);
}

#[test]
fn chain_does_not_invoke_closures_after_failure() {
    let calls = Cell::new(0);
    let rail = Rail::<i32>::success(1)
        .chain(|x| {
            calls.set(calls.get() + 1);
            Ok(x)
        })
        .chain(|_| -> Result<i32, PipelineError> {
            calls.set(calls.get() + 1);
            Err(PipelineError::validation("invalid_field", "contains disallowed value"))
        })
        .chain(|x| {
            calls.set(calls.get() + 1);
            Ok(x + 1)
        })
        .map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });

    assert_eq!(calls.get(), 2);
    assert_eq!(
        rail.into_result(),
        Err(PipelineError::validation("invalid_field", "contains disallowed value"))
    );
}

#[test]
fn first_failure_wins() {
    let rail = Rail::<()>::failure(PipelineError::read("first.txt"))
        .chain(|()| Err::<(), _>(PipelineError::processing("later", "never")));

    assert_eq!(rail.error(), Some(&PipelineError::read("first.txt")));
}

#[test]
fn stage_trace_stops_at_failing_stage() {
    let rail = Rail::<u8, &str>::success(0)
        .stage("load", |x| Ok(x + 1))
        .stage("validate", |_| Err::<u8, _>("rejected"))
        .stage("process", |x| Ok(x + 1));

    assert_eq!(rail.completed_stages(), ["load", "validate"]);
    assert_eq!(rail.error(), Some(&"rejected"));
}

#[test]
fn stage_on_failed_rail_keeps_trace_empty() {
    let rail: Rail<u8, &str> = Rail::failure("early").stage("load", |x| Ok(x));

    assert!(rail.completed_stages().is_empty());
}

#[test]
fn conversions_round_trip_through_result() {
    let rail: Rail<i32, &str> = Ok(7).into();
    assert_eq!(rail.as_result(), &Ok(7));

    let result: Result<i32, &str> = rail.into();
    assert_eq!(result, Ok(7));
}
