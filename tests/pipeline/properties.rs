use proptest::prelude::*;
use vali_rail::actions::{check, cron, isbn, iso_country_code, iso_currency_code};
use vali_rail::{Action, Config, Dataset, Pipe, Value};

/// One `check` per flag; step `i` fails when `flags[i]` is false and reports `step i`.
fn pipe_of(flags: &[bool]) -> Pipe {
    flags
        .iter()
        .enumerate()
        .map(|(i, &pass)| check(move |_: &Value| pass).with_message(format!("step {i}")))
        .collect()
}

fn failing_steps(flags: &[bool]) -> Vec<String> {
    flags
        .iter()
        .enumerate()
        .filter(|(_, pass)| !**pass)
        .map(|(i, _)| format!("step {i}"))
        .collect()
}

fn messages(dataset: &Dataset) -> Vec<String> {
    dataset.issues().iter().map(|issue| issue.message().to_owned()).collect()
}

proptest! {
    #[test]
    fn no_abort_accumulates_every_failure_in_order(flags in prop::collection::vec(any::<bool>(), 0..12)) {
        let mut dataset = Dataset::new(Value::Null);
        pipe_of(&flags).run(&mut dataset, &Config::default());

        prop_assert_eq!(messages(&dataset), failing_steps(&flags));
    }

    #[test]
    fn abort_early_caps_issues_at_the_first_failure(flags in prop::collection::vec(any::<bool>(), 0..12)) {
        let mut dataset = Dataset::new(Value::Null);
        pipe_of(&flags).run(&mut dataset, &Config::fail_fast());

        let expected: Vec<String> = failing_steps(&flags).into_iter().take(1).collect();
        prop_assert_eq!(messages(&dataset), expected);
    }

    #[test]
    fn validations_never_touch_an_untyped_dataset(input in ".{0,24}", order in prop::collection::vec(0usize..5, 0..8)) {
        let steps: Vec<Box<dyn Action>> = vec![
            Box::new(cron()),
            Box::new(isbn()),
            Box::new(iso_country_code()),
            Box::new(iso_currency_code()),
            Box::new(check(|_: &Value| false)),
        ];

        let mut dataset = Dataset::untyped(Value::from(input.clone()));
        for index in order {
            steps[index].run(&mut dataset, &Config::default());
            prop_assert!(!dataset.is_typed());
            prop_assert!(!dataset.has_issues());
        }
        prop_assert_eq!(dataset.value(), &Value::from(input));
    }

    #[test]
    fn typed_never_returns_once_lost(input in ".{0,24}") {
        let schema = vali_rail::pipe!(
            vali_rail::schemas::number(),
            vali_rail::actions::to_string(),
            vali_rail::actions::guard(|_: &Value| true),
            vali_rail::actions::to_boolean(),
        );

        let dataset = vali_rail::run(&schema, input, &Config::default());
        prop_assert!(!dataset.is_typed());
        prop_assert_eq!(dataset.issues().len(), 1);
    }
}
