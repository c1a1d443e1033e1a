use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use strcalc_core::{Calculator, CalculatorError, Logger, Notifier};

fn add(input: &str) -> Result<i64, CalculatorError> {
    Calculator::new().add(input)
}

fn assert_invalid(input: &str) {
    let err = add(input).unwrap_err();
    assert!(err.is_invalid_argument(), "expected invalid argument for {input:?}, got {err:?}");
}

#[test]
fn empty_string_is_zero() {
    assert_eq!(add("").unwrap(), 0);
}

#[test]
fn sums_comma_separated_numbers() {
    assert_eq!(add("1").unwrap(), 1);
    assert_eq!(add("1,2").unwrap(), 3);
    assert_eq!(add("1,2,4,7,8,11").unwrap(), 33);
}

#[test]
fn truncates_non_integers() {
    assert_eq!(add("1.9").unwrap(), 1);
}

#[test]
fn tolerates_leading_space() {
    assert_eq!(add("456, 889").unwrap(), 1345);
}

#[test]
fn ignores_numbers_above_one_thousand() {
    assert_eq!(add("2,1001").unwrap(), 2);
    assert_eq!(add("1000,1").unwrap(), 1001);
}

#[test]
fn unparsable_tokens_count_as_zero() {
    assert_eq!(add("abc,2").unwrap(), 2);
}

#[test]
fn newline_is_a_default_delimiter() {
    assert_eq!(add("1\n2,3").unwrap(), 6);
}

#[test]
fn custom_single_char_delimiter() {
    assert_eq!(add("//;\n1;2").unwrap(), 3);
}

#[test]
fn custom_long_delimiter() {
    assert_eq!(add("//[***]\n1***2***3").unwrap(), 6);
}

#[test]
fn multiple_bracketed_delimiters() {
    assert_eq!(add("//[*][%]\n1*2%3").unwrap(), 6);
}

#[test]
fn empty_declarations_are_inert() {
    assert_eq!(add("//\n1,2").unwrap(), 3);
    assert_eq!(add("//[]\n1,2").unwrap(), 3);
}

#[test]
fn header_without_newline_is_not_a_header() {
    // The whole input is one token that casts to 0
    assert_eq!(add("//;1;2").unwrap(), 0);
}

#[test]
fn empty_arguments_are_rejected() {
    assert_invalid("1,\n");
    assert_invalid(",,,,,");
    assert_invalid("//;\n1;;2");
}

#[test]
fn malformed_long_delimiter_is_rejected() {
    let err = add("//;abc[\n6;abc[5").unwrap_err();
    assert_eq!(err.to_string(), "Incorrect long delimiter format.");
    assert!(!err.is_negative_argument());
}

#[test]
fn single_negative_is_reported() {
    let err = add("-1").unwrap_err();
    assert!(err.is_negative_argument());
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "Negatives not allowed: -1");
}

#[test]
fn all_negatives_are_reported_in_order() {
    let err = add("-5,-7,-3").unwrap_err();
    assert_eq!(err.to_string(), "Negatives not allowed: -5, -7, -3");
    assert_eq!(err.negatives(), ["-5", "-7", "-3"]);
}

#[test]
fn negatives_beat_the_ceiling() {
    let err = add("2000,-2000").unwrap_err();
    assert_eq!(err.negatives(), ["-2000"]);
}

#[test]
fn empty_token_wins_over_negatives() {
    let err = add("-1,,2").unwrap_err();
    assert!(!err.is_negative_argument());
}

#[test]
fn declared_delimiters_persist_across_calls() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.add("//;\n1;2").unwrap(), 3);
    assert_eq!(calculator.add("3;4\n5").unwrap(), 12);
    assert_eq!(calculator.delimiters(), ["\n", ";"]);

    // A fresh instance knows nothing about `;`
    assert_eq!(Calculator::new().add("3;4").unwrap(), 3);
}

#[test]
fn delimiters_accumulate_without_dedup() {
    let mut calculator = Calculator::new();
    calculator.add("//;\n1").unwrap();
    calculator.add("//;\n1").unwrap();
    calculator.add("//[**][%]\n1**2%3").unwrap();
    assert_eq!(calculator.delimiters(), ["\n", ";", ";", "**", "%"]);
}

#[derive(Clone, Default)]
struct RecordingLogger {
    messages: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) -> anyhow::Result<()> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.fail {
            anyhow::bail!("log destination unavailable");
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn logs_each_successful_sum_once() {
    let logger = RecordingLogger::default();
    let mut calculator = Calculator::new().with_logger(Box::new(logger.clone()));

    calculator.add("2,3").unwrap();
    calculator.add("10").unwrap();
    let _ = calculator.add("-1");

    assert_eq!(*logger.messages.lock().unwrap(), vec!["5", "10"]);
}

#[test]
fn logging_failure_is_notified_not_returned() {
    let logger = RecordingLogger { fail: true, ..Default::default() };
    let notifier = RecordingNotifier::default();
    let mut calculator = Calculator::new()
        .with_logger(Box::new(logger.clone()))
        .with_notifier(Box::new(notifier.clone()));

    assert_eq!(calculator.add("2,3").unwrap(), 5);
    assert_eq!(*logger.messages.lock().unwrap(), vec!["5"]);
    assert_eq!(
        *notifier.messages.lock().unwrap(),
        vec!["Logging has failed: log destination unavailable"]
    );
}

proptest! {
    #[test]
    fn sums_in_range_numbers(numbers in prop::collection::vec(0i64..=2000, 1..20)) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        let expected: i64 = numbers.iter().filter(|n| **n <= 1000).sum();
        prop_assert_eq!(Calculator::new().add(&input).unwrap(), expected);
    }
}
