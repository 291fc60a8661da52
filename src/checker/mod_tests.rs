use super::*;

#[test]
fn step_parses_one_and_two() {
    assert_eq!("1".parse::<CheckStep>().unwrap(), CheckStep::Syntax);
    assert_eq!(" 2 ".parse::<CheckStep>().unwrap(), CheckStep::Semantic);
}

#[test]
fn step_rejects_other_values() {
    for bad in ["0", "3", "two", ""] {
        let err = bad.parse::<CheckStep>().unwrap_err();
        assert!(matches!(err, VerdictError::InvalidStep(_)), "{bad}");
    }
}

#[test]
fn step_number_round_trips() {
    for step in [CheckStep::Syntax, CheckStep::Semantic] {
        assert_eq!(CheckStep::from_number(step.number()).unwrap(), step);
    }
}
