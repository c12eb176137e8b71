// Behaviour tests for the calculator engine and session

use calctty::display::RecordingDisplay;
use calctty::engine::{Calculator, CalculatorState, Entry, Operator, Render};
use calctty::input::Input;
use calctty::session::Session;

fn session() -> Session<RecordingDisplay> {
    Session::new(RecordingDisplay::new())
}

fn type_keys(keys: &str) -> Session<RecordingDisplay> {
    let mut session = session();
    session.feed_keys(keys);
    session
}

#[test]
fn test_initial_state() {
    let session = session();

    assert_eq!(session.sink().current(), "0");
    assert_eq!(session.sink().render_count(), 1);
    assert_eq!(*session.calculator().state(), CalculatorState::default());
}

#[test]
fn test_digits_concatenate_without_leading_zeros() {
    assert_eq!(type_keys("123").sink().current(), "123");
    assert_eq!(type_keys("0007").sink().current(), "7");
    assert_eq!(type_keys("000").sink().current(), "0");
    assert_eq!(type_keys("9081").sink().current(), "9081");
}

#[test]
fn test_single_decimal_point() {
    let mut session = type_keys("1.2.3..4");
    assert_eq!(session.sink().current(), "1.234");

    // The ignored point does not re-render
    let renders = session.sink().render_count();
    assert_eq!(session.handle(Input::Decimal), Render::Unchanged);
    assert_eq!(session.sink().render_count(), renders);

    assert_eq!(type_keys(".5").sink().current(), "0.5");
    assert_eq!(type_keys("....").sink().current(), "0.");
}

#[test]
fn test_negate_is_its_own_inverse() {
    let mut calc = Calculator::new();
    for input in [Input::Digit(4), Input::Decimal, Input::Digit(2)] {
        calc.apply(input);
    }

    calc.toggle_negate();
    assert_eq!(calc.display(), "-4.2");
    calc.toggle_negate();
    assert_eq!(calc.display(), "4.2");
}

#[test]
fn test_negate_zero_is_noop() {
    let mut calc = Calculator::new();
    assert_eq!(calc.toggle_negate(), Render::Unchanged);
    assert_eq!(calc.toggle_negate(), Render::Unchanged);
    assert_eq!(calc.display(), "0");

    calc.append_digit('.');
    assert_eq!(calc.toggle_negate(), Render::Changed);
    assert_eq!(calc.display(), "-0.");
}

#[test]
fn test_compute_without_pending_operation() {
    let mut session = type_keys("42");
    let renders = session.sink().render_count();

    assert_eq!(session.handle(Input::Equals), Render::Unchanged);
    assert_eq!(session.calculator().display(), "42");
    assert_eq!(session.sink().render_count(), renders);
    assert!(!session.calculator().state().just_evaluated);
}

#[test]
fn test_division_by_zero() {
    let session = type_keys("5/0=");

    assert_eq!(session.sink().current(), "Error");
    assert_eq!(session.calculator().state().current, Entry::DivisionByZero);
    assert!(session.calculator().state().just_evaluated);
}

#[test]
fn test_rounding_float_noise() {
    assert_eq!(type_keys("0.1+0.2=").sink().current(), "0.3");
    assert_eq!(type_keys("1/3=").sink().current(), "0.333333333333");
    assert_eq!(type_keys("1.1*3=").sink().current(), "3.3");
}

#[test]
fn test_chained_operators() {
    let mut session = type_keys("3+4+");
    assert_eq!(session.sink().current(), "7");
    assert_eq!(session.calculator().pending(), Some(("7", Operator::Add)));

    session.feed_keys("5=");
    assert_eq!(session.sink().current(), "12");

    assert_eq!(type_keys("10-4*2=").sink().current(), "12");
}

#[test]
fn test_operator_shows_previous_until_next_digit() {
    let mut session = type_keys("8*");

    // The display keeps "8" while the entry resets to "0"
    assert_eq!(session.sink().current(), "8");
    assert_eq!(session.calculator().display(), "0");

    session.feed_keys("=");
    assert_eq!(session.sink().current(), "0");
}

#[test]
fn test_replacing_operator_after_result() {
    let session = type_keys("2+3=*4=");
    assert_eq!(session.sink().current(), "20");
}

#[test]
fn test_digit_after_result_starts_fresh() {
    let mut session = type_keys("2+2=");
    assert_eq!(session.sink().current(), "4");

    session.feed_keys("7");
    assert_eq!(session.sink().current(), "7");
    assert!(!session.calculator().state().just_evaluated);

    let session = type_keys("2+2=.");
    assert_eq!(session.sink().current(), "0.");
}

#[test]
fn test_digit_after_error_starts_fresh() {
    let session = type_keys("5/0=9");
    assert_eq!(session.sink().current(), "9");
}

#[test]
fn test_clear_all_resets_everything() {
    for keys in ["", "12.5", "7*", "7*3", "7*3=", "5/0=", "1+2+3"] {
        let mut session = type_keys(keys);
        assert_eq!(session.handle(Input::Clear), Render::Changed);
        assert_eq!(*session.calculator().state(), CalculatorState::default());
        assert_eq!(session.sink().current(), "0");
    }
}

#[test]
fn test_delete_after_result_clears() {
    let mut session = type_keys("9-3=");
    session.handle(Input::Delete);

    assert_eq!(*session.calculator().state(), CalculatorState::default());
    assert_eq!(session.sink().current(), "0");
}

#[test]
fn test_delete_last_character() {
    let mut session = type_keys("123");
    session.handle(Input::Delete);
    assert_eq!(session.sink().current(), "12");
    session.handle(Input::Delete);
    session.handle(Input::Delete);
    assert_eq!(session.sink().current(), "0");
    session.handle(Input::Delete);
    assert_eq!(session.sink().current(), "0");
}

#[test]
fn test_delete_never_leaves_bare_sign() {
    let mut calc = Calculator::new();
    calc.append_digit('5');
    calc.toggle_negate();
    assert_eq!(calc.display(), "-5");

    calc.delete_last();
    assert_eq!(calc.display(), "0");
}

#[test]
fn test_delete_negative_zero() {
    let mut calc = Calculator::new();
    for d in ['0', '.', '5'] {
        calc.append_digit(d);
    }
    calc.toggle_negate();
    calc.delete_last();
    assert_eq!(calc.display(), "-0.");
    calc.delete_last();
    assert_eq!(calc.display(), "-0");

    // Only a plain "0" is replaced by the next digit
    calc.append_digit('3');
    assert_eq!(calc.display(), "-03");

    calc.delete_last();
    assert_eq!(calc.display(), "-0");
    calc.delete_last();
    assert_eq!(calc.display(), "0");
}

#[test]
fn test_percent() {
    assert_eq!(type_keys("50%").sink().current(), "0.5");
    assert_eq!(type_keys("5%").sink().current(), "0.05");
    assert_eq!(type_keys("0.5%").sink().current(), "0.005");

    let mut calc = Calculator::new();
    calc.append_digit('5');
    calc.toggle_negate();
    calc.apply_percent();
    assert_eq!(calc.display(), "-0.05");
}

#[test]
fn test_percent_of_result_keeps_fresh_entry() {
    let mut session = type_keys("20+30=%");
    assert_eq!(session.sink().current(), "0.5");

    session.feed_keys("4");
    assert_eq!(session.sink().current(), "4");
}

#[test]
fn test_error_entry_ignores_editing_and_operators() {
    let mut session = type_keys("5/0=");
    let renders = session.sink().render_count();

    assert_eq!(session.handle(Input::Negate), Render::Unchanged);
    assert_eq!(session.handle(Input::Percent), Render::Unchanged);
    assert_eq!(
        session.handle(Input::Operate(Operator::Add)),
        Render::Unchanged
    );
    assert_eq!(session.handle(Input::Equals), Render::Unchanged);

    assert_eq!(session.sink().render_count(), renders);
    assert_eq!(session.calculator().state().current, Entry::DivisionByZero);
    assert_eq!(session.calculator().pending(), None);
}

#[test]
fn test_chained_division_by_zero() {
    let mut session = type_keys("6/0+");
    assert_eq!(session.sink().current(), "Error");
    assert_eq!(session.calculator().pending(), None);

    session.feed_keys("2=");
    assert_eq!(session.sink().current(), "2");
}

#[test]
fn test_negative_results_and_operands() {
    assert_eq!(type_keys("2-5=").sink().current(), "-3");
    // A second operator folds 3 * 0 before switching
    assert_eq!(type_keys("3*-").sink().current(), "0");
    assert_eq!(type_keys("1-0.9=").sink().current(), "0.1");
}

#[test]
fn test_large_results_use_exponent_form() {
    let session = type_keys("100000000000*100000000000=");
    let shown = session.sink().current();
    assert!(shown.starts_with('1') && shown.ends_with("e+22"), "{}", shown);
}

#[test]
fn test_rounding_large_operands() {
    assert_eq!(type_keys("8163.67-2.114=").sink().current(), "8161.556");
    assert_eq!(type_keys("154.9*958.9=").sink().current(), "148533.61");
    assert_eq!(type_keys("64631.3-94.46=").sink().current(), "64536.84");
    assert_eq!(type_keys("4503.7+0.2=").sink().current(), "4503.9");
}

#[test]
fn test_feed_keys_ignores_unmapped_characters() {
    let mut session = session();
    let handled = session.feed_keys("1 + x2 =");

    assert_eq!(handled, 4);
    assert_eq!(session.sink().current(), "3");
}

#[test]
fn test_every_render_is_recorded_in_order() {
    let display = type_keys("1+2=").into_sink();
    assert_eq!(display.frames, vec!["0", "1", "2", "3"]);
}
