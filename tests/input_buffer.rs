use abacus::{
    ast::BinaryOperator::{Add, Mul},
    calculate,
    config::Config,
    error::ParseError,
    interpreter::{
        input::buffer::{InputBuffer, Status},
        token::Token,
    },
    util::num::format_number,
};

fn buffer() -> InputBuffer {
    InputBuffer::new(Config::default())
}

/// Replays `keys` on a fresh buffer and returns the display.
fn display_after(keys: &str) -> String {
    let mut buffer = buffer();
    buffer.replay(keys).unwrap_or_else(|e| panic!("{keys} failed: {e}"));
    buffer.to_string()
}

#[test]
fn empty_buffer_shows_zero() {
    assert_eq!(buffer().to_string(), "0");
}

#[test]
fn typed_keys_are_shown() {
    assert_eq!(display_after("12+3.5"), "12+3.5");
}

#[test]
fn evaluation_honours_precedence() {
    assert_eq!(display_after("2+3*4="), "14");
    assert_eq!(display_after("2*3+4*5-6/2="), "23");
}

#[test]
fn leading_zero_is_replaced() {
    assert_eq!(display_after("05"), "5");
    assert_eq!(display_after("000"), "0");
    assert_eq!(display_after("3+07"), "3+7");
    assert_eq!(display_after("100"), "100");
}

#[test]
fn second_point_in_a_number_is_ignored() {
    assert_eq!(display_after("1.2.3"), "1.23");
    assert_eq!(display_after("1.2+3.4"), "1.2+3.4");
}

#[test]
fn lone_point_gets_zeros_around_it() {
    assert_eq!(display_after("."), "0.");
    assert_eq!(display_after("5+.5"), "5+0.5");
    assert_eq!(display_after("5.+2"), "5.0+2");
}

#[test]
fn operator_on_empty_buffer_starts_from_zero() {
    assert_eq!(display_after("*"), "0*");
    assert_eq!(display_after("-3="), "-3");
}

#[test]
fn consecutive_operators_collapse_into_the_latter() {
    assert_eq!(display_after("2+*-3"), "2-3");
    assert_eq!(display_after("2+*-3="), "-1");
}

#[test]
fn trailing_operator_is_ignored_when_evaluating() {
    assert_eq!(display_after("2*3+="), "6");
}

#[test]
fn evaluating_nothing_keeps_zero() {
    let mut buffer = buffer();
    assert_eq!(buffer.evaluate(), Ok(None));
    assert_eq!(buffer.to_string(), "0");
}

#[test]
fn input_length_is_capped() {
    let mut buffer = InputBuffer::new(Config { max_input_len: 3,
                                               ..Config::default() });
    assert!(buffer.append(Token::Digit('1')));
    assert!(buffer.append(Token::Operator(Add)));
    assert!(buffer.append(Token::Digit('2')));
    assert!(!buffer.append(Token::Digit('3')));
    assert_eq!(buffer.to_string(), "1+2");
}

#[test]
fn replacing_an_operator_is_allowed_when_full() {
    let mut buffer = InputBuffer::new(Config { max_input_len: 2,
                                               ..Config::default() });
    buffer.replay("1+2").unwrap();
    assert_eq!(buffer.to_string(), "1+");
    assert!(buffer.append(Token::Operator(Mul)));
    assert_eq!(buffer.to_string(), "1*");
}

#[test]
fn implicit_zero_counts_towards_the_cap() {
    let mut buffer = InputBuffer::new(Config { max_input_len: 1,
                                               ..Config::default() });
    assert!(!buffer.append(Token::Point));
    assert!(buffer.is_empty());
}

#[test]
fn backspace_removes_the_last_key() {
    assert_eq!(display_after("12+3<"), "12+");
    assert_eq!(display_after("12+3<<<"), "1");
    assert_eq!(display_after("1<"), "0");
    assert_eq!(display_after("<"), "0");
}

#[test]
fn clear_empties_the_buffer() {
    assert_eq!(display_after("12+3c"), "0");
    assert_eq!(display_after("12+3C4"), "4");
}

#[test]
fn results_chain_into_new_input() {
    assert_eq!(display_after("2+3=*4="), "20");
    assert_eq!(display_after("1+2=5"), "35");
    assert_eq!(display_after("1/4=+1="), "1.25");
    assert_eq!(display_after("1/4=.5"), "0.255");
}

#[test]
fn negative_results_chain_too() {
    assert_eq!(display_after("2-5="), "-3");
    assert_eq!(display_after("2-5=*2="), "-6");
    assert_eq!(display_after("2-5=<"), "0");
    assert_eq!(display_after("2-5=<2"), "2");
}

#[test]
fn long_results_still_take_an_operator() {
    let mut buffer = buffer();
    buffer.replay("1/3/3/3/3/3/3/3=").unwrap();
    let carried = buffer.to_string();
    assert!(buffer.tokens().len() > buffer.config().max_input_len, "{carried}");

    buffer.replay("+1").unwrap();
    assert_eq!(buffer.to_string(), format!("{carried}+1"));

    buffer.replay("=").unwrap();
    let expected = calculate(&format!("{carried}+1")).unwrap();
    assert_eq!(buffer.to_string(), format_number(expected));
}

#[test]
fn cap_counts_keys_typed_after_a_carried_result() {
    let mut buffer = InputBuffer::new(Config { max_input_len: 5,
                                               ..Config::default() });
    buffer.replay("99*99=").unwrap();
    assert_eq!(buffer.to_string(), "9801");

    buffer.replay("+1234").unwrap();
    assert_eq!(buffer.to_string(), "9801+1234");
    assert!(!buffer.append(Token::Digit('5')));
    assert_eq!(buffer.to_string(), "9801+1234");
}

#[test]
fn carried_digits_removed_by_backspace_are_no_longer_exempt() {
    let mut buffer = InputBuffer::new(Config { max_input_len: 4,
                                               ..Config::default() });
    buffer.replay("25*4=").unwrap();
    assert_eq!(buffer.to_string(), "100");

    buffer.replay("<<<").unwrap();
    assert!(buffer.is_empty());
    buffer.replay("1234").unwrap();
    assert!(!buffer.append(Token::Digit('5')));
    assert_eq!(buffer.to_string(), "1234");
}

#[test]
fn chained_zero_is_still_a_leading_zero() {
    assert_eq!(display_after("2-2=7"), "7");
}

#[test]
fn division_by_zero_shows_the_error_until_the_next_key() {
    let mut buffer = buffer();
    buffer.replay("5/0+3=").unwrap();
    assert_eq!(buffer.status(), Status::DivisionByZero);
    assert_eq!(buffer.to_string(), "Error");
    assert!(buffer.is_empty());

    buffer.replay("7").unwrap();
    assert_eq!(buffer.status(), Status::Editing);
    assert_eq!(buffer.to_string(), "7");
}

#[test]
fn evaluate_reports_division_by_zero() {
    let mut buffer = buffer();
    buffer.replay("3+5/0").unwrap();
    assert!(buffer.evaluate().unwrap_err().is_division_by_zero());
    assert_eq!(buffer.evaluate(), Ok(None));
}

#[test]
fn error_text_is_configurable() {
    let mut buffer = InputBuffer::new(Config { error_text: "Nope".to_string(),
                                               ..Config::default() });
    buffer.replay("1/0=").unwrap();
    assert_eq!(buffer.to_string(), "Nope");
}

#[test]
fn backspace_after_an_error_clears() {
    let mut buffer = buffer();
    buffer.replay("1/0=<").unwrap();
    assert_eq!(buffer.status(), Status::Editing);
    assert_eq!(buffer.to_string(), "0");
}

#[test]
fn overflow_shows_infinity_until_the_next_key() {
    let mut buffer = InputBuffer::new(Config { max_input_len: 1000,
                                               ..Config::default() });
    let huge = format!("9{}", "0".repeat(300));
    buffer.replay(&format!("{huge}*{huge}=")).unwrap();
    assert_eq!(buffer.status(), Status::NonFinite(f64::INFINITY));
    assert_eq!(buffer.to_string(), "inf");

    buffer.replay("2").unwrap();
    assert_eq!(buffer.to_string(), "2");
}

#[test]
fn unknown_keys_stop_the_replay() {
    let mut buffer = buffer();
    assert_eq!(buffer.replay("1+2^3"),
               Err(ParseError::UnexpectedKey { key:      "^".to_string(),
                                               position: 3, }));
    assert!(buffer.is_empty());
}

#[test]
fn signs_cannot_be_typed() {
    let mut buffer = buffer();
    assert!(!buffer.append(Token::Sign));
    assert!(buffer.is_empty());
}
