use crispy::Engine;

/// Evaluate `setup` lines and then `input` in one session, returning the
/// printed result of `input`.
pub fn eval_in_session(setup: &[&str], input: &str) -> String {
    let mut engine = Engine::default();
    for line in setup {
        if let Err(e) = engine.eval(line) {
            panic!("setup line {:?} failed to parse: {}", line, e);
        }
    }
    match engine.eval(input) {
        Ok(value) => value.to_string(),
        Err(e) => panic!("input {:?} failed to parse: {}", input, e),
    }
}

/// Return the diagnostic codes for an input that is expected to fail parsing.
pub fn parse_error_codes(input: &str) -> Vec<String> {
    let mut engine = Engine::default();
    match engine.eval(input) {
        Ok(value) => panic!("input {:?} parsed and evaluated to {}", input, value),
        Err(e) => e
            .diagnostics()
            .iter()
            .filter_map(|d| d.code.clone())
            .collect(),
    }
}

#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        result: $result:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(cases::eval_in_session(&[], $input), $result);
        }
    };
    (
        $name:ident,
        setup: [$($setup:expr),* $(,)?],
        input: $input:expr,
        result: $result:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(
                cases::eval_in_session(&[$($setup),*], $input),
                $result
            );
        }
    };
    (
        $name:ident,
        input: $input:expr,
        parse_error: $code:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(cases::parse_error_codes($input), vec![$code.to_string()]);
        }
    };
}
