#[cfg(test)]
mod tests {
    use argz_cli::cli_args::Args;
    use argz_cli::demo::{flag_list, Demo};
    use argz_cli::error::Error;
    use argz_core::error::Error as ParseError;
    use clap::Parser;

    /// Runs a playground invocation, returning the demo state, outcome and output.
    fn run(argv: &[&str]) -> (Demo, Result<argz_core::parser::ParseOutcome, Error>, String) {
        let args = Args::parse_from(argv);
        let mut demo = Demo::default();
        let mut out: Vec<u8> = Vec::new();
        let outcome = args
            .tokens()
            .and_then(|tokens| {
                demo.parse(&args.about(), &tokens, &mut out)
                    .map_err(Error::from)
            });
        (demo, outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quoted_command_line_binds_values() {
        let (demo, outcome, written) = run(&[
            "argz",
            r#"program.exe -i "./../some quoted path.txt" --study s --boolean --number 22"#,
        ]);

        assert!(outcome.unwrap().is_complete());
        assert_eq!(demo.input, "./../some quoted path.txt");
        assert_eq!(demo.study, "s");
        assert_eq!(demo.number, 22);
        assert!(demo.boolean);
        assert!(written.is_empty());
    }

    #[test]
    fn test_empty_command_line_writes_help() {
        let (_, outcome, written) = run(&["argz", "program.exe"]);

        assert!(outcome.unwrap().help_requested);
        assert!(written.starts_with("My program description\n"));
    }

    #[test]
    fn test_allow_empty_reports_missing_input() {
        let (_, outcome, written) = run(&["argz", "--allow-empty", "program.exe"]);
        let outcome = outcome.unwrap();

        assert!(!outcome.help_requested);
        assert_eq!(flag_list(&outcome.missing), "--input");
        assert!(written.is_empty());
    }

    #[test]
    fn test_parse_error_is_wrapped() {
        let (demo, outcome, _) = run(&["argz", "program.exe -i x --number twelve"]);

        assert!(matches!(
            outcome,
            Err(Error::Parse(ParseError::InvalidNumber { .. }))
        ));
        assert_eq!(demo.input, "x");
        assert_eq!(demo.number, 123);
    }

    #[test]
    fn test_tokenize_error_is_reported() {
        let (_, outcome, _) = run(&["argz", r#"program.exe -i "open"#]);
        assert!(matches!(outcome, Err(Error::Tokenize(_))));
    }
}
