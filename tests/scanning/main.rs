use bloomish::{
    base::SilentHandler,
    lexical::{
        scanner::{generate_tokens, ScannerOptions, UnrecognizedPolicy},
        token::{Token, TokenKind},
        Error, UnrecognizedCharacter,
    },
};

use TokenKind::{AxiomKeyword, EndOfInput, RuleKeyword, Symbol, Transition, Whitespace};

fn scan(source: &str) -> Vec<(TokenKind, String)> {
    bloomish::tokenize(source)
        .map(|token| (token.kind(), token.into_lexeme()))
        .collect()
}

fn expected(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|(kind, lexeme)| (*kind, (*lexeme).to_string()))
        .collect()
}

#[test]
fn empty_input_yields_only_end_of_input() {
    assert_eq!(scan(""), expected(&[(EndOfInput, "")]));
}

#[test]
fn whitespace_only_input_yields_one_run() {
    for source in [" ", " \t\r\n", "\n\n", "\t \t"] {
        assert_eq!(
            scan(source),
            expected(&[(Whitespace, source), (EndOfInput, "")]),
            "source: {source:?}"
        );
    }
}

#[test]
fn single_identifier_is_classified() {
    for (source, kind) in [("axiom", AxiomKeyword), ("rule", RuleKeyword), ("foo99", Symbol)] {
        assert_eq!(scan(source), expected(&[(kind, source), (EndOfInput, "")]));
    }
}

#[test]
fn axiom_statement() {
    assert_eq!(
        scan("axiom A B"),
        expected(&[
            (AxiomKeyword, "axiom"),
            (Whitespace, " "),
            (Symbol, "A"),
            (Whitespace, " "),
            (Symbol, "B"),
            (EndOfInput, ""),
        ])
    );
}

#[test]
fn rule_statement() {
    assert_eq!(
        scan("rule A -> B A"),
        expected(&[
            (RuleKeyword, "rule"),
            (Whitespace, " "),
            (Symbol, "A"),
            (Whitespace, " "),
            (Transition, "->"),
            (Whitespace, " "),
            (Symbol, "B"),
            (Whitespace, " "),
            (Symbol, "A"),
            (EndOfInput, ""),
        ])
    );
}

#[test]
fn unknown_character_is_skipped() {
    assert_eq!(scan("#"), expected(&[(EndOfInput, "")]));
    assert_eq!(
        scan("A#B"),
        expected(&[(Symbol, "A"), (Symbol, "B"), (EndOfInput, "")])
    );
}

#[test]
fn unknown_character_can_be_reported() {
    let handler = SilentHandler::new();
    let options = ScannerOptions {
        unrecognized: UnrecognizedPolicy::ReportUnrecognized,
    };

    let kinds = bloomish::tokenize_with("axiom A; é", options, &handler)
        .map(|token| token.kind())
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![AxiomKeyword, Whitespace, Symbol, Whitespace, EndOfInput]
    );
    assert_eq!(
        handler.into_received(),
        vec![
            Error::from(UnrecognizedCharacter { character: ';' }),
            Error::from(UnrecognizedCharacter { character: 'é' }),
        ]
    );
}

#[test]
fn end_of_input_is_last_and_unique() {
    let sources = [
        "",
        "#",
        "axiom",
        "rule A -> B A\n",
        "axiom F\nrule F -> F+F-F\n",
        "  ->->-",
        "_x_ 1 2 3",
    ];

    for source in sources {
        let tokens = bloomish::tokenize(source).collect::<Vec<Token>>();

        let last = tokens.last().expect("at least one token");
        assert!(last.is_end_of_input(), "source: {source:?}");
        assert!(last.lexeme().is_empty());
        assert_eq!(
            tokens.iter().filter(|token| token.is_end_of_input()).count(),
            1,
            "source: {source:?}"
        );
    }
}

#[test]
fn scanning_twice_is_idempotent() {
    let source = "axiom F X\nrule X -> F_1 X\n";

    let first = bloomish::tokenize(source).collect::<Vec<_>>();
    let second = bloomish::tokenize(source).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn scanning_does_not_distribute_over_concatenation() {
    let separately = [scan("fo"), scan("o")];
    let together = scan("foo");

    assert_eq!(
        separately,
        [
            expected(&[(Symbol, "fo"), (EndOfInput, "")]),
            expected(&[(Symbol, "o"), (EndOfInput, "")]),
        ]
    );
    assert_eq!(together, expected(&[(Symbol, "foo"), (EndOfInput, "")]));

    // boundary characters combine, and only one end-of-input remains
    let joined = separately
        .into_iter()
        .flatten()
        .filter(|(kind, _)| *kind != EndOfInput)
        .collect::<Vec<_>>();
    assert_ne!(joined, expected(&[(Symbol, "foo")]));
}

#[test]
fn transition_split_across_inputs_is_lost() {
    assert_eq!(scan("-"), expected(&[(EndOfInput, "")]));
    assert_eq!(scan(">"), expected(&[(EndOfInput, "")]));
    assert_eq!(scan("->"), expected(&[(Transition, "->"), (EndOfInput, "")]));
}

#[test]
fn tokens_from_any_char_iterator() {
    let owned = String::from("rule A -> A");
    let from_owned = generate_tokens(owned.chars().collect::<Vec<_>>())
        .map(|token| token.kind())
        .collect::<Vec<_>>();

    assert_eq!(
        from_owned,
        vec![
            RuleKeyword,
            Whitespace,
            Symbol,
            Whitespace,
            Transition,
            Whitespace,
            Symbol,
            EndOfInput,
        ]
    );
}

#[test]
fn multiline_program() {
    assert_eq!(
        scan("axiom A\r\nrule A -> AB\n"),
        expected(&[
            (AxiomKeyword, "axiom"),
            (Whitespace, " "),
            (Symbol, "A"),
            (Whitespace, "\r\n"),
            (RuleKeyword, "rule"),
            (Whitespace, " "),
            (Symbol, "A"),
            (Whitespace, " "),
            (Transition, "->"),
            (Whitespace, " "),
            (Symbol, "AB"),
            (Whitespace, "\n"),
            (EndOfInput, ""),
        ])
    );
}
