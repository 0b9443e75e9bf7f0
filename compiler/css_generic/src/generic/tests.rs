use super::*;
use crate::input::{MatchToken, TokenInput};
use crate::node::SyntaxNode;
use pretty_assertions::assert_eq;

/// Helper: run a production over plain token texts, returning whether it
/// matched and how many tokens it consumed.
fn run(name: &str, values: &[&str]) -> (bool, usize) {
    let generic = lookup(name).expect("known production");
    let tokens: Vec<MatchToken<'_>> = values.iter().map(|v| MatchToken::new(v)).collect();
    let mut input = TokenInput::new(&tokens);
    let matched = generic.matches(&mut input);
    (matched, input.consumed())
}

struct Node {
    kind: NodeKind,
    name: Option<&'static str>,
}

impl SyntaxNode for Node {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn name(&self) -> Option<&str> {
        self.name
    }
}

fn run_node(name: &str, node: &Node) -> (bool, usize) {
    let generic = lookup(name).expect("known production");
    let tokens = [MatchToken::with_node("x", node)];
    let mut input = TokenInput::new(&tokens);
    let matched = generic.matches(&mut input);
    (matched, input.consumed())
}

// === Numbers ===

#[test]
fn number() {
    assert_eq!(run("number", &["1"]), (true, 1));
    assert_eq!(run("number", &["-1.5"]), (true, 1));
    assert_eq!(run("number", &["1e3"]), (true, 1));
    assert_eq!(run("number", &[".5", "px"]), (true, 1));
    assert_eq!(run("number", &[""]), (false, 0));
    assert_eq!(run("number", &["abc"]), (false, 0));
    assert_eq!(run("number", &["1."]), (false, 0));
    assert_eq!(run("number", &[]), (false, 0));
}

#[test]
fn number_zero_one() {
    for text in ["0", "0.5", "1", "1e0", "-0"] {
        assert_eq!(run("number-zero-one", &[text]), (true, 1), "{text}");
    }
    for text in ["1.01", "-0.1", "2", "x"] {
        assert_eq!(run("number-zero-one", &[text]), (false, 0), "{text}");
    }
}

#[test]
fn number_one_or_greater() {
    for text in ["1", "1.5", "100", "1e1"] {
        assert_eq!(run("number-one-or-greater", &[text]), (true, 1), "{text}");
    }
    for text in ["0.99", "0", "-5"] {
        assert_eq!(run("number-one-or-greater", &[text]), (false, 0), "{text}");
    }
}

#[test]
fn integer() {
    assert_eq!(run("integer", &["10"]), (true, 1));
    assert_eq!(run("integer", &["-10"]), (true, 1));
    assert_eq!(run("integer", &["+3"]), (true, 1));
    assert_eq!(run("integer", &["1.0"]), (false, 0));
    assert_eq!(run("integer", &["px"]), (false, 0));
}

#[test]
fn positive_integer() {
    assert_eq!(run("positive-integer", &["10"]), (true, 1));
    assert_eq!(run("positive-integer", &["+10"]), (true, 1));
    assert_eq!(run("positive-integer", &["-10"]), (false, 0));
    assert_eq!(run("positive-integer", &["1.5"]), (false, 0));
}

#[test]
fn exponent_integers_still_pass() {
    assert_eq!(run("integer", &["10e-2"]), (true, 1));
    assert_eq!(run("positive-integer", &["10e-2"]), (true, 1));
}

// === Dimensions ===

#[test]
fn length() {
    assert_eq!(run("length", &["10", "px"]), (true, 2));
    assert_eq!(run("length", &["-1.5", "EM"]), (true, 2));
    assert_eq!(run("length", &["10", "xyz"]), (false, 0));
    assert_eq!(run("length", &["px", "10"]), (false, 0));
}

#[test]
fn unitless_zero() {
    assert_eq!(run("length", &["0"]), (true, 1));
    assert_eq!(run("length", &["0.0"]), (true, 1));
    assert_eq!(run("length", &["-0"]), (true, 1));
    assert_eq!(run("angle", &["0"]), (true, 1));
    assert_eq!(run("length", &["1"]), (false, 0));
    assert_eq!(run("length", &["0", "xyz"]), (true, 1));
    assert_eq!(run("length", &["0", "px"]), (true, 2));
}

#[test]
fn unitless_zero_only_for_length_and_angle() {
    assert_eq!(run("time", &["0"]), (false, 0));
    assert_eq!(run("percentage", &["0"]), (false, 0));
}

#[test]
fn unit_families() {
    assert_eq!(run("angle", &["90", "deg"]), (true, 2));
    assert_eq!(run("angle", &["1", "turn"]), (true, 2));
    assert_eq!(run("time", &["200", "ms"]), (true, 2));
    assert_eq!(run("frequency", &["1", "kHz"]), (true, 2));
    assert_eq!(run("resolution", &["2", "x"]), (true, 2));
    assert_eq!(run("flex", &["1", "fr"]), (true, 2));
    assert_eq!(run("decibel", &["-6", "dB"]), (true, 2));
    assert_eq!(run("semitones", &["3", "st"]), (true, 2));
    assert_eq!(run("percentage", &["50", "%"]), (true, 2));
    assert_eq!(run("time", &["1", "px"]), (false, 0));
    assert_eq!(run("percentage", &["50"]), (false, 0));
}

#[test]
fn dimension_needs_numeric_head() {
    assert_eq!(run("length", &["1.", "px"]), (false, 0));
    assert_eq!(run("length", &["a", "px"]), (false, 0));
}

#[test]
fn dimension_rejects_separated_unit() {
    let tokens = [MatchToken::new("10"), MatchToken::new("px").after_trivia()];
    let mut input = TokenInput::new(&tokens);
    assert!(!Generic::Dimension(&LENGTH).matches(&mut input));
    assert!(!lookup("length").expect("known production").matches(&mut input));
    assert_eq!(input.consumed(), 0);

    let zero = [MatchToken::new("0"), MatchToken::new("px").after_trivia()];
    let mut input = TokenInput::new(&zero);
    assert!(lookup("length").expect("known production").matches(&mut input));
    assert_eq!(input.consumed(), 1);
}

// === Hex colors ===

#[test]
fn hex_color_matches_without_consuming() {
    assert_eq!(run("hex-color", &["#", "aabbcc"]), (true, 0));
    assert_eq!(run("hex-color", &["#", "abcd"]), (true, 0));
    assert_eq!(run("hex-color", &["#", "FFF"]), (true, 0));
    assert_eq!(run("hex-color", &["#", "01234567"]), (true, 0));
}

#[test]
fn hex_color_rejects() {
    assert_eq!(run("hex-color", &["#", "ab"]), (false, 0));
    assert_eq!(run("hex-color", &["#", "abcde"]), (false, 0));
    assert_eq!(run("hex-color", &["#", "aabbccd"]), (false, 0));
    assert_eq!(run("hex-color", &["#", "123456789"]), (false, 0));
    assert_eq!(run("hex-color", &["#", "ggg"]), (false, 0));
    assert_eq!(run("hex-color", &["#"]), (false, 0));
    assert_eq!(run("hex-color", &["aabbcc"]), (false, 0));
}

#[test]
fn hex_color_rejects_separated_digits() {
    let tokens = [MatchToken::new("#"), MatchToken::new("fff").after_trivia()];
    let mut input = TokenInput::new(&tokens);
    assert!(!Generic::HexColor.matches(&mut input));
    assert_eq!(input.consumed(), 0);
}

// === Identifiers ===

#[test]
fn custom_ident() {
    for text in ["my-name", "_private", "-vendor", "a$b", "X1"] {
        assert_eq!(run("custom-ident", &[text]), (true, 1), "{text}");
    }
}

#[test]
fn custom_ident_rejects_reserved() {
    for text in ["inherit", "unset", "initial", "default", "INHERIT", "Default", "UnSet"] {
        assert_eq!(run("custom-ident", &[text]), (false, 0), "{text}");
    }
}

#[test]
fn custom_ident_rejects_shape() {
    for text in ["", "1abc", "$a", "a b", "a.b", "\u{e9}"] {
        assert_eq!(run("custom-ident", &[text]), (false, 0), "{text:?}");
    }
}

// === Node-typed productions ===

#[test]
fn ast_node_kinds() {
    let cases = [
        ("dimension", NodeKind::Dimension),
        ("ident", NodeKind::Identifier),
        ("string", NodeKind::String),
        ("url", NodeKind::Url),
        ("unicode-range", NodeKind::UnicodeRange),
        ("id-selector", NodeKind::IdSelector),
        ("progid", NodeKind::Raw),
    ];
    for (name, kind) in cases {
        let node = Node { kind, name: None };
        assert_eq!(run_node(name, &node), (true, 0), "{name}");
        let other = Node {
            kind: NodeKind::Function,
            name: None,
        };
        assert_eq!(run_node(name, &other), (false, 0), "{name}");
    }
}

#[test]
fn ast_node_without_node() {
    assert_eq!(run("ident", &["x"]), (false, 0));
    assert_eq!(run("string", &[]), (false, 0));
}

#[test]
fn attr_function() {
    let attr = Node {
        kind: NodeKind::Function,
        name: Some("ATTR"),
    };
    assert_eq!(run_node("attr()", &attr), (true, 0));

    let other = Node {
        kind: NodeKind::Function,
        name: Some("var"),
    };
    assert_eq!(run_node("attr()", &other), (false, 0));

    let ident = Node {
        kind: NodeKind::Identifier,
        name: Some("attr"),
    };
    assert_eq!(run_node("attr()", &ident), (false, 0));
    assert_eq!(run("attr()", &["attr("]), (false, 0));
}

#[test]
fn expression_never_matches() {
    assert_eq!(run("expression", &["expression("]), (false, 0));
    assert_eq!(lookup("expression"), Some(Generic::Unsupported("expression")));
}

// === Table ===

#[test]
fn table_has_every_production() {
    let names = [
        "angle",
        "attr()",
        "custom-ident",
        "decibel",
        "dimension",
        "frequency",
        "flex",
        "hex-color",
        "id-selector",
        "ident",
        "integer",
        "length",
        "number",
        "number-zero-one",
        "number-one-or-greater",
        "percentage",
        "positive-integer",
        "resolution",
        "semitones",
        "string",
        "time",
        "unicode-range",
        "url",
        "progid",
        "expression",
    ];
    for name in names {
        assert!(lookup(name).is_some(), "{name} missing");
    }
    assert_eq!(table().len(), names.len());
}

#[test]
fn table_entries() {
    assert_eq!(lookup("length"), Some(Generic::ZeroUnitlessDimension(&LENGTH)));
    assert_eq!(lookup("angle"), Some(Generic::ZeroUnitlessDimension(&ANGLE)));
    assert_eq!(lookup("time"), Some(Generic::Dimension(&TIME)));
    assert_eq!(lookup("url"), Some(Generic::AstNode(NodeKind::Url)));
}

#[test]
fn unknown_names() {
    assert_eq!(lookup("calc()"), None);
    assert_eq!(lookup("Length"), None);
    assert_eq!(
        try_lookup("color"),
        Err(UnknownProduction {
            name: "color".to_string()
        })
    );
    assert_eq!(try_lookup("number"), Ok(Generic::Number));
    assert_eq!(
        try_lookup("nope").unwrap_err().to_string(),
        "unknown value production `nope`"
    );
}
