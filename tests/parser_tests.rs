// tests/parser_tests.rs

use dipascii::ast::{Atom, List, Node};
use dipascii::errors::{EofContext, ParseErrorKind};
use dipascii::syntax::{parse, IterSource, ReaderSource};
use dipascii::{parse_reader, parse_str};

const FIXTURE: &str = include_str!("fixtures/amplifier.sch");

fn only_list(doc: &List) -> &List {
    assert_eq!(doc.len(), 1, "expected a single top-level item in {doc}");
    doc[0].as_list().expect("top-level item should be a list")
}

fn atom(node: &Node) -> &Atom {
    node.as_atom().expect("expected an atom")
}

#[test]
fn test_parse_attribute_group() {
    let doc = parse_str(r#"(A (B 1) (C 2.5) (D "hi") (E 50%) (F True))"#).unwrap();
    let a = only_list(&doc);
    assert_eq!(a.name(), Some("A"));
    let names: Vec<_> = a.iter().filter_map(Node::name).collect();
    assert_eq!(names, ["B", "C", "D", "E", "F"]);
}

#[test]
fn test_coercion_ladder() {
    let doc = parse_str("(v 12 12.0 -3 1e2 50% True False Center R_1)").unwrap();
    let kinds: Vec<_> = only_list(&doc).iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        [
            "Integer", "Float", "Integer", "Float", "Percent", "Boolean", "Boolean", "Symbol", "Symbol"
        ]
    );
}

#[test]
fn test_quoting_is_type_opaque() {
    let doc = parse_str(r#"(v "42" 42 "True" True "50%")"#).unwrap();
    let items: Vec<_> = only_list(&doc).iter().map(atom).collect();
    assert_eq!(items[0], &Atom::Text("42".into()));
    assert_eq!(items[1], &Atom::Integer(42));
    assert_eq!(items[2], &Atom::Text("True".into()));
    assert_eq!(items[3], &Atom::Boolean(true));
    assert_eq!(items[4], &Atom::Text("50%".into()));
}

#[test]
fn test_empty_groups() {
    let doc = parse_str("()").unwrap();
    let empty = only_list(&doc);
    assert_eq!(empty.name(), Some(""));
    assert!(empty.is_empty());

    let doc = parse_str("(A)").unwrap();
    let a = only_list(&doc);
    assert_eq!(a.name(), Some("A"));
    assert!(a.is_empty());

    let doc = parse_str("(A   )").unwrap();
    assert!(only_list(&doc).is_empty());
}

#[test]
fn test_order_and_duplicates_preserved() {
    let doc = parse_str("(p (pt 1 2) 7 (pt 3 4) (pt 1 2))").unwrap();
    let p = only_list(&doc);
    assert_eq!(p.len(), 4);
    assert_eq!(p[0], p[3]);
    assert_eq!(atom(&p[1]), &Atom::Integer(7));
    let points: Vec<_> = p.findall("pt", false).map(|pt| pt.numeric_pair()).collect();
    assert_eq!(points, [Some((1.0, 2.0)), Some((3.0, 4.0)), Some((1.0, 2.0))]);
}

#[test]
fn test_newlines_and_tabs_separate_tokens() {
    let doc = parse_str("(a\t1\n2\r\n)\n").unwrap();
    assert_eq!(only_list(&doc).len(), 2);
}

#[test]
fn test_group_name_runs_to_whitespace() {
    // Only whitespace and ')' end a token; '(' and '"' do not.
    let doc = parse_str(r#"(a"b c(d)"#).unwrap();
    let group = only_list(&doc);
    assert_eq!(group.name(), Some("a\"b"));
    assert_eq!(atom(&group[0]), &Atom::Symbol("c(d".into()));
}

#[test]
fn test_unexpected_eof_in_every_context() {
    let cases = [
        ("(A 1", EofContext::List),
        ("(A (B 2)", EofContext::List),
        ("(A \"open", EofContext::QuotedText),
        ("\"open", EofContext::QuotedText),
        ("(A", EofContext::GroupName),
        ("(", EofContext::GroupName),
        ("(A ", EofContext::List),
    ];
    for (src, expected) in cases {
        let err = parse_str(src).unwrap_err();
        match err.kind {
            ParseErrorKind::UnexpectedEof { context } => {
                assert_eq!(context, expected, "wrong context for {src:?}")
            }
            other => panic!("unexpected error for {src:?}: {other}"),
        }
        assert_eq!(err.offset, src.len(), "offset for {src:?}");
    }
}

#[test]
fn test_unmatched_close_is_an_error() {
    let cases = [(")", 0), ("(A 1))", 5), ("(A) ) (B)", 4), ("x )", 2)];
    for (src, offset) in cases {
        let err = parse_str(src).unwrap_err();
        assert!(
            matches!(err.kind, ParseErrorKind::UnexpectedClose),
            "unexpected error for {src:?}: {}",
            err.kind
        );
        assert_eq!(err.offset, offset, "offset for {src:?}");
    }
    // Parens inside quoted text and group names are not structure.
    assert!(parse_str(r#"(A ")") (c(d 1)"#).is_ok());
    assert!(parse_reader("(A) )".as_bytes()).is_err());
}

#[test]
fn test_top_level_token_may_end_at_eof() {
    let doc = parse_str("(A) trailing").unwrap();
    assert_eq!(atom(&doc[1]), &Atom::Symbol("trailing".into()));
}

#[test]
fn test_reader_and_str_agree() {
    let from_str = parse_str(FIXTURE).unwrap();
    let from_reader = parse_reader(FIXTURE.as_bytes()).unwrap();
    assert_eq!(from_str, from_reader);
}

#[test]
fn test_custom_char_source() {
    let mut source = IterSource::new("(A 1)(B 2)".chars());
    let doc = parse(&mut source).unwrap();
    assert_eq!(doc.len(), 2);

    let doc = parse(ReaderSource::new("(µ 1)".as_bytes())).unwrap();
    assert_eq!(only_list(&doc).name(), Some("µ"));
}

#[test]
fn test_fixture_structure() {
    let doc = parse_str(FIXTURE).unwrap();
    assert_eq!(atom(&doc[0]), &Atom::Symbol("ACCEL_ASCII".into()));
    assert_eq!(atom(&doc[1]), &Atom::Text("amplifier.sch".into()));
    let names: Vec<_> = doc.iter().filter_map(Node::name).collect();
    assert_eq!(
        names,
        ["asciiHeader", "library", "netlist", "schematicDesign"]
    );

    let header = doc.find("asciiHeader", false).unwrap();
    let version: Vec<_> = header.find("asciiVersion", false).unwrap().iter().map(atom).collect();
    assert_eq!(version, [&Atom::Integer(3), &Atom::Integer(0)]);
    assert_eq!(header.get_str("fileAuthor").unwrap(), "");
}
