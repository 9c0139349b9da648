use super::*;
use pretty_assertions::assert_eq;

/// Helper: raw-tokenize and return `(text, kind)` pairs.
fn raw(source: &str) -> Vec<(String, RawKind)> {
    RawLexer::new(source.as_bytes())
        .map(|t| {
            let t = t.unwrap();
            (String::from_utf8(t.data).unwrap(), t.kind)
        })
        .collect()
}

fn tok(text: &str, kind: RawKind) -> (String, RawKind) {
    (text.to_owned(), kind)
}

#[test]
fn irregular_spacing_fixture() {
    use RawKind::*;
    let data = "\n\t\tgroup {\n\t\t\tauthoritative ;\n\t\t\toption domain-name-servers 1.2.3.4, 5.6.7.8;\n\t\t\tif \"foo\"=\"foo\"{\n\t\t\t\thost serverA.myDomain.tld{\n\t\t\t\t\thardware ethernet 0:01:a2:3b:4:50;\n\t\t\t\t\tfixed-address 1.2.3.4, 5.6.7.8;\n\t\t\t\t}\n\t\t\t}\n\t\t}";

    let expected = vec![
        tok("\n\t\t", Whitespace),
        tok("group", Identifier),
        tok(" ", Whitespace),
        tok("{", BlockStart),
        tok("\n\t\t\t", Whitespace),
        tok("authoritative", Identifier),
        tok(" ", Whitespace),
        tok(";", Semicolon),
        tok("\n\t\t\t", Whitespace),
        tok("option", Identifier),
        tok(" ", Whitespace),
        tok("domain-name-servers", Identifier),
        tok(" ", Whitespace),
        tok("1.2.3.4", Identifier),
        tok(",", Comma),
        tok(" ", Whitespace),
        tok("5.6.7.8", Identifier),
        tok(";", Semicolon),
        tok("\n\t\t\t", Whitespace),
        tok("if", Identifier),
        tok(" ", Whitespace),
        tok("\"foo\"", String),
        tok("=", Identifier),
        tok("\"foo\"", String),
        tok("{", BlockStart),
        tok("\n\t\t\t\t", Whitespace),
        tok("host", Identifier),
        tok(" ", Whitespace),
        tok("serverA.myDomain.tld", Identifier),
        tok("{", BlockStart),
        tok("\n\t\t\t\t\t", Whitespace),
        tok("hardware", Identifier),
        tok(" ", Whitespace),
        tok("ethernet", Identifier),
        tok(" ", Whitespace),
        tok("0:01:a2:3b:4:50", Identifier),
        tok(";", Semicolon),
        tok("\n\t\t\t\t\t", Whitespace),
        tok("fixed-address", Identifier),
        tok(" ", Whitespace),
        tok("1.2.3.4", Identifier),
        tok(",", Comma),
        tok(" ", Whitespace),
        tok("5.6.7.8", Identifier),
        tok(";", Semicolon),
        tok("\n\t\t\t\t", Whitespace),
        tok("}", BlockEnd),
        tok("\n\t\t\t", Whitespace),
        tok("}", BlockEnd),
        tok("\n\t\t", Whitespace),
        tok("}", BlockEnd),
    ];
    assert_eq!(raw(data), expected);
}

#[test]
fn comment_then_newline_starts_whitespace() {
    use RawKind::*;
    assert_eq!(
        raw("a # note \"x\n  b"),
        vec![
            tok("a", Identifier),
            tok(" ", Whitespace),
            tok("# note \"x", Comment),
            tok("\n  ", Whitespace),
            tok("b", Identifier),
        ]
    );
}

#[test]
fn parentheses_are_single_byte_tokens() {
    use RawKind::*;
    assert_eq!(
        raw("(known)"),
        vec![
            tok("(", ParenOpen),
            tok("known", Identifier),
            tok(")", ParenClose),
        ]
    );
}

#[test]
fn string_keeps_structural_bytes() {
    use RawKind::*;
    assert_eq!(
        raw("\"a; {b} #c\";"),
        vec![tok("\"a; {b} #c\"", String), tok(";", Semicolon)]
    );
}

#[test]
fn spans_cover_token_bytes() {
    let spans: Vec<Span> = RawLexer::new("ab  \"c\";".as_bytes())
        .map(|t| t.unwrap().span)
        .collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 2),
            Span::new(2, 4),
            Span::new(4, 7),
            Span::new(7, 8)
        ]
    );
}

#[test]
fn unterminated_string_is_error() {
    let mut lexer = RawLexer::new("include \"foo".as_bytes());
    assert_eq!(lexer.next().unwrap().unwrap().kind, RawKind::Identifier);
    assert_eq!(lexer.next().unwrap().unwrap().kind, RawKind::Whitespace);
    assert!(matches!(
        lexer.next(),
        Some(Err(LexError::UnterminatedString { offset: 8 }))
    ));
    assert!(lexer.next().is_none());
}

#[test]
fn unterminated_comment_is_accepted() {
    use RawKind::*;
    assert_eq!(raw("x #tail"), vec![tok("x", Identifier), tok(" ", Whitespace), tok("#tail", Comment)]);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(raw("").is_empty());
}

#[test]
fn io_error_is_propagated() {
    struct Failing;
    impl Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }
    let mut lexer = RawLexer::new(Failing);
    assert!(matches!(lexer.next(), Some(Err(LexError::Io(_)))));
    assert!(lexer.next().is_none());
}

#[test]
fn stray_control_byte_is_an_identifier_wherever_it_sits() {
    use RawKind::*;
    assert_eq!(
        raw("a;\x01"),
        vec![tok("a", Identifier), tok(";", Semicolon), tok("\x01", Identifier)]
    );
    assert_eq!(
        raw("a; \x01"),
        vec![
            tok("a", Identifier),
            tok(";", Semicolon),
            tok(" ", Whitespace),
            tok("\x01", Identifier),
        ]
    );
}

#[test]
fn stray_control_bytes_group_until_a_boundary() {
    use RawKind::*;
    assert_eq!(
        raw(" \x01\x02 x"),
        vec![
            tok(" ", Whitespace),
            tok("\x01\x02", Identifier),
            tok(" ", Whitespace),
            tok("x", Identifier),
        ]
    );
}
