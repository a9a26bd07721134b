#![cfg(test)]

use super::*;

fn collect<'t>(quoter: &Quoter, text: &'t str) -> Vec<Segment<'t>> {
    quoter.parse(text).collect()
}

#[test]
fn test_is_escaped() {
    let escape = Some("\\");
    for run in 0..6 {
        let text = format!("a{}'", "\\".repeat(run));
        assert_eq!(
            is_escaped(&text, run + 1, escape),
            run % 2 == 1,
            "A quote after {run} escapes should be escaped only for odd runs."
        );
    }

    assert!(!is_escaped(r"\'", 1, None), "Without an escape token nothing is escaped.");
    assert!(!is_escaped(r"\'", 1, Some("")), "An empty escape token escapes nothing.");
    assert!(!is_escaped("'", 0, escape), "The start of the text can't be escaped.");
    assert!(is_escaped(r"x\", 10, escape), "Positions past the end should be clamped.");

    assert!(is_escaped("a%%%'", 4, Some("%")));
    assert!(is_escaped("a!!'", 3, Some("!!")), "Multi-char tokens should be counted whole.");
    assert!(!is_escaped("a!!!!'", 5, Some("!!")));
    assert!(!is_escaped("a!'", 2, Some("!!")), "A partial token shouldn't count.");
    assert!(is_escaped("é\\'", 3, escape), "Multi-byte chars before the run should be fine.");
}

#[test]
fn test_find_next() {
    let found = find_next("isn't a 'quoted' string", &["'", "\""], Some("\\"));
    assert_eq!(found, Ok(Some(NeedleMatch { position: 3, index: 0, len: 1 })));

    let found = find_next(r"isn\'t a 'quoted' string", &["'", "\""], Some("\\"));
    assert_eq!(
        found,
        Ok(Some(NeedleMatch { position: 9, index: 0, len: 1 })),
        "The escaped quote should be skipped."
    );

    assert_eq!(
        find_next(r#"\' \" x"#, &["'", "\""], Some("\\")),
        Ok(None),
        "All occurrences being escaped should be a miss."
    );
    assert_eq!(find_next("", &["'"], None), Ok(None));
}

#[test]
fn test_find_next_ties_and_overlaps() {
    let found = find_next("a <<b", &["<", "<<"], None);
    assert_eq!(
        found.map(|m| m.map(|m| (m.position, m.index))),
        Ok(Some((2, 0))),
        "Ties at the same offset should go to the first declared needle."
    );

    let found = find_next("a <<b", &["<<", "<"], None);
    assert_eq!(found.map(|m| m.map(|m| (m.index, m.len))), Ok(Some((0, 2))));

    let found = find_next("ab'''", &["''"], Some("'"));
    assert_eq!(
        found.map(|m| m.map(|m| m.position)),
        Ok(Some(2)),
        "An unescaped match should be found before overlapping ones."
    );

    let found = find_next(r"\''", &["''"], Some("\\"));
    assert_eq!(
        found.map(|m| m.map(|m| m.position)),
        Ok(None),
        "An escaped match at the end shouldn't be retried past the haystack."
    );

    let found = find_next(r"\'''", &["''"], Some("\\"));
    assert_eq!(
        found.map(|m| m.map(|m| m.position)),
        Ok(Some(2)),
        "A match overlapping an escaped one should still be found."
    );
}

#[test]
fn test_find_next_errors() {
    let none: [&str; 0] = [];
    assert_eq!(find_next("text", &none, None), Err(ScanError::NoNeedles(NoNeedlesError)));
    assert_eq!(
        find_next("text", &["'", ""], None),
        Err(ScanError::EmptyNeedle(EmptyNeedleError { index: 1 }))
    );
}

#[test]
fn test_parse_basic() {
    let quoter = Quoter::default();
    let segments = collect(&quoter, "string 'with' quotes");

    assert_eq!(
        segments,
        [
            Segment::Unquoted("string "),
            Segment::Quoted(QuotedSpan {
                raw: "'with'",
                open: "'",
                body: "with",
                close: Some("'"),
            }),
            Segment::Unquoted(" quotes"),
        ]
    );
    assert_eq!(segments.iter().map(Segment::raw).collect::<String>(), "string 'with' quotes");

    assert!(collect(&quoter, "").is_empty(), "Empty text should produce no segments.");
    assert_eq!(collect(&quoter, "plain"), [Segment::Unquoted("plain")]);
}

#[test]
fn test_parse_adjacent_and_nested() {
    let quoter = Quoter::default();

    let segments = collect(&quoter, r#"'a'"b"'c'"#);
    assert_eq!(segments.len(), 3, "Adjacent spans shouldn't produce empty runs between them.");
    assert!(segments.iter().all(Segment::is_quoted));
    assert_eq!(segments.iter().map(Segment::text).collect::<Vec<_>>(), ["a", "b", "c"]);

    let segments = collect(&quoter, r#"say "it's" now"#);
    assert_eq!(
        segments[1].text(),
        "it's",
        "A different quote inside a span shouldn't close it."
    );
    assert_eq!(segments.len(), 3);

    let segments = collect(&quoter, r"'it\'s' done");
    assert_eq!(segments[0].text(), r"it\'s", "Escaped close delimiters shouldn't close a span.");
    assert_eq!(segments[1], Segment::Unquoted(" done"));

    let segments = collect(&quoter, r"'ends with \\' done");
    assert_eq!(
        segments[0].text(),
        r"ends with \\",
        "An escaped escape token shouldn't escape the close delimiter."
    );
}

#[test]
fn test_parse_unterminated() {
    let quoter = Quoter::default();
    let segments = collect(&quoter, "before 'never closed");

    assert_eq!(segments.len(), 2);
    assert!(segments[1].is_unterminated());
    assert_eq!(segments[1].text(), "never closed");
    assert_eq!(segments[1].raw(), "'never closed");
    assert_eq!(segments.iter().map(Segment::raw).collect::<String>(), "before 'never closed");

    let segments = collect(&quoter, "'");
    assert_eq!(
        segments,
        [Segment::Quoted(QuotedSpan { raw: "'", open: "'", body: "", close: None })]
    );
}

#[test]
fn test_parse_multi_char_delimiters() {
    let quoter = Quoter::builder()
        .pair("<<", ">>")
        .pair_multi("[", ["]", "|"])
        .pair("<", ">")
        .escape("\\")
        .build()
        .unwrap();

    let segments = collect(&quoter, "a <<b>c>> d [e|f] <g>");
    assert_eq!(
        segments.iter().map(Segment::raw).collect::<Vec<_>>(),
        ["a ", "<<b>c>>", " d ", "[e|", "f] ", "<g>"]
    );
    assert_eq!(
        segments[3],
        Segment::Quoted(QuotedSpan { raw: "[e|", open: "[", body: "e", close: Some("|") })
    );
}

#[test]
fn test_parse_escape_in_open_delimiter() {
    let quoter = Quoter::builder().pair("(\\", ")").escape("\\").build().unwrap();
    let segments = collect(&quoter, r"(\) z)");
    assert_eq!(
        segments.iter().map(Segment::raw).collect::<Vec<_>>(),
        [r"(\)", " z)"],
        "The escape inside the open delimiter shouldn't escape the body."
    );
}

#[test]
fn test_parse_restartable() {
    let quoter = Quoter::default();
    let mut segments = quoter.parse("a 'b' c");
    assert_eq!(segments.next(), Some(Segment::Unquoted("a ")));

    let restarted = segments.clone();
    assert_eq!(segments.remainder(), "'b' c");
    assert_eq!(segments.count(), 2);
    assert_eq!(restarted.count(), 2, "A cloned iterator should scan the rest again.");

    let mut segments = quoter.parse("done");
    assert!(segments.next().is_some());
    assert!(segments.next().is_none());
    assert!(segments.next().is_none(), "The iterator should be fused.");
}

#[test]
fn test_strip_split_unquote() {
    let quoter = Quoter::default();

    assert_eq!(quoter.strip(r#"a 'b' c "d" e"#), "a  c  e");
    assert_eq!(quoter.strip("a 'unterminated"), "a ");

    assert_eq!(quoter.split("a,'b,c',d", ",").unwrap(), ["a", "'b,c'", "d"]);
    assert_eq!(quoter.split(r"a\,b,c", ",").unwrap(), [r"a\,b", "c"]);
    assert_eq!(quoter.split(",", ",").unwrap(), ["", ""]);
    assert_eq!(quoter.split("", ",").unwrap(), [""]);
    assert_eq!(
        quoter.split(r"a\,,,b", ",,").unwrap(),
        [r"a\,", "b"],
        "A separator overlapping an escaped one should still split."
    );
    assert!(quoter.split("a", "").is_err_and(|e| e.is_empty_needle()));

    assert_eq!(quoter.unquote(r#""x""#), Some("x"));
    assert_eq!(quoter.unquote("x"), None);
    assert_eq!(quoter.unquote(""), None);
}

#[test]
fn test_quote_round_trip() {
    let quoter = Quoter::default();
    for text in ["", "plain", "it's", r"back\slash", r"\'", "'''", "ü'ñ"] {
        let quoted = quoter.quote(text);
        let body = quoter.unquote(&quoted);
        assert!(body.is_some(), "{quoted} should parse as a single span.");
        assert_eq!(quoter.unescape(body.unwrap()), text);
    }

    let multi = Quoter::builder().pair_multi("<<", [">>", "END"]).build().unwrap();
    for text in ["xENDy", "a>b", "x>", "EN", ">>END", r"\END"] {
        let quoted = multi.quote(text);
        let body = multi.unquote(&quoted);
        assert!(body.is_some(), "{quoted} should parse as a single span.");
        assert_eq!(multi.unescape(body.unwrap()), text);
    }
    assert_eq!(multi.quote("xENDy"), r"<<x\ENDy>>");

    let raw = Quoter::builder().pair("`", "`").no_escape().build().unwrap();
    assert_eq!(raw.quote("a\\b"), "`a\\b`");
    assert_eq!(raw.unescape("a\\b"), "a\\b");
}

#[test]
fn test_builder_errors() {
    assert_eq!(Quoter::builder().build(), Err(ConfigError::NoPairs(NoPairsError)));
    assert_eq!(
        Quoter::builder().pair_multi("'", Vec::<String>::new()).build(),
        Err(ConfigError::MissingClose(MissingCloseError { open: String::from("'") }))
    );
    assert!(Quoter::builder().pair("", "'").build().is_err_and(|e| e.is_empty_delimiter()));
    assert!(Quoter::builder().pair("'", "").build().is_err_and(|e| e.is_empty_delimiter()));
    assert!(Quoter::builder().pair("'", "'").escape("").build().is_err_and(|e| e.is_empty_escape()));

    let quoter = Quoter::builder().pair("'", "'").build().unwrap();
    assert_eq!(quoter.escape(), Some("\\"), "The builder should default to a backslash escape.");
    assert_eq!(quoter.pairs(), [QuotePair::new("'", "'")]);
}
