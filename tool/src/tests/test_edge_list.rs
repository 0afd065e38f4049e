#![allow(missing_docs)]

use super::*;

#[test]
fn comments_and_default_weights() {
    let input = "# a small graph\n0 1 5\n\n  2 3\n1 2 -4\n";
    let list = parse(input.as_bytes()).unwrap();
    assert_eq!(
        list.edges,
        vec![Edge::new(0, 1, 5), Edge::new(2, 3, 0), Edge::new(1, 2, -4)]
    );
    assert_eq!(list.lines, vec![2, 4, 5]);
    assert_eq!(list.node_count, 4);
}

#[test]
fn empty_input() {
    let list = parse("\n# nothing\n".as_bytes()).unwrap();
    assert!(list.edges.is_empty());
    assert_eq!(list.node_count, 0);
}

#[test]
fn errors_report_line_numbers() {
    let err = parse("0 1\n1 x\n".as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "line 2: invalid endpoint \"x\"");

    let err = parse("0\n".as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "line 1: missing endpoint");

    let err = parse("0 1 2 3\n".as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "line 1: unexpected trailing field \"3\"");

    let err = parse("0 1 heavy\n".as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "line 1: invalid weight \"heavy\"");

    let err = parse("0 1\n18446744073709551615 0\n".as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "line 2: endpoint too large");
}
