use super::*;
use crate::table::TokenTable;
use pretty_assertions::assert_eq;

/// Helper: tokenize `source`, link it, and return every balance index.
fn balances(source: &str) -> Vec<u32> {
    let mut table = TokenTable::with_capacity(8);
    let mut offset = 0;
    for tok in css_lexer_core::tokenize(source) {
        table.push(tok.tag, offset, offset + tok.len);
        offset += tok.len;
    }
    link(table.records_mut());
    table.records().iter().map(|r| r.balance).collect()
}

#[test]
fn flat_tokens_keep_own_index() {
    // a ␣ b
    assert_eq!(balances("a b"), vec![0, 1, 2]);
}

#[test]
fn simple_pair() {
    // ( a )
    assert_eq!(balances("(a)"), vec![2, 2, 0]);
}

#[test]
fn function_closes_with_parenthesis() {
    // f( 1 )
    assert_eq!(balances("f(1)"), vec![2, 2, 0]);
}

#[test]
fn nested_groups() {
    // { ( a ) b }
    assert_eq!(balances("{(a)b}"), vec![5, 3, 3, 1, 5, 0]);
}

#[test]
fn all_bracket_kinds() {
    // [ { } ] ( )
    assert_eq!(balances("[{}]()"), vec![3, 2, 1, 0, 5, 4]);
}

#[test]
fn unmatched_opener_keeps_own_index() {
    // ( a
    assert_eq!(balances("(a"), vec![0, 1]);
    // x { ( )
    assert_eq!(balances("x{()"), vec![0, 1, 3, 2]);
}

#[test]
fn stray_closer_at_top_level() {
    // a ) b
    assert_eq!(balances("a)b"), vec![0, 1, 2]);
}

#[test]
fn stray_closer_inside_group() {
    // ( ] )  -- the `]` belongs to the parenthesized group
    assert_eq!(balances("(])"), vec![2, 2, 0]);
}

#[test]
fn mismatched_closer_does_not_close_outer() {
    // f( [ { } )  -- `)` cannot close `[`, so both stay open
    assert_eq!(balances("f([{})"), vec![0, 1, 3, 2, 4]);
}

#[test]
fn sibling_groups_after_close() {
    // ( ) a ␣ ( b )
    assert_eq!(balances("()a (b)"), vec![1, 0, 2, 3, 6, 6, 4]);
}

#[test]
fn function_token_opens_group() {
    // ( ) a( b )  -- `a(` is a single Function token
    assert_eq!(balances("()a(b)"), vec![1, 0, 4, 4, 2]);
}

#[test]
fn rule_block() {
    // . test ␣ { p : 1 ; }
    let got = balances(".test {p:1;}");
    assert_eq!(got, vec![0, 1, 2, 8, 8, 8, 8, 8, 3]);
}

#[test]
fn empty_table() {
    assert_eq!(balances(""), Vec::<u32>::new());
}

#[test]
fn deep_nesting_is_iterative() {
    let depth = 50_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let got = balances(&source);
    assert_eq!(got.len(), depth * 2);
    assert_eq!(got[0] as usize, depth * 2 - 1);
    assert_eq!(got[depth - 1] as usize, depth);
    assert_eq!(got[depth] as usize, depth - 1);
}
