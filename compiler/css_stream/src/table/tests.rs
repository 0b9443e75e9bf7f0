use super::*;

#[test]
fn capacity_heuristic() {
    assert_eq!(initial_capacity_for(0), 16);
    assert_eq!(initial_capacity_for(3), 16);
    assert_eq!(initial_capacity_for(4), 17);
    assert_eq!(initial_capacity_for(400), 116);
}

#[test]
fn push_assigns_own_index_as_balance() {
    let mut table = TokenTable::with_capacity(4);
    table.push(TokenType::Ident, 0, 3);
    table.push(TokenType::Colon, 3, 4);
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].balance, 0);
    assert_eq!(table.records()[1].balance, 1);
    assert_eq!(table.records()[1].len(), 1);
}

#[test]
fn push_past_capacity_doubles() {
    let mut table = TokenTable::with_capacity(2);
    let initial = table.capacity();
    for i in 0..=initial {
        let start = u32::try_from(i).unwrap_or(u32::MAX);
        table.push(TokenType::Delim, start, start + 1);
    }
    assert!(table.capacity() >= initial * 2);
    assert_eq!(table.len(), initial + 1);
}

#[test]
fn growth_preserves_order() {
    let mut table = TokenTable::with_capacity(1);
    for i in 0..100u32 {
        table.push(TokenType::Delim, i, i + 1);
    }
    for (i, record) in table.records().iter().enumerate() {
        assert_eq!(record.start as usize, i);
        assert_eq!(record.balance as usize, i);
    }
}

#[test]
fn records_mut_writes_through() {
    let mut table = TokenTable::with_capacity(2);
    table.push(TokenType::LeftParenthesis, 0, 1);
    table.push(TokenType::RightParenthesis, 1, 2);
    table.records_mut()[0].balance = 1;
    assert_eq!(table.records()[0].balance, 1);
}

#[test]
fn empty_record() {
    let record = TokenRecord {
        tag: TokenType::Eof,
        start: 5,
        end: 5,
        balance: 0,
    };
    assert!(record.is_empty());
    assert_eq!(record.len(), 0);
}
