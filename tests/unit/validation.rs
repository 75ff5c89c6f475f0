//! Validating constructor and error reporting.

use catalan::{generate, CatalanTable, InvariantError, MODULUS};

#[test]
fn test_generated_table_round_trips_through_from_values() {
    let table = generate(100);
    let rebuilt = CatalanTable::from_values(table.clone().into_vec()).unwrap();
    assert_eq!(rebuilt, table);
}

#[test]
fn test_tampering_is_located() {
    let mut terms = generate(40).into_vec();
    terms[27] = (terms[27] + 1) % MODULUS;

    match CatalanTable::from_values(terms) {
        Err(InvariantError::RecurrenceMismatch { index, .. }) => assert_eq!(index, 27),
        other => panic!("expected RecurrenceMismatch at 27, got {:?}", other),
    }
}

#[test]
fn test_unreduced_value_is_rejected_before_recurrence() {
    let mut terms = generate(25).into_vec();
    terms[21] += MODULUS;

    assert_eq!(
        CatalanTable::from_values(terms.clone()),
        Err(InvariantError::OutOfRange {
            index: 21,
            value: terms[21],
        })
    );
}

#[test]
fn test_empty_and_bad_base_case() {
    assert_eq!(
        CatalanTable::from_values(vec![]),
        Err(InvariantError::EmptyTable)
    );
    assert_eq!(
        CatalanTable::from_values(vec![2]),
        Err(InvariantError::BadBaseCase { value: 2 })
    );
}

#[test]
fn test_json_deserialization_validates() {
    let json = serde_json::to_string(&generate(30)).unwrap();
    let table: CatalanTable = serde_json::from_str(&json).unwrap();
    assert_eq!(table, generate(30));

    let tampered = json.replacen("[1,1,2,5,", "[1,1,2,4,", 1);
    assert!(serde_json::from_str::<CatalanTable>(&tampered).is_err());
}
