use radix_core::{NumeralSystem, ValidationError};

use super::*;

// --- Initial state ---

#[test]
fn test_starts_at_zero() {
    let session = make_session();
    assert_eq!(session.value(), 0);
    assert_eq!(session.active_system(), None);
    assert_eq!(session.display(NumeralSystem::Roman), "N");
    assert_eq!(session.display(NumeralSystem::Binary), "0");
    assert_eq!(session.display(NumeralSystem::Hex), "0");
}

#[test]
fn test_new_uses_default_settings() {
    let session = ConverterSession::new();
    assert_eq!(session.config().systems, NumeralSystem::ALL.to_vec());
    assert_eq!(session.config().roman_grammar, radix_core::RomanGrammar::Lenient);
}

// --- set_from_input ---

#[test]
fn test_set_from_input_updates_value() {
    let mut session = make_session();
    session.set_from_input("ff", NumeralSystem::Hex).unwrap();
    assert_eq!(session.value(), 255);
    assert_eq!(session.active_system(), Some(NumeralSystem::Hex));
}

#[test]
fn test_empty_input_is_zero() {
    for system in NumeralSystem::ALL {
        let mut session = make_session();
        session.set_value(42);
        session.set_from_input("", system).unwrap();
        assert_eq!(session.value(), 0, "{system}");
    }
}

#[test]
fn test_invalid_input_leaves_state_unchanged() {
    let mut session = make_session();
    session.set_from_input("101", NumeralSystem::Binary).unwrap();
    let err = session
        .set_from_input("12", NumeralSystem::Binary)
        .unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidCharacter {
            system: NumeralSystem::Binary,
            ch: '2',
            position: 1,
        }
    ));
    assert_eq!(session.value(), 5);
    assert_eq!(session.active_system(), Some(NumeralSystem::Binary));

    // A rejected edit in another system does not steal the active marker.
    assert!(session.set_from_input("G", NumeralSystem::Hex).is_err());
    assert_eq!(session.active_system(), Some(NumeralSystem::Binary));
}

#[test]
fn test_lenient_roman_grammar() {
    let mut session = make_session();
    session.set_from_input("IIII", NumeralSystem::Roman).unwrap();
    assert_eq!(session.value(), 4);
    assert_eq!(session.display(NumeralSystem::Roman), "IV");
}

#[test]
fn test_strict_roman_grammar() {
    let mut session = make_strict_session();
    let err = session
        .set_from_input("IIII", NumeralSystem::Roman)
        .unwrap_err();
    assert!(matches!(err, ValidationError::MalformedRoman { .. }));
    assert_eq!(session.value(), 0);
    session.set_from_input("iv", NumeralSystem::Roman).unwrap();
    assert_eq!(session.value(), 4);
}

#[test]
fn test_roman_input_clamps() {
    let mut session = make_session();
    session.set_from_input("MMMMM", NumeralSystem::Roman).unwrap();
    assert_eq!(session.value(), 3999);
}

#[test]
fn test_positional_input_saturates() {
    let mut session = make_session();
    session
        .set_from_input("99999999999", NumeralSystem::Decimal)
        .unwrap();
    assert_eq!(session.value(), u32::MAX);
    assert_eq!(session.display(NumeralSystem::Hex), "FFFFFFFF");
}

// --- Increment / decrement ---

#[test]
fn test_increment_decrement() {
    let mut session = make_session();
    assert_eq!(session.increment(), 1);
    assert_eq!(session.increment(), 2);
    assert_eq!(session.decrement(), 1);
    assert_eq!(session.value(), 1);
}

#[test]
fn test_decrement_floors_at_zero() {
    let mut session = make_session();
    assert_eq!(session.decrement(), 0);
    assert_eq!(session.value(), 0);
    assert_eq!(session.apply_delta(-1000), 0);
}

#[test]
fn test_increment_saturates_at_u32_max() {
    let mut session = make_session();
    session.set_value(u32::MAX);
    assert_eq!(session.increment(), u32::MAX);
    assert_eq!(session.apply_delta(-1), u32::MAX - 1);
}

#[test]
fn test_step_clears_active_system() {
    let mut session = make_session();
    session.set_from_input("7", NumeralSystem::Octal).unwrap();
    session.increment();
    assert_eq!(session.active_system(), None);
    assert_eq!(session.display(NumeralSystem::Octal), "10");
}

// --- Reset ---

#[test]
fn test_reset() {
    let mut session = make_session();
    session.set_from_input("MCM", NumeralSystem::Roman).unwrap();
    session.reset();
    assert_eq!(session.value(), 0);
    assert_eq!(session.active_system(), None);
    assert_eq!(session.display(NumeralSystem::Roman), "N");
}

// --- Keystroke filter ---

#[test]
fn test_accepts_char() {
    let session = make_session();
    assert!(session.accepts_char(NumeralSystem::Binary, '1'));
    assert!(!session.accepts_char(NumeralSystem::Binary, '2'));
    assert!(session.accepts_char(NumeralSystem::Hex, 'e'));
    assert!(session.accepts_char(NumeralSystem::Roman, 'x'));
    assert!(!session.accepts_char(NumeralSystem::Roman, '1'));
}
