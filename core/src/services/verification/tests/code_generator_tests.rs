use std::collections::HashSet;

use crate::services::verification::{CodeAlphabet, CodeGenerator, SecureCodeGenerator};

#[test]
fn test_default_code_shape() {
    let generator = SecureCodeGenerator::default();
    let code = generator.generate().unwrap();

    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert!(!code.contains(['0', '1', 'O', 'I']));
}

#[test]
fn test_numeric_codes() {
    let generator = SecureCodeGenerator::numeric();

    for _ in 0..50 {
        let code = generator.generate().unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_codes_are_pairwise_distinct() {
    let generator = SecureCodeGenerator::default();
    let codes: HashSet<String> = (0..1000).map(|_| generator.generate().unwrap()).collect();

    assert_eq!(codes.len(), 1000);
}

#[test]
fn test_long_codes_span_multiple_buffers() {
    let generator = SecureCodeGenerator::new(100, CodeAlphabet::Alphanumeric);
    assert_eq!(generator.generate().unwrap().len(), 100);
}

#[test]
fn test_zero_length_is_rejected() {
    let generator = SecureCodeGenerator::new(0, CodeAlphabet::Numeric);
    assert!(generator.generate().is_err());
}
