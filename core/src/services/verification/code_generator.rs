//! Verification code generation

use rand::{rngs::OsRng, RngCore};

use crate::domain::entities::verification_code::DEFAULT_CODE_LENGTH;
use crate::errors::DomainError;

/// Uppercase letters and digits without the look-alikes 0/O and 1/I
const ALPHANUMERIC: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";
const NUMERIC: &[u8] = b"0123456789";

/// Produces fresh, unguessable codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> Result<String, DomainError>;
}

/// Symbol set a generated code is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeAlphabet {
    #[default]
    Alphanumeric,
    Numeric,
}

impl CodeAlphabet {
    fn symbols(&self) -> &'static [u8] {
        match self {
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Numeric => NUMERIC,
        }
    }
}

/// Code generator backed by the operating system CSPRNG
///
/// Symbols are picked by rejection sampling so every symbol is equally likely.
#[derive(Debug, Clone)]
pub struct SecureCodeGenerator {
    length: usize,
    alphabet: CodeAlphabet,
}

impl SecureCodeGenerator {
    pub fn new(length: usize, alphabet: CodeAlphabet) -> Self {
        Self { length, alphabet }
    }

    /// Six-digit numeric codes
    pub fn numeric() -> Self {
        Self::new(6, CodeAlphabet::Numeric)
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for SecureCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH, CodeAlphabet::default())
    }
}

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self) -> Result<String, DomainError> {
        if self.length == 0 {
            return Err(DomainError::Validation {
                message: "Code length must be greater than zero".to_string(),
            });
        }

        let symbols = self.alphabet.symbols();
        // Largest multiple of the alphabet size that fits in a byte
        let limit = 256 - (256 % symbols.len());

        let mut code = String::with_capacity(self.length);
        let mut buf = [0u8; 32];
        while code.len() < self.length {
            OsRng.try_fill_bytes(&mut buf).map_err(|e| DomainError::Internal {
                message: format!("Random source unavailable: {}", e),
            })?;

            for &byte in buf.iter() {
                if (byte as usize) >= limit {
                    continue;
                }
                code.push(symbols[byte as usize % symbols.len()] as char);
                if code.len() == self.length {
                    break;
                }
            }
        }

        Ok(code)
    }
}
