//! Password policy enforced by the credential store on registration

use crate::errors::StoreError;

/// Password complexity rules
///
/// Violations are reported all together as code+description pairs, the
/// same shape the rest of the store-level errors use, so callers see one
/// aggregated failure.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length
    pub min_length: usize,
    /// Require at least one digit
    pub require_digit: bool,
    /// Require at least one lowercase letter
    pub require_lowercase: bool,
    /// Require at least one uppercase letter
    pub require_uppercase: bool,
    /// Require at least one non-alphanumeric character
    pub require_non_alphanumeric: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
            require_non_alphanumeric: true,
        }
    }
}

impl PasswordPolicy {
    /// Check a candidate password, returning every rule it violates
    pub fn check(&self, password: &str) -> Vec<StoreError> {
        let mut violations = Vec::new();

        if password.chars().count() < self.min_length {
            violations.push(StoreError::new(
                "PasswordTooShort",
                format!("Passwords must be at least {} characters.", self.min_length),
            ));
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push(StoreError::new(
                "PasswordRequiresDigit",
                "Passwords must have at least one digit ('0'-'9').",
            ));
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
            violations.push(StoreError::new(
                "PasswordRequiresLower",
                "Passwords must have at least one lowercase ('a'-'z').",
            ));
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            violations.push(StoreError::new(
                "PasswordRequiresUpper",
                "Passwords must have at least one uppercase ('A'-'Z').",
            ));
        }
        if self.require_non_alphanumeric && password.chars().all(|c| c.is_ascii_alphanumeric()) {
            violations.push(StoreError::new(
                "PasswordRequiresNonAlphanumeric",
                "Passwords must have at least one non alphanumeric character.",
            ));
        }

        violations
    }
}
