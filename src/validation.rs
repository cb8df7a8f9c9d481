//! Input validation for gateway request fields
//!
//! Validated newtypes with private fields, so a value of one of these types
//! is guaranteed to have passed its rules. All request parsing goes through
//! the public constructors.

use std::fmt;

// ============================================================================
// Validation Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid length for {field}: expected {min}-{max} characters, got {actual}")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Invalid format for {field}: '{value}' (expected: {expected})")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Unsupported currency: '{0}'")]
    UnsupportedCurrency(String),
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let n = value.len();
    if n < min || n > max {
        return Err(ValidationError::InvalidLength {
            field,
            min,
            max,
            actual: n,
        });
    }
    Ok(())
}

// ============================================================================
// Currency - Supported Currency Codes
// ============================================================================

/// Validated ISO currency code (restricted to the supported set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Brl,
}

impl Currency {
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        match code {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "BRL" => Ok(Currency::Brl),
            other => Err(ValidationError::UnsupportedCurrency(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Brl => "BRL",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Username - Validated Login Name (Private Field)
// ============================================================================

/// Validated username (lowercase letters, digits, underscore; 3-100 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        check_length("username", name, 3, 100)?;

        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ValidationError::InvalidFormat {
                field: "username",
                value: name.to_string(),
                expected: "lowercase letters, digits, underscore only",
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Owner - Validated Account Owner Name
// ============================================================================

/// Validated account owner (letters and spaces; 3-100 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        check_length("owner", name, 3, 100)?;

        if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
            return Err(ValidationError::InvalidFormat {
                field: "owner",
                value: name.to_string(),
                expected: "letters and spaces only",
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated person name (same rules as [`Owner`], reported as `full_name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName(String);

impl FullName {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        check_length("full_name", name, 3, 100)?;

        if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
            return Err(ValidationError::InvalidFormat {
                field: "full_name",
                value: name.to_string(),
                expected: "letters and spaces only",
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// ============================================================================
// Password / Email
// ============================================================================

/// Validated raw password (only length-checked; hashing happens elsewhere)
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        check_length("password", raw, 6, 100)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never echo a password in logs or errors.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Validated email address (single '@' with non-empty local and domain parts,
/// domain containing at least one '.')
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(addr: &str) -> Result<Self, ValidationError> {
        check_length("email", addr, 3, 200)?;

        let invalid = || ValidationError::InvalidFormat {
            field: "email",
            value: addr.to_string(),
            expected: "local@domain.tld",
        };

        let (local, domain) = addr.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid());
        }
        if addr.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self(addr.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse() {
        assert_eq!(Currency::parse("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::parse("EUR").unwrap(), Currency::Eur);
        assert_eq!(Currency::parse("BRL").unwrap(), Currency::Brl);
        assert!(Currency::parse("usd").is_err());
        assert!(Currency::parse("XXX").is_err());
    }

    #[test]
    fn test_username_rules() {
        assert!(Username::new("alice_42").is_ok());
        assert!(Username::new("ab").is_err()); // too short
        assert!(Username::new("Alice").is_err()); // uppercase rejected
        assert!(Username::new("alice!").is_err());
    }

    #[test]
    fn test_owner_rules() {
        assert!(Owner::new("Jane Doe").is_ok());
        assert!(Owner::new("  Jane Doe  ").is_ok()); // trimmed
        assert!(Owner::new("JD").is_err());
        assert!(Owner::new("Jane123").is_err());
    }

    #[test]
    fn test_full_name_rules() {
        assert!(FullName::new("Jane Doe").is_ok());
        assert!(FullName::new("J4ne").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(Password::new("secret").is_ok());
        assert!(Password::new("short").is_err());
        let p = Password::new("hunter2222").unwrap();
        assert_eq!(format!("{:?}", p), "Password(***)");
    }

    #[test]
    fn test_email_rules() {
        assert!(EmailAddress::new("a@b.com").is_ok());
        assert!(EmailAddress::new("no-at-sign").is_err());
        assert!(EmailAddress::new("two@@b.com").is_err());
        assert!(EmailAddress::new("a@nodot").is_err());
        assert!(EmailAddress::new("a@b.com ").is_err());
    }
}
