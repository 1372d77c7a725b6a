//! City directory entries.

use std::fmt;

/// Validation errors returned when constructing a [`CityCode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityValidationError {
    /// The code is the empty string.
    EmptyCode,
    /// The code starts or ends with whitespace.
    PaddedCode,
}

impl fmt::Display for CityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCode => write!(f, "city code must not be empty"),
            Self::PaddedCode => write!(f, "city code must not start or end with whitespace"),
        }
    }
}

impl std::error::Error for CityValidationError {}

/// Short code identifying a city, such as `SBY`.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityCode(String);

impl CityCode {
    /// Validate and construct a [`CityCode`].
    ///
    /// # Errors
    /// Rejects empty input and input with leading or trailing whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, CityValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CityValidationError::EmptyCode);
        }
        if code.trim() != code {
            return Err(CityValidationError::PaddedCode);
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for CityCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CityCode> for String {
    fn from(value: CityCode) -> Self {
        value.0
    }
}

/// A city listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    code: CityCode,
    name: String,
    province: String,
}

impl City {
    /// Assemble a city from a validated code.
    pub fn new(code: CityCode, name: impl Into<String>, province: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            province: province.into(),
        }
    }

    /// Directory key.
    pub fn code(&self) -> &CityCode {
        &self.code
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Province the city belongs to.
    pub fn province(&self) -> &str {
        &self.province
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", CityValidationError::EmptyCode)]
    #[case("SBY ", CityValidationError::PaddedCode)]
    fn city_code_rejects_invalid_input(#[case] raw: &str, #[case] expected: CityValidationError) {
        assert_eq!(CityCode::new(raw), Err(expected));
    }

    #[rstest]
    fn city_code_is_case_sensitive() {
        let upper = CityCode::new("SBY").expect("valid code");
        let lower = CityCode::new("sby").expect("valid code");
        assert_ne!(upper, lower);
    }
}
