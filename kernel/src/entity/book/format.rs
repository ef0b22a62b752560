use rust_decimal::Decimal;

use crate::entity::Book;

/// Layouts understood by [`Book::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFormat {
    /// `G`: every field, labelled.
    General,
    /// `S`: author and title.
    Short,
    /// `C`: short form plus quoted publishing house and year.
    Citation,
    /// `O`: citation prefixed by ISBN and followed by pages amount.
    Reference,
    /// `F`: reference form followed by price.
    Full,
}

impl BookFormat {
    /// Unknown or empty codes fall back to [`BookFormat::General`].
    pub fn from_code(code: &str) -> Self {
        match normalize_code(code).as_str() {
            "S" => Self::Short,
            "C" => Self::Citation,
            "O" => Self::Reference,
            "F" => Self::Full,
            _ => Self::General,
        }
    }
}

pub(crate) fn normalize_code(code: &str) -> String {
    let code = code.trim();
    if code.is_empty() {
        String::from("G")
    } else {
        code.to_uppercase()
    }
}

/// Culture-like settings used while rendering a book.
pub trait FormatProvider {
    fn decimal_separator(&self) -> &str {
        "."
    }

    fn format_decimal(&self, value: &Decimal) -> String {
        let rendered = value.to_string();
        match self.decimal_separator() {
            "." => rendered,
            separator => rendered.replacen('.', separator, 1),
        }
    }

    /// Hook for providers that render some codes themselves.
    /// `code` is already trimmed and upper-cased.
    fn custom_format(&self, _code: &str, _book: &Book) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_separator: String,
}

impl NumberFormat {
    pub fn new(decimal_separator: impl Into<String>) -> Self {
        Self {
            decimal_separator: decimal_separator.into(),
        }
    }

    pub fn invariant() -> Self {
        Self::new(".")
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

impl FormatProvider for NumberFormat {
    fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }
}
