//! Data type definitions for sqleval.
//!
//! This module defines the closed set of semantic types a cell or literal can carry.

use core::fmt;
use core::str::FromStr;

/// Supported data types.
///
/// The canonical name of each type (see [`DataType::name`]) is what appears in
/// error messages and in the result header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point number
    Float,
    /// UTF-8 string
    Str,
    /// Boolean type (true/false)
    Bool,
}

impl DataType {
    /// Returns the canonical type name.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Str => "str",
            DataType::Bool => "bool",
        }
    }

    /// Returns whether values of this type are numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int | DataType::Float)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a declared type name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDataType;

impl FromStr for DataType {
    type Err = UnknownDataType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = if s.eq_ignore_ascii_case("int") || s.eq_ignore_ascii_case("integer") {
            DataType::Int
        } else if s.eq_ignore_ascii_case("float")
            || s.eq_ignore_ascii_case("real")
            || s.eq_ignore_ascii_case("double")
        {
            DataType::Float
        } else if s.eq_ignore_ascii_case("str")
            || s.eq_ignore_ascii_case("string")
            || s.eq_ignore_ascii_case("text")
        {
            DataType::Str
        } else if s.eq_ignore_ascii_case("bool") || s.eq_ignore_ascii_case("boolean") {
            DataType::Bool
        } else {
            return Err(UnknownDataType);
        };
        Ok(parsed)
    }
}
