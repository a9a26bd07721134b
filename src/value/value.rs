use std::fmt::{self, Display, Formatter};

use derive_more::{From, IsVariant};

/// A single primitive value, the result of [`Value::reduce`].
#[derive(Debug, Clone, PartialEq, IsVariant)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// A dynamically typed value, which is either a [`Scalar`] or a list of further values.
///
/// Conversions between the variants are explicit and total: every coercion method is defined for
/// every variant, as listed on each method.
///
/// # Examples
/// ```
/// # use toolbelt::value::{Scalar, Value};
/// let value = Value::from(vec![Value::from(" 42 "), Value::Null]);
/// assert_eq!(value.reduce(), Scalar::Str(String::from(" 42 ")));
/// assert_eq!(value.int_val(), 42);
/// assert!(value.bool_val());
/// ```
#[derive(Debug, Clone, PartialEq, From, IsVariant)]
pub enum Value {
    #[from(ignore)]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Collapses self into its representative scalar.
    ///
    /// | Variant | Result |
    /// |-|-|
    /// | scalar | itself |
    /// | `List` | the first element, reduced |
    /// | empty `List` | `Null` |
    pub fn reduce(&self) -> Scalar {
        match self {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Int(i) => Scalar::Int(*i),
            Value::Float(f) => Scalar::Float(*f),
            Value::Str(s) => Scalar::Str(s.clone()),
            Value::List(items) => items.first().map_or(Scalar::Null, Value::reduce),
        }
    }

    /// Returns the numeric value of self, see [`Scalar::num_val`].
    pub fn num_val(&self) -> f64 {
        self.reduce().num_val()
    }

    /// Returns the integer value of self, see [`Scalar::int_val`].
    pub fn int_val(&self) -> i64 {
        self.reduce().int_val()
    }

    /// Returns the string value of self, see [`Scalar::str_val`].
    pub fn str_val(&self) -> String {
        self.reduce().str_val()
    }

    /// Returns the truthiness of self, see [`Scalar::bool_val`].
    pub fn bool_val(&self) -> bool {
        self.reduce().bool_val()
    }
}

impl Scalar {
    /// Returns the numeric value of self.
    ///
    /// | Variant | Result |
    /// |-|-|
    /// | `Null` | `0.0` |
    /// | `Bool` | `0.0` or `1.0` |
    /// | `Int` | the integer as a float |
    /// | `Float` | itself |
    /// | `Str` | the trimmed string parsed as a number, otherwise `0.0` |
    pub fn num_val(&self) -> f64 {
        match self {
            Scalar::Null => 0.0,
            Scalar::Bool(b) => f64::from(u8::from(*b)),
            Scalar::Int(i) => *i as f64,
            Scalar::Float(f) => *f,
            Scalar::Str(s) => parse_number(s).map_or(0.0, |number| number.num_val()),
        }
    }

    /// Returns the integer value of self. Follows [`Scalar::num_val`], except that integers and
    /// integer strings keep their full precision and floats are truncated toward zero (saturating,
    /// with NaN as `0`).
    pub fn int_val(&self) -> i64 {
        match self {
            Scalar::Null => 0,
            Scalar::Bool(b) => i64::from(*b),
            Scalar::Int(i) => *i,
            Scalar::Float(f) => *f as i64,
            Scalar::Str(s) => parse_number(s).map_or(0, |number| number.int_val()),
        }
    }

    /// Returns the string value of self.
    ///
    /// | Variant | Result |
    /// |-|-|
    /// | `Null` | `""` |
    /// | `Bool` | `"1"` or `""` |
    /// | `Int` | decimal digits |
    /// | `Float` | the shortest representation, so `2.0` becomes `"2"` |
    /// | `Str` | itself |
    pub fn str_val(&self) -> String {
        match self {
            Scalar::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Returns the truthiness of self. `Null`, `false`, zero, `""` and `"0"` are false and
    /// everything else is true.
    pub fn bool_val(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::Int(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Str(s) => !(s.is_empty() || s == "0"),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null | Scalar::Bool(false) => Ok(()),
            Scalar::Bool(true) => write!(f, "1"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Value {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(i) => Value::Int(i),
            Scalar::Float(f) => Value::Float(f),
            Scalar::Str(s) => Value::Str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Value {
        value.map_or(Value::Null, Into::into)
    }
}

/// Parses a trimmed numeric string as an integer if possible, otherwise as a finite float.
fn parse_number(s: &str) -> Option<Scalar> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(Scalar::Int(i));
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Scalar::Float)
}
