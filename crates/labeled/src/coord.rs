//! Axis coordinates: a name plus one typed value per position.

use std::fmt;

use skillcast_calendar::NoLeapDate;

/// One coordinate value.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordValue {
    /// Integer label (years, lead indices, member numbers).
    Int(i64),
    /// Real-valued label.
    Float(f64),
    /// Text label (season names).
    Label(String),
    /// Calendar date.
    Time(NoLeapDate),
}

impl CoordValue {
    /// Numeric view of the value. Dates map to their day ordinal.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CoordValue::Int(v) => Some(*v as f64),
            CoordValue::Float(v) => Some(*v),
            CoordValue::Time(d) => Some(d.days_since_epoch() as f64),
            CoordValue::Label(_) => None,
        }
    }

    /// Label equality used for selection and joins.
    ///
    /// Integer and float values compare numerically; other kinds only match
    /// their own kind.
    pub fn matches(&self, other: &CoordValue) -> bool {
        match (self, other) {
            (CoordValue::Int(a), CoordValue::Int(b)) => a == b,
            (CoordValue::Int(a), CoordValue::Float(b))
            | (CoordValue::Float(b), CoordValue::Int(a)) => *a as f64 == *b,
            (CoordValue::Float(a), CoordValue::Float(b)) => a == b,
            (CoordValue::Label(a), CoordValue::Label(b)) => a == b,
            (CoordValue::Time(a), CoordValue::Time(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for CoordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordValue::Int(v) => write!(f, "{v}"),
            CoordValue::Float(v) => write!(f, "{v}"),
            CoordValue::Label(s) => write!(f, "\"{s}\""),
            CoordValue::Time(d) => write!(f, "{:04}-{:02}-{:02}", d.year(), d.month(), d.day()),
        }
    }
}

impl From<i64> for CoordValue {
    fn from(v: i64) -> Self {
        CoordValue::Int(v)
    }
}

impl From<i32> for CoordValue {
    fn from(v: i32) -> Self {
        CoordValue::Int(v as i64)
    }
}

impl From<f64> for CoordValue {
    fn from(v: f64) -> Self {
        CoordValue::Float(v)
    }
}

impl From<&str> for CoordValue {
    fn from(v: &str) -> Self {
        CoordValue::Label(v.to_string())
    }
}

impl From<String> for CoordValue {
    fn from(v: String) -> Self {
        CoordValue::Label(v)
    }
}

impl From<NoLeapDate> for CoordValue {
    fn from(v: NoLeapDate) -> Self {
        CoordValue::Time(v)
    }
}

/// The coordinate values of one axis, stored by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordValues {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Label(Vec<String>),
    Time(Vec<NoLeapDate>),
}

impl CoordValues {
    /// Integer coordinates `start, start + 1, ..` of length `n`.
    pub fn range(start: i64, n: usize) -> Self {
        CoordValues::Int((0..n as i64).map(|k| start + k).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            CoordValues::Int(v) => v.len(),
            CoordValues::Float(v) => v.len(),
            CoordValues::Label(v) => v.len(),
            CoordValues::Time(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<CoordValue> {
        match self {
            CoordValues::Int(v) => v.get(index).map(|&x| CoordValue::Int(x)),
            CoordValues::Float(v) => v.get(index).map(|&x| CoordValue::Float(x)),
            CoordValues::Label(v) => v.get(index).map(|x| CoordValue::Label(x.clone())),
            CoordValues::Time(v) => v.get(index).map(|&x| CoordValue::Time(x)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CoordValue> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// First position whose value matches `value`.
    pub fn position(&self, value: &CoordValue) -> Option<usize> {
        self.iter().position(|v| v.matches(value))
    }

    /// Values at `positions`, in that order. Positions must be in bounds.
    pub fn select(&self, positions: &[usize]) -> Self {
        match self {
            CoordValues::Int(v) => CoordValues::Int(positions.iter().map(|&i| v[i]).collect()),
            CoordValues::Float(v) => CoordValues::Float(positions.iter().map(|&i| v[i]).collect()),
            CoordValues::Label(v) => {
                CoordValues::Label(positions.iter().map(|&i| v[i].clone()).collect())
            }
            CoordValues::Time(v) => CoordValues::Time(positions.iter().map(|&i| v[i]).collect()),
        }
    }

    /// Numeric view: integers and floats as-is, dates as day ordinals.
    /// `None` for text labels.
    pub fn as_f64(&self) -> Option<Vec<f64>> {
        match self {
            CoordValues::Int(v) => Some(v.iter().map(|&x| x as f64).collect()),
            CoordValues::Float(v) => Some(v.clone()),
            CoordValues::Time(v) => Some(v.iter().map(|d| d.days_since_epoch() as f64).collect()),
            CoordValues::Label(_) => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            CoordValues::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_times(&self) -> Option<&[NoLeapDate]> {
        match self {
            CoordValues::Time(v) => Some(v),
            _ => None,
        }
    }

    /// Short name of the value kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CoordValues::Int(_) => "int",
            CoordValues::Float(_) => "float",
            CoordValues::Label(_) => "label",
            CoordValues::Time(_) => "time",
        }
    }

    /// Whether values of the two axes can be matched against each other.
    pub fn comparable(&self, other: &CoordValues) -> bool {
        matches!(
            (self, other),
            (
                CoordValues::Int(_) | CoordValues::Float(_),
                CoordValues::Int(_) | CoordValues::Float(_)
            ) | (CoordValues::Label(_), CoordValues::Label(_))
                | (CoordValues::Time(_), CoordValues::Time(_))
        )
    }

    /// Element-wise [`CoordValue::matches`] over two equal-length axes.
    pub fn matches(&self, other: &CoordValues) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a.matches(&b))
    }
}

impl From<Vec<i64>> for CoordValues {
    fn from(v: Vec<i64>) -> Self {
        CoordValues::Int(v)
    }
}

impl From<Vec<i32>> for CoordValues {
    fn from(v: Vec<i32>) -> Self {
        CoordValues::Int(v.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<f64>> for CoordValues {
    fn from(v: Vec<f64>) -> Self {
        CoordValues::Float(v)
    }
}

impl From<Vec<String>> for CoordValues {
    fn from(v: Vec<String>) -> Self {
        CoordValues::Label(v)
    }
}

impl From<Vec<&str>> for CoordValues {
    fn from(v: Vec<&str>) -> Self {
        CoordValues::Label(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<NoLeapDate>> for CoordValues {
    fn from(v: Vec<NoLeapDate>) -> Self {
        CoordValues::Time(v)
    }
}

/// A named axis with its coordinate values.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub(crate) name: String,
    pub(crate) values: CoordValues,
}

impl Coordinate {
    pub fn new(name: impl Into<String>, values: impl Into<CoordValues>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &CoordValues {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
