use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub mod comparator;
pub mod natural;
pub use comparator::{compare_rows, sort_rows, sorted_ids, RowComparator};
pub use natural::{natural_cmp, NaturalOrder};

/// Column holding the stable row identifier.
pub const ID_COLUMN: &str = "id";

/// A single cell of the cluster table.
///
/// Numbers keep their JSON form, so integers stay exact and are written
/// back without a fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(Number),
    Text(String),
    Null,
}

static NULL_VALUE: CellValue = CellValue::Null;

/// Largest integer every `f64` below it represents exactly.
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_992.0;

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(value) => write!(f, "{value}"),
            CellValue::Number(value) => write!(f, "{value}"),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(CellValue::Null, CellValue::Number)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(Number::from(value))
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        CellValue::Number(Number::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Read access to a table row. The comparator never mutates rows.
pub trait RowValues {
    fn row_id(&self) -> u64;

    /// Value of `column`, `None` when the row does not carry it.
    fn value(&self, column: &str) -> Option<&CellValue>;

    fn value_or_null(&self, column: &str) -> &CellValue {
        self.value(column).unwrap_or(&NULL_VALUE)
    }
}

/// A cluster record as exposed by the cluster view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, CellValue>",
    into = "BTreeMap<String, CellValue>"
)]
pub struct Row {
    id: u64,
    values: BTreeMap<String, CellValue>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RowError {
    #[error("row has no 'id' column")]
    MissingId,
    #[error("row id must be a non-negative integer, got '{0}'")]
    InvalidId(String),
}

impl Row {
    pub fn new(id: u64) -> Self {
        let mut values = BTreeMap::new();
        values.insert(ID_COLUMN.to_string(), CellValue::from(id));
        Self { id, values }
    }

    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.set(column, value);
        self
    }

    /// Sets a column value. The id column is fixed at construction.
    pub fn set(&mut self, column: &str, value: impl Into<CellValue>) {
        if column == ID_COLUMN {
            return;
        }
        self.values.insert(column.to_string(), value.into());
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl RowValues for Row {
    fn row_id(&self) -> u64 {
        self.id
    }

    fn value(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }
}

impl TryFrom<BTreeMap<String, CellValue>> for Row {
    type Error = RowError;

    fn try_from(mut values: BTreeMap<String, CellValue>) -> Result<Self, Self::Error> {
        let id = match values.get(ID_COLUMN) {
            None | Some(CellValue::Null) => return Err(RowError::MissingId),
            Some(CellValue::Number(n)) => {
                exact_id(n).ok_or_else(|| RowError::InvalidId(n.to_string()))?
            }
            Some(CellValue::Text(text)) => text
                .trim()
                .parse::<u64>()
                .map_err(|_| RowError::InvalidId(text.clone()))?,
            Some(other) => return Err(RowError::InvalidId(other.to_string())),
        };
        values.insert(ID_COLUMN.to_string(), CellValue::from(id));
        Ok(Self { id, values })
    }
}

/// Integer ids are taken as is; a float id is accepted only when it is a
/// whole number small enough to be exact.
fn exact_id(number: &Number) -> Option<u64> {
    if let Some(id) = number.as_u64() {
        return Some(id);
    }
    match number.as_f64() {
        Some(value) if number.is_f64() && value >= 0.0 && value.fract() == 0.0 => {
            (value <= MAX_EXACT_FLOAT_ID).then_some(value as u64)
        }
        _ => None,
    }
}

impl From<Row> for BTreeMap<String, CellValue> {
    fn from(row: Row) -> Self {
        row.values
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("sort direction must be 'asc' or 'desc', got '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for SortDirection {
    type Err = ParseDirectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseDirectionError(value.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Primary ordering chosen from the clickable column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub primary_column: String,
    #[serde(default)]
    pub primary_direction: SortDirection,
    #[serde(default)]
    pub case_insensitive: bool,
}

impl SortSpec {
    pub fn new(primary_column: impl Into<String>, primary_direction: SortDirection) -> Self {
        Self {
            primary_column: primary_column.into(),
            primary_direction,
            case_insensitive: false,
        }
    }

    pub fn ascending(primary_column: impl Into<String>) -> Self {
        Self::new(primary_column, SortDirection::Ascending)
    }

    pub fn descending(primary_column: impl Into<String>) -> Self {
        Self::new(primary_column, SortDirection::Descending)
    }

    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }
}

/// Secondary tie-break columns, highest priority first.
///
/// Persisted as a plain JSON array of column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnPriority(Vec<String>);

pub const DEFAULT_COLUMN_PRIORITY: [&str; 3] = ["ch", "group", "id"];

impl Default for ColumnPriority {
    fn default() -> Self {
        Self(DEFAULT_COLUMN_PRIORITY.iter().map(|c| c.to_string()).collect())
    }
}

impl ColumnPriority {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    /// Keeps the candidates that name an available column, in candidate
    /// order. Matching is exact and case-sensitive; duplicates in the
    /// candidate are kept.
    pub fn validated<C, A>(candidate: &[C], available: &[A]) -> Self
    where
        C: AsRef<str>,
        A: AsRef<str>,
    {
        Self(
            candidate
                .iter()
                .map(AsRef::as_ref)
                .filter(|name| available.iter().any(|a| a.as_ref() == *name))
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[String]> for ColumnPriority {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ColumnPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}
