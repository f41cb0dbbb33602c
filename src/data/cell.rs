use calamine::Data;

/// A sheet cell reduced to the value kinds a contact row can use.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    Integer(i64),
    Bool(bool),
    Empty,
}

impl Cell {
    /// Renders the cell as the string a contact field would hold. Whole
    /// numbers drop their fractional part, `None` means the cell is unusable.
    pub(crate) fn as_text(&self) -> Option<String> {
        match self {
            Cell::Text(v) => Some(v.clone()),
            Cell::Number(v) => Some(number_to_string(*v)),
            Cell::Integer(v) => Some(v.to_string()),
            Cell::Bool(v) => Some(v.to_string()),
            Cell::Empty => None,
        }
    }
}

fn number_to_string(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        (v as i64).to_string()
    } else {
        v.to_string()
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::String(v) => Cell::Text(v.clone()),
            Data::Float(v) => Cell::Number(*v),
            Data::Int(v) => Cell::Integer(*v),
            Data::Bool(v) => Cell::Bool(*v),
            // dates, durations and error cells are not usable as contact fields
            _ => Cell::Empty,
        }
    }
}

impl From<Option<&Data>> for Cell {
    fn from(data: Option<&Data>) -> Self {
        data.map(Cell::from).unwrap_or(Cell::Empty)
    }
}

/// Raw CSV field. Bytes that are not valid UTF-8 make the cell unusable.
impl From<Option<&[u8]>> for Cell {
    fn from(bytes: Option<&[u8]>) -> Self {
        Cell::from(bytes.and_then(|v| std::str::from_utf8(v).ok()))
    }
}

impl From<Option<&str>> for Cell {
    fn from(text: Option<&str>) -> Self {
        match text {
            Some(v) if !v.is_empty() => Cell::Text(v.to_string()),
            _ => Cell::Empty,
        }
    }
}
