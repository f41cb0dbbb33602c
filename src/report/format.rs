use std::fmt;
use serde_json::Value;

const MAX_TABLE_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    Acceptable,
    Slow,
}

impl Rating {
    pub fn from_millis(ms: u128) -> Self {
        match ms {
            0..=99 => Rating::Excellent,
            100..=499 => Rating::Good,
            500..=999 => Rating::Acceptable,
            _ => Rating::Slow,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Rating::Excellent   => "EXCELLENT",
            Rating::Good        => "GOOD",
            Rating::Acceptable  => "ACCEPTABLE",
            Rating::Slow        => "SLOW",
        };
        write!(f, "{}", str)
    }
}

/// Renders a labelled value: arrays as an index table, objects as a
/// key/value table, anything else inline.
pub fn render(label: &str, data: &Value) -> String {
    match data {
        Value::Array(items) => format!("{}:\n{}", label, list_table(items)),
        Value::Object(map) => format!("{}:\n{}", label, map_table(map)),
        other => format!("{}: {}", label, scalar(other)),
    }
}

pub fn list_table(items: &[Value]) -> String {
    if items.is_empty() {
        return "Empty List".into();
    }

    let mut table = String::from("Index | Value\n------|------\n");
    for (i, item) in items.iter().take(MAX_TABLE_ROWS).enumerate() {
        table.push_str(&format!("{:5} | {}\n", i, scalar(item)));
    }
    if items.len() > MAX_TABLE_ROWS {
        table.push_str(&format!("... and {} more items\n", items.len() - MAX_TABLE_ROWS));
    }
    table
}

pub fn map_table(map: &serde_json::Map<String, Value>) -> String {
    if map.is_empty() {
        return "Empty Map".into();
    }

    let mut table = String::from("Key | Value\n----|------\n");
    for (k, v) in map.iter().take(MAX_TABLE_ROWS) {
        table.push_str(&format!("{} | {}\n", k, scalar(v)));
    }
    if map.len() > MAX_TABLE_ROWS {
        table.push_str(&format!("... and {} more entries\n", map.len() - MAX_TABLE_ROWS));
    }
    table
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(v) => v.clone(),
        Value::Null => "null".into(),
        Value::Object(map) => map.iter()
            .map(|(k, v)| format!("{}={}", k, scalar(v)))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
