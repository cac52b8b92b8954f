use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Response of `spreadsheets.values.get`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// One spreadsheet row keyed by the header row, with a 1-based row id.
/// `fields` never holds a column named `id`; the row id takes its place.
///
/// Serializes as a flat object: `id` first, then the headers in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadRecord {
    pub id: usize,
    pub fields: Vec<(String, String)>,
}

impl LeadRecord {
    /// Value of the column named `header`
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }
}

impl Serialize for LeadRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (header, value) in &self.fields {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

/// Text of a cell as the sheet displays it
fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Turn raw sheet rows into records. The first row is the header row; short rows
/// are padded with empty strings and cells past the last header are dropped.
pub fn leads_from_rows(rows: &[Vec<Value>]) -> Vec<LeadRecord> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row.iter().map(cell_text).collect();

    data_rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut fields: Vec<(String, String)> = Vec::with_capacity(headers.len());
            for (column, header) in headers.iter().enumerate() {
                if header == "id" {
                    continue;
                }
                let value = row.get(column).map(cell_text).unwrap_or_default();
                // Repeated headers keep their first position and the last value
                match fields.iter_mut().find(|(name, _)| name == header) {
                    Some(existing) => existing.1 = value,
                    None => fields.push((header.clone(), value)),
                }
            }

            LeadRecord {
                id: index + 1,
                fields,
            }
        })
        .collect()
}
