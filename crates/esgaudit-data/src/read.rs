use crate::error::LoadError;
use esgaudit_domain::model::{SupplierRecord, SupplierTable};
use time::Date;
use time::macros::format_description;

/// A required input column and the header spellings accepted for it.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// Required columns, in canonical output order.
pub const COLUMNS: [Column; 9] = [
    Column {
        name: "supplier_id",
        aliases: &["Supplier_ID"],
    },
    Column {
        name: "industry",
        aliases: &["Industry"],
    },
    Column {
        name: "region",
        aliases: &["Region"],
    },
    Column {
        name: "carbon_emissions",
        aliases: &["Carbon_Emissions_MT", "carbon_emissions_mt"],
    },
    Column {
        name: "water_usage",
        aliases: &["Water_Usage_m3", "water_usage_m3"],
    },
    Column {
        name: "diversity_score",
        aliases: &["Social_Diversity_Score_%", "social_diversity_score"],
    },
    Column {
        name: "safety_violations",
        aliases: &["Safety_Violations"],
    },
    Column {
        name: "last_audit_date",
        aliases: &["Last_Audit_Date"],
    },
    Column {
        name: "compliance_status",
        aliases: &["Compliance_Status"],
    },
];

/// Spellings that mean "no value" in a numeric or date column.
const NULL_SPELLINGS: &[&str] = &["", "NaN", "nan", "NA", "N/A", "null", "None"];

/// Header position of each required column.
struct Layout([usize; 9]);

impl Layout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let mut idx = [0usize; 9];
        for (slot, column) in idx.iter_mut().zip(COLUMNS.iter()) {
            *slot = headers
                .iter()
                .position(|h| h == column.name || column.aliases.contains(&h))
                .ok_or(LoadError::MissingColumn {
                    column: column.name,
                })?;
        }
        Ok(Self(idx))
    }

    fn field<'r>(&self, record: &'r csv::StringRecord, column: usize) -> &'r str {
        record.get(self.0[column]).unwrap_or("")
    }
}

/// Parse a supplier table from CSV text.
///
/// Structural problems (missing columns, ragged rows, empty or duplicate ids, no rows)
/// are errors. Unusable values inside a row are not: they load as missing.
pub fn parse_supplier_csv(text: &str) -> Result<SupplierTable, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let layout = Layout::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let raw = result?;
        let row = u32::try_from(i + 1).unwrap_or(u32::MAX);
        records.push(parse_record(&layout, &raw, row)?);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(SupplierTable::new(records)?)
}

fn parse_record(
    layout: &Layout,
    raw: &csv::StringRecord,
    row: u32,
) -> Result<SupplierRecord, LoadError> {
    let text = |column: usize| layout.field(raw, column).to_string();

    let supplier_id = text(0);
    if supplier_id.is_empty() {
        return Err(LoadError::EmptySupplierId { row });
    }

    Ok(SupplierRecord {
        row,
        supplier_id,
        industry: text(1),
        region: text(2),
        carbon_emissions: measure(layout.field(raw, 3), row, COLUMNS[3].name),
        water_usage: measure(layout.field(raw, 4), row, COLUMNS[4].name),
        diversity_score: measure(layout.field(raw, 5), row, COLUMNS[5].name),
        safety_violations: count(layout.field(raw, 6), row, COLUMNS[6].name),
        last_audit_date: date(layout.field(raw, 7), row, COLUMNS[7].name),
        compliance_status: text(8),
    })
}

fn is_null(value: &str) -> bool {
    NULL_SPELLINGS.contains(&value)
}

/// A non-negative finite quantity. Anything else is missing.
pub(crate) fn measure(value: &str, row: u32, column: &'static str) -> Option<f64> {
    if is_null(value) {
        return None;
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => {
            tracing::warn!(row, column, value, "unusable numeric value treated as missing");
            None
        }
    }
}

fn count(value: &str, row: u32, column: &'static str) -> Option<u32> {
    if is_null(value) {
        return None;
    }
    if let Ok(n) = value.parse::<u32>() {
        return Some(n);
    }
    // Spreadsheet exports write whole counts as "3.0".
    match value.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) => Some(v as u32),
        _ => {
            tracing::warn!(row, column, value, "unusable count treated as missing");
            None
        }
    }
}

fn date(value: &str, row: u32, column: &'static str) -> Option<Date> {
    if is_null(value) {
        return None;
    }
    // Accept a trailing time component (`2024-05-01 12:00:00`, `2024-05-01T12:00:00`).
    let day = match value.get(10..11) {
        Some(" ") | Some("T") => value.get(..10).unwrap_or(value),
        _ => value,
    };
    match Date::parse(day, format_description!("[year]-[month]-[day]")) {
        Ok(d) => Some(d),
        Err(_) => {
            tracing::warn!(row, column, value, "unusable date treated as missing");
            None
        }
    }
}
