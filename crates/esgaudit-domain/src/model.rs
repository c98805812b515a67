use std::collections::{BTreeMap, BTreeSet, HashSet};
use time::Date;

/// One supplier row as loaded from the input table.
///
/// Numeric fields are `None` when the source value was null, blank or malformed.
#[derive(Clone, Debug, PartialEq)]
pub struct SupplierRecord {
    /// 1-based data row (header excluded) in the source table.
    pub row: u32,
    pub supplier_id: String,
    pub industry: String,
    pub region: String,
    /// Metric tons.
    pub carbon_emissions: Option<f64>,
    /// Cubic meters.
    pub water_usage: Option<f64>,
    /// Percentage in `[0, 100]`.
    pub diversity_score: Option<f64>,
    pub safety_violations: Option<u32>,
    pub last_audit_date: Option<Date>,
    pub compliance_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate supplier_id '{supplier_id}' (rows {first_row} and {duplicate_row})")]
pub struct DuplicateSupplierId {
    pub supplier_id: String,
    pub first_row: u32,
    pub duplicate_row: u32,
}

/// The read-only supplier table the rules run against.
///
/// Invariant: `supplier_id` is unique. Records keep their source order.
#[derive(Clone, Debug, Default)]
pub struct SupplierTable {
    records: Vec<SupplierRecord>,
}

impl SupplierTable {
    pub fn new(records: Vec<SupplierRecord>) -> Result<Self, DuplicateSupplierId> {
        let mut seen: BTreeMap<&str, u32> = BTreeMap::new();
        for r in &records {
            if let Some(first_row) = seen.insert(r.supplier_id.as_str(), r.row) {
                return Err(DuplicateSupplierId {
                    supplier_id: r.supplier_id.clone(),
                    first_row,
                    duplicate_row: r.row,
                });
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[SupplierRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn supplier_ids(&self) -> HashSet<&str> {
        self.records.iter().map(|r| r.supplier_id.as_str()).collect()
    }

    pub fn industries(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.industry.as_str()).collect()
    }

    /// Partition the table by industry. Members keep their row order.
    pub fn by_industry(&self) -> BTreeMap<&str, Vec<&SupplierRecord>> {
        let mut groups: BTreeMap<&str, Vec<&SupplierRecord>> = BTreeMap::new();
        for r in &self.records {
            groups.entry(r.industry.as_str()).or_default().push(r);
        }
        groups
    }
}
