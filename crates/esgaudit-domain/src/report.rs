use esgaudit_types::{AuditData, AuditException, RiskCounts, Verdict};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Rule evaluation order, then row order within each rule.
    pub exceptions: Vec<AuditException>,
    pub data: AuditData,
    pub counts: RiskCounts,
}
