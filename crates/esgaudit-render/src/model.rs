#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderableRisk {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

/// Where the offending supplier sits in the input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    /// 1-based file line (the header is line 1).
    pub line: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableException {
    pub risk: RenderableRisk,
    pub supplier_id: String,
    pub issue: String,
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub location: Option<RenderableLocation>,
    pub help: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    pub suppliers_scanned: u32,
    pub exceptions_total: u32,
    pub counts: RenderableCounts,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub exceptions: Vec<RenderableException>,
    pub data: RenderableData,
}
