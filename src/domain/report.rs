use uuid::Uuid;

/// Artifact filenames are fixed; isolation between requests comes from
/// namespacing every artifact under its own [`ReportId`].
pub const REPORT_FILENAME: &str = "report.pdf";
pub const CHART_FILENAME: &str = "chart.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportId(Uuid);

impl ReportId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}
