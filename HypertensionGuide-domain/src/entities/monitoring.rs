use serde::Serialize;

/// Follow-up intensity
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    /// High and very high risk
    Intensive,
    Standard,
}

impl std::fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleKind::Intensive => write!(f, "intensive"),
            ScheduleKind::Standard => write!(f, "standard"),
        }
    }
}

/// One visit in the follow-up timeline
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FollowUp {
    pub timepoint: &'static str,
    pub action: &'static str,
}

/// Ordered follow-up timeline
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MonitoringSchedule {
    pub kind: ScheduleKind,
    pub visits: &'static [FollowUp],
}
