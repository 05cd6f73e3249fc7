use crate::entities::monitoring::{FollowUp, MonitoringSchedule, ScheduleKind};
use crate::entities::risk::RiskCategory;

const INTENSIVE_VISITS: &[FollowUp] = &[
    FollowUp {
        timepoint: "Week 2",
        action: "BP check, assess medication tolerance and side effects",
    },
    FollowUp {
        timepoint: "Week 4",
        action: "BP check, electrolytes and creatinine if on ACE inhibitor, ARB or diuretic",
    },
    FollowUp {
        timepoint: "Month 2",
        action: "BP check, titrate medication towards target",
    },
    FollowUp {
        timepoint: "Month 3",
        action: "Comprehensive review of BP control, adherence and lifestyle progress",
    },
    FollowUp {
        timepoint: "Every 1-2 months",
        action: "Follow-up until target BP is achieved",
    },
    FollowUp {
        timepoint: "Maintenance (every 3-4 months)",
        action: "BP check, annual labs and target organ damage review",
    },
];

const STANDARD_VISITS: &[FollowUp] = &[
    FollowUp {
        timepoint: "Week 4",
        action: "BP check, review lifestyle modifications",
    },
    FollowUp {
        timepoint: "Month 2",
        action: "BP check, reinforce lifestyle changes",
    },
    FollowUp {
        timepoint: "Month 3",
        action: "Review BP trend; start or adjust medication if above target",
    },
    FollowUp {
        timepoint: "Every 2-3 months",
        action: "Follow-up until target BP is achieved",
    },
    FollowUp {
        timepoint: "Maintenance (every 4-6 months)",
        action: "BP check and annual labs",
    },
];

pub const INTENSIVE_SCHEDULE: MonitoringSchedule = MonitoringSchedule {
    kind: ScheduleKind::Intensive,
    visits: INTENSIVE_VISITS,
};

pub const STANDARD_SCHEDULE: MonitoringSchedule = MonitoringSchedule {
    kind: ScheduleKind::Standard,
    visits: STANDARD_VISITS,
};

/// Select a follow-up schedule from a risk category label.
///
/// Any label containing "High" gets the intensive schedule, which covers
/// both "High Risk" and "Very High Risk".
pub fn schedule_for_label(risk_label: &str) -> MonitoringSchedule {
    if risk_label.contains("High") {
        INTENSIVE_SCHEDULE
    } else {
        STANDARD_SCHEDULE
    }
}

/// Select a follow-up schedule for a risk category
pub fn monitoring_schedule(category: RiskCategory) -> MonitoringSchedule {
    schedule_for_label(category.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_and_very_high_are_intensive() {
        assert_eq!(monitoring_schedule(RiskCategory::High).kind, ScheduleKind::Intensive);
        assert_eq!(monitoring_schedule(RiskCategory::VeryHigh).kind, ScheduleKind::Intensive);
    }

    #[test]
    fn test_low_and_moderate_are_standard() {
        assert_eq!(monitoring_schedule(RiskCategory::Low).kind, ScheduleKind::Standard);
        assert_eq!(monitoring_schedule(RiskCategory::Moderate).kind, ScheduleKind::Standard);
    }

    #[test]
    fn test_schedule_order() {
        let timepoints: Vec<&str> = INTENSIVE_SCHEDULE.visits.iter().map(|v| v.timepoint).collect();
        assert_eq!(&timepoints[..4], &["Week 2", "Week 4", "Month 2", "Month 3"]);

        let first = STANDARD_SCHEDULE.visits.first().map(|v| v.timepoint);
        assert_eq!(first, Some("Week 4"));
        assert!(STANDARD_SCHEDULE.visits.last().unwrap().timepoint.contains("4-6 months"));
    }

    #[test]
    fn test_label_matching_is_substring() {
        assert_eq!(schedule_for_label("Very High Risk").kind, ScheduleKind::Intensive);
        assert_eq!(schedule_for_label("Moderate Risk").kind, ScheduleKind::Standard);
        assert_eq!(schedule_for_label("").kind, ScheduleKind::Standard);
    }
}
