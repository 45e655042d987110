//! Aggregate analytics wire models

use serde::{Deserialize, Serialize};

/// Aggregate metrics from `/metrics`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    pub platform: PlatformMetrics,
    pub users: UserMetrics,
    pub trips: TripMetrics,
}

/// Initiative and credit totals across the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetrics {
    #[serde(default)]
    pub total_initiatives: i64,

    #[serde(default)]
    pub completed_initiatives: i64,

    #[serde(default)]
    pub ongoing_initiatives: i64,

    /// Sum of credits earned by all riders. The wire name is misspelled
    /// upstream; it must stay as-is to match the server.
    #[serde(default, rename = "totalCledits")]
    pub total_credits: f64,
}

/// Rider demographics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMetrics {
    #[serde(default)]
    pub total: i64,

    #[serde(default, rename = "aveAge")]
    pub average_age: f64,

    #[serde(default, rename = "ageGroups")]
    pub age_groups: AgeGroups,

    #[serde(default, rename = "genderCount")]
    pub gender_count: GenderCount,
}

/// Rider counts per age bracket. The wire keys are range expressions, so
/// every field carries an explicit rename.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgeGroups {
    #[serde(default, rename = "age<18")]
    pub under_18: i64,

    #[serde(default, rename = "18<=age<25")]
    pub from_18_to_25: i64,

    #[serde(default, rename = "25<=age<30")]
    pub from_25_to_30: i64,

    #[serde(default, rename = "30<=age<40")]
    pub from_30_to_40: i64,

    #[serde(default, rename = "40<=age<60")]
    pub from_40_to_60: i64,

    #[serde(default, rename = "60<=age<75")]
    pub from_60_to_75: i64,

    #[serde(default, rename = "age>=75")]
    pub over_75: i64,
}

/// Rider counts per gender
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenderCount {
    #[serde(default)]
    pub m: i64,

    #[serde(default)]
    pub f: i64,

    #[serde(default)]
    pub x: i64,
}

/// Trip totals and averages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripMetrics {
    #[serde(default)]
    pub total: i64,

    #[serde(default)]
    pub average_dist: f64,

    #[serde(default)]
    pub average_credits: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_parse_wire_names() {
        let json = r#"{
            "platform": {
                "totalInitiatives": 12,
                "completedInitiatives": 4,
                "ongoingInitiatives": 8,
                "totalCledits": 90210.5
            },
            "users": {
                "total": 350,
                "aveAge": 33.4,
                "ageGroups": {"age<18": 5, "18<=age<25": 40, "age>=75": 1},
                "genderCount": {"m": 180, "f": 160, "x": 10}
            },
            "trips": {"total": 4200, "averageDist": 5.8, "averageCredits": 2.3}
        }"#;

        let metrics: Metrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.platform.total_initiatives, 12);
        assert_eq!(metrics.platform.total_credits, 90210.5);
        assert_eq!(metrics.users.age_groups.from_18_to_25, 40);
        assert_eq!(metrics.users.age_groups.from_25_to_30, 0);
        assert_eq!(metrics.users.gender_count.x, 10);
        assert_eq!(metrics.trips.total, 4200);
    }
}
