//! Wellness dashboard
//!
//! Summary stat cards plus the 7-day workout/water chart. Building the
//! dashboard from records is pure; [`FitnessClient::load_dashboard`] fetches
//! the records concurrently and then builds.

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::{
    ApiResult, DietPlan, FitnessClient, Goal, Session, ShoppingItem, WaterRecord, WorkoutRecord,
};
use crate::metrics::{
    aggregate_by_day, last_n_days, round_to, DayBucket, WindowTotals, DEFAULT_WINDOW_DAYS,
};

/// Everything the dashboard shows, as fetched from the backend
#[derive(Debug, Clone, Default)]
pub struct DashboardRecords {
    pub workouts: Vec<WorkoutRecord>,
    pub diet_plans: Vec<DietPlan>,
    pub water: Vec<WaterRecord>,
    pub cart: Vec<ShoppingItem>,
    pub goals: Vec<Goal>,
}

/// Headline numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub workouts: usize,
    pub diet_plans: usize,
    /// All-time water total, rounded to one decimal
    pub water_liters: f64,
    pub wishlist_items: usize,
    pub goals_completed: usize,
    pub goals_total: usize,
}

/// One labelled stat card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// One point of the weekly chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// `MM-DD`
    pub day: String,
    pub workouts: u32,
    pub water: f64,
}

impl From<&DayBucket> for ChartPoint {
    fn from(bucket: &DayBucket) -> Self {
        Self {
            day: bucket.key.short_label(),
            workouts: bucket.workouts_count,
            water: bucket.water_liters,
        }
    }
}

/// The rendered dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub stats: DashboardStats,
    pub week: Vec<DayBucket>,
}

impl DashboardStats {
    pub fn from_records(records: &DashboardRecords) -> Self {
        let water: f64 = records.water.iter().map(|w| w.amount_liters).sum();
        Self {
            workouts: records.workouts.len(),
            diet_plans: records.diet_plans.len(),
            water_liters: round_to(water, 1),
            wishlist_items: records.cart.len(),
            goals_completed: records.goals.iter().filter(|g| g.is_completed()).count(),
            goals_total: records.goals.len(),
        }
    }

    /// Cards in display order
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                label: "Workouts",
                value: self.workouts.to_string(),
            },
            StatCard {
                label: "Diet Plans",
                value: self.diet_plans.to_string(),
            },
            StatCard {
                label: "Water Intake",
                value: format!("{:.1} L", self.water_liters),
            },
            StatCard {
                label: "Wishlist Items",
                value: self.wishlist_items.to_string(),
            },
            StatCard {
                label: "Goals Completed",
                value: format!("{}/{}", self.goals_completed, self.goals_total),
            },
        ]
    }
}

impl Dashboard {
    /// Build the dashboard for the week ending `today`
    pub fn build(today: NaiveDate, records: &DashboardRecords) -> Self {
        let keys = last_n_days(DEFAULT_WINDOW_DAYS, today);
        Self {
            today,
            stats: DashboardStats::from_records(records),
            week: aggregate_by_day(&keys, &records.workouts, &records.water),
        }
    }

    pub fn chart(&self) -> Vec<ChartPoint> {
        self.week.iter().map(ChartPoint::from).collect()
    }

    /// Totals over the charted week
    pub fn week_totals(&self) -> WindowTotals {
        WindowTotals::from_buckets(&self.week)
    }
}

impl FitnessClient {
    /// Fetch everything the dashboard needs in parallel
    pub async fn load_dashboard_records(&self, session: &Session) -> ApiResult<DashboardRecords> {
        let (workouts, diet_plans, water, cart, goals) = tokio::try_join!(
            self.list_workouts(session),
            self.list_diet_plans(session),
            self.list_water(session, None),
            self.list_cart(session),
            self.list_goals(session, None),
        )?;

        tracing::debug!(
            workouts = workouts.len(),
            diet_plans = diet_plans.len(),
            water = water.len(),
            cart = cart.len(),
            goals = goals.len(),
            "Dashboard records loaded"
        );

        Ok(DashboardRecords {
            workouts,
            diet_plans,
            water,
            cart,
            goals,
        })
    }

    /// Fetch and build the dashboard for the week ending `today`
    pub async fn load_dashboard(&self, session: &Session, today: NaiveDate) -> ApiResult<Dashboard> {
        let records = self.load_dashboard_records(session).await?;
        Ok(Dashboard::build(today, &records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GoalStatus, RecordId};
    use chrono::{Duration, Local, TimeZone};

    fn goal(id: u64, status: GoalStatus) -> Goal {
        Goal {
            id: RecordId::from(id),
            goal_type: "Steps".to_string(),
            target_value: 10.0,
            current_value: 0.0,
            deadline: None,
            status,
            created_date: None,
        }
    }

    fn water(id: u64, date: NaiveDate, liters: f64) -> WaterRecord {
        WaterRecord {
            id: RecordId::from(id),
            date: date.into(),
            amount_liters: liters,
            goal_liters: Some(2.0),
        }
    }

    fn workout_at_local_noon(id: u64, date: NaiveDate) -> WorkoutRecord {
        let noon = Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .earliest()
            .unwrap();
        WorkoutRecord {
            id: RecordId::from(id),
            weight: None,
            height: None,
            gender: None,
            age: None,
            predicted_plan: None,
            created_at: crate::metrics::Timestamp::Zoned(noon.fixed_offset()),
            plan_json: None,
        }
    }

    #[test]
    fn test_empty_dashboard() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let dashboard = Dashboard::build(today, &DashboardRecords::default());

        assert_eq!(dashboard.week.len(), 7);
        assert!(dashboard
            .week
            .iter()
            .all(|b| b.workouts_count == 0 && b.water_liters == 0.0));

        let values: Vec<String> = dashboard.stats.cards().into_iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["0", "0", "0.0 L", "0", "0/0"]);
    }

    #[test]
    fn test_dashboard_stats_and_chart() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let yesterday = today - Duration::days(1);
        let long_ago = today - Duration::days(30);

        let records = DashboardRecords {
            workouts: vec![
                workout_at_local_noon(1, today),
                workout_at_local_noon(2, today),
                workout_at_local_noon(3, long_ago),
            ],
            diet_plans: vec![],
            water: vec![
                water(1, yesterday, 0.5),
                water(2, yesterday, 0.3),
                water(3, long_ago, 1.26),
            ],
            cart: vec![ShoppingItem {
                id: RecordId::from(1),
                item_name: "Oats".to_string(),
                quantity: 2,
            }],
            goals: vec![
                goal(1, GoalStatus::Completed),
                goal(2, GoalStatus::Pending),
                goal(3, GoalStatus::Completed),
            ],
        };

        let dashboard = Dashboard::build(today, &records);

        assert_eq!(dashboard.stats.workouts, 3);
        assert_eq!(dashboard.stats.water_liters, 2.1);
        assert_eq!(dashboard.stats.goals_completed, 2);
        assert_eq!(dashboard.stats.goals_total, 3);

        let cards = dashboard.stats.cards();
        assert_eq!(cards[2].value, "2.1 L");
        assert_eq!(cards[3].value, "1");
        assert_eq!(cards[4].value, "2/3");

        let chart = dashboard.chart();
        assert_eq!(chart.len(), 7);
        assert_eq!(chart[6].day, "03-11");
        assert_eq!(chart[6].workouts, 2);
        assert_eq!(chart[5].day, "03-10");
        assert!((chart[5].water - 0.8).abs() < 1e-9);
        assert_eq!(chart[0].day, "03-05");

        let totals = dashboard.week_totals();
        assert_eq!(totals.workouts, 2);
        assert_eq!(totals.active_days, 1);
        assert!((totals.water_liters - 0.8).abs() < 1e-9);
    }
}
