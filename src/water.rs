//! Daily water intake tracking
//!
//! Intake is tracked in milliliters locally and stored in liters on the
//! backend, one record per day.

use serde::Serialize;

use crate::api::{ApiResult, FitnessClient, RecordId, Session, WaterPayload, WaterRecord};
use crate::metrics::{liters_from_milliliters, milliliters_from_liters, DateKey};

/// Default daily goal in milliliters
pub const DEFAULT_DAILY_GOAL_ML: u32 = 2000;

/// Outcome of adding water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntakeChange {
    pub intake_ml: u32,
    /// This change took the day from below the goal to at or above it
    pub goal_reached: bool,
}

/// One day's intake against a goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterTracker {
    date: DateKey,
    daily_goal_ml: u32,
    intake_ml: u32,
    record_id: Option<RecordId>,
}

impl WaterTracker {
    /// Empty tracker for `date`
    pub fn new(date: DateKey, daily_goal_ml: u32) -> Self {
        Self {
            date,
            daily_goal_ml,
            intake_ml: 0,
            record_id: None,
        }
    }

    /// Tracker seeded from the day's records; the first record wins
    pub fn from_records(date: DateKey, daily_goal_ml: u32, records: &[WaterRecord]) -> Self {
        let mut tracker = Self::new(date, daily_goal_ml);
        if let Some(record) = records.iter().find(|r| r.date == date) {
            tracker.intake_ml = to_whole_ml(record.amount_liters);
            tracker.record_id = Some(record.id.clone());
        }
        tracker
    }

    pub fn date(&self) -> DateKey {
        self.date
    }

    pub fn daily_goal_ml(&self) -> u32 {
        self.daily_goal_ml
    }

    pub fn intake_ml(&self) -> u32 {
        self.intake_ml
    }

    pub fn record_id(&self) -> Option<&RecordId> {
        self.record_id.as_ref()
    }

    pub fn add(&mut self, ml: u32) -> IntakeChange {
        let before = self.intake_ml;
        self.intake_ml = self.intake_ml.saturating_add(ml);
        IntakeChange {
            intake_ml: self.intake_ml,
            goal_reached: before < self.daily_goal_ml && self.intake_ml >= self.daily_goal_ml,
        }
    }

    /// Remove water; intake never drops below zero
    pub fn remove(&mut self, ml: u32) -> IntakeChange {
        self.intake_ml = self.intake_ml.saturating_sub(ml);
        IntakeChange {
            intake_ml: self.intake_ml,
            goal_reached: false,
        }
    }

    pub fn reset(&mut self) {
        self.intake_ml = 0;
    }

    /// Percentage of the goal, capped at 100
    pub fn percentage(&self) -> f64 {
        if self.daily_goal_ml == 0 {
            return 100.0;
        }
        (self.intake_ml as f64 / self.daily_goal_ml as f64 * 100.0).min(100.0)
    }

    pub fn remaining_ml(&self) -> u32 {
        self.daily_goal_ml.saturating_sub(self.intake_ml)
    }

    pub fn goal_achieved(&self) -> bool {
        self.intake_ml >= self.daily_goal_ml
    }

    /// Body sent to the backend
    pub fn payload(&self) -> WaterPayload {
        WaterPayload {
            amount_liters: liters_from_milliliters(self.intake_ml as f64),
            goal_liters: liters_from_milliliters(self.daily_goal_ml as f64),
            date: self.date,
        }
    }

    /// Load the tracker for `date` from the backend
    pub async fn load(
        client: &FitnessClient,
        session: &Session,
        date: DateKey,
        daily_goal_ml: u32,
    ) -> ApiResult<Self> {
        let records = client.list_water(session, Some(date)).await?;
        Ok(Self::from_records(date, daily_goal_ml, &records))
    }

    /// Store the current intake, creating the day's record on first save
    pub async fn save(&mut self, client: &FitnessClient, session: &Session) -> ApiResult<()> {
        let saved = client
            .save_water(session, self.record_id.as_ref(), &self.payload())
            .await?;
        tracing::debug!(date = %self.date, id = %saved.id, intake_ml = self.intake_ml, "Water saved");
        self.record_id = Some(saved.id);
        Ok(())
    }
}

fn to_whole_ml(liters: f64) -> u32 {
    let ml = milliliters_from_liters(liters).round();
    if ml.is_finite() && ml > 0.0 {
        ml.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> DateKey {
        "2024-03-10".parse().unwrap()
    }

    #[test]
    fn test_add_reports_goal_crossing_once() {
        let mut tracker = WaterTracker::new(day(), 2000);

        let change = tracker.add(1500);
        assert_eq!(change.intake_ml, 1500);
        assert!(!change.goal_reached);

        assert!(tracker.add(500).goal_reached);
        assert!(tracker.goal_achieved());
        assert!(!tracker.add(250).goal_reached);
    }

    #[test]
    fn test_remove_saturates() {
        let mut tracker = WaterTracker::new(day(), 2000);
        tracker.add(250);
        assert_eq!(tracker.remove(500).intake_ml, 0);
    }

    #[test]
    fn test_progress() {
        let mut tracker = WaterTracker::new(day(), 2000);
        tracker.add(500);
        assert_eq!(tracker.percentage(), 25.0);
        assert_eq!(tracker.remaining_ml(), 1500);

        tracker.add(2500);
        assert_eq!(tracker.percentage(), 100.0);
        assert_eq!(tracker.remaining_ml(), 0);

        tracker.reset();
        assert_eq!(tracker.intake_ml(), 0);
    }

    #[test]
    fn test_payload_in_liters() {
        let mut tracker = WaterTracker::new(day(), 2000);
        tracker.add(750);
        let payload = tracker.payload();

        assert_eq!(payload.amount_liters, 0.75);
        assert_eq!(payload.goal_liters, 2.0);
        assert_eq!(payload.date, day());
    }

    #[test]
    fn test_from_records_takes_first_matching() {
        let records = vec![
            WaterRecord {
                id: RecordId::from(1),
                date: "2024-03-09".parse().unwrap(),
                amount_liters: 3.0,
                goal_liters: None,
            },
            WaterRecord {
                id: RecordId::from(2),
                date: day(),
                amount_liters: 1.25,
                goal_liters: Some(2.0),
            },
            WaterRecord {
                id: RecordId::from(3),
                date: day(),
                amount_liters: 0.5,
                goal_liters: None,
            },
        ];

        let tracker = WaterTracker::from_records(day(), 2000, &records);
        assert_eq!(tracker.intake_ml(), 1250);
        assert_eq!(tracker.record_id(), Some(&RecordId::from(2)));

        let empty = WaterTracker::from_records(day(), 2000, &[]);
        assert_eq!(empty.intake_ml(), 0);
        assert_eq!(empty.record_id(), None);
    }
}
