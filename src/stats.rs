use crate::models::{DashboardSummary, StatsResponse};
use crate::seed;
use crate::store::HabitGoalStore;

pub fn build_stats(store: &HabitGoalStore) -> StatsResponse {
    StatsResponse {
        summary: build_summary(store),
        weekly_progress: seed::weekly_progress(),
        trend_weeks: seed::trend_weeks(),
        calendar: seed::calendar(),
    }
}

pub fn build_summary(store: &HabitGoalStore) -> DashboardSummary {
    DashboardSummary {
        habits_tracked: store.habits().len(),
        current_streak_days: seed::CURRENT_STREAK_DAYS,
        completion_rate_percent: seed::COMPLETION_RATE_PERCENT,
        goals_achieved_month: seed::GOALS_ACHIEVED_MONTH,
    }
}
