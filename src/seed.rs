use crate::models::{
    CalendarResponse, Category, Goal, GoalStatus, Habit, TrendPoint, WeeklyProgressPoint,
};
use crate::store::HabitGoalStore;

pub const CURRENT_STREAK_DAYS: u32 = 12;
pub const COMPLETION_RATE_PERCENT: u32 = 87;
pub const GOALS_ACHIEVED_MONTH: u32 = 24;

pub fn initial_store() -> HabitGoalStore {
    HabitGoalStore::with_data(initial_habits(), initial_goals())
}

fn initial_habits() -> Vec<Habit> {
    vec![
        habit("1", "Drink Water", Category::Water, false, 8.0, 6.0, "glasses"),
        habit("2", "Sleep", Category::Sleep, true, 8.0, 7.5, "hours"),
        habit("3", "Screen Time", Category::Screen, false, 3.0, 2.5, "hours"),
        habit("4", "Exercise", Category::Exercise, false, 30.0, 15.0, "minutes"),
    ]
}

fn initial_goals() -> Vec<Goal> {
    vec![
        goal(
            "1",
            "Drink 8 glasses of water daily for 30 days",
            30.0,
            70.0,
            9,
            GoalStatus::OnTrack,
            vec!["1"],
        ),
        goal(
            "2",
            "Sleep 8 hours every night for 2 weeks",
            14.0,
            85.0,
            2,
            GoalStatus::OnTrack,
            vec!["2"],
        ),
        goal(
            "3",
            "Reduce screen time to 2 hours daily",
            30.0,
            40.0,
            0,
            GoalStatus::AtRisk,
            vec!["3"],
        ),
        goal(
            "4",
            "Exercise 30 minutes daily for 21 days",
            21.0,
            25.0,
            16,
            GoalStatus::Behind,
            vec!["4"],
        ),
        goal(
            "5",
            "Read 20 minutes daily for a month",
            30.0,
            60.0,
            12,
            GoalStatus::OnTrack,
            vec![],
        ),
    ]
}

fn habit(
    id: &str,
    name: &str,
    category: Category,
    completed: bool,
    target: f64,
    current: f64,
    unit: &str,
) -> Habit {
    Habit {
        id: id.to_string(),
        name: name.to_string(),
        category,
        completed,
        target,
        current,
        increment_step: category.default_step(),
        unit: unit.to_string(),
    }
}

fn goal(
    id: &str,
    name: &str,
    target: f64,
    progress: f64,
    days_left: u32,
    status: GoalStatus,
    linked_habit_ids: Vec<&str>,
) -> Goal {
    Goal {
        id: id.to_string(),
        name: name.to_string(),
        target,
        progress,
        days_left,
        status,
        linked_habit_ids: linked_habit_ids.into_iter().map(str::to_string).collect(),
        unit: "days".to_string(),
    }
}

pub fn weekly_progress() -> Vec<WeeklyProgressPoint> {
    [
        ("Mon", 5),
        ("Tue", 7),
        ("Wed", 6),
        ("Thu", 8),
        ("Fri", 7),
        ("Sat", 6),
        ("Sun", 4),
    ]
    .into_iter()
    .map(|(day, completed)| WeeklyProgressPoint {
        day: day.to_string(),
        completed,
        total: 8,
    })
    .collect()
}

pub fn trend_weeks() -> Vec<TrendPoint> {
    [
        ("Week 1", 7.2, 6.5, 3.2),
        ("Week 2", 7.5, 7.0, 2.8),
        ("Week 3", 8.0, 7.5, 2.5),
        ("Week 4", 7.8, 8.0, 2.2),
        ("Week 5", 7.9, 7.8, 2.0),
        ("Week 6", 8.2, 8.0, 1.8),
    ]
    .into_iter()
    .map(|(week, sleep, water, screen)| TrendPoint {
        week: week.to_string(),
        sleep,
        water,
        screen,
    })
    .collect()
}

pub fn calendar() -> CalendarResponse {
    CalendarResponse {
        month: "May 2024".to_string(),
        completed: vec![1, 2, 3, 5, 6, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
        partial: vec![4, 7, 20],
    }
}
