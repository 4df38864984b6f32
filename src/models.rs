use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Water,
    Sleep,
    Screen,
    Exercise,
    Reading,
    Coffee,
    Health,
    #[serde(other)]
    Other,
}

impl Category {
    pub fn default_step(self) -> f64 {
        match self {
            Category::Water => 1.0,
            _ => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    OnTrack,
    AtRisk,
    Behind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub completed: bool,
    pub target: f64,
    pub current: f64,
    pub increment_step: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub progress: f64,
    pub days_left: u32,
    pub status: GoalStatus,
    pub linked_habit_ids: Vec<String>,
    pub unit: String,
}

impl Goal {
    pub fn status_badge(&self) -> GoalStatus {
        self.status
    }
}

#[derive(Debug, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub category: Category,
    pub target: f64,
    pub unit: String,
    pub increment_step: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub target: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewGoal {
    pub name: String,
    pub target: f64,
    pub unit: String,
    pub days_left: u32,
    #[serde(default)]
    pub linked_habit_ids: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub target: Option<f64>,
    pub unit: Option<String>,
    pub days_left: Option<u32>,
    pub progress: Option<f64>,
    pub status: Option<GoalStatus>,
    pub linked_habit_ids: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub completed: bool,
    pub target: f64,
    pub current: f64,
    pub increment_step: f64,
    pub unit: String,
    pub progress_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub progress: f64,
    pub days_left: u32,
    pub status: GoalStatus,
    pub linked_habit_ids: Vec<String>,
    pub unit: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub habits_tracked: usize,
    pub current_streak_days: u32,
    pub completion_rate_percent: u32,
    pub goals_achieved_month: u32,
}

#[derive(Debug, Serialize)]
pub struct WeeklyProgressPoint {
    pub day: String,
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub week: String,
    pub sleep: f64,
    pub water: f64,
    pub screen: f64,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub month: String,
    pub completed: Vec<u32>,
    pub partial: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub summary: DashboardSummary,
    pub weekly_progress: Vec<WeeklyProgressPoint>,
    pub trend_weeks: Vec<TrendPoint>,
    pub calendar: CalendarResponse,
}
