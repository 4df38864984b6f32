use crate::errors::AppError;
use crate::models::{
    Goal, GoalPatch, GoalResponse, Habit, HabitPatch, HabitResponse, NewGoal, NewHabit,
    StatsResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats, build_summary};
use crate::store::habit_progress_percent;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let store = state.store.lock().await;
    let summary = build_summary(&store);
    Html(render_index(&date, &summary))
}

pub async fn list_habits(
    State(state): State<AppState>,
) -> Result<Json<Vec<HabitResponse>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.habits().iter().map(to_habit_response).collect()))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabit>,
) -> Result<(StatusCode, Json<HabitResponse>), AppError> {
    let mut store = state.store.lock().await;
    let habit = store.create_habit(payload)?;
    Ok((StatusCode::CREATED, Json(to_habit_response(&habit))))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<HabitPatch>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut store = state.store.lock().await;
    let habit = store.update_habit(&id, payload)?;
    Ok(Json(to_habit_response(&habit)))
}

pub async fn delete_habit(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let mut store = state.store.lock().await;
    store.delete_habit(&id);
    StatusCode::NO_CONTENT
}

pub async fn increment_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut store = state.store.lock().await;
    let habit = store.increment_habit(&id)?;
    Ok(Json(to_habit_response(&habit)))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut store = state.store.lock().await;
    let habit = store.toggle_habit_completed(&id)?;
    Ok(Json(to_habit_response(&habit)))
}

pub async fn increment_habit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let mut store = state.store.lock().await;
    store.increment_habit(&id)?;
    Ok(Redirect::to("/"))
}

pub async fn toggle_habit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let mut store = state.store.lock().await;
    store.toggle_habit_completed(&id)?;
    Ok(Redirect::to("/"))
}

pub async fn list_goals(
    State(state): State<AppState>,
) -> Result<Json<Vec<GoalResponse>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.goals().iter().map(to_goal_response).collect()))
}

pub async fn create_goal(
    State(state): State<AppState>,
    Json(payload): Json<NewGoal>,
) -> Result<(StatusCode, Json<GoalResponse>), AppError> {
    let mut store = state.store.lock().await;
    let goal = store.create_goal(payload)?;
    Ok((StatusCode::CREATED, Json(to_goal_response(&goal))))
}

pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GoalPatch>,
) -> Result<Json<GoalResponse>, AppError> {
    let mut store = state.store.lock().await;
    let goal = store.update_goal(&id, payload)?;
    Ok(Json(to_goal_response(&goal)))
}

pub async fn delete_goal(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let mut store = state.store.lock().await;
    store.delete_goal(&id);
    StatusCode::NO_CONTENT
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(build_stats(&store)))
}

fn to_habit_response(habit: &Habit) -> HabitResponse {
    HabitResponse {
        id: habit.id.clone(),
        name: habit.name.clone(),
        category: habit.category,
        completed: habit.completed,
        target: habit.target,
        current: habit.current,
        increment_step: habit.increment_step,
        unit: habit.unit.clone(),
        progress_percent: habit_progress_percent(habit),
    }
}

fn to_goal_response(goal: &Goal) -> GoalResponse {
    GoalResponse {
        id: goal.id.clone(),
        name: goal.name.clone(),
        target: goal.target,
        progress: goal.progress,
        days_left: goal.days_left,
        status: goal.status_badge(),
        linked_habit_ids: goal.linked_habit_ids.clone(),
        unit: goal.unit.clone(),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
