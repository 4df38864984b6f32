use crate::errors::StoreError;
use crate::models::{Goal, GoalPatch, GoalStatus, Habit, HabitPatch, NewGoal, NewHabit};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct HabitGoalStore {
    habits: Vec<Habit>,
    goals: Vec<Goal>,
}

impl HabitGoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(habits: Vec<Habit>, goals: Vec<Goal>) -> Self {
        Self { habits, goals }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn create_habit(&mut self, input: NewHabit) -> Result<Habit, StoreError> {
        let name = validated_name(input.name)?;
        validated_target(input.target)?;
        let increment_step = match input.increment_step {
            Some(step) if step.is_finite() && step > 0.0 => step,
            Some(step) => {
                return Err(StoreError::InvalidInput(format!(
                    "increment step must be a positive number, got {step}"
                )));
            }
            None => input.category.default_step(),
        };
        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name,
            category: input.category,
            completed: false,
            target: input.target,
            current: 0.0,
            increment_step,
            unit: input.unit,
        };
        self.habits.push(habit.clone());
        Ok(habit)
    }

    pub fn increment_habit(&mut self, id: &str) -> Result<Habit, StoreError> {
        let habit = self.habit_mut(id)?;
        // At or past the target the increment is a no-op, not an error.
        if habit.current < habit.target {
            habit.current += habit.increment_step;
        }
        Ok(habit.clone())
    }

    pub fn toggle_habit_completed(&mut self, id: &str) -> Result<Habit, StoreError> {
        let habit = self.habit_mut(id)?;
        habit.completed = !habit.completed;
        Ok(habit.clone())
    }

    pub fn update_habit(&mut self, id: &str, patch: HabitPatch) -> Result<Habit, StoreError> {
        let index = self.habit_index(id)?;
        let name = patch.name.map(validated_name).transpose()?;
        if let Some(target) = patch.target {
            validated_target(target)?;
        }
        let habit = &mut self.habits[index];
        if let Some(name) = name {
            habit.name = name;
        }
        if let Some(target) = patch.target {
            habit.target = target;
        }
        if let Some(unit) = patch.unit {
            habit.unit = unit;
        }
        Ok(habit.clone())
    }

    pub fn delete_habit(&mut self, id: &str) {
        self.habits.retain(|habit| habit.id != id);
        for goal in &mut self.goals {
            goal.linked_habit_ids.retain(|linked| linked != id);
        }
    }

    pub fn create_goal(&mut self, input: NewGoal) -> Result<Goal, StoreError> {
        let name = validated_name(input.name)?;
        validated_target(input.target)?;
        self.validated_links(&input.linked_habit_ids)?;
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            name,
            target: input.target,
            progress: 0.0,
            days_left: input.days_left,
            status: GoalStatus::OnTrack,
            linked_habit_ids: input.linked_habit_ids,
            unit: input.unit,
        };
        self.goals.push(goal.clone());
        Ok(goal)
    }

    pub fn update_goal(&mut self, id: &str, patch: GoalPatch) -> Result<Goal, StoreError> {
        let index = self.goal_index(id)?;
        let name = patch.name.map(validated_name).transpose()?;
        if let Some(target) = patch.target {
            validated_target(target)?;
        }
        if let Some(progress) = patch.progress {
            validated_progress(progress)?;
        }
        if let Some(links) = &patch.linked_habit_ids {
            self.validated_links(links)?;
        }
        let goal = &mut self.goals[index];
        if let Some(name) = name {
            goal.name = name;
        }
        if let Some(target) = patch.target {
            goal.target = target;
        }
        if let Some(unit) = patch.unit {
            goal.unit = unit;
        }
        if let Some(days_left) = patch.days_left {
            goal.days_left = days_left;
        }
        if let Some(progress) = patch.progress {
            goal.progress = progress;
        }
        if let Some(status) = patch.status {
            goal.status = status;
        }
        if let Some(links) = patch.linked_habit_ids {
            goal.linked_habit_ids = links;
        }
        Ok(goal.clone())
    }

    pub fn delete_goal(&mut self, id: &str) {
        self.goals.retain(|goal| goal.id != id);
    }

    fn habit_mut(&mut self, id: &str) -> Result<&mut Habit, StoreError> {
        self.habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn habit_index(&self, id: &str) -> Result<usize, StoreError> {
        self.habits
            .iter()
            .position(|habit| habit.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn goal_index(&self, id: &str) -> Result<usize, StoreError> {
        self.goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn validated_links(&self, ids: &[String]) -> Result<(), StoreError> {
        for id in ids {
            if !self.habits.iter().any(|habit| habit.id == *id) {
                return Err(StoreError::InvalidInput(format!(
                    "linked habit {id} does not exist"
                )));
            }
        }
        Ok(())
    }
}

pub fn habit_progress_percent(habit: &Habit) -> f64 {
    if habit.target <= 0.0 {
        return 0.0;
    }
    (habit.current / habit.target * 100.0).clamp(0.0, 100.0)
}

fn validated_name(name: String) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput("name must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

fn validated_target(target: f64) -> Result<(), StoreError> {
    if !target.is_finite() || target <= 0.0 {
        return Err(StoreError::InvalidInput(format!(
            "target must be a positive number, got {target}"
        )));
    }
    Ok(())
}

fn validated_progress(progress: f64) -> Result<(), StoreError> {
    if !(0.0..=100.0).contains(&progress) {
        return Err(StoreError::InvalidInput(format!(
            "progress must be between 0 and 100, got {progress}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn water_habit() -> NewHabit {
        NewHabit {
            name: "Drink Water".to_string(),
            category: Category::Water,
            target: 8.0,
            unit: "glasses".to_string(),
            increment_step: None,
        }
    }

    fn reading_goal(linked: Vec<String>) -> NewGoal {
        NewGoal {
            name: "Read 5 books".to_string(),
            target: 5.0,
            unit: "books".to_string(),
            days_left: 30,
            linked_habit_ids: linked,
        }
    }

    #[test]
    fn create_habit_assigns_unique_ids_and_zeroed_progress() {
        let mut store = HabitGoalStore::new();
        let first = store.create_habit(water_habit()).unwrap();
        let second = store.create_habit(water_habit()).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.current, 0.0);
        assert!(!first.completed);
        assert_eq!(first.increment_step, 1.0);
        assert_eq!(store.habits().len(), 2);
    }

    #[test]
    fn create_habit_rejects_empty_name() {
        let mut store = HabitGoalStore::new();
        let mut input = water_habit();
        input.name = "   ".to_string();
        let err = store.create_habit(input).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(store.habits().is_empty());
    }

    #[test]
    fn create_habit_rejects_non_positive_target() {
        let mut store = HabitGoalStore::new();
        for target in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let mut input = water_habit();
            input.target = target;
            assert!(matches!(
                store.create_habit(input),
                Err(StoreError::InvalidInput(_))
            ));
        }
        assert!(store.habits().is_empty());
    }

    #[test]
    fn explicit_increment_step_overrides_category_default() {
        let mut store = HabitGoalStore::new();
        let mut input = water_habit();
        input.increment_step = Some(2.0);
        let habit = store.create_habit(input).unwrap();
        assert_eq!(habit.increment_step, 2.0);

        let mut bad = water_habit();
        bad.increment_step = Some(0.0);
        assert!(matches!(
            store.create_habit(bad),
            Err(StoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn increment_stops_at_target() {
        let mut store = HabitGoalStore::new();
        let habit = store.create_habit(water_habit()).unwrap();
        for expected in 1..=8 {
            let updated = store.increment_habit(&habit.id).unwrap();
            assert_eq!(updated.current, f64::from(expected));
        }
        for _ in 0..3 {
            let updated = store.increment_habit(&habit.id).unwrap();
            assert_eq!(updated.current, 8.0);
        }
        assert_eq!(habit_progress_percent(&store.habits()[0]), 100.0);
    }

    #[test]
    fn final_increment_may_overshoot_then_holds() {
        let mut store = HabitGoalStore::new();
        let input = NewHabit {
            name: "Sleep".to_string(),
            category: Category::Sleep,
            target: 1.2,
            unit: "hours".to_string(),
            increment_step: None,
        };
        let habit = store.create_habit(input).unwrap();
        store.increment_habit(&habit.id).unwrap();
        store.increment_habit(&habit.id).unwrap();
        let over = store.increment_habit(&habit.id).unwrap();
        assert_eq!(over.current, 1.5);
        let held = store.increment_habit(&habit.id).unwrap();
        assert_eq!(held.current, 1.5);
    }

    #[test]
    fn increment_unknown_id_is_not_found() {
        let mut store = HabitGoalStore::new();
        assert!(matches!(
            store.increment_habit("missing"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn toggle_flips_completed_only() {
        let mut store = HabitGoalStore::new();
        let habit = store.create_habit(water_habit()).unwrap();
        store.increment_habit(&habit.id).unwrap();
        let toggled = store.toggle_habit_completed(&habit.id).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.current, 1.0);
        let back = store.toggle_habit_completed(&habit.id).unwrap();
        assert!(!back.completed);
    }

    #[test]
    fn update_habit_overwrites_only_provided_fields() {
        let mut store = HabitGoalStore::new();
        let habit = store.create_habit(water_habit()).unwrap();
        let patch = HabitPatch {
            name: Some("  Hydrate  ".to_string()),
            ..Default::default()
        };
        let updated = store.update_habit(&habit.id, patch).unwrap();
        assert_eq!(updated.name, "Hydrate");
        assert_eq!(updated.target, 8.0);
        assert_eq!(updated.unit, "glasses");
    }

    #[test]
    fn update_habit_rejects_non_positive_target() {
        let mut store = HabitGoalStore::new();
        let habit = store.create_habit(water_habit()).unwrap();
        let patch = HabitPatch {
            target: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            store.update_habit(&habit.id, patch),
            Err(StoreError::InvalidInput(_))
        ));
        assert_eq!(store.habits()[0].target, 8.0);
    }

    #[test]
    fn empty_patch_leaves_entities_unchanged() {
        let mut store = HabitGoalStore::new();
        let habit = store.create_habit(water_habit()).unwrap();
        let goal = store.create_goal(reading_goal(vec![habit.id.clone()])).unwrap();
        let same_habit = store.update_habit(&habit.id, HabitPatch::default()).unwrap();
        let same_goal = store.update_goal(&goal.id, GoalPatch::default()).unwrap();
        assert_eq!(same_habit, habit);
        assert_eq!(same_goal, goal);
    }

    #[test]
    fn lowering_target_below_current_is_tolerated() {
        let mut store = HabitGoalStore::new();
        let habit = store.create_habit(water_habit()).unwrap();
        for _ in 0..5 {
            store.increment_habit(&habit.id).unwrap();
        }
        let patch = HabitPatch {
            target: Some(3.0),
            ..Default::default()
        };
        let updated = store.update_habit(&habit.id, patch).unwrap();
        assert_eq!(updated.current, 5.0);
        let after = store.increment_habit(&habit.id).unwrap();
        assert_eq!(after.current, 5.0);
        assert_eq!(habit_progress_percent(&after), 100.0);
    }

    #[test]
    fn delete_habit_prunes_goal_links_and_is_idempotent() {
        let mut store = HabitGoalStore::new();
        let doomed = store.create_habit(water_habit()).unwrap();
        let mut other = water_habit();
        other.name = "Sleep".to_string();
        let kept = store.create_habit(other).unwrap();
        store
            .create_goal(reading_goal(vec![doomed.id.clone(), kept.id.clone()]))
            .unwrap();

        store.delete_habit(&doomed.id);
        assert!(store.habits().iter().all(|habit| habit.id != doomed.id));
        assert_eq!(store.goals()[0].linked_habit_ids, vec![kept.id]);

        let habits_before = store.habits().len();
        store.delete_habit(&doomed.id);
        assert_eq!(store.habits().len(), habits_before);
    }

    #[test]
    fn create_goal_starts_on_track_with_zero_progress() {
        let mut store = HabitGoalStore::new();
        let goal = store.create_goal(reading_goal(vec![])).unwrap();
        assert_eq!(goal.progress, 0.0);
        assert_eq!(goal.status, GoalStatus::OnTrack);
        assert_eq!(goal.days_left, 30);
        assert!(goal.linked_habit_ids.is_empty());
    }

    #[test]
    fn create_goal_rejects_unknown_linked_habit() {
        let mut store = HabitGoalStore::new();
        let err = store
            .create_goal(reading_goal(vec!["nonexistent-id".to_string()]))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(store.goals().is_empty());
    }

    #[test]
    fn update_goal_sets_status_progress_and_links() {
        let mut store = HabitGoalStore::new();
        let habit = store.create_habit(water_habit()).unwrap();
        let goal = store.create_goal(reading_goal(vec![])).unwrap();
        let patch = GoalPatch {
            status: Some(GoalStatus::AtRisk),
            progress: Some(40.0),
            linked_habit_ids: Some(vec![habit.id.clone()]),
            ..Default::default()
        };
        let updated = store.update_goal(&goal.id, patch).unwrap();
        assert_eq!(updated.status, GoalStatus::AtRisk);
        assert_eq!(updated.status_badge(), GoalStatus::AtRisk);
        assert_eq!(updated.progress, 40.0);
        assert_eq!(updated.linked_habit_ids, vec![habit.id]);
    }

    #[test]
    fn update_goal_rejects_out_of_range_progress() {
        let mut store = HabitGoalStore::new();
        let goal = store.create_goal(reading_goal(vec![])).unwrap();
        for progress in [-1.0, 100.5, f64::NAN] {
            let patch = GoalPatch {
                progress: Some(progress),
                ..Default::default()
            };
            assert!(matches!(
                store.update_goal(&goal.id, patch),
                Err(StoreError::InvalidInput(_))
            ));
        }
        assert_eq!(store.goals()[0].progress, 0.0);
    }

    #[test]
    fn update_goal_rejects_unknown_link() {
        let mut store = HabitGoalStore::new();
        let goal = store.create_goal(reading_goal(vec![])).unwrap();
        let patch = GoalPatch {
            linked_habit_ids: Some(vec!["missing".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            store.update_goal(&goal.id, patch),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(store.goals()[0].linked_habit_ids.is_empty());
    }

    #[test]
    fn delete_goal_never_touches_habits() {
        let mut store = HabitGoalStore::new();
        let habit = store.create_habit(water_habit()).unwrap();
        let goal = store.create_goal(reading_goal(vec![habit.id])).unwrap();
        store.delete_goal(&goal.id);
        assert!(store.goals().is_empty());
        assert_eq!(store.habits().len(), 1);
        store.delete_goal(&goal.id);
        assert!(store.goals().is_empty());
    }

    #[test]
    fn listing_preserves_insertion_order_across_deletes() {
        let mut store = HabitGoalStore::new();
        let mut ids = Vec::new();
        for name in ["One", "Two", "Three", "Four"] {
            let mut input = water_habit();
            input.name = name.to_string();
            ids.push(store.create_habit(input).unwrap().id);
        }
        store.delete_habit(&ids[1]);
        let listed: Vec<&str> = store.habits().iter().map(|habit| habit.name.as_str()).collect();
        assert_eq!(listed, vec!["One", "Three", "Four"]);
    }

    #[test]
    fn progress_percent_is_monotonic_and_bounded() {
        let habit = Habit {
            id: "probe".to_string(),
            name: "Sleep".to_string(),
            category: Category::Sleep,
            completed: false,
            target: 8.0,
            current: 0.0,
            increment_step: 0.5,
            unit: "hours".to_string(),
        };
        let mut previous = -1.0;
        for step in 0..40 {
            let mut probe = habit.clone();
            probe.current = f64::from(step) * 0.5;
            let percent = habit_progress_percent(&probe);
            assert!(percent >= previous);
            assert!((0.0..=100.0).contains(&percent));
            previous = percent;
        }
    }

    #[test]
    fn progress_percent_of_zero_target_is_zero() {
        let habit = Habit {
            id: "probe".to_string(),
            name: "Broken".to_string(),
            category: Category::Other,
            completed: false,
            target: 0.0,
            current: 3.0,
            increment_step: 0.5,
            unit: "times".to_string(),
        };
        assert_eq!(habit_progress_percent(&habit), 0.0);
    }
}
