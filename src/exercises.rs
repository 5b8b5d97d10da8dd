//! Built-in exercise library
//!
//! A fixed catalog browsed offline, filtered by a search term, difficulty
//! and equipment.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: u32,
    pub name: &'static str,
    /// Primary muscle group
    pub muscle: &'static str,
    pub difficulty: Difficulty,
    /// "None" for bodyweight exercises
    pub equipment: &'static str,
}

const fn exercise(
    id: u32,
    name: &'static str,
    muscle: &'static str,
    difficulty: Difficulty,
    equipment: &'static str,
) -> Exercise {
    Exercise {
        id,
        name,
        muscle,
        difficulty,
        equipment,
    }
}

use Difficulty::{Advanced, Beginner, Intermediate};

pub static CATALOG: [Exercise; 30] = [
    exercise(1, "Push-ups", "Chest", Beginner, "None"),
    exercise(2, "Bench Press", "Chest", Intermediate, "Barbell"),
    exercise(3, "Incline Dumbbell Press", "Chest", Intermediate, "Dumbbells"),
    exercise(4, "Chest Fly", "Chest", Intermediate, "Machine"),
    exercise(5, "Pull-ups", "Back", Intermediate, "Pull-up Bar"),
    exercise(6, "Lat Pulldown", "Back", Beginner, "Machine"),
    exercise(7, "Deadlift", "Back", Advanced, "Barbell"),
    exercise(8, "Seated Row", "Back", Intermediate, "Cable"),
    exercise(9, "Squats", "Legs", Beginner, "None"),
    exercise(10, "Lunges", "Legs", Beginner, "None"),
    exercise(11, "Leg Press", "Legs", Intermediate, "Machine"),
    exercise(12, "Romanian Deadlift", "Legs", Intermediate, "Barbell"),
    exercise(13, "Calf Raises", "Legs", Beginner, "None"),
    exercise(14, "Plank", "Core", Beginner, "None"),
    exercise(15, "Crunches", "Core", Beginner, "None"),
    exercise(16, "Hanging Leg Raise", "Core", Intermediate, "Pull-up Bar"),
    exercise(17, "Russian Twists", "Core", Intermediate, "None"),
    exercise(18, "Bicep Curls", "Arms", Beginner, "Dumbbells"),
    exercise(19, "Tricep Dips", "Arms", Intermediate, "Parallel Bars"),
    exercise(20, "Hammer Curls", "Arms", Beginner, "Dumbbells"),
    exercise(21, "Skull Crushers", "Arms", Intermediate, "Barbell"),
    exercise(22, "Overhead Press", "Shoulders", Intermediate, "Barbell"),
    exercise(23, "Lateral Raises", "Shoulders", Beginner, "Dumbbells"),
    exercise(24, "Arnold Press", "Shoulders", Intermediate, "Dumbbells"),
    exercise(25, "Front Raises", "Shoulders", Beginner, "Dumbbells"),
    exercise(26, "Burpees", "Full Body", Intermediate, "None"),
    exercise(27, "Mountain Climbers", "Full Body", Beginner, "None"),
    exercise(28, "Kettlebell Swings", "Full Body", Intermediate, "Kettlebell"),
    exercise(29, "Clean and Press", "Full Body", Advanced, "Barbell"),
    exercise(30, "Jump Squats", "Full Body", Intermediate, "None"),
];

/// Library filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    /// Case-insensitive substring of the name or muscle group
    pub search: String,
    pub difficulty: Option<Difficulty>,
    /// Exact equipment name, compared case-insensitively
    pub equipment: Option<String>,
}

impl ExerciseFilter {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    pub fn matches(&self, exercise: &Exercise) -> bool {
        let term = self.search.trim().to_lowercase();
        let found = term.is_empty()
            || exercise.name.to_lowercase().contains(&term)
            || exercise.muscle.to_lowercase().contains(&term);

        found
            && self.difficulty.map_or(true, |d| exercise.difficulty == d)
            && self
                .equipment
                .as_deref()
                .map_or(true, |e| exercise.equipment.eq_ignore_ascii_case(e.trim()))
    }

    /// Matching catalog entries in catalog order
    pub fn apply(&self) -> Vec<&'static Exercise> {
        CATALOG.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Distinct equipment names in catalog order
pub fn equipment_options() -> Vec<&'static str> {
    let mut options: Vec<&'static str> = Vec::new();
    for exercise in &CATALOG {
        if !options.contains(&exercise.equipment) {
            options.push(exercise.equipment);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(found: &[&Exercise]) -> Vec<&'static str> {
        found.iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_catalog_ids_are_sequential() {
        for (i, exercise) in CATALOG.iter().enumerate() {
            assert_eq!(exercise.id as usize, i + 1);
        }
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        assert_eq!(ExerciseFilter::default().apply().len(), 30);
        assert_eq!(ExerciseFilter::new("   ").apply().len(), 30);
    }

    #[test]
    fn test_search_name_or_muscle() {
        let found = ExerciseFilter::new("DEADLIFT").apply();
        assert_eq!(names(&found), vec!["Deadlift", "Romanian Deadlift"]);

        let chest = ExerciseFilter::new("chest").apply();
        assert_eq!(chest.len(), 4);
        assert!(chest.iter().all(|e| e.muscle == "Chest"));
    }

    #[test]
    fn test_filters_combine() {
        let found = ExerciseFilter::new("")
            .difficulty(Difficulty::Beginner)
            .equipment("dumbbells")
            .apply();
        assert_eq!(
            names(&found),
            vec!["Bicep Curls", "Hammer Curls", "Lateral Raises", "Front Raises"]
        );

        let advanced = ExerciseFilter::default().difficulty(Difficulty::Advanced).apply();
        assert_eq!(names(&advanced), vec!["Deadlift", "Clean and Press"]);

        let none = ExerciseFilter::new("squat").equipment("Barbell").apply();
        assert!(none.is_empty());
    }

    #[test]
    fn test_equipment_options() {
        assert_eq!(
            equipment_options(),
            vec![
                "None",
                "Barbell",
                "Dumbbells",
                "Machine",
                "Pull-up Bar",
                "Cable",
                "Parallel Bars",
                "Kettlebell"
            ]
        );
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(" advanced ".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert_eq!("Beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
