pub mod habits;

pub use habits::{HabitProfile, InputConstraints, ProcessedFoods};
