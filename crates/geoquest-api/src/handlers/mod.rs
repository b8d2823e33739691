mod answer;
mod health;
mod position;
mod progress;
mod quests;

pub use answer::{select_option, submit_answer};
pub use health::health_check;
pub use position::update_position;
pub use progress::get_progress;
pub use quests::{attempt_quest, list_quests};
