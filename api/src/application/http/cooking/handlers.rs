pub mod exit_cooking;
pub mod next_step;
pub mod previous_step;
pub mod read_aloud;
pub mod select_recipe;
pub mod stop_reading;
