pub mod compute;
pub mod config;
pub mod entities;
pub mod high_score;
pub mod input;
pub mod scoreboard;
pub mod settings;
pub mod stats;
