pub mod calculator;
pub mod compose;
pub mod logic;
pub mod pipeline;
