pub mod calculator;
pub mod input;
pub mod logic;
pub mod parser;
pub mod reconstruct;
