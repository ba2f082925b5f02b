pub mod board;
pub mod builder;
pub mod capture;
pub mod editor;
pub mod example;
pub mod export;
pub mod game;
pub mod ids;
pub mod shuffle;
