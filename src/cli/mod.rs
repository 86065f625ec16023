pub mod command;
pub mod size;
