pub mod domain;
pub mod roster;
