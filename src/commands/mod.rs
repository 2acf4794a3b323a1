pub mod spell;
pub mod summarize;
