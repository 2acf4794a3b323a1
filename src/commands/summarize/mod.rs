mod normalize;
mod page_extract;
mod pipeline;
mod record_match;
mod render;
mod run;
mod spell_out;

pub use run::run;
pub use spell_out::{UNRECOGNIZED_AMOUNT, spell_out};
