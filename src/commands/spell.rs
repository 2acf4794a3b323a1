use std::io::{self, Write};

use anyhow::Result;
use tracing::warn;

use crate::cli::SpellArgs;
use crate::commands::summarize::{UNRECOGNIZED_AMOUNT, spell_out};

pub fn run(args: SpellArgs) -> Result<()> {
    let words = spell_out(&args.amount);
    if words == UNRECOGNIZED_AMOUNT {
        warn!(amount = %args.amount, "amount not recognized");
    }

    let mut output = io::stdout().lock();
    writeln!(output, "{words}")?;
    Ok(())
}
