//! The `cheatquiz play` command.

use std::io;

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cheatquiz_core::parser::parse_file;
use cheatquiz_core::{load_config_from, styler_for, QuizRunner};

use crate::PlayArgs;

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;

    let source = args.source.unwrap_or(config.source);
    let records = parse_file(&source)?;

    let seed = args.seed.or(config.seed);
    tracing::debug!(source = %source.display(), ?seed, records = records.len(), "starting session");

    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let mut runner = QuizRunner::new(records, rng)
        .with_styler(styler_for(config.color && !args.no_color))
        .with_sentinel(config.sentinel)
        .with_mode(args.mode.unwrap_or(config.mode));

    let stdout = io::stdout();
    runner.run(io::stdin().lock(), stdout.lock())?;
    runner.report(stdout.lock())?;

    Ok(())
}
