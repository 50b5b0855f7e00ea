use std::env::var;

use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use unocore::{
    ai::FirstLegal,
    config::RoundConfig,
    error::UnoError,
    event::GameEvent,
    uno::{Phase, Uno},
};

// Safety net against rounds that keep cycling the same cards.
const MAX_STEPS: usize = 2_000;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Ok(value) => value
            .parse()
            .wrap_err_with(|| format!("`{key}` has an invalid value: {value}")),
        Err(_) => Ok(default),
    }
}

enum RoundOutcome {
    Won(usize),
    NoWinner,
    Unfinished,
}

fn play_round(config: RoundConfig) -> Result<RoundOutcome> {
    let mut uno = Uno::new(config)?;
    uno.subscribe(|event: &GameEvent| debug!(?event));

    for _ in 0..MAX_STEPS {
        if let Phase::RoundOver { winner } = uno.phase() {
            return Ok(winner.map_or(RoundOutcome::NoWinner, RoundOutcome::Won));
        }
        match uno.step_ai(&FirstLegal) {
            Ok(_) | Err(UnoError::DeckExhausted) => {}
            Err(err) => return Err(err.into()),
        }
    }

    warn!(steps = MAX_STEPS, "round stopped without a result");
    Ok(RoundOutcome::Unfinished)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let players = env_or("UNO_PLAYERS", 4usize)?;
    let rounds = env_or("UNO_ROUNDS", 1usize)?;
    let seed = match var("UNO_SEED") {
        Ok(seed) => Some(
            seed.parse::<u64>()
                .wrap_err_with(|| format!("`UNO_SEED` has an invalid value: {seed}"))?,
        ),
        Err(_) => None,
    };

    let mut wins = vec![0usize; players];
    let mut draws = 0;
    let mut unfinished = 0;

    for round in 0..rounds {
        let mut config = RoundConfig::new(players).all_ai();
        if let Some(seed) = seed {
            config = config.with_seed(seed.wrapping_add(round as u64));
        }

        match play_round(config)? {
            RoundOutcome::Won(winner) => {
                info!(round, winner, "round won");
                wins[winner] += 1;
            }
            RoundOutcome::NoWinner => {
                info!(round, "round ended without a winner");
                draws += 1;
            }
            RoundOutcome::Unfinished => unfinished += 1,
        }
    }

    info!(?wins, draws, unfinished, "done");
    Ok(())
}
