use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use swirled_out::{
    standings, GameRng, GameState, Move, MoveCtx, Phase, PunishmentKind, SetupConfig, SwirledOut,
    TileType,
};

#[derive(Parser)]
#[command(name = "simulate", about = "Play seeded Swirled Out games with a simple bot")]
struct Cli {
    /// Base seed; each game plays on its own fork
    #[arg(short, long, default_value = "42", env = "SWIRLED_SEED")]
    seed: u64,

    /// Seats at the table (ignored when --config is given)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: usize,

    /// Give up on a game after this many turns
    #[arg(long, default_value = "500")]
    max_turns: usize,

    /// Path to a setup TOML
    #[arg(long, env = "SWIRLED_CONFIG")]
    config: Option<PathBuf>,

    /// Print final states as JSON instead of standings tables
    #[arg(long)]
    json: bool,
}

/// Milliseconds of simulated time per move.
const TICK_MS: u64 = 1_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            SetupConfig::from_toml_str(&content)?
        }
        None => SetupConfig::new(cli.players),
    };

    let game = SwirledOut::new();
    let mut rng = GameRng::new(cli.seed);

    for index in 0..cli.games {
        let mut game_rng = rng.fork();
        let mut state = game.setup_with(config.clone())?;
        let turns = play(&game, &mut state, &mut game_rng, cli.max_turns);

        tracing::info!(game = index, turns, finished = state.is_finished(), "game over");

        if cli.json {
            println!("{}", state.to_json()?);
            continue;
        }

        let result = game.end_if(&state);
        println!("game {index}: {turns} turns, result {result:?}");
        for (rank, row) in standings(&state).iter().enumerate() {
            println!(
                "  {}. {:<12} pos {:>2}  score {:>3}  actions {:>3}  punishments {:>3}",
                rank + 1,
                row.name,
                row.position,
                row.score,
                row.completed_actions,
                row.punishments,
            );
        }
    }

    Ok(())
}

/// Play until the game ends or `max_turns` is reached. Returns turns played.
fn play(game: &SwirledOut, state: &mut GameState, rng: &mut GameRng, max_turns: usize) -> usize {
    let mut clock = 0u64;
    let mut send = |state: &mut GameState, rng: &mut GameRng, mv: Move| {
        clock += TICK_MS;
        let mut ctx = MoveCtx::new(rng, clock);
        game.apply(state, &mv, &mut ctx)
    };

    send(state, rng, Move::StartGame);
    let first = game.first(state);
    game.on_begin(state, first);

    for turn in 0..max_turns {
        send(state, rng, Move::RollDice);
        let roll = state.last_roll.map_or(0, i64::from);
        let from = state.current().map_or(0, |p| p.position as i64);
        send(state, rng, Move::MovePawn { position: from + roll });

        if state.phase == Phase::Playing {
            let landed = state
                .current()
                .and_then(|p| state.tile_at(p.position))
                .map(|t| t.tile_type);
            match landed {
                Some(TileType::Punishment) => {
                    let kind = match rng.below(3) {
                        0 => PunishmentKind::MoveBack,
                        1 => PunishmentKind::LosePoints,
                        _ => PunishmentKind::ExtraChallenge,
                    };
                    send(state, rng, Move::ApplyPunishment { kind });
                }
                Some(TileType::Wild) => {
                    send(state, rng, Move::DrawAction { category: None, intensity: None });
                }
                _ => {}
            }
        }

        if state.phase == Phase::Action {
            // One card in four gets skipped.
            let mv = if rng.below(4) == 0 {
                Move::SkipAction
            } else {
                Move::CompleteAction
            };
            send(state, rng, mv);
        }

        if game.end_if(state).is_some() {
            return turn + 1;
        }
        game.end_turn(state);
    }

    max_turns
}
