use auto_bot::Automaton;
use clap::Parser;
use clueless::{PlayerError, PlayerId, Roster, Suspect};
use clueless_bot_utils::Host;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    Host::new(
        |roster: &mut Roster,
         player_id: PlayerId,
         available_suspects: &[Suspect],
         total_players: usize| {
            // Every seat gets its own RNG, so that seats don't influence each other
            let seat_rng = StdRng::seed_from_u64(rng.gen());
            let automaton = Automaton::new(
                roster,
                player_id,
                available_suspects,
                total_players,
                seat_rng,
            )?;
            let joined = automaton.joined();
            Ok::<_, PlayerError>((automaton, joined))
        },
    )
    .run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout is reserved for the protocol
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
