use clap::Parser;
use hand_trainer::core::{Hand, HandCategory, Rankable};
use hand_trainer::generator::{GeneratorConfig, RngHandGenerator};
use hand_trainer::quiz::QuizQuestion;
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "hand-quiz")]
#[command(about = "Deal hand recognition quiz hands, or rank hands you give it")]
struct Cli {
    /// Only deal hands of this category, e.g. "Royal Flush"
    #[arg(short, long)]
    target: Option<HandCategory>,

    /// How many hands to deal
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Most hands tried when looking for a category
    #[arg(short, long, default_value_t = GeneratorConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for reproducible hands
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print one JSON object per line
    #[arg(short, long)]
    json: bool,

    /// Rank these seven cards instead of dealing, e.g. "AH KH QH JH 10H 2C 3D"
    #[arg(short, long)]
    rank: Option<Hand>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(hand) = cli.rank {
        let best = hand.best_hand()?;
        if cli.json {
            println!("{}", serde_json::to_string(&best)?);
        } else {
            let cards = Hand::new_with_cards(best.cards.to_vec())?;
            println!("{hand} => {} ({cards})", best.category);
        }
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut generator = RngHandGenerator::new(rng).config(GeneratorConfig {
        max_attempts: cli.max_attempts,
    });

    for _ in 0..cli.count {
        let hand = match cli.target {
            Some(target) => generator.generate_with_target(target),
            None => generator.generate_uniform(),
        };
        let question = QuizQuestion {
            cards: hand.cards,
            best_category: hand.category,
        };

        if cli.json {
            println!("{}", serde_json::to_string(&question)?);
        } else {
            let board = Hand::new_with_cards(question.board().to_vec())?;
            let hole = Hand::new_with_cards(question.hole_cards().to_vec())?;
            let miss = if hand.is_exact() { "" } else { " (missed target)" };
            println!(
                "board: {board} | hole: {hole} => {}{miss} after {} hands",
                question.best_category, hand.attempts
            );
        }
    }

    Ok(())
}
