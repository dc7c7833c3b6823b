use blackjack_trainer::{Action, Outcome, Round, RoundError, RoundPhase, TableRules};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "trainer-sim",
    about = "Play perfect basic strategy against the trainer engine and report the results"
)]
struct Args {
    /// Number of rounds to play
    #[arg(long, default_value = "10000")]
    rounds: u32,

    /// Bet per round
    #[arg(long, default_value = "10.0")]
    bet: f64,

    /// Player level used for XP scaling
    #[arg(long, default_value = "1")]
    level: u32,

    /// Dealer stands on all 17s instead of hitting soft 17
    #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
    stand_on_soft_17: bool,
}

#[derive(Default)]
struct Tally {
    wagered: f64,
    returned: f64,
    wins: u32,
    losses: u32,
    pushes: u32,
    xp: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let rules = if args.stand_on_soft_17 {
        TableRules::stand_on_all_17s()
    } else {
        TableRules::default()
    };

    eprintln!("Configuration:");
    eprintln!("  Rounds:         {}", args.rounds);
    eprintln!("  Bet:            {}", args.bet);
    eprintln!("  Level:          {}", args.level);
    eprintln!(
        "  Dealer soft 17: {}",
        if rules.dealer_hits_soft_17 {
            "hits"
        } else {
            "stands"
        }
    );
    eprintln!("Playing...");

    let mut round = Round::new(rules, args.level);
    let mut tally = Tally::default();

    for _ in 0..args.rounds {
        if let Err(error) = play_round(&mut round, args.bet) {
            eprintln!("round aborted: {error}");
            std::process::exit(1);
        }
        if let Some(resolution) = round.resolution() {
            tally.wagered += resolution.total_bet;
            tally.returned += resolution.payout;
            tally.wins += resolution.wins_delta;
            tally.losses += resolution.losses_delta;
            tally.pushes += resolution
                .outcomes
                .iter()
                .filter(|o| **o == Outcome::Push)
                .count() as u32;
            tally.xp += u64::from(resolution.xp_gained);
        }
    }

    let net = tally.returned - tally.wagered;
    println!("Hands won:      {}", tally.wins);
    println!("Hands lost:     {}", tally.losses);
    println!("Hands pushed:   {}", tally.pushes);
    println!("Total wagered:  {:.2}", tally.wagered);
    println!("Net result:     {:+.2}", net);
    if tally.wagered > 0.0 {
        println!("Player return:  {:+.4}%", net / tally.wagered * 100.0);
    }
    println!("XP earned:      {}", tally.xp);
}

fn play_round(round: &mut Round, bet: f64) -> Result<(), RoundError> {
    round.reset();
    round.deal(bet)?;
    while round.phase() == RoundPhase::PlayerTurn {
        match round.recommended_action() {
            Some(Action::Hit) => round.hit()?,
            Some(Action::Stand) => round.stand()?,
            Some(Action::Double) => round.double()?,
            Some(Action::Split) => round.split()?,
            None => break,
        }
    }
    if round.phase() == RoundPhase::DealerTurn {
        round.play_dealer()?;
    }
    Ok(())
}
