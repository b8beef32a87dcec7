use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use holdem_odds::core::{CommunityCards, Deck, Hand, OddsError, Street, evaluate_hand};
use holdem_odds::holdem::{
    DEFAULT_TRIALS, EstimatorConfig, MAX_PLAYERS, RngMonteCarloGameBuilder, TieHandling,
    find_winning_opponent,
};

#[derive(Parser, Debug)]
#[command(
    name = "win_odds",
    about = "Estimate how often a Texas Hold'em hand wins",
    long_about = "Run a Monte Carlo simulation for the given hole cards at every street \n\
                  from preflop up to the community cards given with --board.\n\
                  Without hole cards a whole hand is dealt to every player and \n\
                  played out to a showdown."
)]
struct Args {
    /// Hole cards (e.g. "AsAh"). Leave out to deal a hand to every player
    hand: Option<String>,

    /// Known community cards, 0, 3, 4 or 5 of them (e.g. "AdKcKh")
    #[arg(short, long, default_value = "")]
    board: String,

    /// Players at the table, including you
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Number of trials per street
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed for a repeatable estimate
    #[arg(long)]
    seed: Option<u64>,

    /// Count ties on their own instead of as wins
    #[arg(long)]
    separate_ties: bool,

    /// Judge hands only on the community cards known at each street
    #[arg(long)]
    known_cards_only: bool,
}

fn main() -> Result<(), OddsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = EstimatorConfig {
        trials: args.trials,
        tie_handling: if args.separate_ties {
            TieHandling::Separate
        } else {
            TieHandling::CountAsWin
        },
        complete_board: !args.known_cards_only,
        ..Default::default()
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    match &args.hand {
        Some(hand) => estimate(&args, config, &mut rng, Hand::new_from_str(hand)?),
        None => play(&args, config, &mut rng),
    }
}

/// Print the estimate for a known hand at every street up to `--board`.
fn estimate(
    args: &Args,
    config: EstimatorConfig,
    rng: &mut StdRng,
    hand: Hand,
) -> Result<(), OddsError> {
    let board = CommunityCards::new_from_str(&args.board)?;
    let last_street = board.street().ok_or(OddsError::NotAStreet(board.len()))?;

    println!("** Your Hand **");
    println!("{hand}");

    for street in Street::streets()
        .into_iter()
        .filter(|street| *street <= last_street)
    {
        let community =
            CommunityCards::new_with_cards(board.prefix(street.community_cards()).to_vec())?;
        print_street(args, config, rng, hand, street, &community)?;
    }

    Ok(())
}

/// Deal a full hand from one deck, print the estimate as each street is
/// revealed, then show who won.
fn play(args: &Args, config: EstimatorConfig, rng: &mut StdRng) -> Result<(), OddsError> {
    let mut table = Table::deal(rng, args.players)?;

    println!("** Your Hand **");
    println!("{}", table.hand);

    for street in Street::streets() {
        table.reveal(street)?;
        print_street(args, config, rng, table.hand, street, &table.community)?;
    }

    println!();
    match table.showdown() {
        None => println!("** Player 1 wins **"),
        Some(idx) => println!("** Bot {} wins **", idx + 2),
    }

    Ok(())
}

fn print_street(
    args: &Args,
    config: EstimatorConfig,
    rng: &mut StdRng,
    hand: Hand,
    street: Street,
    community: &CommunityCards,
) -> Result<(), OddsError> {
    let mut game = RngMonteCarloGameBuilder::with_rng(StdRng::seed_from_u64(rng.random()))
        .hand(hand)
        .community(community.clone())
        .num_players(args.players)
        .config(config)
        .build()?;
    let outcome = game.estimate()?;
    let percent = outcome.win_percentage().ok_or(OddsError::NoTrials)?;

    println!();
    println!("** {street} **");
    if !community.is_empty() {
        println!("{community}");
    }
    println!("Best hand: {}", evaluate_hand(&hand, community));
    println!(
        "Probability of winning against {} players: {}% ({} wins, {} losses, {} ties)",
        args.players - 1,
        percent,
        outcome.wins,
        outcome.losses,
        outcome.ties
    );
    Ok(())
}

/// One dealt hand of poker. The player sits first, the bots after.
struct Table {
    deck: Deck,
    hand: Hand,
    bots: Vec<Hand>,
    community: CommunityCards,
}

impl Table {
    fn deal(rng: &mut StdRng, players: usize) -> Result<Self, OddsError> {
        if !(2..=MAX_PLAYERS).contains(&players) {
            return Err(OddsError::InvalidPlayerCount(players));
        }
        let mut deck = Deck::shuffled(rng);
        let mut hands = Vec::with_capacity(players);
        for _ in 0..players {
            let first = deck.draw().ok_or(OddsError::DeckExhausted)?;
            let second = deck.draw().ok_or(OddsError::DeckExhausted)?;
            hands.push(Hand::new(first, second)?);
        }
        let bots = hands.split_off(1);
        Ok(Self {
            deck,
            hand: hands[0],
            bots,
            community: CommunityCards::new(),
        })
    }

    /// Deal community cards from the same deck until `street` is reached.
    fn reveal(&mut self, street: Street) -> Result<(), OddsError> {
        while self.community.len() < street.community_cards() {
            let card = self.deck.draw().ok_or(OddsError::DeckExhausted)?;
            self.community.push(card)?;
        }
        Ok(())
    }

    /// Index into `bots` of the winner, None if the player wins.
    fn showdown(&self) -> Option<usize> {
        find_winning_opponent(&self.hand, &self.bots, &self.community)
    }
}

#[cfg(test)]
mod tests {
    use holdem_odds::core::CardBitSet;
    use holdem_odds::holdem::compare_hands;

    use super::*;

    #[test]
    fn test_deal_distinct_cards() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut table = Table::deal(&mut rng, 6).unwrap();
        table.reveal(Street::River).unwrap();

        assert_eq!(5, table.bots.len());
        assert_eq!(5, table.community.len());

        let mut seen = CardBitSet::new();
        for hand in std::iter::once(&table.hand).chain(table.bots.iter()) {
            for card in hand {
                assert!(seen.insert(*card));
            }
        }
        for card in table.community.iter() {
            assert!(seen.insert(*card));
        }
        assert_eq!(17, seen.count());
    }

    #[test]
    fn test_reveal_streets() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut table = Table::deal(&mut rng, 2).unwrap();
        for street in Street::streets() {
            table.reveal(street).unwrap();
            assert_eq!(Some(street), table.community.street());
        }
    }

    #[test]
    fn test_showdown_winner_beats_player() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut table = Table::deal(&mut rng, 4).unwrap();
            table.reveal(Street::River).unwrap();

            let player = evaluate_hand(&table.hand, &table.community);
            match table.showdown() {
                Some(idx) => {
                    let bot = evaluate_hand(&table.bots[idx], &table.community);
                    assert!(compare_hands(&bot, &player).is_gt());
                }
                None => {
                    for bot in &table.bots {
                        let bot = evaluate_hand(bot, &table.community);
                        assert!(!compare_hands(&bot, &player).is_gt());
                    }
                }
            }
        }
    }

    #[test]
    fn test_deal_player_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Table::deal(&mut rng, 1),
            Err(OddsError::InvalidPlayerCount(1))
        ));
        assert!(matches!(
            Table::deal(&mut rng, MAX_PLAYERS + 1),
            Err(OddsError::InvalidPlayerCount(_))
        ));
    }
}
