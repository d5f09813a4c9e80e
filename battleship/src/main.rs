use std::{
    fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{info, trace};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;
use thiserror::Error;

use seabattle::{
    board::{column_index, column_label, Coordinate, GenerateError, ShotOutcome, DEFAULT_SIZE},
    game::{Game, Player, TurnError},
};

mod logging;

/// Smallest board that holds a fleet.
const MIN_SIZE: usize = 3;

/// Space between the two boards when shown side by side.
const GUTTER: &str = "          ";

/// Errors that end the program.
#[derive(Debug, Error)]
enum AppError {
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("could not set up the game: {0}")]
    Setup(#[from] GenerateError),
}

fn main() {
    logging::init_logging();
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let default_size = DEFAULT_SIZE.to_string();
    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sea battle against the computer.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of both boards")
                .takes_value(true)
                .default_value(&default_size)
                .validator(validate_size),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random number generator for a reproducible game")
                .takes_value(true)
                .validator(|seed| seed.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .get_matches();

    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let mut rng = match matches.value_of("seed").and_then(|seed| seed.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    welcome();
    let first = choose_player(&matches, &mut rng, &mut input)?;
    let mut game = Game::random(&mut rng, size, first)?;
    info!("starting a {}x{} game, {:?} shoots first", size, size, first);

    let mut news = String::new();
    while game.winner().is_none() {
        show_boards(&game);
        println!("{}", news);
        news = match game.current() {
            Player::Human => human_turn(&mut game, &mut input)?,
            Player::Computer => computer_turn(&mut game, &mut rng),
        };
    }

    show_boards(&game);
    println!("{}", news);
    match game.winner() {
        Some(Player::Human) => println!("You win!"),
        Some(Player::Computer) => println!("I win!"),
        None => {}
    }
    Ok(())
}

/// Check the `--size` argument.
fn validate_size(size: String) -> Result<(), String> {
    match size.parse::<usize>() {
        Ok(size) if size >= MIN_SIZE => Ok(()),
        Ok(size) => Err(format!("size must be at least {}, got {}", MIN_SIZE, size)),
        Err(err) => Err(format!("invalid size {}: {}", size, err)),
    }
}

/// Print the startup banner.
fn welcome() {
    println!(
        r"
    ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
             S E A   B A T T L E
    ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
          |\          |\          |\
         _|_\_       _|_\_       _|_\_
         \___/       \___/       \___/

Shoot by typing a column letter and a row number, like в7.
A shot that finds a vessel earns another shot.
"
    );
}

/// Choose which [`Player`] goes first based on either args or cli input.
fn choose_player<B: BufRead>(
    matches: &ArgMatches,
    rng: &mut impl Rng,
    input: &mut InputReader<B>,
) -> io::Result<Player> {
    Ok(if let Some(clichoice) = matches.value_of("first_player") {
        match clichoice.to_ascii_lowercase().as_str() {
            "human" | "me" => Player::Human,
            "computer" | "bot" => Player::Computer,
            _ => rng.gen(),
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Player::Human),
            "no" | "n" | "second" | "2" | "2nd" => Some(Player::Computer),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Ask the human for shots until one is accepted.
fn human_turn(game: &mut Game, input: &mut InputReader<impl BufRead>) -> io::Result<String> {
    let size = game.board(Player::Computer).size();
    loop {
        let target = input.read_input_lower("your move ->", |text| parse_target(text, size))?;
        match game.shoot(target) {
            Ok(outcome) => return Ok(describe(Player::Human, target, outcome)),
            Err(TurnError::Shot(err)) => println!("{}, try again.", err.reason()),
            Err(err @ TurnError::AlreadyOver) => return Ok(err.to_string()),
        }
    }
}

/// Fire at a random cell of the human's board, picking again if the shot is refused.
fn computer_turn(game: &mut Game, rng: &mut impl Rng) -> String {
    let size = game.board(Player::Human).size();
    loop {
        let target = Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size));
        match game.shoot(target) {
            Ok(outcome) => return describe(Player::Computer, target, outcome),
            Err(err) => trace!("computer shot at {:?} refused: {}", target, err),
        }
    }
}

/// Turn a typed target such as `в7` into a [`Coordinate`]. Rows are typed 1-based.
/// Columns beyond the board are let through so the board can refuse the shot.
fn parse_target(text: &str, size: usize) -> Option<Coordinate> {
    /// A column label followed by a row number.
    static TARGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<col>[^\d\s]+)\s*(?P<row>[0-9]+)$").unwrap());

    let captures = match TARGET.captures(text) {
        Some(captures) => captures,
        None => {
            println!("That does not look like a coordinate. Type a letter and a number, like в7.");
            return None;
        }
    };
    let label = captures.name("col").unwrap().as_str();
    let mut letters = label.chars();
    let col = match (letters.next(), letters.next()) {
        (Some(letter), None) => column_index(letter),
        _ => None,
    };
    let col = match col {
        Some(col) => col,
        None => {
            println!(
                "There is no column \"{}\"; columns run from {} to {}.",
                label,
                ColumnName(0),
                ColumnName(size - 1)
            );
            return None;
        }
    };
    let row = match captures.name("row").unwrap().as_str().parse::<usize>() {
        Ok(row) if row >= 1 => row - 1,
        Ok(_) => {
            println!("Rows are numbered from 1.");
            return None;
        }
        Err(_) => {
            println!("There is no row {}.", captures.name("row").unwrap().as_str());
            return None;
        }
    };
    Some(Coordinate::new(row, col))
}

/// Message reporting a shot.
fn describe(shooter: Player, target: Coordinate, outcome: ShotOutcome) -> String {
    let who = match shooter {
        Player::Human => "your move",
        Player::Computer => "my move",
    };
    let result = match outcome {
        ShotOutcome::Miss => "miss!",
        ShotOutcome::Hit => "hit!",
        ShotOutcome::Sunk => "sunk!",
    };
    format!("{} -> {}: {}", who, CellName(target), result)
}

/// Print the human's own board next to what they know of the computer's.
fn show_boards(game: &Game) {
    let own = game.board(Player::Human).render(true);
    let enemy = game.board(Player::Computer).render(false);
    let width = own.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    println!();
    println!(
        "{:<width$}{}{}",
        "   your fleet",
        GUTTER,
        "   enemy waters",
        width = width
    );
    for (mine, theirs) in own.iter().zip(&enemy) {
        println!("{:<width$}{}{}", mine, GUTTER, theirs, width = width);
    }
}

/// Display helper that prints a column's label.
struct ColumnName(usize);

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match column_label(self.0) {
            Some(label) => f.pad(label.encode_utf8(&mut [0; 4])),
            None => f.pad("?"),
        }
    }
}

/// Display helper that prints a cell the way the player types it, such as `в7`.
struct CellName(Coordinate);

impl fmt::Display for CellName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{}{}", ColumnName(self.0.col), self.0.row + 1))
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to lower case before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            let lowered = self.buf.trim().to_lowercase();
            if let Some(val) = checker(&lowered) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_and_row() {
        assert_eq!(parse_target("в7", 10), Some(Coordinate::new(6, 2)));
        assert_eq!(parse_target("а 10", 10), Some(Coordinate::new(9, 0)));
    }

    #[test]
    fn columns_past_the_board_reach_the_board() {
        assert_eq!(parse_target("я1", 10), Some(Coordinate::new(0, 27)));
        assert_eq!(parse_target("а11", 10), Some(Coordinate::new(10, 0)));
    }

    #[test]
    fn rejects_malformed_targets() {
        assert_eq!(parse_target("", 10), None);
        assert_eq!(parse_target("7в", 10), None);
        assert_eq!(parse_target("q7", 10), None);
        assert_eq!(parse_target("аб7", 10), None);
        assert_eq!(parse_target("а0", 10), None);
    }

    #[test]
    fn cell_names_match_input() {
        assert_eq!(CellName(Coordinate::new(6, 2)).to_string(), "в7");
        assert_eq!(
            describe(Player::Computer, Coordinate::new(0, 0), ShotOutcome::Sunk),
            "my move -> а1: sunk!"
        );
    }

    #[test]
    fn size_validation() {
        assert!(validate_size(DEFAULT_SIZE.to_string()).is_ok());
        assert!(validate_size("10".to_owned()).is_ok());
        assert!(validate_size("2".to_owned()).is_err());
        assert!(validate_size("ten".to_owned()).is_err());
    }
}
