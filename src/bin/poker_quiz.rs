// src/bin/poker_quiz.rs

use std::error::Error;

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

use poker_quiz::api::{format_round, letter_for, AnswerCommand, ApiError, QuizRoundDto};
use poker_quiz::engine::{new_round, QuizRound, Scoreboard};
use poker_quiz::infra::{RngSeed, SystemRng};

/// Квиз: выбери сильнейшую руку на борде.
#[derive(Debug, Parser)]
#[command(name = "poker_quiz", about = "Texas Hold'em best hand quiz")]
struct Args {
    /// Seed сессии: одинаковый seed даёт одинаковые раунды.
    #[arg(long)]
    seed: Option<u64>,

    /// Остановиться после стольких отвеченных раундов.
    #[arg(long)]
    rounds: Option<u32>,

    /// Печатать раунд как JSON вместо таблицы.
    #[arg(long)]
    json: bool,

    /// Без ANSI-цветов.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }
    log::info!("starting quiz: {args:?}");

    println!("Welcome to Texas Hold'em Best Hand Quiz!");
    println!("Type 'quit' to exit at any time.\n");

    let session = args.seed.map(RngSeed::from_u64);
    let mut system_rng = SystemRng;
    let mut score = Scoreboard::new();
    let mut round_index: u64 = 0;

    loop {
        if args.rounds.is_some_and(|limit| score.total >= limit) {
            break;
        }

        let round = match &session {
            Some(seed) => new_round(&mut seed.derive(round_index).to_rng())?,
            None => new_round(&mut system_rng)?,
        };
        round_index += 1;

        show_round(&round, false, args.json)?;

        println!("\nWhich hand is the best? (Enter A, B, C, etc.)");
        let input: String = Input::new()
            .with_prompt("Your answer")
            .allow_empty(true)
            .interact_text()?;

        let choice = match AnswerCommand::parse(&input, round.hand_count()) {
            Ok(AnswerCommand::Quit) => break,
            Ok(AnswerCommand::Pick(index)) => index,
            Err(err @ (ApiError::InvalidInput(_) | ApiError::ChoiceOutOfRange { .. })) => {
                println!("{err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let correct = round.is_correct(choice);
        score.record(correct);
        log::debug!("answer {choice}, best {}, correct = {correct}", round.best_index());

        println!("\n{}", "=".repeat(poker_quiz::api::RULE_WIDTH));
        show_round(&round, true, args.json)?;
        report_answer(&round, choice, correct);

        println!("\nScore: {score}");
        println!("\nPress Enter to continue or type 'quit' to exit...");
        let next: String = Input::new().allow_empty(true).interact_text()?;
        if next.trim().eq_ignore_ascii_case("quit") {
            break;
        }
    }

    println!("\nFinal Score: {score}");
    if let Some(accuracy) = score.accuracy() {
        println!("Accuracy: {accuracy:.1}%");
    }
    println!("Thanks for playing!");
    Ok(())
}

fn show_round(round: &QuizRound, reveal: bool, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let dto = QuizRoundDto::from_round(round, reveal);
        println!("{}", serde_json::to_string_pretty(&dto)?);
    } else {
        print!("{}", format_round(round, reveal));
    }
    Ok(())
}

fn report_answer(round: &QuizRound, choice: usize, correct: bool) {
    let best = round.best_index();
    if let Some(eval) = round.evaluate(best) {
        println!("\nBest Hand: {}", eval.label());
    }

    if correct {
        println!("{}", "✓ Correct!".green());
        return;
    }

    let best_letter = letter_for(best).unwrap_or('?');
    println!(
        "{}",
        format!("✗ Incorrect. The correct answer was {best_letter}.").red()
    );
    if let Some(eval) = round.evaluate(choice) {
        let letter = letter_for(choice).unwrap_or('?');
        println!("  Your choice ({letter}) has: {}", eval.label());
    }
}
