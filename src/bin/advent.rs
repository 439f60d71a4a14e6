// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use advent::prelude::*;
use advent::style::{answer, paint};
use clap::{Parser, ValueEnum};
use std::fs::read_to_string;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(PartialEq, Clone, Copy, ValueEnum)]
enum Parts {
    /// only the first part
    #[value(name = "1", alias("one"))]
    One,
    /// only the second part
    #[value(name = "2", alias("two"))]
    Two,
    /// both parts, one after the other
    Both,
}

impl Parts {
    fn parts(self) -> &'static [Part] {
        match self {
            Parts::One => &[Part::One],
            Parts::Two => &[Part::Two],
            Parts::Both => &[Part::One, Part::Two],
        }
    }
}

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const INPUT_HELP: &str = "Input file containing the puzzle input\nuses stdin if unset or set to '-'";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Advent of Code solver", long_about = None)]
struct Args {
    #[arg(help = "Year of the puzzle")]
    #[arg(required_unless_present = "list")]
    year: Option<u16>,
    #[arg(help = "Day of the puzzle")]
    #[arg(required_unless_present = "list")]
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: Option<u8>,
    #[arg(help = INPUT_HELP.split_at(38).0)]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
    #[arg(help = "Which part of the puzzle to solve")]
    #[arg(short, long)]
    #[arg(default_value = "both")]
    part: Parts,
    #[arg(help = "List every solved puzzle, then exit")]
    #[arg(short, long)]
    list: bool,
}

fn list_solved() {
    use itertools::Itertools;
    for (year, ids) in &SOLVED.iter().chunk_by(|id| id.year) {
        println!("{year}: {}", ids.map(|id| id.day).format(", "));
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.list {
        list_solved();
        return ExitCode::SUCCESS;
    }
    let (Some(year), Some(day)) = (args.year, args.day) else {
        eprintln!("A year and day are required unless --list is passed");
        return ExitCode::FAILURE;
    };
    let id = PuzzleId::new(year, day);
    if !SOLVED.contains(&id) {
        eprintln!("There is no solution for {id}");
        return ExitCode::FAILURE;
    }

    let (file, input) = {
        use std::borrow::Cow;
        match args.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => (path.to_string_lossy(), read_to_string(path)),
            _ => (Cow::Borrowed("stdin"), io::read_to_string(io::stdin())),
        }
    };
    let input = match input {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read puzzle input from {file}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let style = io::stdout().is_terminal().then(answer);

    for &part in args.part.parts() {
        match solve(id, part, &input) {
            Ok(Answer::Number(n)) => println!("{id}, {part}: {}", paint(n, style)),
            // multi-line answers start on their own line
            Ok(Answer::Text(s)) if s.contains('\n') => println!("{id}, {part}:\n{}", paint(s, style)),
            Ok(Answer::Text(s)) => println!("{id}, {part}: {}", paint(s, style)),
            Err(e) => {
                eprintln!("Failed to solve {id}, {part}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
