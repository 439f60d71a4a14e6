// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use advent::computer::{Computer, Registers, disassemble, find_quine, format_output, parse_listing};
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use chumsky::error::{Rich, RichPattern, RichReason};
use itertools::Itertools;
use clap::Parser;
use std::fs::read_to_string;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const INPUT_HELP: &str =
    "Input file containing the registers and program\nuses stdin if unset or set to '-'";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "3-bit computer emulator", long_about = None)]
struct Args {
    #[arg(help = INPUT_HELP.split_at(47).0)]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
    #[arg(help = "Print a trace of every executed instruction after the program halts")]
    #[arg(short, long)]
    trace: bool,
    #[arg(help = "Log each instruction to stderr as it runs")]
    #[arg(short, long)]
    verbose: bool,
    #[arg(help = "Print a disassembly of the program instead of running it")]
    #[arg(short, long)]
    disassemble: bool,
    #[arg(help = "Find the lowest value of register A that makes the program output itself")]
    #[arg(short, long, conflicts_with_all = ["disassemble", "a"])]
    quine: bool,
    #[arg(help = "Override the starting value of register A")]
    #[arg(short)]
    a: Option<u64>,
}

/// Listing errors are either out-of-range values, which carry their own message, or an
/// unexpected character, reported along with what the parser wanted instead
fn report_parse_err(err: &Rich<'_, char>, file: &str, source: &str) {
    let span = (file, err.span().into_range());
    let label = match (err.reason(), err.found()) {
        (RichReason::Custom(msg), _) => msg.to_string(),
        (_, Some(found)) => format!("Found '{}'", found.escape_default().fg(Color::Cyan)),
        (_, None) => String::from("Found end of input"),
    };
    let expected = err
        .expected()
        .filter(|pat| !matches!(pat, RichPattern::Label(s) if s.ends_with("whitespace")))
        .map(|pat| pat.fg(Color::Blue))
        .join(", ");

    let mut builder = Report::build(ReportKind::Error, span.clone())
        .with_message(format!("Invalid listing in {}", file.fg(Color::Red)))
        .with_label(Label::new(span).with_message(label).with_color(Color::Yellow));
    if !expected.is_empty() {
        builder = builder.with_note(format!("Expected {expected}"));
    }

    if let Err(e) = builder.finish().eprint((file, Source::from(source))) {
        eprintln!("Failed to report parse error: {e}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
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
            eprintln!("Failed to read program from {file}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let listing = match parse_listing(&input) {
        Ok(listing) => listing,
        Err(errs) => {
            for err in errs {
                report_parse_err(&err, &file, &input);
            }
            return ExitCode::FAILURE;
        }
    };

    if args.disassemble {
        print!("{}", disassemble(&listing.program));
        return ExitCode::SUCCESS;
    }

    if args.quine {
        return match find_quine(&listing.program) {
            Ok(Some(a)) => {
                println!("{a}");
                ExitCode::SUCCESS
            }
            Ok(None) => {
                eprintln!("No value of register A makes the program output itself");
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("Program failed while searching: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let Registers { a, b, c } = listing.registers;
    let registers = Registers::new(args.a.unwrap_or(a), b, c);
    let mut stderr = io::stderr();
    let mut computer = Computer::new(registers, listing.program);
    if args.verbose {
        computer.log_with(&mut stderr);
    }
    if args.trace {
        computer.start_trace();
    }

    let result = computer.run();
    if let Some(trace) = computer.show_trace() {
        eprint!("{trace}");
    }
    match result {
        Ok(output) => {
            println!("{}", format_output(&output));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Program failed at instruction {}: {e}", computer.instr_ptr());
            ExitCode::FAILURE
        }
    }
}
