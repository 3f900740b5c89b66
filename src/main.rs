use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

mod cli;

use cli::args::{Args, Command, RatioArgs, SniffArgs, ValueArgs};
use humanfmt::{is_text, push_cardinal, push_size, Ratio};

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::Count(args) => print_scaled(&args, push_cardinal),
        Command::Size(args) => print_scaled(&args, push_size),
        Command::Percent(args) => print_percent(&args),
        Command::Rate(args) => print_rate(&args),
        Command::Sniff(args) => run_sniff(&args),
    }
}

fn print_scaled(args: &ValueArgs, push: fn(&mut String, f64)) -> ExitCode {
    let mut out = String::new();
    push(&mut out, args.value);
    println!("{}", out);
    ExitCode::SUCCESS
}

fn print_percent(args: &RatioArgs) -> ExitCode {
    let mut out = String::new();
    Ratio::new(args.value, args.total).push_percent(&mut out);
    println!("{}", out);
    ExitCode::SUCCESS
}

fn print_rate(args: &RatioArgs) -> ExitCode {
    let mut out = String::new();
    Ratio::new(args.value, args.total).push_rate(&mut out);
    println!("{}", out);
    ExitCode::SUCCESS
}

fn run_sniff(args: &SniffArgs) -> ExitCode {
    let data = match std::fs::read(&args.path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}: {}", args.path.display(), e);
            return ExitCode::from(2);
        }
    };

    let text = is_text(&data);
    if print_verdict(text, !args.no_color).is_err() {
        return ExitCode::from(2);
    }

    if text {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn print_verdict(text: bool, use_color: bool) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    });

    let (word, color) = if text {
        ("text", Color::Green)
    } else {
        ("binary", Color::Red)
    };

    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    writeln!(stdout, "{}", word)?;
    stdout.reset()
}
