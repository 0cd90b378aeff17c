mod charset;
mod config;
mod errors;
mod password;
mod prompt;

use std::io::{ self, BufRead, Write };
use std::path::PathBuf;

use clap::Parser;
use copypasta_ext::prelude::*;
use rand::Rng;

use crate::config::Config;
use crate::errors::AppError;
use crate::password::{ Password, generate };
use crate::prompt::Prompter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords from selected character classes", long_about = None)]
struct Args {
    /// Length of each generated password
    #[arg(short = 'L', long)]
    length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short = 'c', long)]
    count: Option<usize>,

    /// Leave out uppercase letters
    #[arg(short = 'u', long)]
    no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(short = 'l', long)]
    no_lowercase: bool,

    /// Leave out digits
    #[arg(short = 'n', long)]
    no_numbers: bool,

    /// Leave out symbols
    #[arg(short = 's', long)]
    no_symbols: bool,

    /// Ask for length, character classes and count on the terminal
    #[arg(
        short = 'i',
        long,
        conflicts_with_all = ["length", "count", "no_uppercase", "no_lowercase", "no_numbers", "no_symbols"]
    )]
    interactive: bool,

    /// Config file with default settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the passwords as a JSON array
    #[arg(long)]
    json: bool,

    /// Copy the generated passwords to the clipboard
    #[arg(long)]
    copy: bool,
}

impl Args {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(count) = self.count {
            config.count = count;
        }

        config.uppercase &= !self.no_uppercase;
        config.lowercase &= !self.no_lowercase;
        config.numbers &= !self.no_numbers;
        config.symbols &= !self.no_symbols;

        config
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let mut rng = rand::rng();
    let passwords = produce(args, io::stdin().lock(), io::stdout(), &mut rng)?;
    log::info!("generated {} password(s)", passwords.len());

    let mut stdout = io::stdout().lock();
    if args.json {
        write_json(&mut stdout, &passwords)?;
    } else {
        write_plain(&mut stdout, &passwords)?;
    }

    if args.copy {
        copy_to_clipboard(&passwords)?;
    }

    Ok(())
}

/// Interactive mode only reads the prompt. Flag mode reads the config and
/// applies the command line on top of it.
fn produce<I, O, G>(args: &Args, input: I, output: O, rng: &mut G) -> Result<Vec<Password>, AppError>
where
    I: BufRead,
    O: Write,
    G: Rng + ?Sized,
{
    if args.interactive {
        let mut prompter = Prompter::new(input, output);
        let spec = prompter.collect_spec()?;
        let count = prompter.collect_count()?;

        return Ok(generate(&spec, count, rng));
    }

    let config = args.apply(Config::load(args.config.as_deref())?);
    let spec = config.spec()?;

    Ok(generate(&spec, config.count, rng))
}

fn write_plain<W: Write>(out: &mut W, passwords: &[Password]) -> Result<(), AppError> {
    writeln!(out, "\nGenerated Passwords:")?;
    for password in passwords {
        writeln!(out, "{}", password)?;
    }

    Ok(())
}

fn write_json<W: Write>(out: &mut W, passwords: &[Password]) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, passwords)?;
    writeln!(out)?;

    Ok(())
}

fn copy_to_clipboard(passwords: &[Password]) -> Result<(), AppError> {
    let mut ctx = copypasta_ext::try_context()
        .ok_or_else(|| AppError::Clipboard(String::from("no clipboard available")))?;

    let contents = passwords
        .iter()
        .map(Password::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    ctx.set_contents(contents)
        .map_err(|e| AppError::Clipboard(e.to_string()))?;
    log::debug!("copied {} password(s) to clipboard", passwords.len());

    Ok(())
}
