//! cssel - build a CSS selector from ordered parts.
//!
//! Usage:
//!   cssel element=a 'attr=href$=".png"' pseudo-class=focus
//!   cssel element=ul '>' element=li class=active
//!   cssel --json id=main class=container
//!
//! Each `kind=value` token is added to the current compound selector;
//! any other token is a combinator that starts the next one.

mod tokens;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(name = "cssel", version, about = "Build a CSS selector from ordered parts")]
struct Cli {
    /// Parts as `kind=value` (element, id, class, attr, pseudo-class,
    /// pseudo-element) and combinators (`>`, `+`, `~`, `||`, `" "`), in order
    #[arg(required = true, value_name = "TOKENS")]
    tokens: Vec<String>,

    /// Print the builder's parts as JSON instead of the rendered selector
    #[arg(short, long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let selector = tokens::build_selector(&cli.tokens)?;

    if cli.json {
        Ok(serde_json::to_string_pretty(&selector)?)
    } else {
        Ok(selector.render())
    }
}
