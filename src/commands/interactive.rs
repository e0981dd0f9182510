// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::models::{Category, Product};
use crate::pipeline::Session;
use crate::utils::{parse_category, parse_granularity};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "commands: search <text> | clear | range <daily|monthly|annual> | lang | toggle <algida|unica> | show | help | quit";

pub fn handle(products: &[Product], settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let mut session = Session::new(products.to_vec());
    session.set_language(settings.language);
    if let Some(r) = sub.get_one::<String>("range") {
        session.set_granularity(parse_granularity(r)?);
    }
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(&mut session, stdin.lock(), &mut stdout)
}

fn show<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let lang = session.language();
    let expanded = Category::ALL.map(|c| session.is_expanded(c));
    let page = super::dashboard::render(session.view(), lang, expanded);
    write!(out, "{}", page)?;
    Ok(())
}

/// Reads commands line by line, redrawing the dashboard after each state
/// change. Stops at `quit` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    show(session, out)?;
    writeln!(out, "{}", HELP)?;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((c, a)) => (c.to_string(), a.trim_start().to_string()),
            None => (trimmed.to_string(), String::new()),
        };
        debug!(cmd = %cmd, arg = %arg, "interactive command");
        match cmd.as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            "search" => session.set_query(arg),
            "clear" => session.set_query(""),
            "range" => match parse_granularity(&arg) {
                Ok(g) => session.set_granularity(g),
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            },
            "lang" => session.toggle_language(),
            "toggle" => match parse_category(&arg) {
                Ok(c) => session.toggle_section(c),
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            },
            "show" => {}
            other => {
                writeln!(out, "unknown command '{}'; {}", other, HELP)?;
                continue;
            }
        }
        show(session, out)?;
    }
    out.flush()?;
    Ok(())
}
