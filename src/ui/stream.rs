use crate::bot::Bot;
use anyhow::Result;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{self, BufRead, Write};

/// Line-at-a-time chat: every input line is one message from `user`.
/// `q` or end of input quits.
pub fn chat_loop<R: BufRead, W: Write>(
    bot: &Bot,
    user: &str,
    mut input: R,
    out: &mut W,
    color: bool,
) -> Result<()> {
    writeln!(out, "Wikibot CLI mode - use 'q' to quit")?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line == "q" {
            break;
        }
        let Some(response) = bot.dispatch(line, user) else {
            continue;
        };
        if color {
            writeln!(out, "{}", response.as_str().green())?;
        } else {
            writeln!(out, "{response}")?;
        }
    }
    Ok(())
}

/// Chat over the process's stdin/stdout, colouring responses on a terminal.
pub fn run_stdio(
    bot: &Bot,
    user: &str,
) -> Result<()> {
    let color = io::stdout().is_tty();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    chat_loop(bot, user, stdin.lock(), &mut stdout, color)
}
