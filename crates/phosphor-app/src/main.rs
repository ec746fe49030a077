//! PHOSPHOR demo entry point.
//!
//! Boots the portfolio terminal against an ANSI stdout surface and feeds it
//! lines from stdin until EOF or `shutdown`. Pass a config path as the first
//! argument; `phosphor.toml` in the working directory is tried otherwise.

mod config;
mod surface;

use std::cell::Cell;
use std::io::BufRead;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use phosphor_portfolio::{Layout, Profile, register_portfolio_commands};
use phosphor_term::{TerminalSession, register_builtins};

use config::AppConfig;
use surface::StdoutSurface;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("phosphor.toml"));
    let config = AppConfig::load(&config_path)?;
    log::info!(
        "Starting PHOSPHOR ({}x{})",
        config.terminal.cols,
        config.terminal.rows,
    );

    let profile = match &config.profile {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Profile::from_toml(&text)?
        },
        None => Profile::sample()?,
    };
    log::info!("Loaded profile: {}", profile.name);

    let mut session = TerminalSession::new(config.terminal.clone());
    register_builtins(session.registry_mut())?;
    register_portfolio_commands(
        session.registry_mut(),
        Rc::new(profile),
        Layout {
            compact: config.compact,
        },
    )?;
    session.set_boot_sequence(
        [
            "sleep 1000 -s",
            "boot",
            "sleep 250 -s",
            "clear -s",
            "sleep 250 -s",
            "welcome",
        ]
        .map(String::from)
        .into(),
    );

    let running = Rc::new(Cell::new(true));
    let flag = Rc::clone(&running);
    session.set_shutdown_handler(Box::new(move || flag.set(false)));

    futures::executor::block_on(async {
        session.mount(Box::new(StdoutSurface)).await?;

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            session.feed_str(&line).await?;
            session.submit_line().await?;
            if !running.get() {
                break;
            }
        }
        phosphor_types::Result::Ok(())
    })?;

    session.dispose();
    log::info!("Session ended");
    Ok(())
}
