//! SpotiCards runner (default binary).
//!
//! `spoticards play` loads a playlist folder and opens the terminal play
//! screen; `spoticards list` prints the playlists found in the data directory.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use spoticards::app::PlayApp;
use spoticards::cli::{Cli, Command, PlayArgs};
use spoticards::config::PlayConfig;
use spoticards::core::GameSession;
use spoticards::input::{handle_key_event, should_quit};
use spoticards::logging;
use spoticards::storage::{available_playlists, load_playlist_tracks, DirCardResolver};
use spoticards::term::{FrameBuffer, TableView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = PlayConfig::from_env();

    match cli.command {
        Command::List(args) => {
            args.apply(&mut config);
            logging::init(config.log_path.as_deref(), false)?;
            print_playlists(&config)
        }
        Command::Play(args) => {
            args.apply(&mut config);
            if args.list {
                logging::init(config.log_path.as_deref(), false)?;
                return print_playlists(&config);
            }
            logging::init(config.log_path.as_deref(), true)?;
            play(&config, &args)
        }
    }
}

fn print_playlists(config: &PlayConfig) -> Result<()> {
    let playlists = available_playlists(&config.playlists_dir())?;
    if playlists.is_empty() {
        println!("No playlists found. Generate cards for a playlist first.");
        return Ok(());
    }
    println!("\nAvailable playlists:");
    for p in &playlists {
        println!("  - {}", p);
    }
    Ok(())
}

/// Pick the playlist folder: the flag, the only playlist, or ask.
fn choose_folder(config: &PlayConfig, args: &PlayArgs) -> Result<Option<String>> {
    if let Some(folder) = &args.folder {
        return Ok(Some(folder.clone()));
    }

    let playlists = available_playlists(&config.playlists_dir())?;
    match playlists.as_slice() {
        [] => {
            println!("No playlists found. Generate cards for a playlist first.");
            Ok(None)
        }
        [only] => {
            println!("Using playlist: {}", only);
            Ok(Some(only.clone()))
        }
        many => {
            println!("Available playlists:");
            for p in many {
                println!("  - {}", p);
            }
            print!("\nEnter playlist folder name: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            let folder = line.trim();
            Ok((!folder.is_empty()).then(|| folder.to_string()))
        }
    }
}

fn play(config: &PlayConfig, args: &PlayArgs) -> Result<()> {
    let Some(folder) = choose_folder(config, args)? else {
        return Ok(());
    };

    let playlist_dir = config.playlist_dir(&folder);
    if !playlist_dir.exists() {
        println!("Playlist folder not found: {}", folder);
        return Ok(());
    }

    let tracks = match load_playlist_tracks(&playlist_dir)? {
        Some(tracks) if !tracks.is_empty() => tracks,
        _ => {
            println!("No metadata found in {}", folder);
            return Ok(());
        }
    };
    println!("Loaded {} tracks from '{}'", tracks.len(), folder);

    let seed = config.resolve_seed();
    info!("[Play] starting '{}' with seed {}", folder, seed);
    let session = GameSession::with_target(&tracks, config.target_cards, seed)?;
    let resolver = DirCardResolver::new(config.cards_dir(&folder));
    let mut app = PlayApp::new(session, resolver, &folder);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    let session = app.session();
    println!(
        "Placed {} of {} correctly, {} bonus, score {}{}",
        session.cards_placed_correctly(),
        session.target_cards(),
        session.bonus_points(),
        session.score(),
        if session.is_won() { " - you won!" } else { "" }
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut PlayApp<DirCardResolver>) -> Result<()> {
    let view = TableView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let (snap, ui) = app.frame();
        view.render_into(snap, ui, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let mode = app.input_mode();
                if should_quit(key, mode) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key, mode) {
                    app.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
