use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{RestPokedexGateway, ThemeContext, ViewController};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::debug;

mod config;
mod render;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the catalog service.
    #[arg(long)]
    api_url: Option<String>,
    /// Entries per listing page.
    #[arg(long)]
    page_size: Option<u32>,
    /// Initial theme: light or dark.
    #[arg(long)]
    theme: Option<String>,
}

const HELP: &str = "\
commands:
  next | prev | page <n>   navigate the listing
  search <name>            look up one pokémon by name
  home                     back to the listing
  theme                    toggle light/dark
  quit                     exit";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(v) = args.api_url {
        settings.api_base_url = v;
    }
    if let Some(v) = args.page_size {
        settings.page_size = v.max(1);
    }
    if let Some(theme) = args.theme.as_deref().and_then(config::parse_theme) {
        settings.theme = theme;
    }

    let gateway = Arc::new(RestPokedexGateway::new(settings.api_base_url.clone()));
    let controller = ViewController::new(gateway, settings.page_size);
    let theme = ThemeContext::new(settings.theme);

    // The painter is push-based: it repaints whenever a new state snapshot
    // or theme value is published.
    let mut states = controller.subscribe();
    let mut themes = theme.subscribe();
    let painter = tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = states.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                changed = themes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
            let snapshot = states.borrow_and_update().clone();
            let theme = *themes.borrow_and_update();
            print!("{}", render::render(&snapshot, theme));
        }
    });

    controller.load_initial().await;

    println!("{HELP}");
    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "next" => {
                let current = current_page_number(&controller);
                controller.go_to_page(current + 1).await;
            }
            "prev" => {
                let current = current_page_number(&controller);
                controller.go_to_page(current.saturating_sub(1)).await;
            }
            "page" => match rest.parse::<u32>() {
                Ok(n) => controller.go_to_page(n).await,
                Err(_) => println!("usage: page <number>"),
            },
            "search" => {
                controller.set_query(rest);
                controller.submit_search().await;
            }
            "home" => controller.reset_to_listing(),
            "theme" => {
                let next = theme.toggle();
                debug!(?next, "theme switched");
            }
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command {other:?}; try \"help\""),
        }
    }

    painter.abort();
    Ok(())
}

fn current_page_number(controller: &ViewController) -> u32 {
    controller
        .snapshot()
        .current_page
        .map(|page| page.page_number)
        .unwrap_or(1)
}
