//! Subcommand implementations

use anyhow::{bail, Result};
use parkview_app::screens::detail::{INFO_BLOCK_ID, NOT_FOUND_TITLE, TITLE_ID};
use parkview_app::{App, DetailContent, Tab};
use parkview_core::Event;

use crate::cli::ShowArgs;

pub fn run_list(app: &App) -> Result<()> {
    println!("{}", app.header_title());
    let list = app.list();
    if list.is_empty() {
        println!("  (no parks)");
    }
    for row in list.rows(app.tokens()) {
        println!("  {}", row.name);
    }
    Ok(())
}

pub fn run_show(app: &mut App, args: &ShowArgs) -> Result<()> {
    app.open_park(&args.name);

    let Some(screen) = app.detail() else {
        bail!("detail screen did not open for {}", args.name);
    };
    match screen.content() {
        DetailContent::NotFound => {
            println!("{NOT_FOUND_TITLE}");
        }
        DetailContent::Park(detail) => {
            println!("{}", detail.name);
            for row in &detail.info {
                println!("  {}: {}", row.label, row.value);
            }
            for section in &detail.sections {
                println!();
                println!("{}", section.header());
                for name in section.names() {
                    println!("  {name}");
                }
            }
        }
    }
    if let Some(message) = screen.empty_message() {
        println!("{message}");
    }

    if let Some(bottom) = args.title_bottom {
        app.dispatch(&Event::layout(TITLE_ID, 0.0, bottom));
    }
    if let Some(top) = args.info_top {
        app.dispatch(&Event::layout(INFO_BLOCK_ID, top, 0.0));
    }
    if args.scroll.is_empty() {
        return Ok(());
    }

    println!();
    match app.detail().and_then(|d| d.header().threshold()) {
        Some(threshold) => println!("reveal threshold {threshold}"),
        None => println!("no layout anchor; header title stays hidden"),
    }
    for &offset in &args.scroll {
        if app.dispatch(&Event::scroll(offset)).is_some() {
            println!("scroll {offset}: header title {:?}", app.header_title());
        }
    }
    Ok(())
}

pub fn run_theme(app: &mut App, toggle: bool) -> Result<()> {
    if toggle {
        app.toggle_theme();
    }
    let state = app.theme().state();
    let nav = app.navigation_theme();
    let bar = app.tab_bar_style();
    let status = app.status_bar();

    println!("theme: {}", state.active);
    if let Some(explicit) = state.explicit_override {
        println!("  explicit: {explicit}");
    }
    if let Some(system) = state.system_preference {
        println!("  system: {system}");
    }
    println!("status bar: {} on {}", status.style.as_str(), status.background);

    println!("navigation:");
    for (name, color) in [
        ("primary", nav.colors.primary),
        ("background", nav.colors.background),
        ("card", nav.colors.card),
        ("text", nav.colors.text),
        ("border", nav.colors.border),
        ("notification", nav.colors.notification),
    ] {
        println!("  {name:<12} {color}");
    }

    println!("tabs:");
    for tab in Tab::ALL {
        let active = tab == app.active_tab();
        println!("  {} {:<14} {}", tab.icon(), tab.label(), bar.tint(active));
    }
    Ok(())
}
