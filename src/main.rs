//! Armor Shield - Entry Point
//!
//! Runs the shield coordinator against the in-memory host, either as an
//! interactive console or as a scripted demo round.

use armor_shield::core::config::ShieldSettings;
use armor_shield::core::error::Result;
use armor_shield::core::types::{ItemSerial, PlayerId};
use armor_shield::entity::{ArmorType, DamageCause, DamageContext, ItemKind, ItemType};
use armor_shield::simulation::Server;

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "armor-shield", about = "Absorptive shields for worn body armor")]
struct Args {
    /// Shield settings file (TOML). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Play a scripted round instead of reading commands
    #[arg(long)]
    demo: bool,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0)]
    dt: f32,

    /// Print status as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => ShieldSettings::load_from_toml(path)?,
        None => ShieldSettings::default(),
    };

    // RUST_LOG wins; otherwise the config's debug flag picks the level
    let default_filter = if settings.debug {
        "armor_shield=debug"
    } else {
        "armor_shield=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    tracing::info!(
        shields = settings.armor_shields.len(),
        enabled = settings.is_enabled,
        "Armor Shield starting..."
    );

    let mut server = Server::new(settings);

    if args.demo {
        run_demo(&mut server, args.dt)?;
        display_status(&server, args.json)?;
        server.shutdown();
        return Ok(());
    }

    println!("\n=== ARMOR SHIELD ===");
    println!("Commands:");
    println!("  spawn <name>              - Add a player");
    println!("  give <player> <item>      - Give light|combat|heavy|medkit|coin|...");
    println!("  drop <player> <serial>    - Remove an item");
    println!("  hit <player> <amount>     - Damage a player");
    println!("  tick [n]                  - Advance n ticks");
    println!("  reload                    - Re-read the config file");
    println!("  status / s                - Show players");
    println!("  quit / q                  - Exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let words: Vec<&str> = input.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit"] | ["q"] => break,
            ["status"] | ["s"] => display_status(&server, args.json)?,
            ["spawn", name] => {
                let id = server.spawn_player(*name);
                println!("Spawned {} ({})", name, id);
            }
            ["give", player, item] => match (parse_player(player), parse_item(item)) {
                (Some(player), Some(kind)) => match server.give_item(player, kind) {
                    Ok(item) => println!("Gave item {}", item.serial),
                    Err(e) => println!("{}", e),
                },
                _ => println!("Usage: give <player> <item>"),
            },
            ["drop", player, serial] => {
                match (parse_player(player), serial.parse::<u16>().ok()) {
                    (Some(player), Some(serial)) => {
                        if let Err(e) = server.remove_item(player, ItemSerial(serial)) {
                            println!("{}", e);
                        }
                    }
                    _ => println!("Usage: drop <player> <serial>"),
                }
            }
            ["hit", player, amount] => match (parse_player(player), amount.parse::<f32>().ok()) {
                (Some(player), Some(amount)) => {
                    match server.damage(player, DamageContext::new(amount, DamageCause::Firearm)) {
                        Ok(lost) => println!("Health lost: {:.1}", lost),
                        Err(e) => println!("{}", e),
                    }
                }
                _ => println!("Usage: hit <player> <amount>"),
            },
            ["tick"] => server.tick(args.dt),
            ["tick", n] => match n.parse::<u32>() {
                Ok(n) => {
                    for _ in 0..n {
                        server.tick(args.dt);
                    }
                    println!("Now at {:.1}s", server.elapsed());
                }
                Err(_) => println!("Usage: tick [n]"),
            },
            ["reload"] => match &args.config {
                Some(path) => {
                    match ShieldSettings::load_from_toml(path).and_then(|s| server.reload_config(s)) {
                        Ok(()) => println!("Config reloaded"),
                        Err(e) => println!("Reload failed: {}", e),
                    }
                }
                None => println!("No config file given"),
            },
            _ => println!("Unknown command"),
        }
    }

    server.shutdown();
    Ok(())
}

/// A short round: equip, take fire, swap armor, reload config, drop armor
fn run_demo(server: &mut Server, dt: f32) -> Result<()> {
    let guard = server.spawn_player("Guard");
    let scientist = server.spawn_player("Scientist");

    server.give_item(guard, ItemKind::Other(ItemType::Firearm))?;
    let vest = server.give_item(guard, ItemKind::BodyArmor(ArmorType::Combat))?;
    server.give_item(scientist, ItemKind::Other(ItemType::Keycard))?;
    let light = server.give_item(scientist, ItemKind::BodyArmor(ArmorType::Light))?;

    for step in 0..5 {
        server.damage(guard, DamageContext::from_attacker(12.0, DamageCause::Firearm, scientist))?;
        if step % 2 == 0 {
            server.damage(scientist, DamageContext::new(8.0, DamageCause::Explosion))?;
        }
        server.tick(dt);
    }

    // Guard picks up heavy armor and then drops the vest
    server.give_item(guard, ItemKind::BodyArmor(ArmorType::Heavy))?;
    server.remove_item(guard, vest.serial)?;

    // Sustain changes reach running shields on the next hit
    let mut settings = server.host().settings().clone();
    for shield in settings.armor_shields.values_mut() {
        shield.sustain *= 2.0;
    }
    server.reload_config(settings)?;
    server.damage(guard, DamageContext::new(5.0, DamageCause::Falldown))?;

    server.remove_item(scientist, light.serial)?;

    for _ in 0..10 {
        server.tick(dt);
    }
    Ok(())
}

fn parse_player(s: &str) -> Option<PlayerId> {
    s.parse::<u32>().ok().map(PlayerId)
}

fn parse_item(s: &str) -> Option<ItemKind> {
    if let Ok(armor) = s.parse::<ArmorType>() {
        return Some(ItemKind::BodyArmor(armor));
    }
    let other = match s {
        "keycard" => ItemType::Keycard,
        "medkit" => ItemType::Medkit,
        "painkillers" => ItemType::Painkillers,
        "adrenaline" => ItemType::Adrenaline,
        "firearm" | "gun" => ItemType::Firearm,
        "grenade" => ItemType::Grenade,
        "radio" => ItemType::Radio,
        "flashlight" => ItemType::Flashlight,
        "coin" => ItemType::Coin,
        _ => return None,
    };
    Some(ItemKind::Other(other))
}

fn display_status(server: &Server, json: bool) -> Result<()> {
    let report = server.report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "--- {:.1}s | Players: {} | Shields: {} ---",
        server.elapsed(),
        report.len(),
        server.coordinator().active_count()
    );
    for p in &report {
        let armor = p
            .armor
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string());
        let sustain = p
            .sustain
            .map(|s| format!("{:.1}s", s))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {:<12} HP {:>5.1} | AHP {:>5.1} | armor {:<5} | sustain {}",
            p.id, p.name, p.health, p.ahp, armor, sustain
        );
    }
    Ok(())
}
