//! swarm-replay: run a meteor swarm event headless and print what it did.
//!
//! Usage:
//!   swarm-replay run --config swarm.json --seed 7 --stations 2
//!   swarm-replay notify-ban --url https://hooks.example --target Grifter --reason "..." --timestamp 2026-01-01T00:00:00Z

use std::io;
use std::path::PathBuf;
use std::process;

use log::info;

use meteor_core::config::WaveEventConfig;
use meteor_core::constants::TICK_RATE;
use meteor_core::types::EventId;
use meteor_notify::{BanNotice, JsonLinesSink, Notifier, UnbanNotice, WebhookSettings};
use meteor_sim::random::ChaChaSource;
use meteor_sim::sandbox::Sandbox;
use meteor_sim::WaveScheduler;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "notify-ban" => cmd_notify_ban(&args[2..]),
        "notify-unban" => cmd_notify_unban(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "swarm-replay: headless meteor swarm runner\n\
         \n\
         Commands:\n\
         \n\
         run           Run one event against a sandbox world, print the call log as JSON\n\
         \n\
           --config <path>     Event config JSON (optional, default config otherwise)\n\
           --seed <u64>        RNG seed (default: 42)\n\
           --step <secs>       Scheduling step (default: 1/30)\n\
           --max-time <secs>   Give up after this much simulated time (default: 3600)\n\
           --stations <n>      Stations in the sandbox world (default: 1)\n\
         \n\
         notify-ban    Print the ban webhook payload as a JSON line\n\
         \n\
           --url <url> | --settings <path>\n\
           --target <name> --admin <name> --minutes <n> --reason <text>\n\
           --severity <text> --role <role> --timestamp <iso8601>\n\
         \n\
         notify-unban  Print the unban webhook payload as a JSON line\n\
         \n\
           --url <url> | --settings <path>\n\
           --ban-id <n> --admin <name> --role <role> --timestamp <iso8601>\n"
    );
}

fn parse_flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == name && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> T {
    match parse_flag(args, name) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {name} expects a number, got `{raw}`");
                process::exit(1);
            }
        },
        None => default,
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let config = match parse_flag(args, "--config") {
        Some(path) => match WaveEventConfig::load(&PathBuf::from(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => WaveEventConfig::default(),
    };

    let seed: u64 = parse_number(args, "--seed", 42);
    let step: f64 = parse_number(args, "--step", 1.0 / TICK_RATE as f64);
    let max_time: f64 = parse_number(args, "--max-time", 3600.0);
    let stations: u32 = parse_number(args, "--stations", 1);

    if step <= 0.0 || !step.is_finite() {
        eprintln!("Error: --step must be positive");
        process::exit(1);
    }

    let event = EventId(seed);
    let mut sandbox = Sandbox::with_stations(stations);
    sandbox.register_event(event);

    let mut scheduler = match WaveScheduler::activate(
        event,
        config,
        0.0,
        ChaChaSource::seed_from_u64(seed),
        &mut sandbox,
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error activating event: {e}");
            process::exit(1);
        }
    };

    let mut now = 0.0;
    while !scheduler.is_terminated() && now < max_time {
        now += step;
        if let Err(e) = scheduler.on_tick(now, &mut sandbox) {
            eprintln!("Error at {now:.2}s: {e}");
            process::exit(1);
        }
        sandbox.step(step);
    }

    let stats = scheduler.state().stats;
    info!(
        "{} waves fired, {} skipped, {} meteors, {} impacts, finished={} at {:.1}s",
        stats.waves_fired,
        stats.waves_skipped,
        stats.meteors_spawned,
        sandbox.impacts(),
        scheduler.is_terminated(),
        now
    );

    match serde_json::to_string_pretty(sandbox.calls()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error encoding call log: {e}");
            process::exit(1);
        }
    }
}

// --- Notification commands ---

fn load_settings(args: &[String]) -> WebhookSettings {
    if let Some(path) = parse_flag(args, "--settings") {
        return match WebhookSettings::load(&PathBuf::from(path)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading webhook settings: {e}");
                process::exit(1);
            }
        };
    }
    match parse_flag(args, "--url") {
        Some(url) => WebhookSettings::with_url(url),
        None => WebhookSettings::default(),
    }
}

fn require_timestamp(args: &[String]) -> String {
    match parse_flag(args, "--timestamp") {
        Some(ts) => ts.to_owned(),
        None => {
            eprintln!("Error: --timestamp <iso8601> is required");
            process::exit(1);
        }
    }
}

fn stdout_notifier(args: &[String]) -> Notifier<JsonLinesSink<io::Stdout>> {
    Notifier::new(load_settings(args), JsonLinesSink::new(io::stdout()))
}

fn cmd_notify_ban(args: &[String]) {
    let timestamp = require_timestamp(args);
    let minutes: u32 = parse_number(args, "--minutes", 0);
    let notice = BanNotice {
        target_name: parse_flag(args, "--target").map(str::to_owned),
        admin_name: parse_flag(args, "--admin").map(str::to_owned),
        minutes: Some(minutes),
        reason: parse_flag(args, "--reason").unwrap_or_default().to_owned(),
        severity: parse_flag(args, "--severity").unwrap_or("None").to_owned(),
        role: parse_flag(args, "--role").map(str::to_owned),
        ..Default::default()
    };

    if !stdout_notifier(args).notify_ban(&notice, &timestamp) {
        process::exit(2);
    }
}

fn cmd_notify_unban(args: &[String]) {
    let timestamp = require_timestamp(args);
    let notice = UnbanNotice {
        ban_id: parse_number(args, "--ban-id", 0),
        admin_name: parse_flag(args, "--admin").map(str::to_owned),
        role: parse_flag(args, "--role").map(str::to_owned),
        ..Default::default()
    };

    if !stdout_notifier(args).notify_unban(&notice, &timestamp) {
        process::exit(2);
    }
}
