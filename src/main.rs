// Thin operator binary over the registry library.
// The store path comes first so the same invocation shape works against any
// registry file; there is no built-in default location.

use anyhow::{bail, Result};
use std::env;

use driver_registry::{DemeritOutcome, Registry};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    let registry = Registry::new(&args[2]);
    let rest = &args[3..];

    match command {
        "add" => run_add(&registry, rest),
        "update" => run_update(&registry, rest),
        "demerit" => run_demerit(&registry, rest),
        "list" => run_list(&registry, rest),
        other => {
            print_usage();
            bail!("Unknown command: {}", other);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: driver-registry <command> <store-file> [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  add     <store> <id> <first> <last> <address> <birth-date>");
    eprintln!("  update  <store> <old-id> <new-id> <first> <last> <address> <birth-date>");
    eprintln!("  demerit <store> <id> <offense-date> <points>");
    eprintln!("  list    <store> [--json]");
    eprintln!();
    eprintln!("Dates are dd-MM-yyyy; addresses are number|street|city|state|country.");
}

fn run_add(registry: &Registry, args: &[String]) -> Result<()> {
    if args.len() != 5 {
        bail!("add expects: <id> <first> <last> <address> <birth-date>");
    }

    if registry.add_person(&args[0], &args[1], &args[2], &args[3], &args[4]) {
        println!("✓ Added {}", args[0]);
    } else {
        println!("❌ Add failed");
    }
    Ok(())
}

fn run_update(registry: &Registry, args: &[String]) -> Result<()> {
    if args.len() != 6 {
        bail!("update expects: <old-id> <new-id> <first> <last> <address> <birth-date>");
    }

    let ok = registry.update_personal_details(
        &args[0], &args[1], &args[2], &args[3], &args[4], &args[5],
    );
    if ok {
        println!("✓ Updated {}", args[1]);
    } else {
        println!("❌ Update failed");
    }
    Ok(())
}

fn run_demerit(registry: &Registry, args: &[String]) -> Result<()> {
    if args.len() != 3 {
        bail!("demerit expects: <id> <offense-date> <points>");
    }

    let points: u32 = args[2]
        .parse()
        .unwrap_or(0); // out-of-range value, rejected by the registry

    match registry.add_demerit_points(&args[0], &args[1], points) {
        DemeritOutcome::Success => println!("Success"),
        DemeritOutcome::Failed => println!("Failed"),
    }
    Ok(())
}

fn run_list(registry: &Registry, args: &[String]) -> Result<()> {
    let people = registry.all()?;

    if args.first().map(String::as_str) == Some("--json") {
        println!("{}", serde_json::to_string_pretty(&people)?);
        return Ok(());
    }

    println!("{} person(s) on record", people.len());
    for person in &people {
        println!(
            "  {} {} {} | born {}, {} offense(s), {} point(s){}",
            person.id,
            person.first_name,
            person.last_name,
            person.birth_date,
            person.offenses.len(),
            person.total_points(),
            if person.suspended { ", SUSPENDED" } else { "" },
        );
    }
    Ok(())
}
