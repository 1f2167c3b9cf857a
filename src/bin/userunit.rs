use anyhow::{bail, Context, Result};
use std::env;

use userunit::{Unit, UnitOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "deploy" => deploy(&args[2..]),
        "undeploy" => undeploy(&args[2..]),
        "path" => path(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"userunit - Run this binary as a systemd user service

Usage:
    userunit deploy <name> [options.toml]  Write the unit file, enable and (re)start it
    userunit undeploy <name>               Disable and stop the unit, remove its file
    userunit path <name>                   Print the unit file path
    userunit help                          Show this help message

Names may only contain ASCII letters, digits and '_'.
Every command checks the environment first, which creates
~/.config/systemd/user if it is missing.
Set RUST_LOG=debug to see every systemctl call.
"#
    );
}

/// Build the unit named by the first argument
fn unit(args: &[String], options: &UnitOptions) -> Result<Unit> {
    let Some(name) = args.first() else {
        print_usage();
        bail!("missing unit name");
    };

    Unit::with_options(name, options).with_context(|| format!("Cannot manage unit '{}'", name))
}

/// Options file given after the name, if any
fn options(args: &[String]) -> Result<UnitOptions> {
    match args.get(1) {
        Some(file) => {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read options file {}", file))?;
            Ok(UnitOptions::from_toml_str(&text)?)
        }
        None => Ok(UnitOptions::default()),
    }
}

fn deploy(args: &[String]) -> Result<()> {
    let unit = unit(args, &options(args)?)?;
    unit.deploy()
        .with_context(|| format!("Failed to deploy {}", unit.name()))?;
    println!("Deployed {} -> {}", unit.name(), unit.unit_file_path().display());
    Ok(())
}

fn undeploy(args: &[String]) -> Result<()> {
    let unit = unit(args, &UnitOptions::default())?;
    unit.undeploy()
        .with_context(|| format!("Failed to undeploy {}", unit.name()))?;
    println!("Removed {}", unit.unit_file_path().display());
    Ok(())
}

fn path(args: &[String]) -> Result<()> {
    let unit = unit(args, &UnitOptions::default())?;
    println!("{}", unit.unit_file_path().display());
    Ok(())
}
