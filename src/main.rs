//! Odeploy CLI - deploy command registry and runner
//!
//! Usage: odeploy <COMMAND> <TARGET>
//!
//! The runner echoes the command and target it received and exits. Actual
//! deploy mechanics (database sync, file transfer, excel import) plug in
//! where the markers below indicate.

use anyhow::Result;
use clap::Parser;

use odeploy::models::TargetSpec;
use odeploy::registry::Registry;
use odeploy::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = Registry::builtin();

    match (cli.command, cli.target) {
        (Some(command), Some(target)) => {
            cmd_run(&registry, &command, &target, cli.json, cli.verbose)
        }
        // clap rejects a partial invocation unless --list was given
        _ => cmd_list(&registry, cli.json),
    }
}

fn cmd_run(registry: &Registry, command: &str, target: &str, json: bool, verbose: u8) -> Result<()> {
    let spec = TargetSpec::parse(target);

    if json {
        let output = match &spec {
            TargetSpec::Pair { source, target: dest } => serde_json::json!({
                "event": "run",
                "command": command,
                "target": target,
                "source": source,
                "destination": dest,
                "status": "success"
            }),
            TargetSpec::Single(env) => serde_json::json!({
                "event": "run",
                "command": command,
                "target": env,
                "status": "success"
            }),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("Running deploy command: {} with target: {}", command, target);

    if verbose > 0 {
        match registry.get(command) {
            Some(targets) => {
                println!("Registry: '{}' declares {} target(s)", command, targets.len());
            }
            None => {
                println!("Registry: '{}' is not a built-in command, running anyway", command);
            }
        }
    }

    match spec {
        TargetSpec::Pair { source, target } => {
            println!("Source: {}, Target: {}", source, target);
            // Transfer implementation goes here (database sync, file copy, ...)
        }
        TargetSpec::Single(target) => {
            println!("Target: {}", target);
            // Single-target implementation goes here (excel import, db restore, ...)
        }
    }

    println!("Deployment completed successfully");
    Ok(())
}

fn cmd_list(registry: &Registry, json: bool) -> Result<()> {
    if json {
        for entry in registry.iter() {
            let output = serde_json::json!({
                "event": "command",
                "name": entry.name,
                "targets": entry.targets
            });
            println!("{}", serde_json::to_string(&output)?);
        }
        return Ok(());
    }

    println!("📦 Deploy commands\n");
    for entry in registry.iter() {
        println!("{}", entry.name);
        for target in &entry.targets {
            println!("  - {}", target);
        }
    }
    println!("\n{} commands", registry.len());

    Ok(())
}
