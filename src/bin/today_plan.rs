// ABOUTME: Command-line entry point generating a daily rehabilitation plan from a JSON request
// ABOUTME: Reads the request from a file or stdin and prints the plan or its summary as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Plan from a request file
//! today-plan --request request.json --pretty
//!
//! # Plan from stdin with a clinic rule file
//! cat request.json | today-plan --rules rules.yaml
//!
//! # Reproducible output with a frozen timestamp
//! today-plan --request request.json --now 2025-03-01T07:00:00Z
//!
//! # Summary view with debug logging on stderr
//! today-plan --request request.json --summary -v
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use oncorehab_planner::logging::LoggingConfig;
use oncorehab_planner::{
    Clock, FixedClock, RenderOptions, RuleTables, TodayPlanEngine, TodayPlanService,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "today-plan",
    about = "Generate today's rehabilitation exercise plan",
    long_about = "Read a today-plan request (JSON) and print a deterministic, explainable exercise plan for the day."
)]
struct Args {
    /// Request file, or `-` for stdin
    #[arg(long, default_value = "-")]
    request: String,

    /// Rule tables file (YAML or JSON); defaults to ONCOREHAB_RULES_PATH or built-in rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Print a plan summary instead of the full plan
    #[arg(long)]
    summary: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Freeze the generation timestamp (RFC 3339)
    #[arg(long)]
    now: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().verbose(args.verbose).init()?;

    let rules = match &args.rules {
        Some(path) => RuleTables::from_file(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => RuleTables::load()?,
    };
    info!(version = %rules.version, "Rule tables ready");

    let body = read_request(&args.request)?;
    let options = RenderOptions {
        summary: args.summary,
        pretty: args.pretty,
    };

    let output = match args.now.as_deref() {
        Some(now) => {
            let instant = DateTime::parse_from_rfc3339(now)
                .with_context(|| format!("invalid --now timestamp '{now}'"))?
                .with_timezone(&Utc);
            let engine = TodayPlanEngine::with_clock(FixedClock::new(instant), rules);
            run(&TodayPlanService::new(engine), &body, options)?
        }
        None => run(
            &TodayPlanService::new(TodayPlanEngine::with_rules(rules)),
            &body,
            options,
        )?,
    };

    println!("{output}");
    Ok(())
}

fn run<C: Clock>(
    service: &TodayPlanService<C>,
    body: &str,
    options: RenderOptions,
) -> Result<String> {
    Ok(service.plan_json(body, options)?)
}

fn read_request(source: &str) -> Result<String> {
    if source == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("reading request from stdin")?;
        Ok(body)
    } else {
        fs::read_to_string(source).with_context(|| format!("reading request from {source}"))
    }
}
