use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use validation_server::config::{HarnessConfig, ServerConfig, DEFAULT_ADDR, DEFAULT_TARGET};
use validation_server::harness::{Suite, SuiteReport, Target};
use validation_server::server::{self, TargetServer};
use validation_server::{telemetry, Granularity, ModifiedSince};

fn granularity_arg() -> Arg {
    Arg::new("granularity")
        .long("granularity")
        .default_value("15")
        .value_parser(value_parser!(u32))
        .help("Seconds per version window (1-60)")
}

fn cli() -> Command {
    Command::new("validation-server")
        .about("Conditional-request target server and revalidation harness")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity"),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the target server")
                .arg(
                    Arg::new("addr")
                        .default_value(DEFAULT_ADDR)
                        .help("Address to listen on (e.g. \"localhost:4000\")"),
                )
                .arg(granularity_arg())
                .arg(
                    Arg::new("modified-since")
                        .long("modified-since")
                        .default_value("mismatch")
                        .value_parser(["mismatch", "match"])
                        .help("Which If-Modified-Since dates answer 304: any other date, or the current one"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Run the standard validation suite against a target")
                .arg(
                    Arg::new("target")
                        .long("target")
                        .default_value(DEFAULT_TARGET)
                        .help("Base URL of the server under test"),
                )
                .arg(granularity_arg())
                .arg(
                    Arg::new("tick-ms")
                        .long("tick-ms")
                        .default_value("1000")
                        .value_parser(value_parser!(u64))
                        .help("Milliseconds per clock tick"),
                )
                .arg(
                    Arg::new("align")
                        .long("align")
                        .action(ArgAction::SetTrue)
                        .help("Start each scenario at the beginning of a version window"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the report as JSON"),
                ),
        )
}

fn granularity(matches: &ArgMatches) -> Result<Granularity, String> {
    let seconds = matches
        .get_one::<u32>("granularity")
        .copied()
        .unwrap_or(Granularity::DEFAULT_SECONDS);
    Granularity::new(seconds).map_err(|e| e.to_string())
}

async fn run_serve(matches: &ArgMatches) -> Result<(), String> {
    let addr = matches
        .get_one::<String>("addr")
        .cloned()
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());
    let rule = match matches.get_one::<String>("modified-since").map(String::as_str) {
        Some("match") => ModifiedSince::Match,
        _ => ModifiedSince::Mismatch,
    };
    let config = ServerConfig::default()
        .with_addr(addr)
        .with_granularity(granularity(matches)?)
        .with_modified_since(rule);
    let target = Arc::new(TargetServer::new(&config));
    server::serve(target, &config.addr)
        .await
        .map_err(|e| e.to_string())
}

async fn run_check(matches: &ArgMatches) -> Result<bool, String> {
    let target_url = matches
        .get_one::<String>("target")
        .map(String::as_str)
        .unwrap_or(DEFAULT_TARGET);
    let tick = matches.get_one::<u64>("tick-ms").copied().unwrap_or(1000);
    let config = HarnessConfig::default()
        .with_target(target_url)
        .map_err(|e| e.to_string())?
        .with_granularity(granularity(matches)?)
        .with_tick(Duration::from_millis(tick))
        .with_align_start(matches.get_flag("align"));

    let report = Suite::standard().run(Arc::new(Target::new(config))).await;
    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        print_report(&report);
    }
    Ok(report.all_passed())
}

fn print_report(report: &SuiteReport) {
    for check in &report.checks {
        let status = if check.passed { "ok" } else { "FAILED" };
        println!("{:<20} {:<6} {:>6}ms  {}", check.name, status, check.elapsed_ms, check.path);
        if let Some(error) = &check.error {
            println!("    {}", error);
        }
    }
    let failed = report.failures().count();
    println!(
        "\n{} passed, {} failed",
        report.checks.len() - failed,
        failed
    );
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    telemetry::init(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("serve", sub)) => run_serve(sub).await.map(|_| true),
        Some(("check", sub)) => run_check(sub).await,
        _ => Ok(true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
