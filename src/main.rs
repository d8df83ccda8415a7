use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use rayon::prelude::*;

use confguard::catalog;
use confguard::cli::{Cli, ColorChoice, Commands, ListArgs, ScanArgs, ShowArgs};
use confguard::command::SystemCommandRunner;
use confguard::config::Settings;
use confguard::control::{Control, ControlRegistry, ControlRunner, Verdict};
use confguard::output::{ColorMode, JsonFormatter, OutputFormat, TextFormatter, VerdictFormatter};
use confguard::{EXIT_CONTROL_FAILED, EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::List(args) => run_list(args, &cli),
        Commands::Show(args) => run_show(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> confguard::Result<i32> {
    // 1. Load settings
    let mut settings = load_settings(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut settings, args);

    // 3. Load built-in controls
    let registry = catalog::builtin_registry(&settings)?;

    // 4. Select the controls to evaluate
    let controls = select_controls(&registry, &args.controls)?;

    // 5. Evaluate controls (parallel with rayon; checks within one control
    //    stay sequential)
    let runner = SystemCommandRunner::new(Duration::from_secs(settings.command.timeout_secs));
    let verdicts: Vec<Verdict> = controls
        .par_iter()
        .map(|control| ControlRunner::new(&runner).run(control))
        .collect();

    // 6. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &verdicts, color_mode, cli.verbose)?;

    // 7. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 8. Determine exit code
    Ok(exit_code_for(&verdicts))
}

fn load_settings(path: Option<&Path>, no_config: bool) -> confguard::Result<Settings> {
    if no_config {
        return Ok(Settings::default());
    }
    Settings::load(path)
}

fn apply_cli_overrides(settings: &mut Settings, args: &ScanArgs) {
    if let Some(path) = &args.nsswitch {
        settings.paths.nsswitch = path.clone();
    }
    if let Some(path) = &args.resolv {
        settings.paths.resolv = path.clone();
    }
    if let Some(program) = &args.attr_command {
        settings.command.attr_program = program.clone();
    }
    if !args.attr_args.is_empty() {
        settings.command.attr_args = args.attr_args.clone();
    }
    if let Some(timeout) = args.timeout {
        settings.command.timeout_secs = timeout;
    }
}

fn select_controls<'a>(
    registry: &'a ControlRegistry,
    ids: &[String],
) -> confguard::Result<Vec<&'a Control>> {
    if ids.is_empty() {
        return Ok(registry.iter().collect());
    }
    ids.iter().map(|id| registry.require(id)).collect()
}

fn format_output(
    format: OutputFormat,
    verdicts: &[Verdict],
    color_mode: ColorMode,
    verbose: u8,
) -> confguard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(verdicts),
        OutputFormat::Json => JsonFormatter.format(verdicts),
    }
}

fn write_output(path: Option<&Path>, output: &str, quiet: bool) -> confguard::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)?;
            if !quiet {
                eprintln!("Report written to {}", path.display());
            }
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn exit_code_for(verdicts: &[Verdict]) -> i32 {
    if verdicts.iter().any(Verdict::is_failed) {
        EXIT_CONTROL_FAILED
    } else if verdicts.iter().any(Verdict::is_errored) {
        EXIT_RUNTIME_ERROR
    } else {
        EXIT_SUCCESS
    }
}

fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    match run_list_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_list_impl(args: &ListArgs, cli: &Cli) -> confguard::Result<i32> {
    let settings = load_settings(args.config.as_deref(), cli.no_config)?;
    let registry = catalog::builtin_registry(&settings)?;

    for control in registry.iter() {
        println!("{} [{}] {}", control.id, control.severity, control.title);
    }

    Ok(EXIT_SUCCESS)
}

fn run_show(args: &ShowArgs, cli: &Cli) -> i32 {
    match run_show_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_show_impl(args: &ShowArgs, cli: &Cli) -> confguard::Result<i32> {
    let settings = load_settings(args.config.as_deref(), cli.no_config)?;
    let registry = catalog::builtin_registry(&settings)?;
    let control = registry.require(&args.id)?;

    println!("{} [{}] {}", control.id, control.severity, control.title);
    println!("impact: {}", control.impact);
    let applicability: Vec<String> = control
        .applicability
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("applies to: {}", applicability.join(", "));
    if let Some(srg_id) = &control.tags.srg_id {
        println!("srg: {srg_id}");
    }
    if !control.tags.cci.is_empty() {
        println!("cci: {}", control.tags.cci.join(", "));
    }
    if !control.tags.nist.is_empty() {
        println!("nist: {}", control.tags.nist.join(", "));
    }
    println!("\n{}", control.description);
    println!("\nCheck:\n{}", control.check_text);
    println!("\nFix:\n{}", control.fix_text);

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
