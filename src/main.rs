use std::fs::{self, File};
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;

use clap::Parser;
use tracing::debug;

use lab_verdict::checker::CheckStep;
use lab_verdict::cli::{CheckArgs, Cli, ColorChoice, Commands, ShellArgs};
use lab_verdict::config::{Config, ConfigLoader, FileConfigLoader};
use lab_verdict::output::{ColorMode, ErrorOutput, JsonFormatter, OutputFormat, TextFormatter};
use lab_verdict::session::Session;
use lab_verdict::shell::Shell;
use lab_verdict::{EXIT_ERROR, EXIT_RULES_FAILED, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color_mode = color_choice_to_mode(cli.color);
    let result = match &cli.command {
        Some(Commands::Check(args)) => run_check(args, &cli),
        Some(Commands::Shell(args)) => run_shell(args, &cli),
        None => run_shell(&ShellArgs::default(), &cli),
    };

    let exit_code = result.unwrap_or_else(|e| {
        ErrorOutput::new(color_mode).print_verdict_error(&e);
        EXIT_ERROR
    });

    std::process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> lab_verdict::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn run_shell(args: &ShellArgs, cli: &Cli) -> lab_verdict::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let color_mode = color_choice_to_mode(cli.color);
    let mut shell = Shell::new(&config, color_mode)?;

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    if cli.quiet {
        shell.preload(&config.preload, &mut io::sink(), &mut stderr);
    } else {
        shell.preload(&config.preload, &mut stdout, &mut stderr);
    }

    if let Some(script) = &args.script {
        let file = File::open(script).map_err(|source| lab_verdict::VerdictError::FileRead {
            path: script.clone(),
            source,
        })?;
        shell.run(BufReader::new(file), &mut stdout, &mut stderr, false)?;
    } else {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        shell.run(stdin.lock(), &mut stdout, &mut stderr, interactive)?;
    }

    Ok(EXIT_SUCCESS)
}

fn run_check(args: &CheckArgs, cli: &Cli) -> lab_verdict::Result<i32> {
    // 1. Load configuration
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let step = CheckStep::from_number(args.step.unwrap_or(config.check.default_step))?;

    // 2. Import reports and instructions; any failure aborts the run
    let mut session = Session::new();
    for dir in &args.reports {
        session.add_reports(dir)?;
    }
    for file in &args.instructions {
        session.add_instructions(file)?;
    }
    for rule in &args.rule {
        session.add_regex(&rule.pattern, &rule.direction, &rule.files)?;
    }

    // 3. Check and conclude
    let outcome = session.start(step);
    let summary = session.conclude();

    // 4. Format output
    let output = match args.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(color_choice_to_mode(cli.color));
            let mut text = formatter.format_check(&outcome);
            if !summary.is_empty() {
                text.push('\n');
                text.push_str(&formatter.format_summary(&summary));
            }
            text
        }
        OutputFormat::Json => {
            let mut json = JsonFormatter.format(&summary, session.last_log())?;
            json.push('\n');
            json
        }
    };

    // 5. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if summary.all_matched() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_RULES_FAILED)
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> lab_verdict::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
