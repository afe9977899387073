use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use vst3_list::{
    config::Config,
    model::{ExtensionSet, ScanRules, VendorGrouping},
    output::{print_result, write_reports, OutputFormat},
    scanner::PluginScanner,
    ScanError,
};

/// Exit codes for scripting. Scan errors carry their own codes.
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "vst3-list")]
#[command(
    author,
    version,
    about = "List installed VST3 plugins by vendor and export them as CSV"
)]
struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a plugin folder and write the CSV reports (default)
    Scan(ScanArgs),

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Default)]
struct ScanArgs {
    /// Plugin folder to scan (prompted for when omitted)
    root: Option<PathBuf>,

    /// Folder for the CSV reports (prompted for when omitted)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Summary printed after the scan (table, json, none)
    #[arg(short, long, default_value = "table")]
    format: String,

    /// Vendor label source (parent-path, top-level)
    #[arg(long)]
    grouping: Option<String>,

    /// Plugin extension, repeatable; replaces the configured list
    #[arg(long = "plugin-ext", value_name = "EXT")]
    plugin_extensions: Vec<String>,

    /// Excluded extension, repeatable; replaces the configured list
    #[arg(long = "exclude-ext", value_name = "EXT")]
    excluded_extensions: Vec<String>,

    /// Never prompt; use configured or platform defaults
    #[arg(short = 'y', long)]
    no_prompt: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<ScanError>()
                .map(ScanError::exit_code)
                .unwrap_or(exit_codes::ERROR);
            ExitCode::from(code)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vst3_list={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    let command = cli.command.unwrap_or(Commands::Scan(ScanArgs {
        format: "table".to_string(),
        ..ScanArgs::default()
    }));

    match command {
        Commands::Scan(args) => {
            let config = Config::load()?;
            run_scan(args, &config)
        }
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_scan(args: ScanArgs, config: &Config) -> Result<u8> {
    let format = OutputFormat::from_str(&args.format).map_err(|e| anyhow::anyhow!(e))?;
    let rules = scan_rules(&args, config)?;

    let interactive = !args.no_prompt && io::stdin().is_terminal();

    let root = match args.root {
        Some(root) => root,
        None if interactive => prompt_path(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            "VST3 folder",
            &config.root_or_default(),
        )?,
        None => config.root_or_default(),
    };

    let default_output = match &config.default_output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None if interactive => prompt_path(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            "Report folder",
            &default_output,
        )?,
        None => default_output,
    };

    let scanner = PluginScanner::new(rules);
    let report = scanner.scan(&root)?;
    let files = write_reports(&report.table, &output_dir, &config.report_names())?;

    print_result(&report, &files, format)?;

    Ok(exit_codes::SUCCESS)
}

/// Applies command-line overrides to the configured rules.
fn scan_rules(args: &ScanArgs, config: &Config) -> Result<ScanRules> {
    let mut rules = config.scan_rules();
    if let Some(grouping) = &args.grouping {
        rules.grouping = VendorGrouping::from_str(grouping).map_err(|e| anyhow::anyhow!(e))?;
    }
    if !args.plugin_extensions.is_empty() {
        rules.plugin_extensions = ExtensionSet::new(&args.plugin_extensions);
    }
    if !args.excluded_extensions.is_empty() {
        rules.excluded_extensions = ExtensionSet::new(&args.excluded_extensions);
    }
    if rules.plugin_extensions.is_empty() {
        anyhow::bail!("No plugin extensions configured");
    }
    // one label would otherwise head both check columns
    if rules.labels.unknown == rules.labels.not_recognized {
        anyhow::bail!(
            "unknown_label and not_recognized_label must differ (both are '{}')",
            rules.labels.unknown
        );
    }
    Ok(rules)
}

/// Asks for a path, returning `default` on an empty answer.
fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &Path,
) -> Result<PathBuf> {
    write!(output, "{} ([{}]): ", label, default.display())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.to_path_buf())
    } else {
        Ok(PathBuf::from(answer))
    }
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'vst3-list config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_uses_default_on_empty_answer() {
        let mut input = io::Cursor::new("\n");
        let mut output = Vec::new();

        let path =
            prompt_path(&mut input, &mut output, "VST3 folder", Path::new("/vst")).unwrap();

        assert_eq!(path, PathBuf::from("/vst"));
        assert_eq!(String::from_utf8(output).unwrap(), "VST3 folder ([/vst]): ");
    }

    #[test]
    fn test_prompt_takes_trimmed_answer() {
        let mut input = io::Cursor::new("  /audio/plugins \n");
        let mut output = Vec::new();

        let path =
            prompt_path(&mut input, &mut output, "Report folder", Path::new("/tmp")).unwrap();
        assert_eq!(path, PathBuf::from("/audio/plugins"));
    }

    #[test]
    fn test_cli_parses_scan_flags() {
        let cli = Cli::parse_from([
            "vst3-list",
            "-v",
            "scan",
            "/vst",
            "-o",
            "/out",
            "--plugin-ext",
            ".clap",
            "--plugin-ext",
            "vst3",
            "--grouping",
            "top-level",
            "-y",
        ]);

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Commands::Scan(args)) => {
                assert_eq!(args.root, Some(PathBuf::from("/vst")));
                assert_eq!(args.output_dir, Some(PathBuf::from("/out")));
                assert_eq!(args.plugin_extensions, vec![".clap", "vst3"]);
                assert_eq!(args.grouping.as_deref(), Some("top-level"));
                assert_eq!(args.format, "table");
                assert!(args.no_prompt);
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_scan_rules_rejects_equal_reserved_labels() {
        let config = Config {
            unknown_label: "Misc".to_string(),
            not_recognized_label: "Misc".to_string(),
            ..Config::default()
        };

        let err = scan_rules(&ScanArgs::default(), &config).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_scan_rules_applies_overrides() {
        let args = ScanArgs {
            grouping: Some("top-level".to_string()),
            plugin_extensions: vec!["CLAP".to_string()],
            ..ScanArgs::default()
        };

        let rules = scan_rules(&args, &Config::default()).unwrap();
        assert_eq!(rules.grouping, VendorGrouping::TopLevel);
        assert!(rules.is_plugin(Path::new("Acme/Synth.clap")));
        assert!(!rules.is_plugin(Path::new("Acme/Synth.vst3")));
    }

    #[test]
    fn test_scan_rules_rejects_empty_plugin_extensions() {
        let config = Config {
            plugin_extensions: Vec::new(),
            ..Config::default()
        };
        assert!(scan_rules(&ScanArgs::default(), &config).is_err());
    }

    #[test]
    fn test_cli_without_subcommand() {
        let cli = Cli::parse_from(["vst3-list"]);
        assert!(cli.command.is_none());
    }
}
