use anyhow::{Context, Result};
use clap::Parser;
use linemark_config::Config;
use linemark_engine::{Converter, create_output, html_output_path};
use std::io::{self, Write};
use std::path::PathBuf;

/// Convert line-oriented markdown to HTML
#[derive(Parser, Debug)]
#[command(name = "linemark", version, about)]
struct Cli {
    /// Markdown file to convert. Without it the configured default input is
    /// converted to standard output.
    input: Option<PathBuf>,

    /// Output file (default: the input name with an .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fragment copied before the converted body
    #[arg(long)]
    header: Option<PathBuf>,

    /// Fragment copied after the converted body
    #[arg(long)]
    footer: Option<PathBuf>,

    /// Config file (default: ~/.config/linemark/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

/// Paths for one run, after command-line flags have been layered over the
/// config file.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    input: PathBuf,
    destination: Destination,
    header: PathBuf,
    footer: PathBuf,
}

impl Invocation {
    fn resolve(cli: Cli, config: Config) -> Self {
        let header = cli.header.unwrap_or(config.header);
        let footer = cli.footer.unwrap_or(config.footer);

        match cli.input {
            Some(input) => {
                let output = cli.output.unwrap_or_else(|| html_output_path(&input));
                Self {
                    input,
                    destination: Destination::File(output),
                    header,
                    footer,
                }
            }
            None => Self {
                input: config.default_input,
                destination: cli.output.map_or(Destination::Stdout, Destination::File),
                header,
                footer,
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let invocation = Invocation::resolve(cli, config);
    run(&invocation, &mut io::stdout().lock())
}

/// Runs one conversion. `console` receives the output path when writing to
/// a file, or the converted document in stdout mode.
fn run(invocation: &Invocation, console: &mut dyn Write) -> Result<()> {
    let converter = Converter::new(&invocation.header, &invocation.footer);

    let report = match &invocation.destination {
        Destination::File(path) => {
            // Output must be writable before anything is read.
            let mut out = create_output(path)?;
            writeln!(console, "{}", path.display())?;
            console.flush()?;
            converter.convert(&invocation.input, &mut out)?
        }
        Destination::Stdout => converter.convert(&invocation.input, console)?,
    };

    if !report.is_complete() {
        log::warn!(
            "{} read failure(s), output may be incomplete",
            report.read_errors.len()
        );
    }

    Ok(())
}
