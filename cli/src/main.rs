mod test_runner;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use dialogue::config::DialogueConfig;
use renderer::{CmarkRenderer, ElementTree, MarkdownContext, RenderOutcome, Warning};

const SUBCOMMANDS: &[&str] = &["render", "check", "test", "help"];

#[derive(Parser)]
#[command(name = "dialogue", version, about = "Dialogue block renderer")]
struct Cli {
    /// Disable colored diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a dialogue block file
    Render(RenderArgs),

    /// Render into a scratch tree and report warnings (exit 1 if any)
    Check(CheckArgs),

    /// Run .test.md fixture files
    Test(TestArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Outline,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Dialogue block source file
    file: String,

    /// TOML file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Don't print warnings
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Dialogue block source file
    file: String,

    /// TOML file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.md file or directory containing them
    path: String,

    /// Run only tests in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    env_logger::Builder::from_default_env().init();

    // `dialogue chat.txt` is shorthand for `dialogue render chat.txt`.
    let mut args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args
        .iter()
        .skip(1)
        .position(|a| !a.starts_with('-'))
        .map(|i| i + 1)
    {
        if !SUBCOMMANDS.contains(&args[pos].as_str()) {
            args.insert(pos, "render".to_string());
        }
    }

    let cli = Cli::parse_from(&args);

    match cli.command {
        Command::Render(render_args) => do_render(render_args, cli.no_color),
        Command::Check(check_args) => do_check(check_args, cli.no_color),
        Command::Test(test_args) => {
            let path = Path::new(&test_args.path);
            if test_args.list_categories {
                test_runner::list_categories(path);
                return;
            }
            let exit_code = test_runner::run_tests(path, cli.no_color, &test_args.category);
            process::exit(exit_code);
        }
    }
}

/// A rendered source file together with the file database its warnings
/// point into.
struct Rendered {
    files: SimpleFiles<String, String>,
    tree: ElementTree,
    outcome: RenderOutcome,
}

fn render_file(file: &str, config_path: Option<&Path>) -> Rendered {
    let config = match config_path {
        Some(path) => match DialogueConfig::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        None => DialogueConfig::default(),
    };

    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", file, e);
            process::exit(1);
        }
    };

    let mut files = SimpleFiles::new();
    let file_id = files.add(file.to_string(), source.clone());

    let script = dialogue::parser::Parser::new(source, file_id).parse();
    log::debug!("{} parsed into {} lines", file, script.lines.len());

    let mut tree = ElementTree::new();
    let mut markdown = CmarkRenderer::default();
    let context = MarkdownContext::new(file);
    match renderer::render_script(&script, &config, &mut tree, &mut markdown, &context) {
        Ok(outcome) => Rendered {
            files,
            tree,
            outcome,
        },
        Err(e) => {
            eprintln!("render error: {}", e);
            process::exit(1);
        }
    }
}

fn do_render(args: RenderArgs, no_color: bool) {
    let rendered = render_file(&args.file, args.config.as_deref());

    if !args.quiet {
        emit_warnings(&rendered.files, &rendered.outcome.warnings, no_color);
    }

    match args.format {
        Format::Html => println!("{}", rendered.tree.to_html()),
        Format::Outline => print!("{}", rendered.tree.outline()),
    }
}

fn do_check(args: CheckArgs, no_color: bool) {
    let rendered = render_file(&args.file, args.config.as_deref());
    let warnings = &rendered.outcome.warnings;

    if warnings.is_empty() {
        eprintln!("ok: {} has no warnings", args.file);
        return;
    }

    emit_warnings(&rendered.files, warnings, no_color);
    eprintln!("{}: {} warning(s)", args.file, warnings.len());
    process::exit(1);
}

fn emit_warnings(files: &SimpleFiles<String, String>, warnings: &[Warning], no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();

    for warning in warnings {
        let diagnostic = warning.to_diagnostic();
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, files, &diagnostic);
    }
}
