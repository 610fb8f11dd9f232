//! Command-line interface for twig.
//!
//! This binary provides access to the twig library functionality, rendering
//! a directory tree to stdout or to a file in various formats.

use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::exit;
use twig::{Mode, TwigBuilder, TwigOptions, output, twig};

/// twig — directory tree renderer
#[derive(Parser)]
#[command(name = "twig", version, about, long_about = None)]
#[command(group(
    ArgGroup::new("traversal").args(["mode", "dir_first", "dir_only", "file_first", "ordered"])
))]
struct Cli {
    /// Root directory to render
    root: PathBuf,

    /// Traversal mode
    #[arg(short, long, default_value = "ff", value_parser = parse_mode)]
    mode: Mode,

    /// Shorthand for --mode df (directories first)
    #[arg(long = "df")]
    dir_first: bool,

    /// Shorthand for --mode do (directories only)
    #[arg(long = "do")]
    dir_only: bool,

    /// Shorthand for --mode ff (files first)
    #[arg(long = "ff")]
    file_first: bool,

    /// Shorthand for --mode od (ordered)
    #[arg(long = "od")]
    ordered: bool,

    /// Recursion depth (0 or less means unlimited)
    #[arg(short = 'l', long, default_value_t = 2)]
    depth: i64,

    /// Indent width
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=8))]
    indent: u8,

    /// Insert a blank separator line after each group of files
    #[arg(short, long)]
    sparse: bool,

    /// Show sizes (file bytes, directory entry counts) in a left column
    #[arg(long)]
    size: bool,

    /// Include hidden entries
    #[arg(long)]
    hidden: bool,

    /// String appended to directory names
    #[arg(long, default_value = "/")]
    dtail: String,

    /// Display the root as an absolute path instead of its base name
    #[arg(long)]
    absolute_root: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Write the output to a file (with a `mode:` header) instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Tree,
    Text,
    Json,
}

impl From<Format> for output::OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Tree => output::OutputFormat::Tree,
            Format::Text => output::OutputFormat::Text,
            Format::Json => output::OutputFormat::Json,
        }
    }
}

/// Parse a mode code (df, do, ff, od) into a Mode.
fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse::<Mode>().map_err(|e| e.to_string())
}

impl Cli {
    fn traversal_mode(&self) -> Mode {
        if self.dir_first {
            Mode::DirFirst
        } else if self.dir_only {
            Mode::DirOnly
        } else if self.file_first {
            Mode::FileFirst
        } else if self.ordered {
            Mode::Ordered
        } else {
            self.mode
        }
    }

    fn into_options(self) -> (TwigOptions, Format, bool, Option<PathBuf>) {
        let mode = self.traversal_mode();
        let mut builder = TwigBuilder::new(self.root)
            .mode(mode)
            .indent(self.indent as usize)
            .sparse(self.sparse)
            .dtail(self.dtail)
            .show_hidden(self.hidden)
            .show_size(self.size)
            .absolute_root(self.absolute_root);

        builder = if self.depth > 0 {
            builder.max_depth(self.depth as usize)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.format, self.pretty, self.output)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty, out_path) = cli.into_options();

    let result = match twig(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Some(path) = out_path {
        if let Err(e) = output::write_result_to_file(&result, output::OutputFormat::Text, &path, pretty)
        {
            eprintln!("Error: {}", e);
            exit(1);
        }
        return;
    }

    match format {
        Format::Json => {
            println!("{}", output::format_result(&result, format.into(), pretty));
        }
        Format::Tree | Format::Text => {
            print!("{}", output::format_result(&result, format.into(), pretty));
        }
    }
}
