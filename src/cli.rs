use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::warn;

use crate::filter::ExtensionSet;

const DIR_FLAG_DESC: &str = "The directory to make the list for.";
const RECURSIVE_FLAG_DESC: &str = "Set this flag to traverse all files in the directory.";
const FILE_FLAG_DESC: &str = "The destination of the output file.";
const EXT_FLAG_DESC: &str = "Only lists the files with the specified file extensions.\n\
                                 Multiple extensions can be separated with ','";

// Long flags that may also be spelled with a single dash (`-dir`).
const LONG_FLAGS: &[&str] = &["dir", "recursive", "out", "ext", "help", "version"];

#[derive(Debug, Parser)]
#[command(
    name = "makefilelist",
    version,
    about = "Writes the list of files in a directory to a text file"
)]
struct Cli {
    #[arg(long, value_name = "PATH", default_value = "./", help = DIR_FLAG_DESC)]
    dir: PathBuf,

    // `-recursive` or `-recursive=true|false`; never consumes the next token
    #[arg(
        long,
        help = RECURSIVE_FLAG_DESC,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    recursive: bool,

    #[arg(long, value_name = "PATH", default_value = "./file_list.txt", help = FILE_FLAG_DESC)]
    out: PathBuf,

    #[arg(long, value_name = "EXTS", help = EXT_FLAG_DESC)]
    ext: Option<String>,

    // Anything after the flags is accepted and ignored.
    #[arg(hide = true)]
    rest: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dir: PathBuf,
    pub recursive: bool,
    pub out: PathBuf,
    /// `None` when no filtering was requested.
    pub extensions: Option<ExtensionSet>,
}

pub fn parse_args<I>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    let cli = Cli::try_parse_from(normalize_flag_style(args))?;
    if !cli.rest.is_empty() {
        warn!(ignored = ?cli.rest, "ignoring positional arguments");
    }

    let extensions = cli
        .ext
        .filter(|raw| !raw.is_empty())
        .map(|raw| ExtensionSet::parse(&raw));

    Ok(Config {
        dir: cli.dir,
        recursive: cli.recursive,
        out: cli.out,
        extensions,
    })
}

/// Rewrites `-dir`/`-dir=x` style flags into `--dir`/`--dir=x`.
fn normalize_flag_style<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (idx, arg) in args.into_iter().enumerate() {
        if idx == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let single_dash_long = arg
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
            .map(|rest| rest.split('=').next().unwrap_or(rest))
            .is_some_and(|name| LONG_FLAGS.contains(&name));

        if single_dash_long {
            out.push(format!("-{arg}"));
        } else {
            out.push(arg);
        }
    }
    out
}
