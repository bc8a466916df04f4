// crates/cli/src/args.rs
use crate::options::CliInputEncoding;
use crate::parsers;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "html_reencode",
    version = crate::VERSION,
    about = "Re-encode a tree of windows-1252 HTML files into a mirrored UTF-8 tree"
)]
pub struct Args {
    /// Directory to search recursively
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    #[command(flatten)]
    pub walk: WalkArgs,

    #[command(flatten)]
    pub rules: RuleArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct WalkArgs {
    /// File extensions to convert (comma separated / repeatable)
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["htm", "html"],
        value_parser = parsers::parse_extension,
        help_heading = "Selection"
    )]
    pub ext: Vec<String>,

    /// Maximum directory depth below the root
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Selection")]
    pub max_depth: Option<usize>,

    /// Follow symbolic links while walking
    #[arg(long, help_heading = "Selection")]
    pub follow_links: bool,
}

#[derive(clap::Args, Debug)]
pub struct RuleArgs {
    /// Path text whose first occurrence is rewritten to form the output path
    #[arg(
        long,
        default_value = html_reencode_engine::rules::DEFAULT_RENAME_FROM,
        value_parser = parsers::parse_non_empty,
        help_heading = "Rules"
    )]
    pub from: String,

    /// Replacement for the first occurrence of --from in each path
    #[arg(
        long,
        default_value = html_reencode_engine::rules::DEFAULT_RENAME_TO,
        value_parser = parsers::parse_non_empty,
        help_heading = "Rules"
    )]
    pub to: String,

    /// Literal text replaced everywhere in each document
    #[arg(
        long,
        default_value = html_reencode_engine::rules::DEFAULT_FIND,
        value_parser = parsers::parse_non_empty,
        help_heading = "Rules"
    )]
    pub find: String,

    /// Replacement for every occurrence of --find
    #[arg(
        long,
        default_value = html_reencode_engine::rules::DEFAULT_REPLACE,
        help_heading = "Rules"
    )]
    pub replace: String,

    /// Encoding used to decode the source files
    #[arg(
        long,
        value_enum,
        default_value_t = CliInputEncoding::Windows1252,
        help_heading = "Rules"
    )]
    pub input_encoding: CliInputEncoding,
}

#[derive(clap::Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct BehaviorArgs {
    /// Fail instead of creating missing output directories
    #[arg(long, help_heading = "Behavior")]
    pub no_create_dirs: bool,

    /// Report what would be converted without writing anything
    #[arg(long, help_heading = "Behavior")]
    pub dry_run: bool,

    /// Worker threads (1 = sequential, 0 = one per CPU)
    #[arg(
        short = 'j',
        long,
        default_value_t = 1,
        value_parser = parsers::parse_jobs,
        help_heading = "Behavior"
    )]
    pub jobs: usize,

    /// Convert every file and report all failures at the end
    #[arg(long, help_heading = "Behavior")]
    pub keep_going: bool,
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,

    /// Suppress the per-file progress lines
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["html_reencode"]).unwrap();
        assert_eq!(args.root, PathBuf::from("."));
        assert_eq!(args.walk.ext, vec!["htm", "html"]);
        assert_eq!(args.rules.from, "Breviary");
        assert_eq!(args.rules.to, "Breviary.utf8");
        assert_eq!(args.rules.find, "charset=windows-1252");
        assert_eq!(args.rules.replace, "charset=utf-8");
        assert_eq!(args.behavior.jobs, 1);
        assert_eq!(args.output.verbose, 0);
    }

    #[test]
    fn extension_list_is_split_and_normalized() {
        let args = Args::try_parse_from(["html_reencode", "--ext", ".htm,xhtml"]).unwrap();
        assert_eq!(args.walk.ext, vec!["htm", "xhtml"]);
    }

    #[test]
    fn empty_find_is_rejected() {
        assert!(Args::try_parse_from(["html_reencode", "--find", ""]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::try_parse_from(["html_reencode", "-vv", "root"]).unwrap();
        assert_eq!(args.output.verbose, 2);
        assert_eq!(args.root, PathBuf::from("root"));
    }
}
