// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use html_reencode_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use html_reencode_engine::rules::{RenameRule, ReplaceRule};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(&args)?;

        ConfigBuilder::default()
            .walk(walk)
            .content(ReplaceRule::new(args.rules.find, args.rules.replace))
            .rename(RenameRule::new(args.rules.from, args.rules.to))
            .input_encoding(args.rules.input_encoding)
            .create_dirs(!args.behavior.no_create_dirs)
            .dry_run(args.behavior.dry_run)
            .jobs(args.behavior.jobs)
            .keep_going(args.behavior.keep_going)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    WalkOptionsBuilder::default()
        .root(args.root.clone())
        .extensions(args.walk.ext.clone())
        .max_depth(args.walk.max_depth)
        .follow_links(args.walk.follow_links)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}
