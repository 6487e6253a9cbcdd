//! # Command Line Interface
//!
//! The argument grammar is in the library's `cli` module, which `build.rs`
//! also uses to generate shell completions.

use std::ffi::OsString;
use tilemerge::cli;
use tilemerge::commands::merge::{self,MergeConfig};

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);
    let args: Vec<OsString> = std::env::args_os().collect();
    let mut main_cmd = cli::build_cli();
    let matches = match main_cmd.try_get_matches_from_mut(&args) {
        Ok(matches) => matches,
        Err(e) => e.exit()
    };

    // Help goes to stderr with a failing status, the level is the only thing on stdout.
    if matches.get_flag("help") {
        eprintln!("{}",main_cmd.render_long_help());
        std::process::exit(1);
    }

    let session_args: Vec<String> = args.iter().skip(1).map(|a| a.to_string_lossy().to_string()).collect();
    let config = MergeConfig::from_matches(&matches,&session_args)?;
    merge::merge(&config)
}
