//! ## Merge Command

use std::io::Read;
use std::path::PathBuf;
use colored::Colorize;
use super::CommandError;
use crate::fson::Document;
use crate::{STDRESULT,DYNERR};

/// Everything the merge needs from the command line.
#[derive(Debug,Clone,PartialEq)]
pub struct MergeConfig {
    /// z-orders to keep, empty keeps all
    pub zorders: Vec<i32>,
    /// level files, empty means read one level from stdin
    pub inputs: Vec<PathBuf>,
    /// id of the output level
    pub id: String,
    /// session arguments, echoed in the output header
    pub args: Vec<String>
}

impl MergeConfig {
    /// Build and validate the configuration, every input file must exist.
    pub fn from_matches(cmd: &clap::ArgMatches, args: &[String]) -> Result<Self,CommandError> {
        let zorders = match cmd.get_many::<i32>("zorder") {
            Some(zs) => zs.copied().collect(),
            None => Vec::new()
        };
        let mut inputs = Vec::new();
        if let Some(paths) = cmd.get_many::<PathBuf>("input") {
            for path in paths {
                if !path.exists() {
                    log::error!("could not find file {}",path.display());
                    return Err(CommandError::FileNotFound(path.display().to_string()));
                }
                inputs.push(path.clone());
            }
        }
        let id = match cmd.get_one::<String>("output") {
            Some(id) => id.to_string(),
            None => String::new()
        };
        Ok(Self {
            zorders,
            inputs,
            id,
            args: args.to_vec()
        })
    }
    /// Read every level as a string, from the input files or else from stdin.
    pub fn read_levels(&self) -> Result<Vec<String>,DYNERR> {
        let mut ans = Vec::new();
        if self.inputs.len()==0 {
            if atty::is(atty::Stream::Stdin) {
                log::error!("line entry is not supported, please pipe something in");
                return Err(Box::new(CommandError::LineEntry));
            }
            let mut level = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut level) {
                log::error!("the level could not be read from stdin as a string");
                return Err(Box::new(e));
            }
            if level.len()==0 {
                log::warn!("merge did not receive any data from previous node");
            }
            ans.push(level);
        }
        for path in &self.inputs {
            log::info!("reading {}",path.display());
            match std::fs::read_to_string(path) {
                Ok(level) => ans.push(level),
                Err(e) => {
                    log::error!("could not read {}: {}",path.display(),e);
                    return Err(Box::new(e));
                }
            }
        }
        Ok(ans)
    }
}

/// Merge the configured levels and write the FSON level to stdout.
pub fn merge(config: &MergeConfig) -> STDRESULT {
    let levels = config.read_levels()?;
    let layers = crate::merge_levels(&levels,&config.zorders)?;
    let doc = Document::new(&config.id,&config.args);
    println!("{}",doc.render(&layers));
    if atty::is(atty::Stream::Stderr) {
        match layers.len() {
            0 => eprintln!("! {}","no layers matched".bright_yellow()),
            n => eprintln!("\u{2713} {} {}",n.to_string().green(),"layers merged".green())
        }
    }
    Ok(())
}
