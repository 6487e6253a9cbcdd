use std::path::PathBuf;
use clap::{value_parser, crate_version, Arg, ArgAction, Command, ValueHint};

const LONG_HELP: &str = "Input: FML-formatted levels (plain text).
Output: one FSON-formatted level, in plain text, written to stdout.
The zorders you request will be set beside each other on the level,
with a margin of empty tiles left between the source levels.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
merge every layer:     `tilemerge --input a.cfg b.cfg > out.cfg`
merge from a pipe:     `cat a.cfg | tilemerge > out.cfg`
merge two zorders:     `tilemerge --zorder 5 4 --input levels/71_bable.cfg \\
                           levels/56_DDR06_Mt_Upriayr_Road.cfg --output out.cfg > out.cfg`";

const ZORDER_HELP: &str = "Only tile maps with one of these zorders are merged.
Values may follow a single flag, or the flag may be repeated.
If omitted all zorders are merged.";

const OUTPUT_HELP: &str = "This becomes the `id` of the merged level.
It does not redirect output, which always goes to stdout.";

fn help_arg() -> Arg {
    Arg::new("help").long("help").short('h').alias("h")
        .help("print this help message and exit")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("tilemerge")
        .about("Copies the tiles of old-style FML levels into one new-style FSON level.")
        .after_long_help(LONG_HELP)
        .version(crate_version!())
        .disable_help_flag(true)
        .arg(help_arg())
        .arg(Arg::new("zorder").long("zorder").short('z').help("zorders of the tiles to copy")
            .long_help(ZORDER_HELP)
            .value_name("ZORDER")
            .num_args(1..)
            .action(ArgAction::Append)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i32))
            .required(false))
        .arg(Arg::new("input").long("input").short('i').help("level files to read, defaults to stdin")
            .value_name("PATH")
            .num_args(1..)
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
            .required(false))
        .arg(Arg::new("output").long("output").short('o').help("id of the merged level")
            .long_help(OUTPUT_HELP)
            .value_name("FILE")
            .required(false))
}
