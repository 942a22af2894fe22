use std::ffi::OsString;
use std::io;

use clap::Parser;
use mode_selector::selection::EXIT_NO_SELECTION;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Choose how to launch a project; prints the mode identifier", long_about = None)]
struct Cli {
    /// Project path shown above the menu (display only, not validated)
    #[arg(allow_hyphen_values = true)]
    project_path: Option<OsString>,

    /// Skip the menu and select this mode (e.g. tmux-nvim)
    #[arg(short, long, value_name = "ID")]
    mode: Option<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help, version and usage errors: stderr, exit 1
            eprint!("{}", e);
            std::process::exit(EXIT_NO_SELECTION);
        }
    };

    let options = commands::select::SelectOptions {
        project_path: cli
            .project_path
            .map(|path| path.to_string_lossy().into_owned()),
        mode: cli.mode,
    };
    let code = commands::select::execute(options, &mut io::stdout().lock());
    std::process::exit(code);
}
