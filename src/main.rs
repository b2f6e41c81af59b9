// Entrypoint for the course registration CLI.
// - Keeps `main` small: build the console, load the roster, run the loop.
// - Any failure of the terminal itself is reported and the process still
//   exits normally.

use course_registration::app::App;
use course_registration::config::Config;
use course_registration::console::{Console, LinePrompt, Prompt, TermPrompt, UNKNOWN_ERROR};
use std::io::{self, IsTerminal, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::default();
    log::debug!("Using data file {}", config.data_file.display());

    let result = if io::stdin().is_terminal() {
        run(config, TermPrompt)
    } else {
        run(config, LinePrompt::new(io::stdin().lock(), io::stdout()))
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        let mut out = io::stdout();
        let _ = writeln!(out, "\n{}\n\n--- Error Details ---\n{:#}", UNKNOWN_ERROR, e);
    }
}

fn run(config: Config, prompt: impl Prompt) -> anyhow::Result<()> {
    let console = Console::new(prompt, io::stdout());
    let mut app = App::start(config, console)?;
    app.run()
}
