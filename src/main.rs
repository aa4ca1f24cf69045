use anyhow::Result as AnyhowResult;
use clap::Parser;
use jot::services::terminal_modes;
use jot::services::tracing_setup;
use std::path::PathBuf;

/// A small full-screen terminal text editor
#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(about = "A small full-screen terminal text editor", long_about = None)]
#[command(version)]
struct Args {
    /// File to edit. Created on first save if it does not exist.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn initialize_app() {
    if let Some(log_file) = tracing_setup::init_from_env() {
        tracing::info!("Editor starting, logging to {}", log_file.display());
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));
}

#[cfg(unix)]
fn run_editor(args: &Args) -> AnyhowResult<()> {
    use anyhow::Context;
    use jot::app::Editor;
    use jot::config::Config;
    use jot::input::decoder::KeyDecoder;
    use jot::input::source::TerminalInput;
    use jot::services::terminal_modes::TerminalModes;
    use jot::services::terminal_size::window_size;
    use std::fs::File;
    use std::io;
    use std::os::fd::AsFd;

    let config = Config::default();
    let mut modes = None;

    let result = terminal_modes::run_with_clean_exit(&mut io::stdout(), || {
        modes = Some(TerminalModes::enable()?);

        let mut input = TerminalInput::from_stdin().context("Failed to open terminal input")?;
        // Unbuffered handle so each frame reaches the terminal in one write.
        let mut output = File::from(
            io::stdout()
                .as_fd()
                .try_clone_to_owned()
                .context("Failed to open terminal output")?,
        );

        let size = window_size(&mut input, &mut output, config.escape_timeout)
            .context("Failed to determine terminal size")?;
        let escape_timeout = config.escape_timeout;

        let mut editor = Editor::new(size.rows, size.cols, config);
        if let Some(path) = &args.file {
            editor
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
        }

        let mut decoder = KeyDecoder::with_escape_timeout(&mut input, escape_timeout);
        editor
            .run(&mut decoder, &mut output)
            .context("Terminal I/O failed")
    });

    if let Some(mut modes) = modes {
        modes.undo();
    }
    tracing::info!("Editor exiting");
    result
}

#[cfg(not(unix))]
fn run_editor(_args: &Args) -> AnyhowResult<()> {
    anyhow::bail!("jot requires a Unix terminal")
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    initialize_app();
    run_editor(&args)
}
