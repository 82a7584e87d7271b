use anyhow::{Context, Result};
use std::io;
use wordle_helper::cli::{CliInterface, parse_cli, prompt_language};
use wordle_helper::logging::{default_tui_log_path, init_logging};
use wordle_helper::tui::TuiInterface;
use wordle_helper::{Session, WordListPaths, WordLists, game_loop, info_log};

fn main() -> Result<()> {
    let cli = parse_cli();

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| if cli.tui { default_tui_log_path() } else { None });
    init_logging(log_file.as_deref()).context("failed to initialize logging")?;

    let paths = WordListPaths::resolve(cli.english_path.as_deref(), cli.indonesian_path.as_deref());
    let word_lists = WordLists::load(&paths).context("failed to load word lists")?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let language = match cli.language {
        Some(language) => language,
        None => prompt_language(&mut reader),
    };
    info_log!("{} mode selected", language);

    let mut session = Session::new(language, word_lists.get(language));
    if cli.tui {
        drop(reader);
        let mut interface = TuiInterface::new().context("failed to start terminal UI")?;
        game_loop(&mut session, &mut interface);
    } else {
        let mut interface = CliInterface::new(reader);
        game_loop(&mut session, &mut interface);
    }
    Ok(())
}
