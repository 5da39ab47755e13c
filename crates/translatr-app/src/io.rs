use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use translatr_types::{AppEvent, Language};

/// One parsed line of user input.
#[derive(Debug)]
pub enum Command {
    Event(AppEvent),
    Help,
    Quit,
    Empty,
}

/// Read commands from stdin until EOF, quit, or cancellation.
pub async fn stdin_loop(
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if interactive {
        print_help();
    }

    loop {
        if interactive {
            print!("> ");
            std::io::Write::flush(&mut std::io::stdout())?;
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Command::Event(event)) => ui_to_app_tx.send(event).await?,
                    Ok(Command::Help) => print_help(),
                    Ok(Command::Quit) => break,
                    Ok(Command::Empty) => {}
                    Err(message) => eprintln!("{message}"),
                }
            }
        }
    }

    tracing::info!("stdin loop stopping");
    Ok(())
}

/// Parse a command line. Row numbers are 1-based, as displayed.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "translate" | "t" => Ok(Command::Event(AppEvent::Translate(rest.to_string()))),
        "swap" => Ok(Command::Event(AppEvent::SwapLanguages)),
        "langs" => {
            let mut parts = rest.split_whitespace();
            let (Some(from), Some(to)) = (parts.next(), parts.next()) else {
                return Err("usage: langs <from> <to>".to_string());
            };
            let from: Language = from.parse()?;
            let to: Language = to.parse()?;
            Ok(Command::Event(AppEvent::SetDirection { from, to }))
        }
        "dict" | "list" => Ok(Command::Event(AppEvent::ShowDictionary)),
        "search" => Ok(Command::Event(AppEvent::FilterWords(rest.to_string()))),
        "add" => {
            let (source, target) = split_terms(rest)?;
            Ok(Command::Event(AppEvent::AddWord { source, target }))
        }
        "edit" => {
            let Some((row_text, terms)) = rest.split_once(char::is_whitespace) else {
                return Err("usage: edit <row> <source> = <target>".to_string());
            };
            let row = parse_row(row_text)?;
            let (source, target) = split_terms(terms)?;
            Ok(Command::Event(AppEvent::EditWord {
                row,
                source,
                target,
            }))
        }
        "delete" | "del" => Ok(Command::Event(AppEvent::DeleteWord {
            row: parse_row(rest)?,
        })),
        "reload" => Ok(Command::Event(AppEvent::ReloadWords)),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

fn split_terms(rest: &str) -> Result<(String, String), String> {
    let Some((source, target)) = rest.split_once('=') else {
        return Err("expected '<source> = <target>'".to_string());
    };
    Ok((source.trim().to_string(), target.trim().to_string()))
}

fn parse_row(text: &str) -> Result<usize, String> {
    let row: usize = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a row number", text.trim()))?;
    row.checked_sub(1)
        .ok_or_else(|| "row numbers start at 1".to_string())
}

fn print_help() {
    println!("Commands:");
    println!("  translate <text>             look up a translation");
    println!("  swap                         swap the translation direction");
    println!("  langs <from> <to>            set the translation direction");
    println!("  dict                         show your dictionary");
    println!("  search [query]               filter the dictionary locally");
    println!("  add <source> = <target>      add a word pair");
    println!("  edit <row> <source> = <target>");
    println!("  delete <row>                 delete a word pair");
    println!("  reload                       refetch the word list");
    println!("  help, quit");
}
