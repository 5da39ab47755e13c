use colored::Colorize;
use kanal::AsyncReceiver;
use translatr_types::{AppEvent, WordPair};

/// Render loop: turns app events into terminal output.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowTranslation { text, from, to } => {
                println!(
                    "{} {} {}: {}",
                    from.to_string().bold(),
                    "to".dimmed(),
                    to.to_string().bold(),
                    text.green()
                );
            }
            AppEvent::ShowWords(words) => render_words(&words),
            AppEvent::ShowMessage(message) => println!("{message}"),
            AppEvent::ShowError(error) => eprintln!("{}", error.red()),
            other => {
                tracing::warn!(
                    "ignoring app-bound event in ui loop: {:?}",
                    std::mem::discriminant(&other)
                );
            }
        }
    }

    tracing::info!("ui loop stopping");
    Ok(())
}

fn render_words(words: &[WordPair]) {
    if words.is_empty() {
        println!("{}", "No words to show.".dimmed());
        return;
    }

    println!(
        "{}  {} {}",
        format!("{:>4}", "#").bold(),
        format!("{:<20}", "Spanish Word").bold(),
        format!("{:<20}", "English Word").bold()
    );
    for (row, word) in words.iter().enumerate() {
        println!("{:>4}  {:<20} {:<20}", row + 1, word.source, word.target);
    }
}
