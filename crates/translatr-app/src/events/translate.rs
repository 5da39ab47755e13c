use kanal::AsyncSender;
use translatr_client::WordsApi;
use translatr_core::translator;
use translatr_types::{AppEvent, Language};

use crate::state::Session;

pub async fn handle_translate(
    api: &dyn WordsApi,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: String,
) -> anyhow::Result<()> {
    if !session.translator.begin(&text) {
        let error = session
            .translator
            .error()
            .unwrap_or(translator::EMPTY_INPUT)
            .to_string();
        app_to_ui_tx.send(AppEvent::ShowError(error)).await?;
        return Ok(());
    }

    // The lookup always runs against a fresh copy of the full word list.
    match api.list_words().await {
        Ok(words) => {
            session.translator.apply(&words);
            let text = session
                .translator
                .translation()
                .unwrap_or(translator::NO_MATCH)
                .to_string();
            app_to_ui_tx
                .send(AppEvent::ShowTranslation {
                    text,
                    from: session.translator.from,
                    to: session.translator.to,
                })
                .await?;
        }
        Err(e) => {
            tracing::error!("translate fetch failed: {e}");
            session.translator.fail();
            let error = session
                .translator
                .error()
                .unwrap_or(translator::BACKEND_UNREACHABLE)
                .to_string();
            app_to_ui_tx.send(AppEvent::ShowError(error)).await?;
        }
    }
    Ok(())
}

pub async fn handle_swap(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.translator.swap();
    direction_notice(session, app_to_ui_tx).await
}

pub async fn handle_set_direction(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    from: Language,
    to: Language,
) -> anyhow::Result<()> {
    session.translator.set_direction(from, to);
    direction_notice(session, app_to_ui_tx).await
}

async fn direction_notice(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowMessage(format!(
            "Translating from {} to {}",
            session.translator.from, session.translator.to
        )))
        .await?;
    Ok(())
}
