use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use translatr_client::{ApiClient, WordsApi};
use translatr_core::translator;
use translatr_types::AppEvent;

use crate::state::{AppState, Session};

pub mod dictionary;
pub mod translate;

/// App's main loop: owns the view state and serves one event at a time.
/// Every user action issues at most one service call and awaits it before
/// the views are touched.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let api = {
        let config = state.config.read().await;
        ApiClient::new(config.api.base_url.clone())
    };
    let mut session = Session::new();

    // Load the dictionary snapshot once at startup; filtering stays local
    // from here on.
    match api.list_words().await {
        Ok(words) => {
            tracing::info!("loaded {} word pairs", words.len());
            session.dictionary.set_snapshot(words);
        }
        Err(e) => {
            tracing::error!("failed to fetch words: {e}");
            app_to_ui_tx
                .send(AppEvent::ShowError(
                    translator::BACKEND_UNREACHABLE.to_string(),
                ))
                .await?;
        }
    }

    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_events(&api, &mut session, &app_to_ui_tx, event).await?;
    }
}

pub async fn handle_events(
    api: &dyn WordsApi,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Translate(text) => {
            translate::handle_translate(api, session, app_to_ui_tx, text).await
        }
        AppEvent::SwapLanguages => translate::handle_swap(session, app_to_ui_tx).await,
        AppEvent::SetDirection { from, to } => {
            translate::handle_set_direction(session, app_to_ui_tx, from, to).await
        }
        AppEvent::ShowDictionary => dictionary::show(session, app_to_ui_tx).await,
        AppEvent::FilterWords(query) => {
            dictionary::handle_filter(session, app_to_ui_tx, query).await
        }
        AppEvent::AddWord { source, target } => {
            dictionary::handle_add(api, session, app_to_ui_tx, source, target).await
        }
        AppEvent::EditWord {
            row,
            source,
            target,
        } => dictionary::handle_edit(api, session, app_to_ui_tx, row, source, target).await,
        AppEvent::DeleteWord { row } => {
            dictionary::handle_delete(api, session, app_to_ui_tx, row).await
        }
        AppEvent::ReloadWords => dictionary::handle_reload(api, session, app_to_ui_tx).await,
        other => {
            tracing::warn!(
                "ignoring ui-bound event in app loop: {:?}",
                std::mem::discriminant(&other)
            );
            Ok(())
        }
    }
}
