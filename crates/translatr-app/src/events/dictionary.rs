use kanal::AsyncSender;
use translatr_client::WordsApi;
use translatr_core::translator;
use translatr_types::{AppEvent, NewWord, WordPair};

use crate::state::Session;

/// Render the currently visible rows.
pub async fn show(session: &Session, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let visible: Vec<WordPair> = session.dictionary.visible().into_iter().cloned().collect();
    app_to_ui_tx.send(AppEvent::ShowWords(visible)).await?;
    Ok(())
}

/// Apply a local filter over the snapshot; no service call.
pub async fn handle_filter(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    query: String,
) -> anyhow::Result<()> {
    session.dictionary.set_query(&query);
    show(session, app_to_ui_tx).await
}

pub async fn handle_add(
    api: &dyn WordsApi,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    source: String,
    target: String,
) -> anyhow::Result<()> {
    if source.is_empty() || target.is_empty() {
        app_to_ui_tx
            .send(AppEvent::ShowError("Both terms are required.".to_string()))
            .await?;
        return Ok(());
    }

    match api.create_word(&NewWord { source, target }).await {
        Ok(pair) => {
            session.dictionary.push(pair);
            show(session, app_to_ui_tx).await
        }
        Err(e) => {
            tracing::error!("Add word error: {e}");
            service_error(app_to_ui_tx).await
        }
    }
}

pub async fn handle_edit(
    api: &dyn WordsApi,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    row: usize,
    source: String,
    target: String,
) -> anyhow::Result<()> {
    let id = match session.dictionary.entry(row) {
        Some(pair) => pair.id,
        None => return missing_row(app_to_ui_tx, row).await,
    };

    match id {
        Some(id) => {
            let draft = NewWord {
                source: source.clone(),
                target: target.clone(),
            };
            match api.update_word(id, &draft).await {
                Ok(status) => {
                    tracing::debug!("service: {}", status.message);
                    session.dictionary.edit_by_id(id, &source, &target);
                    show(session, app_to_ui_tx).await
                }
                Err(e) => {
                    tracing::error!("Edit word error: {e}");
                    service_error(app_to_ui_tx).await
                }
            }
        }
        None => {
            // Row never got a server id; mutate the snapshot only.
            session.dictionary.edit_local(row, &source, &target);
            show(session, app_to_ui_tx).await
        }
    }
}

pub async fn handle_delete(
    api: &dyn WordsApi,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    row: usize,
) -> anyhow::Result<()> {
    let id = match session.dictionary.entry(row) {
        Some(pair) => pair.id,
        None => return missing_row(app_to_ui_tx, row).await,
    };

    match id {
        Some(id) => match api.delete_word(id).await {
            Ok(status) => {
                tracing::debug!("service: {}", status.message);
                session.dictionary.remove_by_id(id);
                show(session, app_to_ui_tx).await
            }
            Err(e) => {
                tracing::error!("Delete error: {e}");
                service_error(app_to_ui_tx).await
            }
        },
        None => {
            // Row never got a server id; drop it from the snapshot only.
            session.dictionary.remove_local(row);
            show(session, app_to_ui_tx).await
        }
    }
}

/// Refetch the snapshot from the service.
pub async fn handle_reload(
    api: &dyn WordsApi,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match api.list_words().await {
        Ok(words) => {
            session.dictionary.set_snapshot(words);
            show(session, app_to_ui_tx).await
        }
        Err(e) => {
            tracing::error!("Fetch words error: {e}");
            service_error(app_to_ui_tx).await
        }
    }
}

async fn missing_row(app_to_ui_tx: &AsyncSender<AppEvent>, row: usize) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowError(format!("No entry at row {}.", row + 1)))
        .await?;
    Ok(())
}

async fn service_error(app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowError(
            translator::BACKEND_UNREACHABLE.to_string(),
        ))
        .await?;
    Ok(())
}
