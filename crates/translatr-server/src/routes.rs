//! Route dispatch for the word service.
//!
//! Four operations over the words table. Update and delete perform no
//! existence check: a missing id affects zero rows and still reports the
//! generic success message.

use translatr_store::{StoreError, WordStore};
use translatr_types::{ErrorMessage, NewWord, StatusMessage};

use crate::http::{Request, Response};

pub fn handle(request: &Request, store: &WordStore) -> Response {
    let path = request.path.split('?').next().unwrap_or("");

    match (request.method.as_str(), path) {
        ("GET", "/api/words") => list_words(store),
        ("POST", "/api/words") => create_word(request, store),
        (method, path) => match path.strip_prefix("/api/words/") {
            Some(rest) => match (method, rest.parse::<i64>()) {
                ("PUT", Ok(id)) => update_word(request, store, id),
                ("DELETE", Ok(id)) => delete_word(store, id),
                (_, Ok(_)) => not_found(),
                (_, Err(_)) => bad_request(),
            },
            None => not_found(),
        },
    }
}

fn list_words(store: &WordStore) -> Response {
    match store.list() {
        Ok(words) => Response::json(200, &words),
        Err(e) => internal_error(e),
    }
}

fn create_word(request: &Request, store: &WordStore) -> Response {
    let word: NewWord = match serde_json::from_slice(&request.body) {
        Ok(word) => word,
        Err(e) => {
            tracing::debug!("rejecting unparseable create body: {e}");
            return bad_request();
        }
    };
    match store.insert(&word) {
        Ok(pair) => Response::json(201, &pair),
        Err(e) => internal_error(e),
    }
}

fn update_word(request: &Request, store: &WordStore, id: i64) -> Response {
    let word: NewWord = match serde_json::from_slice(&request.body) {
        Ok(word) => word,
        Err(e) => {
            tracing::debug!("rejecting unparseable update body: {e}");
            return bad_request();
        }
    };
    match store.update(id, &word) {
        Ok(affected) => {
            tracing::debug!("update of word {id} affected {affected} rows");
            Response::json(
                200,
                &StatusMessage {
                    message: "Updated successfully".to_string(),
                },
            )
        }
        Err(e) => internal_error(e),
    }
}

fn delete_word(store: &WordStore, id: i64) -> Response {
    match store.delete(id) {
        Ok(affected) => {
            tracing::debug!("delete of word {id} affected {affected} rows");
            Response::json(
                200,
                &StatusMessage {
                    message: "Deleted successfully".to_string(),
                },
            )
        }
        Err(e) => internal_error(e),
    }
}

fn internal_error(e: StoreError) -> Response {
    tracing::error!("store failure: {e}");
    Response::json(
        500,
        &ErrorMessage {
            error: "Internal server error".to_string(),
        },
    )
}

fn bad_request() -> Response {
    Response::json(
        400,
        &ErrorMessage {
            error: "Bad request".to_string(),
        },
    )
}

fn not_found() -> Response {
    Response::json(
        404,
        &ErrorMessage {
            error: "Not found".to_string(),
        },
    )
}
