use std::future::Future;
use std::sync::Arc;

use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};
use translatr_store::WordStore;

use crate::{http, routes};

/// Serve the word service until the shutdown future resolves.
pub async fn run(listener: TcpListener, store: Arc<WordStore>, shutdown: impl Future<Output = ()>) {
    let server = tokio::spawn(accept_loop(listener, store));

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = server => match result {
            Ok(Ok(())) => tracing::warn!("accept loop exited"),
            Ok(Err(e)) => tracing::error!("accept loop failed: {e}"),
            Err(e) => tracing::error!("accept loop panicked: {e}"),
        },
    }
}

async fn accept_loop(listener: TcpListener, store: Arc<WordStore>) -> anyhow::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            if let Err(e) = serve_connection(stream, &store).await {
                tracing::warn!("connection from {peer}: {e}");
            }
        });
    }
}

/// One request per connection; the response carries `Connection: close`.
async fn serve_connection(stream: TcpStream, store: &WordStore) -> anyhow::Result<()> {
    let (read, mut write) = stream.into_split();
    let mut reader = BufReader::new(read);

    let request = http::read_request(&mut reader).await?;
    tracing::debug!("{} {}", request.method, request.path);

    let response = routes::handle(&request, store);
    http::write_response(&mut write, &response).await?;
    Ok(())
}
