use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn new_client(config: &AppConfig) -> Result<Client, ClientError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = config.http().request_timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("unable to build the http client: {0}")]
    Build(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::time::timeout;

    #[tokio::test]
    async fn new_client_sets_the_user_agent_header() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("user-agent", USER_AGENT)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().service_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn new_client_applies_the_configured_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        // Accepts connections but never answers them
        let server = tokio::spawn(async move {
            let mut connections = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                connections.push(stream);
            }
        });

        let config = AppConfigBuilder::new().request_timeout(Duration::from_millis(100)).build();
        let client = new_client(&config)?;

        let result = timeout(Duration::from_secs(5), client.get(format!("http://{}/", address)).send()).await?;

        match result {
            Err(e) => assert!(e.is_timeout(), "expected a timeout, found {:?}", e),
            Ok(response) => panic!("expected a timeout, found status {}", response.status()),
        }
        server.abort();
        Ok(())
    }

    #[tokio::test]
    async fn new_client_waits_without_a_configured_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let mut connections = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                connections.push(stream);
            }
        });

        let client = new_client(&AppConfigBuilder::new().build())?;

        let result = timeout(Duration::from_millis(300), client.get(format!("http://{}/", address)).send()).await;

        assert!(result.is_err(), "expected the request to still be pending");
        server.abort();
        Ok(())
    }
}
