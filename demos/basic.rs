use presto_http::{Session, StatementClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // e.g. http://localhost:8080
    let server = std::env::var("PRESTO_SERVER")?;

    let session = Session::new()
        .with_user("demo")
        .with_source("presto-http-demo")
        .with_catalog("hive")
        .with_schema("default");

    let mut client = StatementClient::submit(
        reqwest::Client::new(),
        server,
        session,
        "SELECT table_name FROM information_schema.tables LIMIT 10",
    )
    .await?;

    loop {
        if let Some(rows) = &client.results().data {
            for row in rows {
                println!("{row:?}");
            }
        }
        if !client.advance().await? {
            break;
        }
    }

    if let Some(error) = &client.results().error {
        eprintln!("query failed: {:?}", error.message);
    }

    client.close().await;
    Ok(())
}
