use reqwest::header::{ALLOW, ETAG, IF_MATCH, IF_NONE_MATCH};
use validation_server::config::ServerConfig;

use crate::support::{frozen_clock, start_server};

#[tokio::test]
async fn unknown_path_is_gone() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/nope/")).send().await.unwrap();
    assert_eq!(resp.status(), 410);
    let resp = client
        .get(format!("{base}/gosomewhere/notexpected/"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 410);
}

#[tokio::test]
async fn put_on_read_only_resource_is_not_allowed() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let client = reqwest::Client::new();

    let resp = client.put(format!("{base}/etag/x/")).send().await.unwrap();
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.headers()[ALLOW], "GET");

    let resp = client.post(format!("{base}/clock/x/")).send().await.unwrap();
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.headers()[ALLOW], "GET, PUT");
}

#[tokio::test]
async fn root_serves_usage() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("/etag/"));
    assert!(body.contains("/lastmod/"));
}

#[tokio::test]
async fn put_advances_clock_resource() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/clock/etag/mutable/");

    let resp = client.get(&url).send().await.unwrap();
    let tag = resp.headers()[ETAG].to_str().unwrap().to_string();
    let before = resp.text().await.unwrap();

    let resp = client.put(&url).send().await.unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.text().await.unwrap().is_empty());

    let resp = client.get(&url).header(IF_NONE_MATCH, &tag).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_ne!(resp.headers()[ETAG].to_str().unwrap(), tag);
    let after = resp.text().await.unwrap();
    assert_ne!(before.lines().next(), after.lines().next());

    let resp = client.get(&url).header(IF_MATCH, &tag).send().await.unwrap();
    assert_eq!(resp.status(), 412);
}

#[tokio::test]
async fn mutation_is_scoped_to_its_path() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let client = reqwest::Client::new();
    let other = format!("{base}/clock/etag/neighbour/");

    let tag = client.get(&other).send().await.unwrap().headers()[ETAG]
        .to_str()
        .unwrap()
        .to_string();
    let resp = client.put(format!("{base}/clock/etag/mutated/")).send().await.unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client.get(&other).header(IF_NONE_MATCH, &tag).send().await.unwrap();
    assert_eq!(resp.status(), 304);
}

#[tokio::test]
async fn headers_flag_echoes_request() {
    let base = start_server(ServerConfig::default(), frozen_clock()).await;
    let client = reqwest::Client::new();

    let body = client
        .get(format!("{base}/headers/echo/"))
        .header("x-trace", "hello")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("\nREQUEST HEADERS:\n"));
    assert!(body.contains("  X-Trace: hello\n"));
}
