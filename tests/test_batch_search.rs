use receitas_search::RecipeSearchEngine;

fn corpus_body() -> String {
    serde_json::json!([
        {
            "name": "Frango assado",
            "ingredients": "frango, sal, limão"
        },
        {
            "name": "Bolo de cenoura",
            "ingredients": "cenoura, farinha de trigo, ovos"
        },
        {
            "name": "Arroz branco",
            "ingredients": "arroz, sal, alho"
        }
    ])
    .to_string()
}

#[tokio::test]
async fn test_batch_returns_best_hit_per_query() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/receitas/todas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(corpus_body())
        .create();

    let engine = RecipeSearchEngine::builder()
        .base_url(server.url())
        .build()
        .unwrap();

    let queries = vec![
        "frango".to_string(),
        "cenoura".to_string(),
        "feijoada".to_string(),
    ];
    let found = engine.search_batch(&queries).await;

    assert_eq!(found.len(), 2);
    assert_eq!(found["frango"].name, "Frango assado");
    assert_eq!(found["cenoura"].name, "Bolo de cenoura");
    // a query with no matches is omitted, not mapped to a placeholder
    assert!(!found.contains_key("feijoada"));
}

#[tokio::test]
async fn test_repeat_batch_is_served_from_cache() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/receitas/todas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(corpus_body())
        .expect(2)
        .create();

    let engine = RecipeSearchEngine::builder()
        .base_url(server.url())
        .build()
        .unwrap();

    let queries = vec!["frango".to_string(), "arroz".to_string()];
    let first = engine.search_batch(&queries).await;
    let second = engine.search_batch(&queries).await;

    assert_eq!(first, second);
    // one fetch per distinct query on the first run, none on the second
    mock.assert_async().await;
}

#[tokio::test]
async fn test_batch_upstream_failure_yields_empty_map() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/receitas/todas")
        .with_status(500)
        .with_body("internal error")
        .create();

    let engine = RecipeSearchEngine::builder()
        .base_url(server.url())
        .build()
        .unwrap();

    let queries = vec!["frango".to_string(), "arroz".to_string()];
    assert!(engine.search_batch(&queries).await.is_empty());
}
