use mockito::Matcher;
use recipe_browser::{Error, HttpRecipeApi, RecipeApi};

fn search_body() -> String {
    r#"[
        {"id": "47746", "title": "Best Pizza Dough Ever", "author": "101cookbooks", "img": "https://example.com/pizza.jpg"},
        {"id": "41470", "title": "Homemade Pizza", "author": "simplyrecipes", "img": "https://example.com/homemade.jpg"}
    ]"#
    .to_string()
}

#[tokio::test]
async fn test_search_returns_summaries() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "pizza".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body())
        .create_async()
        .await;

    let api = HttpRecipeApi::new(server.url(), None).unwrap();
    let results = api.search("pizza").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "47746");
    assert_eq!(results[0].title, "Best Pizza Dough Ever");
    assert_eq!(results[1].author, "simplyrecipes");
}

#[tokio::test]
async fn test_search_non_success_status_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let api = HttpRecipeApi::new(server.url(), None).unwrap();
    let err = api.search("pizza").await.unwrap_err();

    match err {
        Error::Api(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_malformed_json_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let api = HttpRecipeApi::new(server.url(), None).unwrap();
    let err = api.search("pizza").await.unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_get_recipe_deserializes_detail() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/47746")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "title": "Best Pizza Dough Ever",
                "author": "101cookbooks",
                "img": "https://example.com/pizza.jpg",
                "url": "https://example.com/recipes/pizza",
                "ingredients": ["4 1/2 cups flour", "1 3/4 tsp salt", "2 cups water"],
                "servings": 6,
                "cookTime": 75
            }"#,
        )
        .create_async()
        .await;

    let api = HttpRecipeApi::new(server.url(), None).unwrap();
    let detail = api.get_recipe("47746").await.unwrap();

    assert_eq!(detail.title, "Best Pizza Dough Ever");
    assert_eq!(detail.servings, Some(6));
    assert_eq!(detail.cook_time, Some(75));
    assert_eq!(detail.ingredients.len(), 3);
}

#[tokio::test]
async fn test_get_recipe_optional_fields_absent() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/minimal")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "title": "Minimal",
                "author": "nobody",
                "img": "",
                "url": "",
                "ingredients": ["salt"]
            }"#,
        )
        .create_async()
        .await;

    let api = HttpRecipeApi::new(server.url(), None).unwrap();
    let detail = api.get_recipe("minimal").await.unwrap();

    assert_eq!(detail.servings, None);
    assert_eq!(detail.cook_time, None);
}

#[tokio::test]
async fn test_missing_summary_fields_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": "1"}]"#)
        .create_async()
        .await;

    let api = HttpRecipeApi::new(server.url(), None).unwrap();
    assert!(matches!(api.search("x").await, Err(Error::Parse(_))));
}
