// Integration tests for `QuotableClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quotably_api::{AuthorQuery, Error, QuotableClient, QuoteQuery, RandomQuery, TagQuery};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, QuotableClient) {
    let server = MockServer::start().await;
    let client = QuotableClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn quote_json(id: &str, author: &str, slug: &str, tags: &[&str]) -> serde_json::Value {
    json!({
        "_id": id,
        "content": format!("Quote {id}"),
        "author": author,
        "authorSlug": slug,
        "tags": tags,
        "length": 8,
        "dateAdded": "2023-04-14",
        "dateModified": "2023-04-14"
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_quotes_with_filters() {
    let (server, client) = setup().await;

    let body = json!({
        "count": 1,
        "totalCount": 1,
        "page": 1,
        "totalPages": 1,
        "lastItemIndex": null,
        "results": [quote_json("q1", "Seneca", "seneca", &["wisdom"])]
    });

    Mock::given(method("GET"))
        .and(path("/quotes"))
        .and(query_param("tags", "wisdom"))
        .and(query_param("author", "Seneca|Epictetus"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client
        .list_quotes(&QuoteQuery {
            tags: Some("wisdom".into()),
            author: Some("Seneca|Epictetus".into()),
            page: Some(1),
            ..QuoteQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].author, "Seneca");
    assert_eq!(page.results[0].author_slug, "seneca");
    assert_eq!(page.results[0].tags, vec!["wisdom"]);
    assert!(page.last_item_index.is_none());
}

#[tokio::test]
async fn test_get_quote_uses_single_resource_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/quotes/abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(quote_json("abc123", "Marcus Aurelius", "marcus-aurelius", &[])),
        )
        .mount(&server)
        .await;

    let quote = client.get_quote("abc123").await.unwrap();

    assert_eq!(quote.id, "abc123");
    assert_eq!(quote.author, "Marcus Aurelius");
}

#[tokio::test]
async fn test_random_quote() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/random"))
        .and(query_param("maxLength", "120"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(quote_json("r1", "Laozi", "laozi", &["life"])),
        )
        .mount(&server)
        .await;

    let quote = client
        .random_quote(&RandomQuery {
            max_length: Some(120),
            ..RandomQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(quote.id, "r1");
}

#[tokio::test]
async fn test_list_tags_returns_bare_array() {
    let (server, client) = setup().await;

    let body = json!([
        { "_id": "t1", "name": "wisdom" },
        { "_id": "t2", "name": "life" },
    ]);

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let tags = client.list_tags(&TagQuery::default()).await.unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "wisdom");
    assert_eq!(tags[1].id, "t2");
}

#[tokio::test]
async fn test_paginate_authors_walks_all_pages() {
    let (server, client) = setup().await;

    let author = |id: &str, slug: &str| {
        json!({
            "_id": id,
            "name": slug,
            "slug": slug,
            "bio": "",
            "description": "",
            "link": "",
            "quoteCount": 3
        })
    };

    Mock::given(method("GET"))
        .and(path("/authors"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "totalCount": 3,
            "page": 1,
            "totalPages": 2,
            "lastItemIndex": 1,
            "results": [author("a1", "seneca"), author("a2", "laozi")]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/authors"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "totalCount": 3,
            "page": 2,
            "totalPages": 2,
            "lastItemIndex": null,
            "results": [author("a3", "rumi")]
        })))
        .mount(&server)
        .await;

    let authors = client
        .paginate_authors(&AuthorQuery::default())
        .await
        .unwrap();

    assert_eq!(authors.len(), 3);
    assert_eq!(authors[0].slug, "seneca");
    assert_eq!(authors[2].slug, "rumi");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_404_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/quotes/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "statusMessage": "Could not find quote"
        })))
        .mount(&server)
        .await;

    let result = client.get_quote("missing").await;

    match &result {
        Err(Error::Api { status, message }) => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Could not find quote");
        }
        other => panic!("expected Api 404 error, got: {other:?}"),
    }
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_error_500_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.list_quotes(&QuoteQuery::default()).await;

    match result {
        Err(Error::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Api 500 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.list_tags(&TagQuery::default()).await;

    assert!(
        matches!(result, Err(Error::Deserialization { ref body, .. }) if body == "not json"),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_multibyte_body_straddling_the_preview_cutoff() {
    let (server, client) = setup().await;

    // 199 ASCII bytes followed by a two-byte character: byte index 200
    // is not a char boundary, so the preview must truncate by chars.
    let body = format!("{}é is not json", "x".repeat(199));

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;

    let result = client.list_tags(&TagQuery::default()).await;

    match result {
        Err(Error::Deserialization {
            ref message,
            body: ref raw,
        }) => {
            assert_eq!(raw, &body);
            assert!(message.contains('é'), "preview lost content: {message}");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
