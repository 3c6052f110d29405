use movies_api::{Client, Error, MissingDirector, PageRequest, SortDirective};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn fetch_movies_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("movies.json");

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("populate[0]", "director"))
        .and(query_param("pagination[page]", "1"))
        .and(query_param("pagination[pageSize]", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let request = PageRequest::new(0, 10, vec![]).unwrap();
    let page = client.fetch_movies(&request).await.unwrap();
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.page_count, 4);
    assert_eq!(page.rows[1].director, "Steven Spielberg");
}

#[tokio::test]
async fn fetch_movies_sends_sort_directives() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("movies.json");

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("pagination[page]", "3"))
        .and(query_param("pagination[pageSize]", "20"))
        .and(query_param("sort[0]", "releaseYear:desc"))
        .and(query_param("sort[1]", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let request = PageRequest::new(
        2,
        20,
        vec![SortDirective::desc("releaseYear"), SortDirective::asc("name")],
    )
    .unwrap();
    let page = client.fetch_movies(&request).await.unwrap();
    assert_eq!(page.rows.len(), 3);
}

#[tokio::test]
async fn fetch_movies_truncates_oversized_page() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("movies.json");

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let request = PageRequest::new(0, 2, vec![]).unwrap();
    let page = client.fetch_movies(&request).await.unwrap();
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].name, "The Shining");
}

#[tokio::test]
async fn fetch_movies_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let request = PageRequest::new(0, 10, vec![]).unwrap();
    let err = client.fetch_movies(&request).await.unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn fetch_movies_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let request = PageRequest::new(0, 10, vec![]).unwrap();
    let err = client.fetch_movies(&request).await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn fetch_movies_missing_director_policy() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("movies_missing_director.json");

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let request = PageRequest::new(0, 10, vec![]).unwrap();

    let strict = Client::with_base_url(&mock_server.uri());
    let err = strict.fetch_movies(&request).await.unwrap_err();
    assert!(matches!(err, Error::MissingDirector { movie_id: 7 }));

    let lenient = Client::with_base_url(&mock_server.uri())
        .with_missing_director(MissingDirector::Placeholder("Unknown".to_string()));
    let page = lenient.fetch_movies(&request).await.unwrap();
    assert_eq!(page.rows[0].director, "Unknown");
}

#[tokio::test]
async fn get_movie_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("movie.json");

    Mock::given(method("GET"))
        .and(path("/api/movies/2"))
        .and(query_param("populate[0]", "director"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let movie = client.get_movie(2).await.unwrap();
    assert_eq!(movie.name, "Jaws");
    assert_eq!(movie.release_year, 1975);
    assert_eq!(movie.director, "Steven Spielberg");
}

#[tokio::test]
async fn get_movie_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/movies/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"data":null}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_movie(999).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_server_is_request_failed() {
    let client = Client::with_base_url("http://127.0.0.1:1");
    let request = PageRequest::new(0, 10, vec![]).unwrap();
    let err = client.fetch_movies(&request).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
}
