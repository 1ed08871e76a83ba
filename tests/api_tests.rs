use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use movie_recs_api::{
    api::{create_router, AppState},
    data::{loader::load_movies_from_reader, Catalog},
    models::{CastCredit, CrewCredit},
    services::RecommendationEngine,
};

const MOVIES_CSV: &str = "\
id,title,release_date,popularity,vote_count,vote_average,budget,revenue,return
862,Toy Story,1995-10-30,21.946943,5415.0,7.7,30000000,373554033,12.4518011
863,Toy Story 2,1999-10-30,17.547693,3914.0,7.3,90000000,497366869,5.52629854
920,Cars,2006-06-08,9.486028,3263.0,6.6,120000000,461983149,3.84985958
14160,Up,2009-05-28,19.330884,7048.0,7.8,175000000,735099082,4.20056618
62177,Brave,2012-06-21,14.31,4641.0,6.7,185000000,538983207,2.91342274
150540,Inside Out,2015-06-09,22.5,6737.0,7.9,175000000,857611174,4.90063528
354912,Coco,2017-10-27,not-a-number,1,8.2,,,
";

fn create_test_server() -> TestServer {
    let (movies, _) = load_movies_from_reader(MOVIES_CSV.as_bytes()).unwrap();
    let cast = vec![
        CastCredit {
            id: Some(862),
            name: Some("Tom Hanks".to_string()),
        },
        CastCredit {
            id: Some(863),
            name: Some("Tom Hanks".to_string()),
        },
    ];
    let crew = vec![
        CrewCredit {
            id: Some(862),
            name: Some("John Lasseter".to_string()),
            job: Some("Director".to_string()),
        },
        CrewCredit {
            id: Some(920),
            name: Some("John Lasseter".to_string()),
            job: Some("Director".to_string()),
        },
    ];

    let engine = RecommendationEngine::build(&movies, 5);
    let state = AppState::new(Catalog::new(movies, cast, crew), Arc::new(engine), 2000);
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_recommendation_flow() {
    let server = create_test_server();

    let response = server.get("/recomendacion/Toy%20Story").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let recs = body["recomendaciones"].as_array().unwrap();
    assert_eq!(recs.len(), 5);
    assert_eq!(recs[0], "Toy Story 2");
    assert!(!recs.iter().any(|r| *r == "Toy Story"));
}

#[tokio::test]
async fn test_unknown_recommendation_is_empty_list() {
    let server = create_test_server();
    let response = server.get("/recomendacion/Finding%20Nemo").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recomendaciones"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_releases_by_month() {
    let server = create_test_server();
    let response = server.get("/cantidad_filmaciones_mes/octubre").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "3 cantidad de películas fueron estrenadas en el mes de octubre"
    );

    let response = server.get("/cantidad_filmaciones_mes/October").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Mes no válido"));
}

#[tokio::test]
async fn test_releases_by_weekday() {
    let server = create_test_server();
    // 1995-10-30 was a Monday
    let response = server.get("/cantidad_filmaciones_dia/lunes").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().starts_with("1 cantidad"));

    server
        .get("/cantidad_filmaciones_dia/monday")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_title_score() {
    let server = create_test_server();
    let response = server.get("/score_titulo/inside").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["titulo"], "Inside Out");
    assert_eq!(body["año_de_estreno"], 2015);
    assert_eq!(body["score"], 22.5);

    server
        .get("/score_titulo/Nemo")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_title_votes() {
    let server = create_test_server();
    let response = server.get("/votos_titulo/Up").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["titulo"], "Up");
    assert_eq!(body["total_valoraciones"], 7048);

    server
        .get("/votos_titulo/Coco")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_actor_and_director() {
    let server = create_test_server();

    let response = server.get("/actor/Tom%20Hanks").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["cantidad_peliculas"], 2);

    let response = server.get("/director/lasseter").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["director"], "lasseter");
    assert_eq!(body["cantidad_peliculas"], 2);
    assert_eq!(body["peliculas"][0]["titulo"], "Toy Story");
    assert_eq!(body["peliculas"][1]["release_date"], "2006-06-08");

    server
        .get("/actor/Nobody")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/director/Nobody")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_valid_names() {
    let server = create_test_server();
    let body: Value = server.get("/meses_validos").await.json();
    assert_eq!(body["meses_validos"].as_array().unwrap().len(), 12);
    assert_eq!(body["meses_validos"][0], "Enero");

    let body: Value = server.get("/dias_validos").await.json();
    assert_eq!(body["dias_validos"][6], "Domingo");
}
