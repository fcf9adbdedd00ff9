use agri_market::app_system::MarketSystem;
use agri_market::config::Config;
use agri_market::http::router;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    _system: MarketSystem,
}

pub fn app() -> TestApp {
    let config = Config::from_lookup(|_| None).unwrap();
    let system = MarketSystem::new(16);
    TestApp {
        router: router(system.clients.clone(), &config),
        _system: system,
    }
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn stock_of(&self, product_id: &str) -> u64 {
        let (_, body) = self.get(&format!("/api/products/{product_id}")).await;
        body["stock"].as_u64().expect("product has a stock")
    }

    /// Registers a user and returns its id.
    pub async fn register(&self, role: &str, name: &str, division: &str) -> String {
        let (status, body) = self
            .post(
                &format!("/api/{role}s"),
                json!({
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase()),
                    "phone": "01700000000",
                    "division": division,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        id_of(&body)
    }

    pub async fn add_product(
        &self,
        seller_id: &str,
        name: &str,
        category: &str,
        price: f64,
        stock: u32,
    ) -> String {
        let (status, body) = self
            .post(
                "/api/products",
                json!({
                    "seller_id": seller_id,
                    "name": name,
                    "description": format!("Fresh {name}"),
                    "category": category,
                    "price_per_unit": price,
                    "unit": "kg",
                    "stock": stock,
                    "division": "Rajshahi",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        id_of(&body)
    }
}

pub fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("response has an id").to_string()
}

pub fn valid_card() -> Value {
    json!({ "card_number": "4242 4242 4242 4242", "expiry_date": "12/29", "cvv": "123" })
}
