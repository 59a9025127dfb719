//! HTTP-level tests for the expense crate
//!
//! The auth and expense routers are merged under one request gate, as the
//! application serves them.

#[cfg(test)]
mod support {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::extract::Request;
    use axum::http::{Method, StatusCode, header};
    use axum::middleware;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use auth::{AuthAppState, AuthConfig, InMemoryAuthRepository, auth_router, authenticate_request};

    use crate::{ExpenseAppState, InMemoryExpenseRepository, expense_router};

    pub fn app() -> Router {
        let auth_state =
            AuthAppState::new(InMemoryAuthRepository::new(), AuthConfig::with_random_secret())
                .unwrap();
        let expense_state = ExpenseAppState::new(InMemoryExpenseRepository::new());

        auth_router(auth_state.clone())
            .merge(expense_router(expense_state))
            .layer(middleware::from_fn_with_state(
                auth_state,
                authenticate_request::<InMemoryAuthRepository>,
            ))
    }

    pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    pub async fn send(app: &Router, req: Request) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    /// Register then log in; returns the token
    pub async fn signed_in(app: &Router, email: &str) -> String {
        let body = json!({ "name": "Tester", "email": email, "password": "pw123" });
        let (status, _) = send(app, request(Method::POST, "/register", None, Some(body))).await;
        assert_eq!(status, StatusCode::CREATED);

        let body = json!({ "email": email, "password": "pw123" });
        let (status, body) = send(app, request(Method::POST, "/login", None, Some(body))).await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    /// Create an expense and return its id
    pub async fn create(app: &Router, token: &str, name: &str, amount: i64, date: &str) -> String {
        let body = json!({ "name": name, "amountMinor": amount, "date": date });
        let (status, body) =
            send(app, request(Method::POST, "/expenses", Some(token), Some(body))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["expenseId"].as_str().unwrap().to_string()
    }
}

#[cfg(test)]
mod crud_tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let app = app();
        let token = signed_in(&app, "alice@example.com").await;

        let body = json!({
            "name": "Groceries",
            "note": "weekly shop",
            "category": "food",
            "amountMinor": 4599,
            "date": "2026-03-01"
        });
        let (status, created) =
            send(&app, request(Method::POST, "/expenses", Some(&token), Some(body))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Groceries");
        assert_eq!(created["amountMinor"], 4599);
        assert_eq!(created["date"], "2026-03-01");

        let uri = format!("/expenses/{}", created["expenseId"].as_str().unwrap());
        let (status, fetched) = send(&app, request(Method::GET, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let app = app();
        let token = signed_in(&app, "alice@example.com").await;
        create(&app, &token, "Older", 100, "2026-01-10").await;
        create(&app, &token, "Newest", 300, "2026-03-10").await;
        create(&app, &token, "Middle", 200, "2026-02-10").await;

        let (status, body) = send(&app, request(Method::GET, "/expenses", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Newest", "Middle", "Older"]);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let app = app();
        let token = signed_in(&app, "alice@example.com").await;
        let id = create(&app, &token, "Lunch", 1250, "2026-03-01").await;
        let uri = format!("/expenses/{id}");
        let (_, before) = send(&app, request(Method::GET, &uri, Some(&token), None)).await;

        let body = json!({ "name": "Team lunch", "amountMinor": 5000, "date": "2026-03-02" });
        let (status, after) = send(&app, request(Method::PUT, &uri, Some(&token), Some(body))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after["expenseId"], before["expenseId"]);
        assert_eq!(after["createdAt"], before["createdAt"]);
        assert_eq!(after["name"], "Team lunch");
        assert_eq!(after["amountMinor"], 5000);
    }

    #[tokio::test]
    async fn test_delete_then_not_found() {
        let app = app();
        let token = signed_in(&app, "alice@example.com").await;
        let id = create(&app, &token, "Taxi", 2300, "2026-03-01").await;
        let uri = format!("/expenses/{id}");

        let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, request(Method::GET, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], format!("Expense not found for the expense id {id}"));

        let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let app = app();
        let token = signed_in(&app, "alice@example.com").await;

        let (status, _) =
            send(&app, request(Method::GET, "/expenses/not-a-uuid", Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_fields_are_bad_request() {
        let app = app();
        let token = signed_in(&app, "alice@example.com").await;

        for body in [
            json!({ "name": "Refund", "amountMinor": -1, "date": "2026-03-01" }),
            json!({ "name": "   ", "amountMinor": 100, "date": "2026-03-01" }),
        ] {
            let (status, _) =
                send(&app, request(Method::POST, "/expenses", Some(&token), Some(body))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        let (_, body) = send(&app, request(Method::GET, "/expenses", Some(&token), None)).await;
        assert_eq!(body.as_array().map(Vec::len), Some(0));
    }
}

#[cfg(test)]
mod access_tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_requires_authentication() {
        let app = app();

        let (status, _) = send(&app, request(Method::GET, "/expenses", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let body = json!({ "name": "Lunch", "amountMinor": 100, "date": "2026-03-01" });
        let (status, _) = send(&app, request(Method::POST, "/expenses", None, Some(body))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_other_profiles_expense_is_not_found() {
        let app = app();
        let alice = signed_in(&app, "alice@example.com").await;
        let bob = signed_in(&app, "bob@example.com").await;
        let id = create(&app, &alice, "Rent", 120000, "2026-03-01").await;
        let uri = format!("/expenses/{id}");

        let (status, _) = send(&app, request(Method::GET, &uri, Some(&bob), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let body = json!({ "name": "Mine now", "amountMinor": 1, "date": "2026-03-01" });
        let (status, _) = send(&app, request(Method::PUT, &uri, Some(&bob), Some(body))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&bob), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, listed) = send(&app, request(Method::GET, "/expenses", Some(&bob), None)).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(0));

        let (status, body) = send(&app, request(Method::GET, &uri, Some(&alice), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Rent");
    }

    #[tokio::test]
    async fn test_signed_out_token_is_rejected() {
        let app = app();
        let token = signed_in(&app, "alice@example.com").await;
        create(&app, &token, "Coffee", 350, "2026-03-01").await;

        let (status, _) = send(&app, request(Method::POST, "/signout", Some(&token), None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, request(Method::GET, "/expenses", Some(&token), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Token is blacklisted.");
    }
}
