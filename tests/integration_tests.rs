use serde_json::{Value, json};
use uuid::Uuid;

mod unit;

const BASE_URL: &str = "http://127.0.0.1:8000";

fn unique_email(prefix: &str) -> String {
    format!("{}+{}@example.com", prefix, Uuid::new_v4().simple())
}

async fn register_and_login(client: &reqwest::Client, email: &str) -> String {
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "email": email,
            "full_name": "Test Owner",
            "password": "StrongP4ss!",
        }))
        .send()
        .await
        .expect("register request failed");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("invalid register body");
    body["data"]["tokens"]["access_token"]
        .as_str()
        .expect("missing access token")
        .to_string()
}

#[tokio::test]
#[ignore = "requires running server"]
async fn register_login_and_read_own_profile() {
    let client = reqwest::Client::new();
    let email = unique_email("owner");

    let token = register_and_login(&client, &email).await;

    let response = client
        .get(format!("{}/profiles/me", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("profile request failed");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("invalid profile body");
    assert_eq!(body["data"]["email"].as_str(), Some(email.as_str()));
    assert_eq!(body["data"]["role"].as_str(), Some("member"));
}

#[tokio::test]
#[ignore = "requires running server"]
async fn creating_a_workplace_promotes_the_creator_to_owner() {
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &unique_email("founder")).await;

    let slug = format!("site-{}", Uuid::new_v4().simple());
    let response = client
        .post(format!("{}/workplaces", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": "Acme Builders", "slug": slug }))
        .send()
        .await
        .expect("workplace request failed");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/profiles/me", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("profile request failed");
    let body: Value = response.json().await.expect("invalid profile body");
    assert_eq!(body["data"]["role"].as_str(), Some("owner"));
}

#[tokio::test]
#[ignore = "requires running server"]
async fn invite_flow_is_single_use() {
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &unique_email("boss")).await;

    let slug = format!("crew-{}", Uuid::new_v4().simple());
    client
        .post(format!("{}/workplaces", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": "Crew", "slug": slug }))
        .send()
        .await
        .expect("workplace request failed");

    let invitee = unique_email("worker");
    let response = client
        .post(format!("{}/employees", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "full_name": "New Worker", "email": invitee }))
        .send()
        .await
        .expect("invite request failed");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("invalid invite body");
    let join_link = body["data"]["join_link"].as_str().expect("missing join link");
    let invite_token = join_link
        .rsplit("token=")
        .next()
        .expect("missing token in join link");

    // verify resolves the preview without auth
    let response = client
        .get(format!("{}/invites/{}/verify", BASE_URL, invite_token))
        .send()
        .await
        .expect("verify request failed");
    assert_eq!(response.status(), 200);

    // first completion succeeds
    let response = client
        .post(format!("{}/invites/complete", BASE_URL))
        .json(&json!({ "token": invite_token, "password": "StrongP4ss!" }))
        .send()
        .await
        .expect("complete request failed");
    assert_eq!(response.status(), 200);

    // the consumed token is indistinguishable from one that never existed
    let response = client
        .post(format!("{}/invites/complete", BASE_URL))
        .json(&json!({ "token": invite_token, "password": "StrongP4ss!" }))
        .send()
        .await
        .expect("second complete request failed");
    assert_eq!(response.status(), 404);

    let response = client
        .get(format!("{}/invites/{}/verify", BASE_URL, invite_token))
        .send()
        .await
        .expect("second verify request failed");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn unauthenticated_requests_are_rejected() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/projects", BASE_URL))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), 401);

    let response = client
        .get(format!("{}/projects", BASE_URL))
        .bearer_auth("not.a.jwt")
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), 401);
}
