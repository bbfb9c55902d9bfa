//! Integration tests for the GridAI backend.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::ai::{GenAi, GenAiDisabled};
use crate::config::Config;
use crate::errors::AppError;
use crate::session::SessionStore;
use crate::{create_router, store, AppState};

/// Scripted generation gateway so tests never leave the process.
struct FakeGenAi;

#[async_trait]
impl GenAi for FakeGenAi {
    async fn generate_text(
        &self,
        _model: &str,
        _prompt: &str,
        _attachment: Option<&str>,
    ) -> Result<String, AppError> {
        Ok("Sure! Here is a draft.".to_string())
    }

    async fn generate_json(
        &self,
        _model: &str,
        _prompt: &str,
    ) -> Result<Value, AppError> {
        Ok(json!({
            "insights": "Scribe is the most used tool.",
            "recommendations": "Assign Scribe to the Sales department."
        }))
    }

    async fn generate_image(&self, _model: &str, _prompt: &str) -> Result<String, AppError> {
        Ok("data:image/png;base64,iVBORw0KGgo=".to_string())
    }

    async fn generate_speech(
        &self,
        _model: &str,
        _voice: &str,
        _prompt: &str,
    ) -> Result<Vec<u8>, AppError> {
        Ok(vec![0u8; 64])
    }
}

fn test_config() -> Config {
    Config {
        gemini_api_key: None,
        gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        log_level: "warn".to_string(),
        seed: true,
    }
}

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_genai(Arc::new(FakeGenAi)).await
    }

    async fn with_genai(genai: Arc<dyn GenAi>) -> Self {
        let state = AppState {
            store: Arc::new(store::seed_store()),
            sessions: Arc::new(SessionStore::new()),
            genai,
            config: Arc::new(test_config()),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in by email and return the session token.
    async fn login(&self, email: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({ "email": email }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "login failed for {}", email);
        let body: Value = resp.json().await.unwrap();
        body["data"]["token"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_login_success() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "email": "eve@gridai.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["name"], "Eve Employee");
    assert_eq!(body["data"]["user"]["role"], "employee");
    assert!(body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "email": "unknown@x.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    // The failed attempt left the user collection unchanged.
    let admin = fixture.login("alice@gridai.com").await;
    let users: Value = fixture
        .client
        .get(fixture.url("/api/users"))
        .header("x-session-token", &admin)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_login_is_case_sensitive() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "email": "EVE@gridai.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_missing_token_unauthorized() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/tools"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_token_unauthorized() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/tools"))
        .header("x-session-token", "not-a-session")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_bearer_token_accepted() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let resp = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/logout"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_employee_forbidden_from_admin_section() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    for path in ["/api/users", "/api/logs", "/api/tools/all"] {
        let resp = fixture
            .client
            .get(fixture.url(path))
            .header("x-session-token", &token)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 403, "expected 403 for {}", path);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }
}

#[tokio::test]
async fn test_super_admin_sees_all_tools() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("alice@gridai.com").await;

    let body: Value = fixture
        .client
        .get(fixture.url("/api/tools"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Every seeded tool, including the inactive one.
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_employee_visibility() {
    let fixture = TestFixture::new().await;
    // Eve: Marketing employee with tool-3 assigned directly.
    let token = fixture.login("eve@gridai.com").await;

    let body: Value = fixture
        .client
        .get(fixture.url("/api/tools"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    // Active Marketing tools plus the direct assignment; no Sales-only
    // or inactive department tools.
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&"tool-1"));
    assert!(ids.contains(&"tool-2"));
    assert!(ids.contains(&"tool-3"));
}

#[tokio::test]
async fn test_department_admin_sees_inactive_department_tool() {
    let fixture = TestFixture::new().await;
    // Dana: Dev department admin; tool-5 is inactive but Dev-scoped.
    let token = fixture.login("dana@gridai.com").await;

    let body: Value = fixture
        .client
        .get(fixture.url("/api/tools"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"tool-5"));
}

#[tokio::test]
async fn test_launch_web_based_tool_writes_log() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/tools/tool-1/launch"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["target"], "external");
    assert_eq!(body["data"]["launchUrl"], "https://chat.openai.com");

    // The launch was recorded as the newest log entry.
    let admin = fixture.login("alice@gridai.com").await;
    let logs: Value = fixture
        .client
        .get(fixture.url("/api/logs"))
        .header("x-session-token", &admin)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let entries = logs["data"].as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["toolName"], "ChatGPT");
    assert_eq!(entries[0]["userName"], "Eve Employee");
    assert_eq!(entries[0]["department"], "Marketing");
}

#[tokio::test]
async fn test_launch_api_tool_targets_playground() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let body: Value = fixture
        .client
        .post(fixture.url("/api/tools/tool-3/launch"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["target"], "playground");
    assert_eq!(body["data"]["toolId"], "tool-3");
}

#[tokio::test]
async fn test_launch_inactive_tool_forbidden() {
    let fixture = TestFixture::new().await;
    // Dana can see the inactive tool-5 but must not be able to launch it.
    let token = fixture.login("dana@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/tools/tool-5/launch"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_launch_invisible_tool_not_found() {
    let fixture = TestFixture::new().await;
    // tool-4 is Sales-only; Eve is in Marketing.
    let token = fixture.login("eve@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/tools/tool-4/launch"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_profile_update_diverges_from_user_collection() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let resp = fixture
        .client
        .put(fixture.url("/api/auth/profile"))
        .header("x-session-token", &token)
        .json(&json!({
            "name": "Evelyn",
            "avatarUrl": "https://example.com/evelyn.png"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // The session copy reflects the edit.
    let me: Value = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me["data"]["name"], "Evelyn");
    assert_eq!(me["data"]["avatarUrl"], "https://example.com/evelyn.png");

    // The user collection still holds the old record.
    let admin = fixture.login("alice@gridai.com").await;
    let users: Value = fixture
        .client
        .get(fixture.url("/api/users"))
        .header("x-session-token", &admin)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let eve = users["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == "user-4")
        .unwrap();
    assert_eq!(eve["name"], "Eve Employee");
}

#[tokio::test]
async fn test_user_create_and_delete() {
    let fixture = TestFixture::new().await;
    let admin = fixture.login("alice@gridai.com").await;

    let created: Value = fixture
        .client
        .post(fixture.url("/api/users"))
        .header("x-session-token", &admin)
        .json(&json!({
            "name": "New Hire",
            "email": "hire@gridai.com",
            "department": "Dev",
            "role": "employee"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["assignedTools"].as_array().unwrap().len(), 0);
    assert_eq!(
        created["data"]["avatarUrl"],
        "https://avatar.vercel.sh/hire@gridai.com.png"
    );
    let id = created["data"]["id"].as_str().unwrap();

    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/users/{}", id)))
        .header("x-session-token", &admin)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let fixture = TestFixture::new().await;
    let admin = fixture.login("alice@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/users"))
        .header("x-session-token", &admin)
        .json(&json!({
            "name": "Eve Clone",
            "email": "eve@gridai.com",
            "department": "Marketing",
            "role": "employee"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_management_cannot_remove_super_admin() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("mark@gridai.com").await;

    let resp = fixture
        .client
        .delete(fixture.url("/api/users/user-1"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_management_cannot_assign_super_admin_role() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("mark@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/users"))
        .header("x-session-token", &token)
        .json(&json!({
            "name": "Sneaky",
            "email": "sneaky@gridai.com",
            "department": "Sales",
            "role": "super_admin"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_department_admin_user_listing_scoped() {
    let fixture = TestFixture::new().await;
    // Dana manages Dev employees only; the listing is those plus herself.
    let token = fixture.login("dana@gridai.com").await;

    let body: Value = fixture
        .client
        .get(fixture.url("/api/users"))
        .header("x-session-token", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["user-3"]);
}

#[tokio::test]
async fn test_tool_create_requires_super_admin() {
    let fixture = TestFixture::new().await;
    let dana = fixture.login("dana@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/tools"))
        .header("x-session-token", &dana)
        .json(&json!({
            "name": "NewTool",
            "description": "A perfectly valid description.",
            "iconUrl": "https://placehold.co/100x100.png",
            "type": "API-integrated",
            "category": "Text",
            "status": "active"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_tool_create_and_validation() {
    let fixture = TestFixture::new().await;
    let admin = fixture.login("alice@gridai.com").await;

    // Invalid: web-based tool without a launch URL.
    let resp = fixture
        .client
        .post(fixture.url("/api/tools"))
        .header("x-session-token", &admin)
        .json(&json!({
            "name": "LinkTool",
            "description": "Opens an external website.",
            "iconUrl": "https://placehold.co/100x100.png",
            "type": "Web-based",
            "category": "Web-based",
            "status": "active"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Valid.
    let resp = fixture
        .client
        .post(fixture.url("/api/tools"))
        .header("x-session-token", &admin)
        .json(&json!({
            "name": "LinkTool",
            "description": "Opens an external website.",
            "iconUrl": "https://placehold.co/100x100.png",
            "launchUrl": "https://example.com",
            "type": "Web-based",
            "category": "Web-based",
            "status": "active",
            "assignedDepartments": ["Dev"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["data"]["id"].is_string());
}

#[tokio::test]
async fn test_department_admin_tool_edit_scoped() {
    let fixture = TestFixture::new().await;
    let dana = fixture.login("dana@gridai.com").await;

    let edit = json!({
        "name": "Scribe",
        "description": "Generates reports, emails, and summaries.",
        "iconUrl": "https://placehold.co/100x100.png",
        "type": "API-integrated",
        "category": "Text",
        "status": "inactive",
        "assignedDepartments": ["Dev", "Marketing"]
    });

    // tool-2 is Dev-scoped: allowed.
    let resp = fixture
        .client
        .put(fixture.url("/api/tools/tool-2"))
        .header("x-session-token", &dana)
        .json(&edit)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // tool-4 is Sales-only: forbidden.
    let resp = fixture
        .client
        .put(fixture.url("/api/tools/tool-4"))
        .header("x-session-token", &dana)
        .json(&edit)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_logs_csv_export() {
    let fixture = TestFixture::new().await;
    let admin = fixture.login("alice@gridai.com").await;

    let resp = fixture
        .client
        .get(fixture.url("/api/logs/export"))
        .header("x-session-token", &admin)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let csv = resp.text().await.unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Tool Name,User,Department,Timestamp");
    // Header plus one row per seeded log.
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("Scribe,Dana Dev,Dev,"));
}

#[tokio::test]
async fn test_ai_playground_flow() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let body: Value = fixture
        .client
        .post(fixture.url("/api/ai/playground"))
        .header("x-session-token", &token)
        .json(&json!({ "prompt": "write a tagline", "toolName": "Scribe" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["response"], "Sure! Here is a draft.");
}

#[tokio::test]
async fn test_ai_audio_returns_wav_data_uri() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let body: Value = fixture
        .client
        .post(fixture.url("/api/ai/audio"))
        .header("x-session-token", &token)
        .json(&json!({ "prompt": "say hello" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let audio_url = body["data"]["audioUrl"].as_str().unwrap();
    assert!(audio_url.starts_with("data:audio/wav;base64,"));
}

#[tokio::test]
async fn test_tool_playground_dispatches_on_category() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    // tool-2 is a Text tool.
    let body: Value = fixture
        .client
        .post(fixture.url("/api/tools/tool-2/playground"))
        .header("x-session-token", &token)
        .json(&json!({ "prompt": "draft an email" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["role"], "assistant");
    assert_eq!(body["data"]["content"]["kind"], "text");

    // tool-3 is an Image tool.
    let body: Value = fixture
        .client
        .post(fixture.url("/api/tools/tool-3/playground"))
        .header("x-session-token", &token)
        .json(&json!({ "prompt": "a red bicycle" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["content"]["kind"], "image");
    assert!(body["data"]["content"]["imageUrl"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png"));
}

#[tokio::test]
async fn test_tool_playground_rejects_web_based() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/tools/tool-1/playground"))
        .header("x-session-token", &token)
        .json(&json!({ "prompt": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_insights_requires_admin_role() {
    let fixture = TestFixture::new().await;
    let token = fixture.login("eve@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/ai/insights"))
        .header("x-session-token", &token)
        .json(&json!({ "logs": "[]" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_insights_flow() {
    let fixture = TestFixture::new().await;
    let admin = fixture.login("alice@gridai.com").await;

    let body: Value = fixture
        .client
        .post(fixture.url("/api/ai/insights"))
        .header("x-session-token", &admin)
        .json(&json!({ "logs": "[{\"toolName\":\"Scribe\"}]" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["insights"], "Scribe is the most used tool.");
    assert!(body["data"]["recommendations"]
        .as_str()
        .unwrap()
        .contains("Sales"));
}

#[tokio::test]
async fn test_disabled_gateway_is_uniform_failure() {
    let fixture = TestFixture::with_genai(Arc::new(GenAiDisabled)).await;
    let token = fixture.login("eve@gridai.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/ai/image"))
        .header("x-session-token", &token)
        .json(&json!({ "prompt": "a sunset" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 502);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "AI_GENERATION_FAILED");
    assert_eq!(body["error"]["message"], "AI generation is not configured");
}
