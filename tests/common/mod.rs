use serde_json::Value;
use std::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// GET with the profile headers the upstream gateway would set.
    pub async fn get_as(
        &self,
        path: &str,
        plan: Option<&str>,
        role: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self.client.get(format!("{}{}", self.address, path));
        if let Some(plan) = plan {
            request = request.header("x-user-plan", plan);
        }
        if let Some(role) = role {
            request = request.header("x-user-role", role);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_json(
        &self,
        path: &str,
        plan: Option<&str>,
        role: Option<&str>,
    ) -> (u16, Value) {
        let response = self.get_as(path, plan, role).await;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.expect("Response is not JSON");
        (status, body)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> (u16, Value) {
        let response = self
            .client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.");
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.expect("Response is not JSON");
        (status, body)
    }
}

pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let server = surveyguy::startup::run(listener).expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}
