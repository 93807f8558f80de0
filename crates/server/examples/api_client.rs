//! Examples for calling the matching orchestration core's HTTP API.

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8080";
const API_KEY: &str = "demo-key-12345";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("2. Match a candidate against a few offers:");
    let resp = client
        .post(format!("{SERVER_URL}/match"))
        .header("X-API-Key", API_KEY)
        .json(&json!({
            "candidate": {
                "id": "cand-demo-1",
                "skills": [
                    {"name": "rust", "years": 4.0},
                    {"name": "distributed-systems", "years": 2.0}
                ],
                "experiences": [],
                "education": [],
                "certifications": [],
                "projects": [],
                "location": {"city": "Paris", "country": "FR"}
            },
            "offers": [
                {
                    "id": "offer-1",
                    "title": "Backend Engineer",
                    "required_skills": ["rust"],
                    "preferred_skills": ["distributed-systems"],
                    "experience": {"min": 2},
                    "location": {"city": "Paris", "country": "FR"},
                    "remote_policy": "hybrid"
                }
            ],
            "config": {}
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("3. Per-algorithm health detail:");
    let resp = client
        .get(format!("{SERVER_URL}/api/v2/health"))
        .header("X-API-Key", API_KEY)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("4. Force the smart algorithm's circuit open:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v2/admin/circuit/smart/open"))
        .header("X-API-Key", API_KEY)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("5. Start an A/B test between nexten and enhanced:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v2/admin/ab-test/start"))
        .header("X-API-Key", API_KEY)
        .json(&json!({
            "name": "nexten-vs-enhanced",
            "arm_a": "nexten",
            "arm_b": "enhanced",
            "split": 0.5
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("6. Effective configuration:");
    let resp = client
        .get(format!("{SERVER_URL}/config"))
        .header("X-API-Key", API_KEY)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("7. Prometheus metrics:");
    let resp = client.get(format!("{SERVER_URL}/metrics")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("All examples completed!");
    Ok(())
}
