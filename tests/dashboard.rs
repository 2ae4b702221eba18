use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use checklist::{start_dashboard, DashboardConfig, DashboardHandle};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dashboard_config(upstream: &MockServer, rules_path: Option<PathBuf>) -> DashboardConfig {
    let url = Url::parse(&format!("{}/applicant", upstream.uri())).expect("upstream url");
    let mut config = DashboardConfig::new(url);
    config.bind_host = "127.0.0.1".into();
    config.port = 0;
    config.fetch_timeout = Duration::from_secs(2);
    config.rules_path = rules_path;
    config
}

async fn mount_applicant(upstream: &MockServer, applicant: Value) {
    Mock::given(method("GET"))
        .and(path("/applicant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(applicant))
        .mount(upstream)
        .await;
}

async fn start(upstream: &MockServer) -> anyhow::Result<DashboardHandle> {
    start_dashboard(dashboard_config(upstream, None)).await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dashboard_renders_upstream_applicant() -> anyhow::Result<()> {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/applicant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isValuationFeePaid": true,
            "isUkResident": true,
            "riskRating": "Medium",
            "loanRequired": 50,
            "purchasePrice": 100
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let dashboard = start(&upstream).await?;
    let response = reqwest::get(dashboard.url()).await?;
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await?;
    assert!(html.contains("4 of 4 checks passed"));
    for name in [
        "Valuation Fee Paid",
        "UK Resident",
        "Risk Rating Medium",
        "LTV Below 60%",
    ] {
        assert!(html.contains(name), "missing row for {name}");
    }

    dashboard.shutdown();
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn checklist_api_reports_mixed_outcomes() -> anyhow::Result<()> {
    let upstream = MockServer::start().await;
    mount_applicant(
        &upstream,
        json!({
            "isValuationFeePaid": false,
            "isUkResident": true,
            "riskRating": "Low",
            "loanRequired": 90,
            "purchasePrice": 100
        }),
    )
    .await;

    let dashboard = start(&upstream).await?;
    let body: Value = reqwest::get(format!("{}/api/checklist", dashboard.url()))
        .await?
        .json()
        .await?;

    assert_eq!(
        body["results"],
        json!([
            {"ruleName": "Valuation Fee Paid", "status": "Failed"},
            {"ruleName": "UK Resident", "status": "Passed"},
            {"ruleName": "Risk Rating Medium", "status": "Failed"},
            {"ruleName": "LTV Below 60%", "status": "Failed"}
        ])
    );
    assert_eq!(body["summary"], json!({"passed": 1, "failed": 3, "total": 4}));

    dashboard.shutdown();
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn every_request_fetches_fresh_data() -> anyhow::Result<()> {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/applicant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"riskRating": "Medium"})))
        .expect(2)
        .mount(&upstream)
        .await;

    let dashboard = start(&upstream).await?;
    for _ in 0..2 {
        let response = reqwest::get(dashboard.url()).await?;
        assert_eq!(response.status().as_u16(), 200);
    }

    dashboard.shutdown();
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn upstream_failure_renders_generic_error() -> anyhow::Result<()> {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/applicant"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let dashboard = start(&upstream).await?;

    let page = reqwest::get(dashboard.url()).await?;
    assert_eq!(page.status().as_u16(), 500);
    assert_eq!(page.text().await?, "Error generating dashboard.");

    let api = reqwest::get(format!("{}/api/checklist", dashboard.url())).await?;
    assert_eq!(api.status().as_u16(), 502);
    let body: Value = api.json().await?;
    assert_eq!(body["code"], "fetch_failed");

    dashboard.shutdown();
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rules_file_replaces_built_in_checklist() -> anyhow::Result<()> {
    let upstream = MockServer::start().await;
    mount_applicant(
        &upstream,
        json!({"isUkResident": true, "loanRequired": 70, "purchasePrice": 100}),
    )
    .await;

    let dir = tempfile::tempdir()?;
    let rules_path = dir.path().join("rules.yaml");
    let mut file = std::fs::File::create(&rules_path)?;
    file.write_all(
        br#"
rules:
  - name: UK Resident
    condition:
      type: is_true
      field: isUkResident
  - name: LTV Below 75%
    condition:
      type: ratio_below
      numerator: loanRequired
      denominator: purchasePrice
      percent: 75
"#,
    )?;

    let dashboard = start_dashboard(dashboard_config(&upstream, Some(rules_path))).await?;

    let rules: Value = reqwest::get(format!("{}/api/rules", dashboard.url()))
        .await?
        .json()
        .await?;
    assert_eq!(rules.as_array().map(Vec::len), Some(2));

    let body: Value = reqwest::get(format!("{}/api/checklist", dashboard.url()))
        .await?
        .json()
        .await?;
    assert_eq!(body["summary"], json!({"passed": 2, "failed": 0, "total": 2}));
    assert_eq!(body["results"][1]["ruleName"], "LTV Below 75%");

    dashboard.shutdown();
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn evaluate_endpoint_skips_the_upstream() -> anyhow::Result<()> {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let dashboard = start(&upstream).await?;
    let body: Value = reqwest::Client::new()
        .post(format!("{}/api/evaluate", dashboard.url()))
        .json(&json!({
            "isValuationFeePaid": true,
            "isUkResident": true,
            "riskRating": "Medium",
            "loanRequired": 60,
            "purchasePrice": 100
        }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(body["results"][3]["status"], "Failed");
    assert_eq!(body["summary"]["passed"], 3);

    let health: Value = reqwest::get(format!("{}/healthz", dashboard.url()))
        .await?
        .json()
        .await?;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["rules"], 4);

    dashboard.shutdown();
    Ok(())
}
