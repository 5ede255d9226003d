//! Network smoke test for a running Lumis API.
//!
//! Exercises every public endpoint over HTTP and prints a summary.
//! Exits non-zero if any check fails.

use std::process::ExitCode;
use std::time::Duration;

use chrono::{Duration as DateDelta, Local};
use clap::Parser;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};

/// Smoke-test a deployed Lumis API.
#[derive(Parser, Debug)]
#[command(name = "lumis-smoke")]
#[command(version)]
struct Args {
    /// API root, including the /api segment.
    #[arg(long, env = "LUMIS_API_URL", default_value = "http://localhost:8001/api")]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "10")]
    timeout: u64,
}

type Validator = fn(&Value) -> Result<(), String>;

struct Outcome {
    name: String,
    method: Method,
    endpoint: String,
    passed: bool,
}

struct Tester {
    client: Client,
    base_url: String,
    results: Vec<Outcome>,
}

impl Tester {
    fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            results: Vec::new(),
        })
    }

    async fn run(
        &mut self,
        name: &str,
        method: Method,
        endpoint: &str,
        expected: StatusCode,
        body: Option<Value>,
        validate: Option<Validator>,
    ) -> Option<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        println!("\nTesting {name}...");
        println!("   URL: {url}");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let (passed, data) = match request.send().await {
            Ok(response) => {
                let status = response.status();
                let data = response.json::<Value>().await.unwrap_or(Value::Null);

                if status != expected {
                    println!("FAILED - Expected {expected}, got {status}");
                    println!("   Error: {data}");
                    (false, None)
                } else if let Some(Err(reason)) = validate.map(|v| v(&data)) {
                    println!("FAILED - Response validation failed: {reason}");
                    (false, None)
                } else {
                    println!("PASSED - Status: {status}");
                    match &data {
                        Value::Array(items) => {
                            println!("   Response: List with {} items", items.len())
                        }
                        Value::Object(_) => println!("   Response: object"),
                        _ => {}
                    }
                    (true, Some(data))
                }
            }
            Err(e) => {
                println!("FAILED - Error: {e}");
                (false, None)
            }
        };

        self.results.push(Outcome {
            name: name.to_string(),
            method,
            endpoint: endpoint.to_string(),
            passed,
        });
        data
    }

    async fn get(
        &mut self,
        name: &str,
        endpoint: &str,
        validate: Option<Validator>,
    ) -> Option<Value> {
        self.run(name, Method::GET, endpoint, StatusCode::OK, None, validate).await
    }

    fn summary(&self) -> bool {
        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.passed).count();

        println!("\n{}", "=".repeat(60));
        println!("TEST SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Total Tests: {total}");
        println!("Passed: {passed}");
        println!("Failed: {}", total - passed);
        if total > 0 {
            println!("Success Rate: {:.1}%", passed as f64 / total as f64 * 100.0);
        }

        if passed < total {
            println!("\nFAILED TESTS:");
            for r in self.results.iter().filter(|r| !r.passed) {
                println!("  - {} ({} {})", r.name, r.method, r.endpoint);
            }
        }

        passed == total
    }
}

fn non_empty_list_with(data: &Value, fields: &[&str]) -> Result<(), String> {
    let items = data.as_array().ok_or("expected a list")?;
    if items.is_empty() {
        return Err("list is empty".to_string());
    }
    for item in items {
        for field in fields {
            if item.get(field).is_none() {
                return Err(format!("missing field: {field}"));
            }
        }
    }
    Ok(())
}

fn validate_testimonials(data: &Value) -> Result<(), String> {
    non_empty_list_with(data, &["id", "name", "company", "role", "content", "rating"])
}

fn validate_case_studies(data: &Value) -> Result<(), String> {
    non_empty_list_with(
        data,
        &["id", "title", "company", "industry", "challenge", "solution", "results"],
    )
}

fn validate_blog_posts(data: &Value) -> Result<(), String> {
    non_empty_list_with(data, &["id", "title", "excerpt", "category", "author"])
}

fn validate_services(data: &Value) -> Result<(), String> {
    non_empty_list_with(data, &["id", "name", "description", "icon"])
}

fn validate_available_times(data: &Value) -> Result<(), String> {
    let times = data
        .get("times")
        .and_then(Value::as_array)
        .ok_or("missing times list")?;
    if times.len() == 9 {
        Ok(())
    } else {
        Err(format!("expected 9 slots, got {}", times.len()))
    }
}

fn validate_stored_record(data: &Value) -> Result<(), String> {
    for field in ["id", "created_at"] {
        match data.get(field).and_then(Value::as_str) {
            Some(v) if !v.is_empty() => {}
            _ => return Err(format!("missing generated field: {field}")),
        }
    }
    Ok(())
}

fn validate_pending(data: &Value) -> Result<(), String> {
    validate_stored_record(data)?;
    match data.get("status").and_then(Value::as_str) {
        Some("pending") => Ok(()),
        other => Err(format!("expected status pending, got {other:?}")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    println!("Starting Lumis API smoke test against {}", args.base_url);

    let mut tester = Tester::new(args.base_url, Duration::from_secs(args.timeout))?;

    println!("{}", "=".repeat(50));
    println!("TESTING GET ENDPOINTS");
    println!("{}", "=".repeat(50));
    tester.get("Get Testimonials", "testimonials", Some(validate_testimonials)).await;
    tester.get("Get Case Studies", "case-studies", Some(validate_case_studies)).await;
    tester.get("Get Blog Posts", "blog-posts", Some(validate_blog_posts)).await;
    tester.get("Get Services", "services", Some(validate_services)).await;
    tester
        .get("Get Available Times", "available-times", Some(validate_available_times))
        .await;

    println!("\n{}", "=".repeat(50));
    println!("TESTING POST ENDPOINTS");
    println!("{}", "=".repeat(50));
    let contact = json!({
        "name": "Test User",
        "email": "test@example.com",
        "phone": "+1234567890",
        "services": ["AI Agent Building", "Web Development"],
        "reason": "New Project Inquiry",
        "message": "This is a test message for contact form submission."
    });
    tester
        .run(
            "Submit Contact Form",
            Method::POST,
            "contact",
            StatusCode::OK,
            Some(contact),
            Some(validate_stored_record),
        )
        .await;

    let bad_contact = json!({
        "name": "Test User",
        "email": "not-an-email",
        "message": "Should be rejected."
    });
    tester
        .run(
            "Reject Invalid Email",
            Method::POST,
            "contact",
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(bad_contact),
            None,
        )
        .await;

    let tomorrow = (Local::now() + DateDelta::days(1)).format("%Y-%m-%d").to_string();
    let appointment = json!({
        "name": "Test Appointment User",
        "email": "appointment@example.com",
        "phone": "+1234567890",
        "date": tomorrow,
        "time": "10:00 AM",
        "services": ["DevOps & Cloud", "Database Solutions"],
        "reason": "Technical Consultation",
        "message": "This is a test appointment booking."
    });
    tester
        .run(
            "Book Appointment",
            Method::POST,
            "appointments",
            StatusCode::OK,
            Some(appointment),
            Some(validate_pending),
        )
        .await;

    println!("\n{}", "=".repeat(50));
    println!("TESTING INDIVIDUAL CASE STUDY");
    println!("{}", "=".repeat(50));
    let first_id = tester
        .get("Get Case Studies for ID", "case-studies", None)
        .await
        .and_then(|list| list.get(0)?.get("id")?.as_str().map(str::to_string));

    match first_id {
        Some(id) => {
            tester
                .get(&format!("Get Case Study {id}"), &format!("case-studies/{id}"), None)
                .await;
        }
        None => println!("Cannot test individual case study - no case studies available"),
    }
    tester
        .run(
            "Unknown Case Study",
            Method::GET,
            "case-studies/does-not-exist",
            StatusCode::NOT_FOUND,
            None,
            None,
        )
        .await;

    Ok(if tester.summary() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
