//! AWS Lambda handler exposing the retirement calculators as a JSON API
//!
//! Routes map one-to-one onto the library surface: growth projections
//! (single and batch), the standalone calculators, annuity quotes, and the
//! contribution limit tables.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::{Datelike, Utc};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use retirement_calc::annuity::PayoutTiming;
use retirement_calc::constants::{AgeBandLimit, PayoutOption};
use retirement_calc::{GrowthProjection, Planner, SaverProfile};

/// Inputs for a single growth projection
#[derive(Debug, Deserialize)]
struct ProjectRequest {
    #[serde(default = "default_current_age")]
    current_age: u8,

    #[serde(default = "default_retirement_age")]
    retirement_age: u8,

    #[serde(default)]
    salary: f64,

    #[serde(default)]
    contribution_percent: f64,

    #[serde(default)]
    current_balance: f64,

    #[serde(default)]
    employer_match_percent: f64,

    #[serde(default = "default_match_limit")]
    employer_match_limit: f64,

    #[serde(default = "default_expected_return")]
    expected_return: f64,
}

/// Inputs for a batch of growth projections
#[derive(Debug, Deserialize)]
struct ProjectBatchRequest {
    #[serde(default)]
    savers: Vec<SaverProfile>,
}

#[derive(Debug, Deserialize)]
struct MatchRequest {
    #[serde(default)]
    salary: f64,

    #[serde(default)]
    contribution_percent: f64,

    #[serde(default)]
    employer_match_percent: f64,

    #[serde(default = "default_match_limit")]
    employer_match_limit: f64,
}

#[derive(Debug, Deserialize)]
struct RothRequest {
    #[serde(default)]
    annual_contribution: f64,

    #[serde(default)]
    years_to_retirement: u32,

    #[serde(default = "default_expected_return")]
    expected_return: f64,

    #[serde(default = "default_current_tax_rate")]
    current_tax_rate: f64,

    #[serde(default = "default_retirement_tax_rate")]
    retirement_tax_rate: f64,
}

#[derive(Debug, Deserialize)]
struct WithdrawalRequest {
    #[serde(default)]
    amount: f64,

    #[serde(default = "default_withdrawal_age")]
    age: f64,

    #[serde(default = "default_current_tax_rate")]
    federal_tax_rate: f64,

    #[serde(default)]
    state_tax_rate: f64,
}

#[derive(Debug, Deserialize)]
struct CatchUpRequest {
    #[serde(default = "default_catch_up_age")]
    age: u8,

    #[serde(default = "default_retirement_age")]
    retirement_age: u8,

    #[serde(default = "default_expected_return")]
    expected_return: f64,
}

#[derive(Debug, Deserialize)]
struct AnnuityRequest {
    #[serde(default = "default_principal")]
    principal: f64,

    #[serde(default = "default_annuity_rate")]
    rate: f64,

    #[serde(default = "default_deferral_years")]
    years: u32,

    #[serde(default = "default_payout_years")]
    payout_years: u32,

    #[serde(default = "default_timing")]
    timing: PayoutTiming,

    /// Optional payout option; when set, the quote is adjusted by its factor
    #[serde(default)]
    payout_option: Option<PayoutOption>,
}

#[derive(Debug, Deserialize)]
struct AnnuityCompareRequest {
    #[serde(default = "default_principal")]
    principal: f64,

    #[serde(default = "default_deferral_years")]
    years: u32,

    #[serde(default = "default_payout_years")]
    payout_years: u32,
}

fn default_current_age() -> u8 {
    30
}
fn default_retirement_age() -> u8 {
    65
}
fn default_match_limit() -> f64 {
    6.0
}
fn default_expected_return() -> f64 {
    7.0
}
fn default_current_tax_rate() -> f64 {
    22.0
}
fn default_retirement_tax_rate() -> f64 {
    15.0
}
fn default_withdrawal_age() -> f64 {
    55.0
}
fn default_catch_up_age() -> u8 {
    55
}
fn default_principal() -> f64 {
    100_000.0
}
fn default_annuity_rate() -> f64 {
    5.5
}
fn default_deferral_years() -> u32 {
    10
}
fn default_payout_years() -> u32 {
    25
}
fn default_timing() -> PayoutTiming {
    PayoutTiming::Deferred
}

#[derive(Debug, Serialize)]
struct ProjectResponse {
    projection: GrowthProjection,
    execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ProjectBatchResponse {
    saver_count: usize,
    projections: Vec<GrowthProjection>,
    execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct LimitsResponse {
    year: i32,
    bands: Vec<AgeBandLimit>,
    total_additions: f64,
    compensation: f64,
    penalty_free_age: f64,
    required_min_distribution: u8,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, Box<Response<Body>>> {
    serde_json::from_str(body)
        .map_err(|e| Box::new(error_response(400, &format!("Invalid JSON: {}", e))))
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let method = event.method().as_str().to_string();
    let path = event.uri().path().to_string();
    log::info!("{} {}", method, path);

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let planner = Planner::new().with_base_year(Utc::now().year());

    let response = match (method.as_str(), path.as_str()) {
        ("POST", "/project") => project_route(&planner, &body_str),
        ("POST", "/project/batch") => project_batch_route(&planner, &body_str),
        ("POST", "/employer-match") => match_route(&planner, &body_str),
        ("POST", "/roth-vs-traditional") => roth_route(&planner, &body_str),
        ("POST", "/withdrawal") => withdrawal_route(&planner, &body_str),
        ("POST", "/catch-up") => catch_up_route(&planner, &body_str),
        ("POST", "/annuity") => annuity_route(&planner, &body_str),
        ("POST", "/annuity/compare") => annuity_compare_route(&planner, &body_str),
        ("GET", "/limits") => limits_route(&planner),
        _ => error_response(404, &format!("No route for {} {}", method, path)),
    };

    Ok(response)
}

fn project_route(planner: &Planner, body: &str) -> Response<Body> {
    let start = std::time::Instant::now();
    let request: ProjectRequest = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return *resp,
    };

    let profile = SaverProfile::new(
        0,
        request.current_age,
        request.retirement_age,
        request.salary,
        request.contribution_percent,
        request.current_balance,
        request.employer_match_percent,
        request.employer_match_limit,
        request.expected_return,
    );

    let response = ProjectResponse {
        projection: planner.project(&profile),
        execution_time_ms: start.elapsed().as_millis() as u64,
    };
    json_response(&response)
}

fn project_batch_route(planner: &Planner, body: &str) -> Response<Body> {
    let start = std::time::Instant::now();
    let request: ProjectBatchRequest = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return *resp,
    };

    let projections = planner.project_batch(&request.savers);
    let response = ProjectBatchResponse {
        saver_count: projections.len(),
        projections,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };
    json_response(&response)
}

fn match_route(planner: &Planner, body: &str) -> Response<Body> {
    let request: MatchRequest = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return *resp,
    };

    json_response(&planner.employer_match(
        request.salary,
        request.contribution_percent,
        request.employer_match_percent,
        request.employer_match_limit,
    ))
}

fn roth_route(planner: &Planner, body: &str) -> Response<Body> {
    let request: RothRequest = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return *resp,
    };

    json_response(&planner.roth_vs_traditional(
        request.annual_contribution,
        request.years_to_retirement,
        request.expected_return,
        request.current_tax_rate,
        request.retirement_tax_rate,
    ))
}

fn withdrawal_route(planner: &Planner, body: &str) -> Response<Body> {
    let request: WithdrawalRequest = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return *resp,
    };

    json_response(&planner.withdrawal(
        request.amount,
        request.age,
        request.federal_tax_rate,
        request.state_tax_rate,
    ))
}

fn catch_up_route(planner: &Planner, body: &str) -> Response<Body> {
    let request: CatchUpRequest = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return *resp,
    };

    let years = request.retirement_age.saturating_sub(request.age) as u32;
    json_response(&planner.catch_up(request.age, years, request.expected_return))
}

fn annuity_route(planner: &Planner, body: &str) -> Response<Body> {
    let request: AnnuityRequest = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return *resp,
    };

    match request.payout_option {
        Some(option) => json_response(&planner.annuity_payout(
            request.principal,
            request.rate,
            request.payout_years,
            option,
        )),
        None => json_response(&planner.annuity(
            request.principal,
            request.rate,
            request.years,
            request.payout_years,
            request.timing,
        )),
    }
}

fn annuity_compare_route(planner: &Planner, body: &str) -> Response<Body> {
    let request: AnnuityCompareRequest = match parse_body(body) {
        Ok(r) => r,
        Err(resp) => return *resp,
    };

    json_response(&planner.annuity_comparison(
        request.principal,
        request.years,
        request.payout_years,
    ))
}

fn limits_route(planner: &Planner) -> Response<Body> {
    let constants = planner.constants();
    let response = LimitsResponse {
        year: constants.year,
        bands: planner.limit_bands(),
        total_additions: constants.contribution_limits.total_additions,
        compensation: constants.contribution_limits.compensation,
        penalty_free_age: constants.early_withdrawal.penalty_free_age,
        required_min_distribution: constants.age_thresholds.required_min_distribution,
    };
    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
