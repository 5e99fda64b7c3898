use anyhow::Context;
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use sofa_box_planner::guillotine::ScoreStrategy;
use sofa_box_planner::render::PanelRenderer;
use sofa_box_planner::svg::SvgRenderer;
use sofa_box_planner::{BoxConfig, CutPlan, GuillotinePacker};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize, Default)]
struct PlanRequest {
    #[serde(default)]
    config: BoxConfig,
    #[serde(default)]
    strategy: Option<ScoreStrategy>,
}

#[derive(Serialize)]
struct PlanResponse {
    feasible: bool,
    plan: CutPlan,
    utilization_percent: Option<f64>,
    svg: Option<String>,
}

async fn plan(
    Json(req): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /plan"
    );

    let strategy = req.strategy.unwrap_or_default();
    let plan = CutPlan::build(&req.config, &GuillotinePacker::new(strategy));
    let svg = plan
        .outcome
        .placements()
        .map(|placements| SvgRenderer::default().render(plan.bin, placements));

    Ok(Json(PlanResponse {
        feasible: plan.is_feasible(),
        utilization_percent: plan.utilization_percent(),
        svg,
        plan,
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .context("failed to open development.log")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/plan", post(plan))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
