use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::bets::{self, Bet};
use crate::component::ComponentError;
use crate::sink::{DisplaySink, HtmlPage};
use crate::state::AppState;
use crate::trades::{self, aggregate_trades, Trade, TradeMetrics};
use crate::view;
use crate::web;

type S = Arc<AppState>;

pub fn build_router(state: S) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/bets/{id}", get(bet_page))
        .route("/trades", get(trades_page))
        .route("/api/bets", get(api_bets))
        .route("/api/bets/{id}", get(api_bet))
        .route("/api/categories", get(api_categories))
        .route("/api/trades", get(api_trades))
        .route("/api/trade-metrics", get(api_trade_metrics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct CategoryFilter {
    category: Option<String>,
}

impl CategoryFilter {
    fn selected(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| *c != "All")
    }
}

fn filtered_bets<'a>(state: &'a AppState, selected: Option<&str>) -> Vec<&'a Bet> {
    state
        .bets
        .iter()
        .filter(|b| selected.map_or(true, |c| b.category == c))
        .collect()
}

// ── Pages ───────────────────────────────────────────────────────────────────

async fn dashboard_page(
    State(state): State<S>,
    Query(filter): Query<CategoryFilter>,
) -> Html<String> {
    let selected = filter.selected();
    let bets = filtered_bets(&state, selected);
    let mut page = HtmlPage::new();
    page.widget(web::render_bet_grid(&bets, &bets::bet_categories(), selected));
    Html(page.into_document("AirBets"))
}

async fn bet_page(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let bet = state
        .bet(&id)
        .ok_or((StatusCode::NOT_FOUND, format!("no such bet: {id}")))?;

    let mut page = HtmlPage::new();
    page.widget(web::render_back_link());
    view::display_bet_summary(&state.components, &mut page, bet).map_err(render_error)?;
    Ok(Html(page.into_document(&bet.bet_name)))
}

async fn trades_page(State(state): State<S>) -> Html<String> {
    let trades = trades::user_trades(&state.config.default_user);
    let mut page = HtmlPage::new();
    view::display_trade_summary(&mut page, &trades);
    Html(page.into_document("Profile & Trade Summary"))
}

fn render_error(err: ComponentError) -> (StatusCode, String) {
    tracing::error!(error = %err, "component render failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "component render failed".to_string(),
    )
}

// ── JSON API ────────────────────────────────────────────────────────────────

async fn api_bets(
    State(state): State<S>,
    Query(filter): Query<CategoryFilter>,
) -> Json<Vec<Bet>> {
    let bets = filtered_bets(&state, filter.selected())
        .into_iter()
        .cloned()
        .collect();
    Json(bets)
}

async fn api_bet(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Bet>, (StatusCode, String)> {
    state
        .bet(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("no such bet: {id}")))
}

async fn api_categories() -> Json<Vec<String>> {
    Json(bets::bet_categories())
}

async fn api_trades(State(state): State<S>) -> Json<Vec<Trade>> {
    Json(trades::user_trades(&state.config.default_user))
}

async fn api_trade_metrics(State(state): State<S>) -> Json<TradeMetrics> {
    let trades = trades::user_trades(&state.config.default_user);
    Json(aggregate_trades(&trades))
}
