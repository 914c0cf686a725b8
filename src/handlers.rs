use crate::counter::{self, CounterStore};
use crate::errors::AppError;
use crate::models::{CounterResponse, HistoryResponse, TodayResponse};
use crate::state::AppState;
use crate::storage::{persist_store, MemoryStore};
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = counter::today();
    let mut counter = state.counter.lock().await;
    if counter.check_and_rollover_if_new_day(today) {
        persist_store(&state.data_path, counter.storage()).await?;
    }
    let recorded = counter.today_count_at(today);
    Ok(Html(render_index(
        &today.to_string(),
        counter.count(),
        counter.phrase(),
        recorded,
    )))
}

pub async fn get_counter(
    State(state): State<AppState>,
) -> Result<Json<CounterResponse>, AppError> {
    let today = counter::today();
    let mut counter = state.counter.lock().await;
    if counter.check_and_rollover_if_new_day(today) {
        persist_store(&state.data_path, counter.storage()).await?;
    }
    Ok(Json(snapshot(today, &counter)))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let today = counter::today();
    let counter = state.counter.lock().await;
    Ok(Json(TodayResponse {
        date: today.to_string(),
        count: counter.today_count_at(today),
    }))
}

pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let counter = state.counter.lock().await;
    Ok(Json(HistoryResponse {
        entries: counter.entries(),
    }))
}

pub async fn tap(State(state): State<AppState>) -> Result<Json<CounterResponse>, AppError> {
    let response = apply_tap(&state).await?;
    Ok(Json(response))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<CounterResponse>, AppError> {
    let response = apply_reset(&state).await?;
    Ok(Json(response))
}

pub async fn tap_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_tap(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_reset(&state).await?;
    Ok(Redirect::to("/"))
}

async fn apply_tap(state: &AppState) -> Result<CounterResponse, AppError> {
    let today = counter::today();
    let mut counter = state.counter.lock().await;
    counter.check_and_rollover_if_new_day(today);
    counter.increment_at(today);
    persist_store(&state.data_path, counter.storage()).await?;
    Ok(snapshot(today, &counter))
}

async fn apply_reset(state: &AppState) -> Result<CounterResponse, AppError> {
    let today = counter::today();
    let mut counter = state.counter.lock().await;
    counter.check_and_rollover_if_new_day(today);
    counter.reset_at(today);
    persist_store(&state.data_path, counter.storage()).await?;
    Ok(snapshot(today, &counter))
}

fn snapshot(today: NaiveDate, counter: &CounterStore<MemoryStore>) -> CounterResponse {
    CounterResponse {
        date: today.to_string(),
        count: counter.count(),
        phrase: counter.phrase().to_string(),
        phrase_index: counter.phrase_index(),
    }
}
