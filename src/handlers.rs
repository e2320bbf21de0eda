use crate::errors::AppError;
use crate::grid::{date_key, month_grid, parse_date_key, YearMonth};
use crate::models::{
    DayResponse, IndexBootstrap, MonthDay, MonthQuery, MonthResponse, StatsResponse, TagRequest,
    TodayResponse,
};
use crate::state::AppState;
use crate::stats::{compute_month_stats, compute_stats, week_flags};
use crate::storage::persist_data;
use crate::tags;
use crate::ui::{mood_emoji, month_name, month_name_short, render_index};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Datelike, Local};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = Local::now().date_naive();
    let bootstrap = IndexBootstrap {
        today: date_key(today),
        year: today.year(),
        month: today.month(),
        tags: state.tags.tags.clone(),
    };
    let payload = serde_json::to_string(&bootstrap).unwrap_or_else(|_| "{}".to_string());
    Html(render_index(&payload))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let today = Local::now().date_naive();
    let key = date_key(today);
    let data = state.data.lock().await;
    let tag = data.days.get(&key).cloned();

    Ok(Json(TodayResponse {
        key,
        year: today.year(),
        month: today.month(),
        day: today.day(),
        tag,
    }))
}

pub async fn get_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthResponse>, AppError> {
    let today = Local::now().date_naive();
    let ym = YearMonth::normalize(
        query.year.unwrap_or_else(|| today.year()),
        query.month.unwrap_or_else(|| today.month() as i32),
    );

    let data = state.data.lock().await;
    let cells = month_grid(ym);
    let days = cells
        .iter()
        .map(|cell| MonthDay {
            key: cell.key.clone(),
            year: cell.date.year(),
            month: cell.date.month(),
            day: cell.date.day(),
            in_current_month: cell.in_current_month,
            tag: data.days.get(&cell.key).cloned(),
        })
        .collect();
    let weeks = week_flags(&cells, &data.days, &state.tags);
    let stats = compute_month_stats(&data.days, &state.tags, ym);

    Ok(Json(MonthResponse {
        year: ym.year,
        month: ym.month,
        month_name: month_name(ym.month).to_string(),
        month_name_short: month_name_short(ym.month).to_string(),
        days,
        weeks,
        stats,
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    let stats = compute_stats(&data.days, &state.tags);
    let mood = mood_emoji(
        stats
            .categories
            .get(tags::HEALTHY)
            .map_or(0, |cat| cat.percentage),
    );

    Ok(Json(StatsResponse {
        stats,
        mood: mood.to_string(),
    }))
}

pub async fn set_day(
    State(state): State<AppState>,
    Json(payload): Json<TagRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let Some(date) = parse_date_key(payload.key.trim()) else {
        return Err(AppError::bad_request("key must be a YYYY-MM-DD date"));
    };
    // Re-encode so sloppy-but-parsable keys land in canonical form.
    let key = date_key(date);

    let tag = match payload.tag.as_deref().map(str::trim) {
        Some("") => return Err(AppError::bad_request("tag must not be empty")),
        Some(tag) if !state.tags.known(tag) => {
            return Err(AppError::bad_request(format!("unknown tag: {tag}")));
        }
        Some(tag) => Some(tag.to_string()),
        None => None,
    };

    let mut data = state.data.lock().await;
    match &tag {
        Some(tag) => {
            data.days.insert(key.clone(), tag.clone());
        }
        None => {
            data.days.remove(&key);
        }
    }

    persist_data(&state.data_path, &data).await?;

    Ok(Json(DayResponse { key, tag }))
}
