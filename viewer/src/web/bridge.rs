use crate::archive::{archive_name, build_archive};
use crate::catalog::{Catalog, UnknownAirfoil};
use crate::web::model::{ErrorBody, PlotTrace, Selection};
use airfoilcore::telemetry::MetricsRecorder;
use airfoilcore::{Airfoil, ExportOptions, OutputFormat};
use anyhow::Context;
use log::{error, info, warn};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Shared, read-mostly state behind every route.
pub struct ViewerState {
    pub catalog: Catalog,
    pub metrics: MetricsRecorder,
}

impl ViewerState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            metrics: MetricsRecorder::new(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum RouteError {
    #[error(transparent)]
    Unknown(#[from] UnknownAirfoil),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0:#}")]
    Failed(anyhow::Error),
}

impl From<anyhow::Error> for RouteError {
    fn from(err: anyhow::Error) -> Self {
        RouteError::Failed(err)
    }
}

impl RouteError {
    fn status(&self) -> StatusCode {
        match self {
            RouteError::Unknown(_) => StatusCode::NOT_FOUND,
            RouteError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RouteError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// All viewer routes: the page, the catalog, plot data, archives and status.
pub fn routes(
    state: Arc<ViewerState>,
) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());

    let index_route = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML));

    let list_route = warp::path("airfoils")
        .and(warp::path::end())
        .and(warp::get())
        .and(state_filter.clone())
        .map(|state: Arc<ViewerState>| warp::reply::json(&state.catalog.entries()));

    let plot_route = warp::path("plot")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<Selection>())
        .and(state_filter.clone())
        .map(|selection: Selection, state: Arc<ViewerState>| {
            respond(&state, plot(&state, &selection))
        });

    let download_route = warp::path!("download" / String)
        .and(warp::get())
        .and(warp::query::<Selection>())
        .and(state_filter.clone())
        .map(|kind: String, selection: Selection, state: Arc<ViewerState>| {
            respond(&state, download(&state, &kind, &selection))
        });

    let status_route = warp::path("status")
        .and(warp::path::end())
        .and(warp::get())
        .and(state_filter)
        .map(|state: Arc<ViewerState>| warp::reply::json(&state.metrics.snapshot()));

    index_route
        .or(list_route)
        .or(plot_route)
        .or(download_route)
        .or(status_route)
}

fn plot(state: &ViewerState, selection: &Selection) -> Result<Response, RouteError> {
    let entries = state.catalog.resolve(&selection.names())?;
    let traces = entries
        .iter()
        .map(|entry| -> anyhow::Result<PlotTrace> {
            let airfoil = Airfoil::from_path(&entry.path)
                .with_context(|| format!("reading {}", entry.path.display()))?;
            Ok(PlotTrace::new(&entry.name, &airfoil))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(warp::reply::json(&traces).into_response())
}

fn download(state: &ViewerState, kind: &str, selection: &Selection) -> Result<Response, RouteError> {
    let format = match kind {
        "svg" => OutputFormat::Svg,
        "dxf" => OutputFormat::Dxf,
        other => return Err(RouteError::BadRequest(format!("cannot download '{}'", other))),
    };
    if !selection.size.is_finite() || selection.size <= 0.0 {
        return Err(RouteError::BadRequest(format!(
            "size must be positive, got {}",
            selection.size
        )));
    }

    let entries = state.catalog.resolve(&selection.names())?;
    let options = ExportOptions {
        chord: Some(selection.size),
        ..Default::default()
    };
    let bytes = build_archive(&entries, format, &options, &state.metrics)?;
    info!("serving {} with {} airfoils", archive_name(format), entries.len());

    let reply = warp::reply::with_header(bytes, "content-type", "application/zip");
    let reply = warp::reply::with_header(
        reply,
        "content-disposition",
        format!("attachment; filename=\"{}\"", archive_name(format)),
    );
    Ok(reply.into_response())
}

fn respond(state: &ViewerState, result: Result<Response, RouteError>) -> Response {
    result.unwrap_or_else(|err| {
        let status = err.status();
        if status.is_server_error() {
            error!("request failed: {}", err);
            state.metrics.record_error();
        } else {
            warn!("rejected request: {}", err);
        }
        let body = ErrorBody {
            error: err.to_string(),
        };
        warp::reply::with_status(warp::reply::json(&body), status).into_response()
    })
}
