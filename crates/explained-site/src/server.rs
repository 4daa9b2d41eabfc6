//! HTTP server.
//!
//! Every page is rendered on request from the embedded catalog; there is
//! no filesystem access after startup.

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use explained_core::{ConfigProvider, Error, Result};
use maud::html;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::assets::{self, Asset};
use crate::render::{self, layout};
use crate::route::{Resolution, Route};
use crate::state::SiteState;

/// Build the router over `state`.
pub fn router<C: ConfigProvider>(state: SiteState<C>) -> Router {
    Router::new()
        .route("/", get(home::<C>))
        .route("/topic/{slug}", get(topic::<C>))
        .route("/assets/{file}", get(asset))
        .fallback(fallback::<C>)
        .with_state(state)
}

/// Bind `host:port` and serve until the process is stopped.
pub async fn serve<C: ConfigProvider>(state: SiteState<C>, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::server(format!("failed to bind {addr}: {e}")))?;
    let local = listener.local_addr()?;
    info!(
        topics = state.store().len(),
        "Serving {} on http://{}",
        state.config().site_title(),
        local
    );

    axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::server(e.to_string()))
}

async fn home<C: ConfigProvider>(State(state): State<SiteState<C>>) -> Html<String> {
    let ctx = state.page_context();
    Html(render::home_page(&state.store(), &ctx).into_string())
}

async fn topic<C: ConfigProvider>(
    State(state): State<SiteState<C>>,
    Path(slug): Path<String>,
) -> Response {
    let store = state.store();
    match store.find(&slug) {
        Some(topic) => {
            let ctx = state.page_context();
            Html(render::topic_page(&store, topic, &ctx).into_string()).into_response()
        }
        None => {
            debug!(slug = %slug, "unknown topic, redirecting to root");
            Redirect::to("/").into_response()
        }
    }
}

async fn asset(Path(file): Path<String>) -> Response {
    match assets::find(&file) {
        Some(asset) => asset_response(asset),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Paths the typed routes miss: trailing slashes, `index.html` forms, and
/// anything unknown.
async fn fallback<C: ConfigProvider>(State(state): State<SiteState<C>>, uri: Uri) -> Response {
    let route = Route::parse(uri.path());
    match route.resolve(&state.store()) {
        Resolution::Home | Resolution::Topic(_) => match route.href() {
            Some(href) => Redirect::permanent(&href).into_response(),
            None => not_found(&state),
        },
        Resolution::Asset(asset) => asset_response(asset),
        Resolution::Redirect(to) => Redirect::to(&to).into_response(),
        Resolution::NotFound => {
            debug!(path = %uri.path(), "no route");
            not_found(&state)
        }
    }
}

fn asset_response(asset: &Asset) -> Response {
    ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response()
}

fn not_found<C: ConfigProvider>(state: &SiteState<C>) -> Response {
    let ctx = state.page_context();
    let main = html! {
        section.not-found {
            h1 { "Page not found" }
            p { "There is no page at this address." }
            a.button.button-primary href="/" { "Back to home" }
        }
    };
    let page = layout::page(&state.store(), &ctx, "Page not found", None, main);
    (StatusCode::NOT_FOUND, Html(page.into_string())).into_response()
}
