//! HTTP server rendering the site straight from the in-memory registry
//!
//! No files are read at request time: every page comes from the compiled-in
//! content table, so there is nothing to watch and nothing to reload.

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::generator::Generator;
use crate::templates::STYLESHEET;
use crate::Folio;

/// Server state
struct ServerState {
    generator: Generator,
    root: String,
}

/// Start the server
pub async fn start(folio: &Folio, ip: &str, port: u16, open: bool) -> Result<()> {
    let state = Arc::new(ServerState {
        generator: Generator::new(folio)?,
        root: folio.config.root.clone(),
    });

    // All page routing happens in the fallback: it normalizes trailing
    // slashes and degrades unknown paths to the generic not-found page.
    let app = Router::new().fallback(page_handler).with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Route a request path to a rendered page.
///
/// Path shape: `/`, `/blog`, `/blog/<category>`, `/blog/<category>/<slug>`,
/// with or without a trailing slash, plus the embedded stylesheet. The
/// category and slug segments are untrusted; unknown values degrade to an
/// empty listing or the not-found page, never an error.
async fn page_handler(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let path = uri.path();

    // Honor a configured site root prefix
    let root = state.root.trim_end_matches('/');
    let path = path.strip_prefix(root).unwrap_or(path);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => render(state.generator.render_home(), StatusCode::OK),
        ["css", "main.css"] => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
            STYLESHEET,
        )
            .into_response(),
        ["blog"] => render(state.generator.render_blog_index(), StatusCode::OK),
        ["blog", category] => {
            // Unknown categories render as an empty listing (200)
            render(state.generator.render_category(category), StatusCode::OK)
        }
        ["blog", category, slug] => match state.generator.render_post(category, slug) {
            Ok(Some(html)) => Html(html).into_response(),
            Ok(None) => render(state.generator.render_not_found(), StatusCode::NOT_FOUND),
            Err(e) => internal_error(e),
        },
        _ => render(state.generator.render_not_found(), StatusCode::NOT_FOUND),
    }
}

fn render(result: Result<String>, status: StatusCode) -> Response {
    match result {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => internal_error(e),
    }
}

fn internal_error(e: anyhow::Error) -> Response {
    tracing::error!("Render error: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
