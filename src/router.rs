use crate::api::{self, appraisals as appraisals_api, parse_id, parse_query, read_json_body};
use crate::auth::{Identity, IdentityProvider};
use crate::config::AppConfig;
use crate::db::Database;
use crate::domain::listing::{self, ListQuery};
use crate::domain::FormController;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_error_response, html_response, json_error_response};
use crate::templates::pages::{list_page, summary_page, ListVm, SummaryVm};
use crate::wizard;
use astra::{Request, Response};
use std::time::Instant;

/// Everything a request handler needs. Shared by all worker threads.
pub struct AppState {
    pub db: Database,
    pub identity: Box<dyn IdentityProvider + Send + Sync>,
    pub config: AppConfig,
}

/// Whether errors on a route render as JSON or as an HTML page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Json,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    ListPage,
    Collection,
    Item(&'a str),
    WizardNew,
    WizardEdit(&'a str),
    Summary(&'a str),
}

impl Route<'_> {
    fn surface(self) -> Surface {
        match self {
            Route::Collection | Route::Item(_) => Surface::Json,
            _ => Surface::Html,
        }
    }
}

/// `/api/appraisals...` is always JSON; `/appraisals` serves the list page
/// to browsers asking for HTML and JSON to everyone else.
fn resolve<'a>(method: &str, path: &'a str, wants_html: bool) -> Option<Route<'a>> {
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return Some(Route::ListPage);
    }

    let (api_only, rest) = match path.strip_prefix("/api") {
        Some(rest) if rest.starts_with("/appraisals") => (true, rest),
        _ => (false, path),
    };

    let segments: Vec<&str> = rest.trim_start_matches('/').split('/').collect();
    let route = match segments.as_slice() {
        ["appraisals"] if !api_only && method == "GET" && wants_html => Route::ListPage,
        ["appraisals"] => Route::Collection,
        ["appraisals", "new"] if !api_only => Route::WizardNew,
        ["appraisals", id] => Route::Item(*id),
        ["appraisals", id, "edit"] if !api_only => Route::WizardEdit(*id),
        ["appraisals", id, "summary"] if !api_only => Route::Summary(*id),
        _ => return None,
    };
    Some(route)
}

fn wants_html(req: &Request) -> bool {
    req.headers()
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"))
}

pub fn handle(mut req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let route = resolve(&method, &path, wants_html(&req));
    let surface = match route {
        Some(r) => r.surface(),
        None if path.starts_with("/api/") => Surface::Json,
        None => Surface::Html,
    };

    let result = match route {
        Some(route) => dispatch(route, &method, &mut req, state),
        None => Err(ServerError::NotFound("Not Found".into())),
    };

    let resp = result.unwrap_or_else(|err| {
        if err.status() >= 500 {
            tracing::error!(%method, %path, error = %err, "request failed");
        } else {
            tracing::debug!(%method, %path, error = %err, "request rejected");
        }
        match surface {
            Surface::Json => json_error_response(&err),
            Surface::Html => html_error_response(&err),
        }
    });

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

fn dispatch(route: Route<'_>, method: &str, req: &mut Request, state: &AppState) -> ResultResp {
    let who = state
        .identity
        .current_user(req)?
        .ok_or(ServerError::Unauthorized)?;
    let limit = state.config.max_body_bytes;
    let db = &state.db;

    match (route, method) {
        (Route::ListPage, "GET") => list_handler(state, &who, req),

        (Route::Collection, "GET") => appraisals_api::list_handler(db, &who),
        (Route::Collection, "POST") => {
            let body = read_json_body(req, limit)?;
            appraisals_api::create_handler(db, &who, &body)
        }

        (Route::Item(raw), "GET") => appraisals_api::get_handler(db, &who, parse_id(raw)?),
        (Route::Item(raw), "PATCH") => {
            let id = parse_id(raw)?;
            let body = read_json_body(req, limit)?;
            appraisals_api::update_handler(db, &who, id, &body)
        }
        (Route::Item(raw), "DELETE") => appraisals_api::delete_handler(db, &who, parse_id(raw)?),

        (Route::WizardNew, "GET") => wizard::new_page(),
        (Route::WizardNew, "POST") => wizard::submit(state, &who, None, req),
        (Route::WizardEdit(raw), "GET") => {
            let id = parse_id(raw)?;
            wizard::edit_page(state, &who, id, &parse_query(req))
        }
        (Route::WizardEdit(raw), "POST") => {
            let id = parse_id(raw)?;
            wizard::submit(state, &who, Some(id), req)
        }

        (Route::Summary(raw), "GET") => summary_handler(state, &who, parse_id(raw)?),

        _ => Err(ServerError::MethodNotAllowed),
    }
}

fn list_handler(state: &AppState, who: &Identity, req: &Request) -> ResultResp {
    let records = appraisals_api::list(&state.db, who)?;
    let total = records.len();
    let query = ListQuery::from_params(&api::parse_query(req));
    let rows = listing::apply(records, &query);

    html_response(list_page(&ListVm {
        rows: &rows,
        query: &query,
        total,
    }))
}

fn summary_handler(state: &AppState, who: &Identity, id: i64) -> ResultResp {
    let record = appraisals_api::get(&state.db, who, id)?;
    let form = FormController::hydrate(&record).form;

    html_response(summary_page(&SummaryVm {
        record: &record,
        form: &form,
        agency_name: &state.config.agency_name,
    }))
}
