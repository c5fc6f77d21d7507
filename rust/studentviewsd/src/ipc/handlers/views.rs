use crate::ipc::error::{from_result, ParamError};
use crate::ipc::helpers;
use crate::ipc::types::{AppState, Request};
use crate::views::{self, ViewContext};
use serde_json::{json, Value};

struct RequestView {
    csrf_token: String,
}

impl RequestView {
    fn from_params(params: &Value) -> Result<Self, ParamError> {
        Ok(Self {
            csrf_token: helpers::opt_str(params, "csrfToken")?.unwrap_or_default(),
        })
    }
}

fn handle_list(state: &AppState, req: &Request) -> Result<Value, ParamError> {
    let students = helpers::students(&req.params, "students")?;
    let pagination = helpers::opt_str(&req.params, "pagination")?;
    let flash = helpers::opt_str(&req.params, "flash")?;
    let rv = RequestView::from_params(&req.params)?;

    let routes = state.config.routes();
    let ctx = ViewContext {
        locale: state.config.locale,
        routes: &routes,
        csrf_token: &rv.csrf_token,
        app_title: state.config.title.as_deref(),
    };
    let html = views::render_list(&ctx, &students, pagination.as_deref(), flash.as_deref());
    Ok(json!({ "html": html, "rowCount": students.len() }))
}

fn handle_show(state: &AppState, req: &Request) -> Result<Value, ParamError> {
    let student = helpers::student(&req.params, "student")?;

    let routes = state.config.routes();
    let ctx = ViewContext {
        locale: state.config.locale,
        routes: &routes,
        csrf_token: "",
        app_title: state.config.title.as_deref(),
    };
    Ok(json!({ "html": views::render_detail(&ctx, &student) }))
}

fn handle_edit(state: &AppState, req: &Request) -> Result<Value, ParamError> {
    let student = helpers::student(&req.params, "student")?;
    let form = helpers::form_state(&req.params)?;
    let rv = RequestView::from_params(&req.params)?;
    tracing::debug!(student = student.id, errors = form.error_count(), "rendering edit form");

    let routes = state.config.routes();
    let ctx = ViewContext {
        locale: state.config.locale,
        routes: &routes,
        csrf_token: &rv.csrf_token,
        app_title: state.config.title.as_deref(),
    };
    Ok(json!({ "html": views::render_edit_form(&ctx, &student, &form) }))
}

fn handle_create(state: &AppState, req: &Request) -> Result<Value, ParamError> {
    let form = helpers::form_state(&req.params)?;
    let rv = RequestView::from_params(&req.params)?;

    let routes = state.config.routes();
    let ctx = ViewContext {
        locale: state.config.locale,
        routes: &routes,
        csrf_token: &rv.csrf_token,
        app_title: state.config.title.as_deref(),
    };
    Ok(json!({ "html": views::render_create_form(&ctx, &form) }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<Value> {
    let result = match req.method.as_str() {
        "views.list" => handle_list(state, req),
        "views.show" => handle_show(state, req),
        "views.edit" => handle_edit(state, req),
        "views.create" => handle_create(state, req),
        _ => return None,
    };
    Some(from_result(&req.id, result))
}
