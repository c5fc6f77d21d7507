use super::html::{csrf_field, escape, method_field};
use super::layout::{render_page, Page, Width};
use super::ViewContext;
use crate::student::{StudentField, StudentRecord};
use std::collections::HashMap;

/// Outcome of a failed submission: per-field messages and the values the user
/// typed. Both are empty on a first render.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    errors: HashMap<StudentField, String>,
    old: HashMap<StudentField, String>,
}

impl FormState {
    pub fn set_error(&mut self, field: StudentField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn set_old(&mut self, field: StudentField, value: impl Into<String>) {
        self.old.insert(field, value.into());
    }

    pub fn error(&self, field: StudentField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Resubmitted input wins over the stored value, even when empty.
    pub fn value_for(&self, field: StudentField, record: Option<&StudentRecord>) -> String {
        if let Some(v) = self.old.get(&field) {
            return v.clone();
        }
        record.and_then(|r| r.field_value(field)).unwrap_or_default()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

pub fn render_edit_form(
    ctx: &ViewContext<'_>,
    record: &StudentRecord,
    state: &FormState,
) -> String {
    let labels = ctx.labels();
    let form = render_form(
        ctx,
        &ctx.routes.update(record.id),
        Some("PUT"),
        Some(record),
        state,
        labels.update,
    );
    render_page(Page {
        locale: ctx.locale,
        title: labels.edit_title,
        subtitle: None,
        width: Width::Narrow,
        view_css: FORM_CSS,
        content: form,
    })
}

pub fn render_create_form(ctx: &ViewContext<'_>, state: &FormState) -> String {
    let labels = ctx.labels();
    let form = render_form(ctx, &ctx.routes.store(), None, None, state, labels.save);
    render_page(Page {
        locale: ctx.locale,
        title: labels.create_title,
        subtitle: None,
        width: Width::Narrow,
        view_css: FORM_CSS,
        content: form,
    })
}

fn render_form(
    ctx: &ViewContext<'_>,
    action: &str,
    method: Option<&str>,
    record: Option<&StudentRecord>,
    state: &FormState,
    submit_label: &str,
) -> String {
    let labels = ctx.labels();
    let mut out = format!(
        "            <form action=\"{}\" method=\"POST\">\n                {}\n",
        escape(action),
        csrf_field(ctx.csrf_token)
    );
    if let Some(m) = method {
        out.push_str(&format!("                {}\n", method_field(m)));
    }

    for field in StudentField::ALL {
        out.push_str(&render_group(
            field,
            labels.field(field),
            &state.value_for(field, record),
            state.error(field),
        ));
    }

    out.push_str(&format!(
        r#"
                <div class="btn-group">
                    <button type="submit" class="btn">{}</button>
                    <a href="{}" class="btn btn-secondary">{}</a>
                </div>
            </form>"#,
        submit_label,
        escape(&ctx.routes.index()),
        labels.cancel,
    ));
    out
}

fn render_group(field: StudentField, label: &str, value: &str, error: Option<&str>) -> String {
    let key = field.key();
    let (marker, required) = if field.is_required() {
        (" *", " required")
    } else {
        ("", "")
    };
    let error = error
        .map(|m| format!("\n                    <div class=\"error\">{}</div>", escape(m)))
        .unwrap_or_default();
    format!(
        r#"
                <div class="form-group">
                    <label for="{key}">{label}{marker}</label>
                    <input type="{input_type}" id="{key}" name="{key}" value="{value}"{required}>{error}
                </div>
"#,
        input_type = field.input_type(),
        value = escape(value),
    )
}

const FORM_CSS: &str = r#"
        .form-group {
            margin-bottom: 20px;
        }
        label {
            display: block;
            margin-bottom: 8px;
            font-weight: bold;
            color: #333;
        }
        input[type="text"],
        input[type="email"],
        input[type="date"] {
            width: 100%;
            padding: 12px;
            border: 2px solid #ddd;
            border-radius: 8px;
            font-size: 16px;
            transition: border-color 0.3s;
        }
        input:focus {
            outline: none;
            border-color: #667eea;
        }
        .error {
            color: #dc3545;
            font-size: 14px;
            margin-top: 5px;
        }
        .btn-group {
            display: flex;
            gap: 10px;
            margin-top: 20px;
        }
"#;
