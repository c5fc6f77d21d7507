use super::html::escape;
use super::layout::{render_page, Page, Width};
use super::ViewContext;
use crate::student::StudentRecord;

pub fn render_detail(ctx: &ViewContext<'_>, record: &StudentRecord) -> String {
    let labels = ctx.labels();
    let birth_date = record.birth_date_text();

    let rows = [
        ("name", labels.name, escape(&record.name)),
        ("email", labels.email, escape(&record.email)),
        ("student_id", labels.student_id, escape(&record.student_id)),
        ("phone", labels.phone, ctx.or_placeholder(record.phone.as_deref())),
        ("address", labels.address, ctx.or_placeholder(record.address.as_deref())),
        ("birth_date", labels.birth_date, ctx.or_placeholder(birth_date.as_deref())),
        ("major", labels.major, ctx.or_placeholder(record.major.as_deref())),
        ("created_at", labels.registered_at, escape(&record.created_at_text())),
    ];

    let mut content = String::from("            <div class=\"info-card\">\n");
    for (key, label, value) in rows {
        content.push_str(&format!(
            r#"                <div class="info-row" data-field="{key}">
                    <span class="info-label">{label}:</span>
                    <span class="info-value">{value}</span>
                </div>
"#
        ));
    }
    content.push_str("            </div>\n");
    content.push_str(&format!(
        r#"
            <div class="actions">
                <a href="{}" class="btn btn-edit">{}</a>
                <a href="{}" class="btn btn-back">{}</a>
            </div>"#,
        escape(&ctx.routes.edit(record.id)),
        labels.edit,
        escape(&ctx.routes.index()),
        labels.back_to_list,
    ));

    render_page(Page {
        locale: ctx.locale,
        title: labels.detail_title,
        subtitle: None,
        width: Width::Narrow,
        view_css: DETAIL_CSS,
        content,
    })
}

const DETAIL_CSS: &str = r#"
        .info-card {
            background: #f8f9fa;
            border-radius: 10px;
            padding: 20px;
            margin-bottom: 20px;
        }
        .info-row {
            display: flex;
            justify-content: space-between;
            padding: 15px 0;
            border-bottom: 1px solid #ddd;
        }
        .info-row:last-child {
            border-bottom: none;
        }
        .info-label {
            font-weight: bold;
            color: #667eea;
            font-size: 18px;
        }
        .info-value {
            color: #333;
            font-size: 18px;
        }
        .actions {
            text-align: center;
            margin-top: 30px;
        }
        .actions .btn {
            margin: 10px 5px;
        }
"#;
