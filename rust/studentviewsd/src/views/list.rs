use super::html::{csrf_field, escape, method_field};
use super::layout::{render_page, Page, Width};
use super::ViewContext;
use crate::student::StudentRecord;

/// Table of students in the order given. `pagination` is trusted markup from
/// the host and is embedded as-is.
pub fn render_list(
    ctx: &ViewContext<'_>,
    records: &[StudentRecord],
    pagination: Option<&str>,
    flash: Option<&str>,
) -> String {
    let labels = ctx.labels();
    let mut content = String::new();

    if let Some(msg) = flash {
        content.push_str(&format!(
            "            <div class=\"alert\">{}</div>\n",
            escape(msg)
        ));
    }

    content.push_str(&format!(
        "            <a href=\"{}\" class=\"btn btn-add\">{}</a>\n",
        escape(&ctx.routes.create()),
        labels.add_student
    ));

    if records.is_empty() {
        content.push_str(&format!(
            r#"            <div class="no-data">
                <h2>{}</h2>
                <p>{}</p>
            </div>"#,
            labels.empty_title, labels.empty_hint
        ));
    } else {
        content.push_str(&render_table(ctx, records));
        content.push_str(&format!(
            "\n            <div class=\"pagination\">{}</div>",
            pagination.unwrap_or_default()
        ));
    }

    render_page(Page {
        locale: ctx.locale,
        title: ctx.app_title.unwrap_or(labels.list_title),
        subtitle: Some(labels.list_subtitle),
        width: Width::Wide,
        view_css: LIST_CSS,
        content,
    })
}

fn render_table(ctx: &ViewContext<'_>, records: &[StudentRecord]) -> String {
    let labels = ctx.labels();
    let rows: String = records.iter().map(|r| render_row(ctx, r)).collect();
    format!(
        r#"            <table>
                <thead>
                    <tr>
                        <th>{}</th>
                        <th>{}</th>
                        <th>{}</th>
                        <th>{}</th>
                        <th>{}</th>
                        <th>{}</th>
                        <th>{}</th>
                    </tr>
                </thead>
                <tbody>
{rows}                </tbody>
            </table>"#,
        labels.col_id,
        labels.name,
        labels.email,
        labels.student_id,
        labels.col_phone,
        labels.major,
        labels.col_actions,
    )
}

fn render_row(ctx: &ViewContext<'_>, r: &StudentRecord) -> String {
    let labels = ctx.labels();
    format!(
        r#"                    <tr class="student-row" data-id="{id}">
                        <td>{id}</td>
                        <td>{name}</td>
                        <td>{email}</td>
                        <td>{student_id}</td>
                        <td>{phone}</td>
                        <td>{major}</td>
                        <td>
                            <div class="actions">
                                <a href="{show}" class="btn btn-view">{view}</a>
                                <a href="{edit}" class="btn btn-edit">{edit_label}</a>
                                <form action="{destroy}" method="POST" style="display: inline;">
                                    {csrf}
                                    {method}
                                    <button type="submit" class="btn btn-danger" onclick="return confirm('{confirm}')">{delete}</button>
                                </form>
                            </div>
                        </td>
                    </tr>
"#,
        id = r.id,
        name = escape(&r.name),
        email = escape(&r.email),
        student_id = escape(&r.student_id),
        phone = ctx.or_placeholder(r.phone.as_deref()),
        major = ctx.or_placeholder(r.major.as_deref()),
        show = escape(&ctx.routes.show(r.id)),
        edit = escape(&ctx.routes.edit(r.id)),
        destroy = escape(&ctx.routes.destroy(r.id)),
        view = labels.view,
        edit_label = labels.edit,
        delete = labels.delete,
        confirm = labels.delete_confirm,
        csrf = csrf_field(ctx.csrf_token),
        method = method_field("DELETE"),
    )
}

const LIST_CSS: &str = r#"
        .btn-add {
            margin-bottom: 20px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        th, td {
            padding: 15px;
            text-align: start;
            border-bottom: 1px solid #ddd;
        }
        th {
            background: #f8f9fa;
            font-weight: bold;
            color: #333;
        }
        tr:hover {
            background: #f8f9fa;
        }
        .actions {
            display: flex;
            gap: 10px;
        }
        .alert {
            padding: 15px;
            margin-bottom: 20px;
            border-radius: 8px;
            background: #d4edda;
            color: #155724;
            border: 1px solid #c3e6cb;
        }
        .no-data {
            text-align: center;
            padding: 40px;
            color: #666;
        }
        .pagination {
            margin-top: 20px;
            display: flex;
            justify-content: center;
            gap: 10px;
        }
        .pagination a, .pagination span {
            padding: 10px 15px;
            background: #f8f9fa;
            color: #667eea;
            text-decoration: none;
            border-radius: 5px;
        }
        .pagination .active {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
        }
"#;
