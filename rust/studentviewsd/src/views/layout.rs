//! Shared page chrome: document head, gradient header, card container and
//! button styles. Views supply their own content and extra rules.

use super::html::escape;
use super::locale::Locale;

#[derive(Debug, Clone, Copy)]
pub enum Width {
    Narrow,
    Wide,
}

pub struct Page<'a> {
    pub locale: Locale,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub width: Width,
    pub view_css: &'static str,
    pub content: String,
}

pub fn render_page(page: Page<'_>) -> String {
    let title = escape(page.title);
    let subtitle = page
        .subtitle
        .map(|s| format!("\n            <p>{}</p>", escape(s)))
        .unwrap_or_default();
    let container_class = match page.width {
        Width::Narrow => "container",
        Width::Wide => "container wide",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{base_css}{view_css}    </style>
</head>
<body>
    <div class="{container_class}">
        <div class="header">
            <h1>{title}</h1>{subtitle}
        </div>
        <div class="content">
{content}
        </div>
    </div>
</body>
</html>
"#,
        lang = page.locale.code(),
        dir = page.locale.dir(),
        base_css = BASE_CSS,
        view_css = page.view_css,
        content = page.content,
    )
}

const BASE_CSS: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            padding: 20px;
            min-height: 100vh;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.2);
            overflow: hidden;
        }
        .container.wide {
            max-width: 1200px;
        }
        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 30px;
            text-align: center;
        }
        .header h1 {
            font-size: 2.5em;
            margin-bottom: 10px;
        }
        .content {
            padding: 30px;
        }
        .btn {
            display: inline-block;
            padding: 12px 30px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            text-decoration: none;
            border-radius: 8px;
            border: none;
            cursor: pointer;
            font-size: 16px;
            transition: transform 0.2s;
        }
        .btn:hover {
            transform: translateY(-2px);
            box-shadow: 0 5px 15px rgba(0,0,0,0.2);
        }
        .btn-secondary,
        .btn-back {
            background: #6c757d;
        }
        .btn-edit {
            background: linear-gradient(135deg, #4facfe 0%, #00f2fe 100%);
        }
        .btn-view {
            background: linear-gradient(135deg, #43e97b 0%, #38f9d7 100%);
        }
        .btn-danger {
            background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%);
        }
"#;
