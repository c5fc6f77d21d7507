use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_studentviewsd");
    let mut child = Command::new(exe)
        .env_remove("STUDENTVIEWS_CONFIG")
        .env_remove("STUDENTVIEWS_ROUTES_BASE")
        .env_remove("STUDENTVIEWS_TITLE")
        .env_remove("STUDENTVIEWS_LOCALE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn studentviewsd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn empty_list(stdin: &mut ChildStdin, reader: &mut BufReader<ChildStdout>, id: &str) -> String {
    let resp = request(stdin, reader, id, "views.list", json!({ "students": [] }));
    resp.pointer("/result/html")
        .and_then(|v| v.as_str())
        .expect("html")
        .to_string()
}

#[test]
fn defaults_render_arabic_right_to_left() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let html = empty_list(&mut stdin, &mut reader, "1");
    assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(html.contains("<h1>نظام إدارة الطلاب</h1>"));
    assert!(html.contains("لا توجد طلاب مسجلين"));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn config_update_applies_to_later_renders() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let updated = request(
        &mut stdin,
        &mut reader,
        "1",
        "config.update",
        json!({ "locale": "en", "routesBase": "/admin/students/", "title": "Registry <Main>" }),
    );
    assert_eq!(updated.get("ok").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(
        updated.pointer("/result/locale").and_then(|v| v.as_str()),
        Some("en")
    );
    assert_eq!(
        updated.pointer("/result/routesBase").and_then(|v| v.as_str()),
        Some("/admin/students/")
    );

    let html = empty_list(&mut stdin, &mut reader, "2");
    assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(html.contains("<h1>Registry &lt;Main&gt;</h1>"));
    assert!(html.contains(r#"href="/admin/students/create""#));

    let cfg = request(&mut stdin, &mut reader, "3", "config.get", json!({}));
    assert_eq!(
        cfg.pointer("/result/title").and_then(|v| v.as_str()),
        Some("Registry <Main>")
    );

    let cleared = request(
        &mut stdin,
        &mut reader,
        "4",
        "config.update",
        json!({ "title": null }),
    );
    assert!(cleared.pointer("/result/title").map(|v| v.is_null()).unwrap_or(false));
    assert_eq!(
        cleared.pointer("/result/locale").and_then(|v| v.as_str()),
        Some("en")
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn unknown_locale_is_rejected_and_config_kept() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let resp = request(
        &mut stdin,
        &mut reader,
        "1",
        "config.update",
        json!({ "locale": "fr", "routesBase": "/elsewhere" }),
    );
    assert_eq!(
        resp.pointer("/error/code").and_then(|v| v.as_str()),
        Some("bad_params")
    );
    assert_eq!(
        resp.pointer("/error/message").and_then(|v| v.as_str()),
        Some("unknown locale: fr")
    );

    let cfg = request(&mut stdin, &mut reader, "2", "config.get", json!({}));
    assert_eq!(
        cfg.pointer("/result/routesBase").and_then(|v| v.as_str()),
        Some("/students")
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn missing_config_file_fails_startup() {
    let exe = env!("CARGO_BIN_EXE_studentviewsd");
    let status = Command::new(exe)
        .env("STUDENTVIEWS_CONFIG", "/nonexistent/studentviews.json")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("run studentviewsd");
    assert!(!status.success());
}

#[test]
fn config_file_is_the_base_and_env_overrides_it() {
    let dir = std::env::temp_dir().join(format!(
        "studentviews-config-ipc-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("studentviews.json");
    std::fs::write(
        &path,
        r#"{ "locale": "en", "routesBase": "/school/students", "title": "From File" }"#,
    )
    .expect("write config");

    let exe = env!("CARGO_BIN_EXE_studentviewsd");
    let mut child = Command::new(exe)
        .env("STUDENTVIEWS_CONFIG", &path)
        .env("STUDENTVIEWS_TITLE", "From Env")
        .env_remove("STUDENTVIEWS_LOCALE")
        .env_remove("STUDENTVIEWS_ROUTES_BASE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn studentviewsd");
    let mut stdin = child.stdin.take().expect("child stdin");
    let mut reader = BufReader::new(child.stdout.take().expect("child stdout"));

    let cfg = request(&mut stdin, &mut reader, "1", "config.get", json!({}));
    assert_eq!(
        cfg.pointer("/result/locale").and_then(|v| v.as_str()),
        Some("en")
    );
    assert_eq!(
        cfg.pointer("/result/routesBase").and_then(|v| v.as_str()),
        Some("/school/students")
    );
    assert_eq!(
        cfg.pointer("/result/title").and_then(|v| v.as_str()),
        Some("From Env")
    );

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(&dir);
}
