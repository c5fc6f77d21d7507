use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_studentviewsd");
    let mut child = Command::new(exe)
        .env_remove("STUDENTVIEWS_CONFIG")
        .env_remove("STUDENTVIEWS_ROUTES_BASE")
        .env_remove("STUDENTVIEWS_TITLE")
        .env("STUDENTVIEWS_LOCALE", "en")
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

fn list_html(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    params: serde_json::Value,
) -> (String, u64) {
    let resp = request(stdin, reader, id, "views.list", params);
    assert_eq!(
        resp.get("ok").and_then(|v| v.as_bool()),
        Some(true),
        "views.list failed: {}",
        resp
    );
    let html = resp
        .pointer("/result/html")
        .and_then(|v| v.as_str())
        .expect("html")
        .to_string();
    let rows = resp
        .pointer("/result/rowCount")
        .and_then(|v| v.as_u64())
        .expect("rowCount");
    (html, rows)
}

fn student(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "studentId": format!("S-{id:04}"),
        "createdAt": "2024-01-15T10:30:00.000000Z"
    })
}

#[test]
fn empty_list_renders_empty_state_and_no_table() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let (html, rows) = list_html(
        &mut stdin,
        &mut reader,
        "1",
        json!({ "students": [], "pagination": "<span>1</span>" }),
    );
    assert_eq!(rows, 0);
    assert!(html.contains(r#"<div class="no-data">"#));
    assert!(html.contains("<h2>No students registered</h2>"));
    assert!(!html.contains("<table>"));
    assert!(!html.contains(r#"class="student-row""#));
    assert!(html.contains(r#"<a href="/students/create" class="btn btn-add">Add New Student</a>"#));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn rows_follow_input_order_exactly() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let ids = [42, 7, 19, 3, 25];
    let students: Vec<_> = ids
        .iter()
        .map(|id| student(*id, &format!("Name{id}")))
        .collect();
    let (html, rows) = list_html(
        &mut stdin,
        &mut reader,
        "1",
        json!({ "students": students }),
    );
    assert_eq!(rows, ids.len() as u64);
    assert_eq!(html.matches(r#"class="student-row""#).count(), ids.len());

    let positions: Vec<usize> = ids
        .iter()
        .map(|id| {
            html.find(&format!(r#"data-id="{id}""#))
                .expect("row for id")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "rows re-ordered");
    assert!(!html.contains(r#"<div class="no-data">"#));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn flash_pagination_and_csrf_reach_the_page() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let pagination = r#"<a href="/students?page=1">1</a><span class="active">2</span>"#;
    let (html, _) = list_html(
        &mut stdin,
        &mut reader,
        "1",
        json!({
            "students": [student(1, "Amy"), student(2, "Ben")],
            "pagination": pagination,
            "flash": "Student added successfully",
            "csrfToken": "csrf-abc"
        }),
    );
    assert_eq!(
        html.matches(r#"<div class="alert">Student added successfully</div>"#)
            .count(),
        1
    );
    assert!(html.contains(&format!(r#"<div class="pagination">{pagination}</div>"#)));
    assert_eq!(
        html.matches(r#"<input type="hidden" name="_token" value="csrf-abc">"#)
            .count(),
        2
    );
    assert_eq!(
        html.matches(r#"<input type="hidden" name="_method" value="DELETE">"#)
            .count(),
        2
    );
    assert!(html.contains("confirm('Are you sure you want to delete this student?')"));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn invalid_records_are_rejected_with_their_position() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let mut broken = student(2, "Ben");
    broken.as_object_mut().expect("object").remove("email");
    let resp = request(
        &mut stdin,
        &mut reader,
        "1",
        "views.list",
        json!({ "students": [student(1, "Amy"), broken] }),
    );
    assert_eq!(resp.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        resp.pointer("/error/code").and_then(|v| v.as_str()),
        Some("bad_params")
    );
    assert_eq!(
        resp.pointer("/error/details/param").and_then(|v| v.as_str()),
        Some("students[1]")
    );
    let message = resp
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    assert!(message.contains("email"), "{message}");

    let resp = request(
        &mut stdin,
        &mut reader,
        "2",
        "views.list",
        json!({ "students": {} }),
    );
    assert_eq!(
        resp.pointer("/error/message").and_then(|v| v.as_str()),
        Some("params.students must be an array")
    );

    drop(stdin);
    let _ = child.wait();
}
