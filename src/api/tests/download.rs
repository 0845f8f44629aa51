use super::*;

/// Expected: the file name comes from `Content-Disposition`
#[tokio::test]
async fn uses_content_disposition_name() {
    let api = client(
        ScriptedTransport::default().respond_with(HttpResponse {
            status: 200,
            headers: vec![
                ("Content-Type".to_string(), "application/pdf".to_string()),
                (
                    "Content-Disposition".to_string(),
                    r#"attachment; filename="Users_Report.pdf""#.to_string(),
                ),
            ],
            body: b"%PDF".to_vec(),
        }),
        None,
    );

    let download = api
        .download("/reports/2/download/", &[], "report_2.pdf")
        .await
        .unwrap();

    assert_eq!(download.filename, "Users_Report.pdf");
    assert_eq!(download.mime_type, "application/pdf");
    assert_eq!(download.bytes, b"%PDF");
}

/// Expected: the fallback name is used when the header is missing
#[tokio::test]
async fn falls_back_to_given_name() {
    let api = client(
        ScriptedTransport::default().respond_with(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: b"ID,Name".to_vec(),
        }),
        None,
    );

    let download = api
        .download(
            "/users/export/",
            &[("format", Some("csv".to_string()))],
            "users.csv",
        )
        .await
        .unwrap();

    assert_eq!(download.filename, "users.csv");
    assert_eq!(download.mime_type, "application/octet-stream");
    assert_eq!(
        api.transport.last_request().url,
        "http://backend.test/api/v1/users/export/?format=csv"
    );
}
