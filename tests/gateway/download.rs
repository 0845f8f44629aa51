use super::*;

/// Tests that the file name comes from `Content-Disposition`.
///
/// Expected: Ok with the quoted name stripped and the body bytes kept
#[tokio::test]
async fn names_file_from_content_disposition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock(|server| {
            server
                .mock("GET", "/api/v1/reports/2/download/")
                .with_status(200)
                .with_header("content-type", "application/pdf")
                .with_header(
                    "content-disposition",
                    "attachment; filename=\"Users_Report.pdf\"",
                )
                .with_body("%PDF-1.4")
                .create()
        })
        .build()
        .await?;

    let download = test
        .api()
        .download("/reports/2/download/", &[], "report_2.pdf")
        .await
        .map_err(internhub::error::Error::from)?;

    assert_eq!(download.filename, "Users_Report.pdf");
    assert_eq!(download.mime_type, "application/pdf");
    assert_eq!(download.bytes, b"%PDF-1.4".to_vec());
    test.assert_mocks();

    Ok(())
}

/// Tests the fallback name when the header is missing.
///
/// Expected: Ok named after the resource id
#[tokio::test]
async fn falls_back_to_resource_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock(|server| {
            server
                .mock("GET", "/api/v1/reports/7/download/")
                .with_status(200)
                .with_body("content")
                .create()
        })
        .build()
        .await?;

    let download = test
        .api()
        .download("/reports/7/download/", &[], "report_7.pdf")
        .await
        .map_err(internhub::error::Error::from)?;

    assert_eq!(download.filename, "report_7.pdf");

    Ok(())
}
