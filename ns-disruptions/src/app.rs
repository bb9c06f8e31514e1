//! One run of the tool: fetch, render, print.

use std::io::{self, Write};

use tracing::info;

use crate::domain::StationCode;
use crate::ns::{DisruptionSource, NsError};
use crate::report::ReportRenderer;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Disruptions could not be fetched
    #[error(transparent)]
    Fetch(#[from] NsError),

    /// Report template failed to render
    #[error("report rendering failed: {0}")]
    Render(#[from] askama::Error),

    /// Report could not be written out
    #[error("writing report failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Fetch the disruptions for `station` and write the report to `out`.
///
/// Nothing is written unless the fetch succeeds.
pub async fn run<W: Write>(
    source: &dyn DisruptionSource,
    renderer: &ReportRenderer,
    station: &StationCode,
    out: &mut W,
) -> Result<(), AppError> {
    let disruptions = source.fetch_disruptions(station).await?;
    info!(station = %station, count = disruptions.len(), "rendering report");

    let report = renderer.render(station, &disruptions).await?;
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write the stderr diagnostic for a failed run.
///
/// Fetch failures are reported as `Error retrieving disruptions: ...`;
/// an HTTP error status is followed by the response body, if any.
pub fn write_diagnostic<W: Write>(err: &AppError, out: &mut W) -> io::Result<()> {
    match err {
        AppError::Fetch(e) => {
            writeln!(out, "Error retrieving disruptions: {e}")?;
            match e {
                NsError::Http {
                    body: Some(body), ..
                } if !body.is_empty() => writeln!(out, "Response content: {body}")?,
                _ => {}
            }
        }
        other => writeln!(out, "Error: {other}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    use crate::ns::{MockNsClient, NsClient, NsConfig};
    use crate::translate::{FieldTranslator, MockTranslator};

    fn renderer() -> ReportRenderer {
        ReportRenderer::new(FieldTranslator::new(Arc::new(MockTranslator::new()), "en"))
    }

    fn delft() -> StationCode {
        StationCode::parse("DT").unwrap()
    }

    async fn serve(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            "/disruptions/v3/station/:code",
            get(move || async move { (status, body) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn empty_response_prints_notice_only() {
        let base = serve(StatusCode::OK, "[]").await;
        let client = NsClient::new(NsConfig::new("key").with_base_url(base)).unwrap();

        let mut out = Vec::new();
        run(&client, &renderer(), &delft(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim_end(), "No current disruptions affecting DT");
    }

    #[tokio::test]
    async fn service_unavailable_aborts_without_report() {
        let base = serve(StatusCode::SERVICE_UNAVAILABLE, "maintenance window").await;
        let client = NsClient::new(NsConfig::new("key").with_base_url(base)).unwrap();

        let mut out = Vec::new();
        let err = run(&client, &renderer(), &delft(), &mut out)
            .await
            .unwrap_err();

        assert!(out.is_empty());
        assert!(matches!(
            err,
            AppError::Fetch(NsError::Http { status: 503, .. })
        ));

        let mut stderr = Vec::new();
        write_diagnostic(&err, &mut stderr).unwrap();
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Error retrieving disruptions: HTTP 503\nResponse content: maintenance window\n"
        );
    }

    #[tokio::test]
    async fn mock_source_renders_report() {
        let source = MockNsClient::new("data/mock_disruptions");

        let mut out = Vec::new();
        run(&source, &renderer(), &delft(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Current disruptions affecting DT:"));
        assert_eq!(text.matches("Type: ").count(), 2);
    }

    #[test]
    fn decode_diagnostic_is_one_line() {
        let err = AppError::Fetch(NsError::Decode {
            message: "expected value at line 1 column 1".to_string(),
            body: Some("<html>oops</html>".to_string()),
        });

        let mut stderr = Vec::new();
        write_diagnostic(&err, &mut stderr).unwrap();
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Error retrieving disruptions: JSON decode error: expected value at line 1 column 1\n"
        );
    }

    #[test]
    fn http_diagnostic_without_body_is_one_line() {
        let err = AppError::Fetch(NsError::Http {
            status: 401,
            body: Some(String::new()),
        });

        let mut stderr = Vec::new();
        write_diagnostic(&err, &mut stderr).unwrap();
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Error retrieving disruptions: HTTP 401\n"
        );
    }

    #[test]
    fn output_failure_diagnostic() {
        let err = AppError::Output(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));

        let mut stderr = Vec::new();
        write_diagnostic(&err, &mut stderr).unwrap();
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Error: writing report failed: pipe closed\n"
        );
    }
}
