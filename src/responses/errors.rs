use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

/// Last-resort error page when the templated pages could not be produced.
pub fn plain_error_response(err: &ServerError) -> Response {
    let status = err.status();
    let message = match err {
        // Upstream internals stay in the logs.
        ServerError::Upstream(_) => "The vehicle catalog is unavailable right now.".to_string(),
        other => other.to_string(),
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Error {status}</title>
  <style>
    body {{
      font-family: system-ui, sans-serif;
      max-width: 720px;
      margin: 4rem auto;
      padding: 1rem;
    }}
    p {{
      font-size: 1.1rem;
      color: #444;
    }}
  </style>
</head>
<body>
  <h1>Error {status}</h1>
  <p>{message}</p>
  <p><a href="/">← Back to home</a></p>
</body>
</html>"#
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
