//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        match backend::service_utils::course_service_client::get_course_service_client() {
            Ok(client) => tracing::info!("forwarding to course service at {}", client.base_url()),
            Err(e) => tracing::error!("course service client not configured: {e:#}"),
        }

        Ok(dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    tracing::debug!("{} {}", res.status(), path);
                    res
                },
            )))
    });
}
