use hyper::{
    service::{make_service_fn, service_fn},
    Body, Request, Response, StatusCode,
};
use std::{convert::Infallible, net::SocketAddr};

fn respond(status: StatusCode, body: impl Into<Body>) -> Response<Body> {
    Response::builder()
        .header("Content-Type", "application/json")
        .status(status)
        .body(body.into())
        .unwrap()
}

fn route(request: Request<Body>) -> Response<Body> {
    let path = request.uri().path();
    match path.strip_prefix("/todos/") {
        Some(id) => match id.parse::<u64>() {
            Ok(id) => respond(
                StatusCode::OK,
                serde_json::json!({"id": id, "title": format!("todo {}", id), "completed": id % 2 == 0}).to_string(),
            ),
            Err(_) => respond(StatusCode::OK, "not json"),
        },
        None => respond(StatusCode::NOT_FOUND, serde_json::json!({"message": "not found"}).to_string()),
    }
}

/// Serves `/todos/{id}` on an ephemeral local port and returns its base url.
pub fn serve() -> String {
    let make_service = make_service_fn(|_| async { Ok::<_, Infallible>(service_fn(|request| async move { Ok::<_, Infallible>(route(request)) })) });
    let server = hyper::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
    let address = server.local_addr();
    tokio::spawn(server);
    format!("http://{}", address)
}
