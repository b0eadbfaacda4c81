//! Reports router assembly
//!
//! Authentication is applied by the binary, which layers the auth
//! middleware over this router; handlers assume a [`Principal`] is
//! already present in request extensions.
//!
//! [`Principal`]: kernel::principal::Principal

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::{CommentRepository, ReportRepository};
use crate::gateway::{ChainGateway, HttpChainGateway};
use crate::infra::postgres::PgReportsRepository;
use crate::presentation::handlers::{self, ReportsAppState};

/// Build the reports router backed by Postgres and the HTTP gateway.
pub fn reports_router(repo: PgReportsRepository, gateway: HttpChainGateway) -> Router {
    reports_router_generic(repo, gateway)
}

/// Build the reports router over any repository and gateway.
pub fn reports_router_generic<R, G>(repo: R, gateway: G) -> Router
where
    R: ReportRepository + CommentRepository + Send + Sync + 'static,
    G: ChainGateway + Send + Sync + 'static,
{
    let state = ReportsAppState::new(repo, gateway);

    // /count before /{public_id} so it is not captured as an id
    Router::new()
        .route(
            "/",
            post(handlers::submit_report::<R, G>).get(handlers::list_reports::<R, G>),
        )
        .route("/count", get(handlers::count_reports::<R, G>))
        .route("/{public_id}", get(handlers::get_report::<R, G>))
        .route(
            "/{public_id}/comments",
            post(handlers::add_comment::<R, G>).get(handlers::list_comments::<R, G>),
        )
        .with_state(state)
}
