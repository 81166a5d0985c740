//! Application router configuration.

use std::path::Path;

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, FinanceApi,
    account::{create_account_endpoint, get_accounts_page},
    category::{create_category_endpoint, get_categories_page, get_category_list},
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
    reports::get_reports_page,
    transaction::{
        create_transaction_endpoint, get_category_options, get_transactions_list,
        get_transactions_page,
    },
};

/// Return a router with all the app's routes.
///
/// Files under `static_dir` are served from [endpoints::STATIC].
pub fn build_router<A: FinanceApi>(state: AppState<A>, static_dir: &Path) -> Router {
    let pages = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page::<A>))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page::<A>))
        .route(endpoints::ACCOUNTS_VIEW, get(get_accounts_page::<A>))
        .route(endpoints::CATEGORIES_VIEW, get(get_categories_page::<A>))
        .route(endpoints::REPORTS_VIEW, get(get_reports_page::<A>))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let partials = Router::new()
        .route(endpoints::TRANSACTIONS_LIST, get(get_transactions_list::<A>))
        .route(
            endpoints::TRANSACTION_CATEGORY_OPTIONS,
            get(get_category_options::<A>),
        )
        .route(endpoints::CATEGORIES_LIST, get(get_category_list::<A>))
        .route(
            endpoints::TRANSACTION_FORM,
            post(create_transaction_endpoint::<A>),
        )
        .route(endpoints::ACCOUNT_FORM, post(create_account_endpoint::<A>))
        .route(endpoints::CATEGORY_FORM, post(create_category_endpoint::<A>));

    pages
        .merge(partials)
        .layer(middleware::from_fn(logging_middleware))
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
