use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset. Stripe calls go through reqwest/hyper, which are chatty at info.
const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn,reqwest=warn,hyper_util=warn";

/// JSON logs to stdout, one object per event.
///
/// Events are flattened, and the enclosing request span (method, path, trace_id)
/// is attached so every line of a request can be joined on `trace_id`.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

