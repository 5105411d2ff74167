use console::Term;

/// Resolve once Ctrl+C is pressed.
///
/// Used to abandon a listing fetch that hangs; the core enforces no timeout.
pub(crate) async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }

    if Term::stderr().is_term() {
        eprintln!("\nInterrupted, discarding pending fetch.");
    } else {
        tracing::warn!("Interrupted, discarding pending fetch");
    }
}
