use rail_pipeline::logging::init_tracing;

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();

    tracing::debug!("still logging after repeated init");
}
