//! Node.js系サービス用アダプター

fn main() {
    tracing_subscriber::fmt::init();
    let code = fleetrun::cli::run(&fleetrun_core::NODE);
    std::process::exit(code);
}
