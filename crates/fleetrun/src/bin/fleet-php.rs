//! PHP系サービス用アダプター

fn main() {
    tracing_subscriber::fmt::init();
    let code = fleetrun::cli::run(&fleetrun_core::PHP);
    std::process::exit(code);
}
