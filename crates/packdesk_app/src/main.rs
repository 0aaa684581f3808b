mod config;
mod effects;
mod logging;
mod shell;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    let config = config::Config::from_env();
    shell::run(&config)
}
