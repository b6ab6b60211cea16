use anyhow::Context;

fn main() -> anyhow::Result<()> {
    shopcart_observability::init();

    let config = shopcart_cli::CliConfig::from_env().context("failed to load configuration")?;
    let today = chrono::Local::now().date_naive();

    let stdout = std::io::stdout();
    shopcart_cli::run(&config, today, &mut stdout.lock())
}
