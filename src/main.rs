use hello_world::utils::logger;

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger();

    tracing::debug!("Starting hello-world");

    // 寫入失敗直接傳遞到程序邊界
    hello_world::greet()?;

    Ok(())
}
