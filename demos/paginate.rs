use offsetfetch::Rewriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Unordered query: a synthetic sort column is injected
    let page = Rewriter::rewrite("SELECT id, name, age FROM user", Some(25), None)?;
    log::info!("First page: {}", page);

    // Ordered query: only the window clause is appended
    let page = Rewriter::rewrite(
        "SELECT id, name, age FROM user ORDER BY name ASC",
        Some(25),
        Some(50),
    )?;
    log::info!("Third page: {}", page);

    Ok(())
}
