use anyhow::Result;
use simple_logger::SimpleLogger;

pub fn init(level: log::LevelFilter) -> Result<()> {
    SimpleLogger::new().with_level(level).init()?;

    Ok(())
}
