use anyhow::Result;

fn main() -> Result<()> {
    linkvault::cli::run()
}
