use anyhow::Result;

fn main() -> Result<()> {
    let schema = gridpaint::Config::schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
