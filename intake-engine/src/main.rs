use anyhow::Context;
use intake_engine::replay::{load_script, replay};
use intake_engine::{IntakeConfig, IntakeSession, init_logger_with_file};

const USAGE: &str = "usage: intake-replay <script.json> [--submit]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and logging
    dotenv::dotenv().ok();
    let config = IntakeConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let mut args = std::env::args().skip(1);
    let script = args.next().context(USAGE)?;
    let submit = args.any(|a| a == "--submit");

    // 2. Replay the script
    let commands = load_script(&script)?;
    let mut session = IntakeSession::new(config.clone());
    let report = replay(&mut session, &commands);
    println!("{}", serde_json::to_string_pretty(&report)?);

    // 3. Optionally send it to the back office
    if submit {
        let client = config.client_config().build_http_client()?;
        let receipt = session.submit(&client).await?;
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }

    Ok(())
}
