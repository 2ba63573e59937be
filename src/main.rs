//! Secure Gmail Skill
//!
//! Provisions a Composio session scoped to read and draft Gmail tools and
//! prints the resulting tool list.

use std::path::PathBuf;

use clap::Parser;

use secure_gmail_skill::composio::ToolHandle;
use secure_gmail_skill::config::{default_skill_dir, Environment};
use secure_gmail_skill::error::Result;
use secure_gmail_skill::skill::GmailSkill;

/// Secure Gmail Skill
#[derive(Parser)]
#[command(name = "secure-gmail-skill")]
#[command(author, version, about = "Least-privilege Gmail tools via Composio managed auth")]
struct Cli {
    /// User the session acts for (default: openclaw_user)
    #[arg(long)]
    user_id: Option<String>,

    /// Directory holding the skill's .env (default: executable directory)
    #[arg(long)]
    skill_dir: Option<PathBuf>,

    /// Print tool handles as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let code = exit_code(run(cli).await);
    std::process::exit(code);
}

/// Report a failed run on stderr and map it to the process exit status
fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Format the tool list for stdout
fn render(tools: &[ToolHandle], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(tools)?);
    }

    let slugs: Vec<&str> = tools.iter().map(|t| t.slug.as_str()).collect();
    Ok(format!("Scoped Gmail tools: {:?}", slugs))
}

async fn run(cli: Cli) -> Result<()> {
    let skill_dir = match cli.skill_dir {
        Some(dir) => dir,
        None => default_skill_dir()?,
    };

    let env = Environment::load(&skill_dir)?;
    let skill = GmailSkill::new(&env)?;
    let tools = skill.gmail_tools(cli.user_id.as_deref()).await?;

    println!("{}", render(&tools, cli.json)?);
    Ok(())
}
