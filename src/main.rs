use std::process::ExitCode;

use activity_signup_core::app::{SignupOutcome, SignupPage, Trigger};
use activity_signup_core::client::request::NoWasmClient;
use activity_signup_core::config::{ClientConfig, DEFAULT_SERVER_URL};
use activity_signup_core::error::Result;
use activity_signup_core::interface::HttpClient;
use activity_signup_core::model::structs::SignupForm;
use activity_signup_core::ui::terminal::{pick_activity, TerminalSurface};
use clap::{Parser, Subcommand};
use std::io::Stdout;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

type TerminalPage = SignupPage<NoWasmClient, TerminalSurface<Stdout>>;

#[derive(Debug, Parser)]
#[command(name = "activity-signup", about = "List school activities and sign up for them")]
struct Cli {
    /// Server root, e.g. http://127.0.0.1:8000
    #[arg(long, env = "SIGNUP_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Also pass the email as `?email=` on signup
    #[arg(long, env = "SIGNUP_EMAIL_IN_QUERY")]
    email_in_query: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every activity with its participants
    List,
    /// Sign one email up for one activity
    Signup {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        activity: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    log::debug!("args: {cli:?}");

    let config = ClientConfig::with_base_url(cli.server).email_in_query(cli.email_in_query);
    let client = NoWasmClient::new(config.clone())?;
    let page = SignupPage::new(client, TerminalSurface::stdout(), config);

    match cli.command {
        Some(Command::List) => {
            let loaded = page.load_activities().await;
            Ok(if loaded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Some(Command::Signup { email, activity }) => {
            page.surface().fill_form(SignupForm::new(email, activity));
            Ok(match page.handle_signup().await {
                SignupOutcome::Accepted => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            })
        }
        None => {
            interactive(&page).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Terminal version of the page: load once, then one signup per form filled.
async fn interactive(page: &TerminalPage) -> Result<()> {
    page.dispatch(Trigger::PageLoaded).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(email) = prompt(&mut lines, "Email: ").await? else {
            break;
        };

        for (idx, option) in page.surface().options().iter().enumerate() {
            println!("{idx:>3}) {}", option.label);
        }
        let Some(choice) = prompt(&mut lines, "Activity: ").await? else {
            break;
        };

        let activity = pick_activity(&page.surface().options(), &choice);
        page.surface().fill_form(SignupForm::new(email.trim(), activity));
        page.dispatch(Trigger::FormSubmitted).await;
    }

    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::Write::flush(&mut std::io::stdout())?;
    Ok(lines.next_line().await?)
}
