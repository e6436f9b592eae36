use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diag_core::{
    constants::DIAGNOSIS_ENDPOINT_ENV, endpoint_from_env_value, DiagnosisWorkflow,
    HttpDiagnosisClient, SymptomForm,
};

mod interactive;
mod render;

#[derive(Parser)]
#[command(name = "diag")]
#[command(about = "Symptom diagnosis client")]
struct Cli {
    /// Diagnosis endpoint URL (default: $DIAG_API_URL, then http://localhost:8000/diagnose)
    #[arg(long, global = true)]
    endpoint: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit symptoms and print the diagnosis
    Diagnose {
        /// Symptom (repeat for several)
        #[arg(short, long = "symptom", required = true)]
        symptoms: Vec<String>,
        /// Age in years (1-120)
        #[arg(long)]
        age: u32,
        /// male, female or other
        #[arg(long)]
        gender: String,
        /// Existing conditions, allergies or medications
        #[arg(long, default_value = "")]
        history: String,
        /// Print the result as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Fill in the form line by line
    Interactive,
    /// List common symptoms
    Symptoms,
    /// Check the diagnosis service health
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only what the user asked for. The client library only
    // speaks up when it falls back.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("diag=info".parse()?)
                .add_directive("diag_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let endpoint = cli
        .endpoint
        .or_else(|| std::env::var(DIAGNOSIS_ENDPOINT_ENV).ok());
    let config = endpoint_from_env_value(endpoint)?;

    match cli.command {
        Some(Commands::Diagnose {
            symptoms,
            age,
            gender,
            history,
            json,
        }) => {
            let mut form = SymptomForm::new();
            for symptom in &symptoms {
                form.add_symptom(symptom);
            }
            form.set_age(age)?;
            form.set_gender(&gender)?;
            form.set_medical_history(history);

            let mut workflow = DiagnosisWorkflow::new(HttpDiagnosisClient::new(config));
            let result = workflow.submit_form(&form).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                print!("{}", render::render_result(result));
                println!();
                println!("{}", render::DISCLAIMER);
            }
        }
        Some(Commands::Interactive) => {
            let mut workflow = DiagnosisWorkflow::new(HttpDiagnosisClient::new(config));
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            interactive::run(&mut workflow, stdin.lock(), &mut stdout).await?;
            println!();
            println!("{}", render::DISCLAIMER);
        }
        Some(Commands::Symptoms) => {
            print!("{}", render::render_common_symptoms());
        }
        Some(Commands::Health) => {
            let client = HttpDiagnosisClient::new(config);
            match client.check_health().await {
                Ok(health) => print!("{}", render::render_health(&health)),
                Err(e) => {
                    tracing::error!(kind = %e.kind(), "health check failed: {}", e);
                    anyhow::bail!(
                        "diagnosis service at {} is not responding",
                        client.config().endpoint()
                    );
                }
            }
        }
        None => {
            println!("Use 'diag --help' for commands");
        }
    }

    Ok(())
}
