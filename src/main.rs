//! hrbuddy - CLI entry point
//!
//! Thin presentation layer over the agent engine: loads plain-text
//! domain documents, answers a one-shot query or runs an interactive
//! loop. All retrieval and agent logic lives in the library.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use hrbuddy::llm::GroqClient;
use hrbuddy::{AgentEngine, CompositeAnswer, Config, Domain};

#[derive(Parser, Debug)]
#[command(name = "hrbuddy", version, about = "Ask questions about your salary and insurance documents")]
struct Args {
    /// Plain-text salary document
    #[arg(long, value_name = "FILE")]
    salary_doc: Option<PathBuf>,

    /// Plain-text insurance document
    #[arg(long, value_name = "FILE")]
    insurance_doc: Option<PathBuf>,

    /// Override the Groq model name
    #[arg(long)]
    model: Option<String>,

    /// One-shot question; omit for an interactive session
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Fail fast on a missing credential, before any document or query work.
    let mut config = Config::from_env()?;
    if let Some(model) = args.model {
        config.model = model;
    }

    let llm = Arc::new(GroqClient::new(&config).context("Failed to build Groq client")?);
    let mut engine = AgentEngine::new(config, llm).context("Failed to initialize engine")?;

    load_document(&mut engine, Domain::Salary, args.salary_doc.as_deref())?;
    load_document(&mut engine, Domain::Insurance, args.insurance_doc.as_deref())?;

    for domain in Domain::all() {
        if engine.has_documents(domain) {
            println!(
                "{} {} document indexed ({} chunks)",
                "✓".green(),
                domain,
                engine.chunk_count(domain)
            );
        } else {
            println!("{} no {} document loaded", "-".yellow(), domain);
        }
    }

    match args.query {
        Some(query) => answer_query(&engine, &query).await,
        None => interactive_loop(&engine).await,
    }
}

fn load_document(
    engine: &mut AgentEngine,
    domain: Domain,
    path: Option<&std::path::Path>,
) -> Result<()> {
    if let Some(path) = path {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} document: {}", domain, path.display()))?;
        engine.set_document(domain, &text);
    }
    Ok(())
}

async fn answer_query(engine: &AgentEngine, query: &str) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Agents are working...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = engine.route(query).await;
    spinner.finish_and_clear();

    print_answer(&result?);
    Ok(())
}

fn print_answer(answer: &CompositeAnswer) {
    if let Some(clarification) = answer.clarification() {
        println!("{}", clarification.yellow());
        return;
    }

    if let Some(salary) = &answer.salary {
        println!("\n{}", "Salary Agent Answer".bold().cyan());
        println!("{}", salary.text);
    }
    if let Some(insurance) = &answer.insurance {
        println!("\n{}", "Insurance Agent Answer".bold().cyan());
        println!("{}", insurance.text);
    }
    if let Some(final_answer) = &answer.final_answer {
        println!("\n{}", "Coordinator Agent Final Answer".bold().green());
        println!("{}", final_answer);
    }
}

async fn interactive_loop(engine: &AgentEngine) -> Result<()> {
    println!("Ask about salary or insurance (empty line to quit).");

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "ask>".bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let query = line.trim();
        if query.is_empty() || query.eq_ignore_ascii_case("exit") {
            break;
        }

        answer_query(engine, query).await?;
        println!();
    }

    Ok(())
}
