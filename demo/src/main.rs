//! ComplianceOS command-line runner.
//!
//! Drives the agent orchestrator against the in-memory knowledge store and
//! the canned language model. Every command prints pretty JSON on stdout.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- --client "Acme Corp" scan
//!   cargo run -p demo -- analyze "We retain user data for 5 years." --auto-remediate
//!   cargo run -p demo -- monitor --events events.json
//!   cargo run -p demo -- ingest policy.md notes.txt

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use complianceos_agents::{DocumentUpload, Orchestrator};
use complianceos_config::Settings;
use complianceos_contracts::{
    agent::RequestContext,
    error::{ComplianceError, ComplianceResult},
    finding::Finding,
};
use complianceos_services::{CannedLanguageModel, InMemoryKnowledgeStore};

// ── CLI definition ────────────────────────────────────────────────────────────

/// ComplianceOS: agent-driven regulatory compliance workflows.
#[derive(Parser)]
#[command(
    name = "complianceos",
    about = "Run ComplianceOS agent workflows",
    long_about = "Runs the ComplianceOS agents (Scout, Analyst, Sentinel, Officer)\n\
                  against an in-memory knowledge store and an offline language model."
)]
struct Cli {
    /// Settings file (TOML). Built-in defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Client the request is made on behalf of.
    #[arg(long, global = true)]
    client: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a regulatory feed, then analyse a policy against it.
    Scan {
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        policy: Option<String>,
    },
    /// Run gap analysis on one policy.
    Analyze {
        policy: String,
        /// Open the auto-remediation gate for this run.
        #[arg(long)]
        auto_remediate: bool,
    },
    /// Scan an event batch for PII/PCI leaks.
    Monitor {
        /// JSON array of events. A built-in sample is used when omitted.
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Produce an evidence package.
    Report {
        /// JSON array of findings. No findings when omitted.
        #[arg(long)]
        findings: Option<PathBuf>,
        #[arg(long)]
        score: Option<u32>,
        /// Directory to write the report artifact into.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Index text documents into the knowledge store.
    Ingest {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Break a goal into steps.
    Plan { goal: String },
    /// Show each agent's activity log.
    Activity {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Scan, analyse, monitor and report in one session.
    RunAll,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Set RUST_LOG=info to see agent activity on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("complianceos: failed to encode output: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("complianceos: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> ComplianceResult<Value> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let orchestrator = Orchestrator::new(
        settings,
        Arc::new(CannedLanguageModel::new()),
        Arc::new(InMemoryKnowledgeStore::new()),
    );
    orchestrator.set_current_client(cli.client.clone());
    let ctx = RequestContext::new(cli.client);
    info!(request_id = %ctx.request_id, "request started");

    match cli.command {
        Command::Scan { source, policy } => to_json(
            &orchestrator
                .regulatory_scan(&ctx, source.as_deref(), policy.as_deref())
                .await?,
        ),
        Command::Analyze {
            policy,
            auto_remediate,
        } => {
            if auto_remediate {
                orchestrator.set_auto_remediation(true);
            }
            to_json(&orchestrator.analyze_policy(&ctx, &policy).await?)
        }
        Command::Monitor { events } => {
            let events = match events {
                Some(path) => read_json::<Vec<Value>>(&path)?,
                None => sample_events(),
            };
            to_json(&orchestrator.monitoring_batch(&ctx, &events).await?)
        }
        Command::Report {
            findings,
            score,
            out,
        } => {
            let findings = match findings {
                Some(path) => read_json::<Vec<Finding>>(&path)?,
                None => Vec::new(),
            };
            let package = orchestrator.evidence_report(&ctx, findings, score).await?;
            if let Some(dir) = out {
                let path = dir.join(&package.filename);
                std::fs::write(&path, &package.artifact.bytes).map_err(|e| {
                    ComplianceError::ReportRender {
                        reason: format!("failed to write '{}': {}", path.display(), e),
                    }
                })?;
            }
            to_json(&package)
        }
        Command::Ingest { files } => {
            let mut uploads = Vec::with_capacity(files.len());
            for path in &files {
                uploads.push(DocumentUpload {
                    filename: display_name(path),
                    bytes: std::fs::read(path).map_err(|e| ComplianceError::InvalidInput {
                        reason: format!("failed to read '{}': {}", path.display(), e),
                    })?,
                });
            }
            let outcomes = orchestrator.ingest_documents(&ctx, &uploads).await;
            let stats = orchestrator.knowledge_stats().await?;
            Ok(json!({ "documents": to_json(&outcomes)?, "knowledge_base": to_json(&stats)? }))
        }
        Command::Plan { goal } => {
            let steps = orchestrator.plan(&ctx, &goal).await?;
            Ok(json!({ "goal": goal, "steps": steps }))
        }
        // A fresh process has empty logs, so run the full workflow first.
        Command::Activity { limit } => {
            run_all(&orchestrator, &ctx).await?;
            to_json(&orchestrator.activity(limit))
        }
        Command::RunAll => run_all(&orchestrator, &ctx).await,
    }
}

async fn run_all(orchestrator: &Orchestrator, ctx: &RequestContext) -> ComplianceResult<Value> {
    let scan = orchestrator.regulatory_scan(ctx, None, None).await?;
    let monitoring = orchestrator.monitoring_batch(ctx, &sample_events()).await?;

    let findings: Vec<Finding> = vec![scan.analysis.to_finding()];
    let package = orchestrator.evidence_report(ctx, findings, Some(72)).await?;

    Ok(json!({
        "scan": to_json(&scan)?,
        "monitoring": to_json(&monitoring)?,
        "evidence": to_json(&package)?,
        "knowledge_base": to_json(&orchestrator.knowledge_stats().await?)?,
    }))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sample_events() -> Vec<Value> {
    vec![
        json!({ "source": "auth", "payload": "User login successful" }),
        json!({ "source": "billing", "payload": "Charge 4111 1111 1111 1111 approved" }),
        json!({ "source": "support", "payload": "Reply sent to jane.doe@example.com", "sensitive": true }),
        json!({ "source": "newsletter", "payload": "Welcome mail to joe@example.com", "sensitive": false }),
    ]
}

fn to_json<T: Serialize>(value: &T) -> ComplianceResult<Value> {
    serde_json::to_value(value).map_err(|e| ComplianceError::InvalidInput {
        reason: format!("failed to encode output: {}", e),
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> ComplianceResult<T> {
    let text = std::fs::read_to_string(path).map_err(|e| ComplianceError::InvalidInput {
        reason: format!("failed to read '{}': {}", path.display(), e),
    })?;
    serde_json::from_str(&text).map_err(|e| ComplianceError::InvalidInput {
        reason: format!("failed to parse JSON in '{}': {}", path.display(), e),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
