use std::fmt::Write as _;
use std::io::Read;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;
use crate::workflows::insights::{feature_importance, InsightFeature, PortfolioInsights};
use crate::workflows::loan::{DecisionEngine, EvaluationOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "loan-decision",
    about = "Score a loan application and explain the decision",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[command(flatten)]
    pub predict: PredictArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one applicant (default command)
    Predict(PredictArgs),
    /// Print the published portfolio approval statistics
    Insights(InsightsArgs),
    /// Print the published share of influence per feature
    FeatureImportance,
}

#[derive(Args, Debug, Default, Clone)]
pub struct PredictArgs {
    /// Applicant as a JSON object. Reads stdin when omitted or '-'
    pub input: Option<String>,
    /// Pretty-print the JSON decision
    #[arg(long)]
    pub pretty: bool,
    /// Reject inputs the loan application form would not accept
    #[arg(long)]
    pub strict: bool,
    /// Write a score breakdown to stderr
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct InsightsArgs {
    /// Only print the approval breakdown for this feature
    #[arg(long, value_enum)]
    pub feature: Option<InsightFeature>,
}

pub fn run() -> Result<(), AppError> {
    let Cli { command, predict } = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let command = command.unwrap_or(Command::Predict(predict));
    let rendered = execute(command, &config, std::io::stdin().lock())?;
    println!("{rendered}");
    Ok(())
}

/// Runs `command` and returns what belongs on stdout.
pub fn execute<R: Read>(
    command: Command,
    config: &AppConfig,
    stdin: R,
) -> Result<String, AppError> {
    let pretty = config.output.pretty;

    match command {
        Command::Predict(args) => run_predict(args, pretty, stdin),
        Command::Insights(InsightsArgs { feature: Some(feature) }) => {
            to_json(&feature.approval_stats(), pretty)
        }
        Command::Insights(InsightsArgs { feature: None }) => {
            to_json(&PortfolioInsights::published(), pretty)
        }
        Command::FeatureImportance => to_json(&feature_importance(), pretty),
    }
}

fn run_predict<R: Read>(
    args: PredictArgs,
    pretty: bool,
    mut stdin: R,
) -> Result<String, AppError> {
    let PredictArgs {
        input,
        pretty: pretty_flag,
        strict,
        explain,
    } = args;

    let raw = match input {
        Some(raw) if raw != "-" => raw,
        _ => {
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut engine = DecisionEngine::standard();
    if strict {
        engine = engine.with_strict_validation();
    }

    let outcome = engine.evaluate_json(&raw)?;
    info!(result = %outcome.decision.result, strict, "applicant scored");

    if explain {
        eprint!("{}", explain_report(&outcome));
    }

    to_json(&outcome.decision, pretty || pretty_flag)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

/// Human-readable breakdown of how the score was assembled.
pub fn explain_report(outcome: &EvaluationOutcome) -> String {
    let decision = &outcome.decision;
    let mut report = String::new();

    writeln!(&mut report, "Loan decision breakdown").expect("write title");
    writeln!(
        &mut report,
        "Total income {:.2}, income to loan ratio {:.4}",
        outcome.record.total_income, outcome.record.income_to_debt_ratio
    )
    .expect("write derived features");

    writeln!(&mut report, "\nScore components").expect("write components heading");
    for component in &outcome.components {
        writeln!(
            &mut report,
            "- {}: signal {:.3} x weight {:.2} = {:.4}",
            component.factor, component.signal, component.weight, component.contribution
        )
        .expect("write component");
    }
    writeln!(
        &mut report,
        "Score {:.4} -> {} ({}% confidence)",
        outcome.score,
        decision.result.summary(),
        decision.confidence
    )
    .expect("write score");

    writeln!(&mut report, "\nKey factors").expect("write factors heading");
    for factor in &decision.key_factors {
        writeln!(&mut report, "- {}: {}", factor.name, factor.impact.label())
            .expect("write factor");
    }

    if decision.recommendations.is_empty() {
        writeln!(&mut report, "\nRecommendations: none").expect("write recommendations");
    } else {
        writeln!(&mut report, "\nRecommendations").expect("write recommendations heading");
        for note in &decision.recommendations {
            writeln!(&mut report, "- {note}").expect("write recommendation");
        }
    }

    report
}
