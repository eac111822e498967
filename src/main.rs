//! CLI entry point for the results viewer.
//!
//! Provides subcommands for logging in to the results server, viewing the
//! latest exam, listing and inspecting exams, tracking performance over
//! time, and exporting subject marks to CSV or JSON.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use results_viewer::analyzers::{
    ExamSummary, analyze_history, grade_to_color, percentage_to_grade,
};
use results_viewer::config::AppConfig;
use results_viewer::fetch::BasicClient;
use results_viewer::fetch::auth::BearerAuth;
use results_viewer::infra::school::SchoolApiClient;
use results_viewer::model::ExamResult;
use results_viewer::normalize::{SubjectMaxMarks, latest_exam, normalize_all};
use results_viewer::output::{
    append_subject_rows, history_lines, print_json, print_pretty, summary_lines, write_json,
};
use results_viewer::services::ResultsApi;
use results_viewer::session::{Authenticator, FileTokenStore};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "results")]
#[command(about = "View exam results, grades, and performance trends", long_about = None)]
struct Cli {
    /// Results server base URL (overrides RESULTS_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-subject maximum marks: a number, "exam-total", or "even-split"
    #[arg(long, global = true)]
    max_marks: Option<SubjectMaxMarks>,

    /// Print JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Remove the stored session token
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Summarize the most recent exam
    Summary {
        /// Student to look up (defaults to the logged-in user)
        #[arg(short, long)]
        student_id: Option<String>,
    },
    /// List every exam with its overall grade
    Exams {
        #[arg(short, long)]
        student_id: Option<String>,
    },
    /// Subject-by-subject breakdown of one exam
    Details {
        #[arg(short, long)]
        exam_id: i64,

        #[arg(short, long)]
        student_id: Option<String>,
    },
    /// Performance across all exams
    Trend {
        #[arg(short, long)]
        student_id: Option<String>,
    },
    /// Append subject marks for every exam to a CSV file, or write a
    /// `.json` file with the full results
    Export {
        #[arg(short, long, default_value = "results.csv")]
        output: String,

        #[arg(short, long)]
        student_id: Option<String>,
    },
    /// Look up the grade and color for a percentage (no login needed)
    Grade {
        #[arg(allow_negative_numbers = true)]
        percentage: f64,
    },
}

type Auth = Authenticator<SchoolApiClient<BasicClient>, FileTokenStore>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/results_viewer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("results_viewer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    if let Some(policy) = cli.max_marks {
        config.subject_max_marks = policy;
    }

    let http = BasicClient::with_timeout(config.http_timeout)?;
    let api = SchoolApiClient::new(config.base_url.clone(), http.clone());
    let mut auth: Auth = Authenticator::new(api, FileTokenStore::new(&config.token_path));

    match cli.command {
        Commands::Login { email, password } => {
            let session = auth.login(&email, &password).await?;
            info!(
                user_id = %session.user_id(),
                role = %session.claims.role,
                "Session saved"
            );
        }
        Commands::Logout => {
            auth.logout().await?;
        }
        Commands::Whoami => {
            let state = auth.restore().await;
            match &state.session {
                Some(session) if cli.json => print_json(&session.claims)?,
                Some(session) => info!(
                    user_id = %session.user_id(),
                    role = %session.claims.role,
                    college_id = session.claims.college_id.as_deref().unwrap_or("-"),
                    "Logged in"
                ),
                None => match &state.error {
                    Some(error) => warn!(%error, "Not logged in"),
                    None => info!("Not logged in"),
                },
            }
        }
        Commands::Summary { student_id } => {
            let (student_id, exams) = load_exams(&mut auth, &http, &config, student_id).await?;
            let Some(latest) = latest_exam(&exams) else {
                info!(%student_id, "No results published yet");
                return Ok(());
            };
            let exam = ExamResult::from_api(latest, &student_id, config.subject_max_marks);
            let summary = ExamSummary::from_exam(&exam);
            if cli.json {
                print_json(&summary)?;
            } else {
                for line in summary_lines(&summary) {
                    info!("{line}");
                }
            }
        }
        Commands::Exams { student_id } => {
            let (student_id, exams) = load_exams(&mut auth, &http, &config, student_id).await?;
            let mut results = normalize_all(&exams, &student_id, config.subject_max_marks);
            results.sort_by_key(|r| std::cmp::Reverse(r.exam_id));
            if cli.json {
                print_json(&results)?;
            } else {
                for r in &results {
                    info!(
                        exam_id = r.exam_id,
                        date = %r.exam_date,
                        percentage = r.percentage,
                        grade = %r.grade,
                        "{}",
                        r.exam_name
                    );
                }
            }
        }
        Commands::Details {
            exam_id,
            student_id,
        } => {
            let (student_id, exams) = load_exams(&mut auth, &http, &config, student_id).await?;
            let exam = exams
                .iter()
                .find(|e| e.exam_id == exam_id)
                .with_context(|| format!("exam {exam_id} not found"))?;
            let exam = ExamResult::from_api(exam, &student_id, config.subject_max_marks);
            print_pretty(&exam);

            if cli.json {
                print_json(&exam)?;
            } else {
                for line in summary_lines(&ExamSummary::from_exam(&exam)) {
                    info!("{line}");
                }
                for s in &exam.subjects {
                    info!(
                        kind = s.kind.as_deref().unwrap_or("-"),
                        marks = %format!("{}/{}", s.obtained_marks, s.max_marks),
                        grade = %s.grade,
                        color = %s.grade.color(),
                        "{}",
                        s.subject_name
                    );
                }
            }
        }
        Commands::Trend { student_id } => {
            let (student_id, exams) = load_exams(&mut auth, &http, &config, student_id).await?;
            let results = normalize_all(&exams, &student_id, config.subject_max_marks);
            let history = analyze_history(&results);
            if cli.json {
                print_json(&history)?;
            } else {
                for line in history_lines(&history) {
                    info!("{line}");
                }
            }
        }
        Commands::Export { output, student_id } => {
            let (student_id, exams) = load_exams(&mut auth, &http, &config, student_id).await?;
            let results = normalize_all(&exams, &student_id, config.subject_max_marks);
            if output.ends_with(".json") {
                write_json(&output, &results)?;
                info!(output = %output, exams = results.len(), "Export complete");
            } else {
                let mut rows = 0;
                for exam in &results {
                    rows += append_subject_rows(&output, exam)?;
                }
                info!(output = %output, rows, "Export complete");
            }
        }
        Commands::Grade { percentage } => {
            let grade = percentage_to_grade(percentage);
            let color = grade_to_color(grade.label());
            info!(
                percentage,
                grade = %grade,
                band_min = grade.min_percentage(),
                color = %color,
                hex = color.hex().unwrap_or("-"),
                "Grade"
            );
        }
    }

    Ok(())
}

/// Restores the session and fetches every exam for the requested student.
///
/// Falls back to the logged-in user's id when no student is given. Requests
/// carry the session token when there is one.
#[tracing::instrument(skip(auth, http, config))]
async fn load_exams(
    auth: &mut Auth,
    http: &BasicClient,
    config: &AppConfig,
    student_id: Option<String>,
) -> Result<(String, Vec<results_viewer::model::ApiExamResult>)> {
    let state = auth.restore().await;
    if let Some(error) = &state.error {
        warn!(%error, "Continuing without a session");
    }
    let session = state.session.clone();

    let student_id = match (student_id, &session) {
        (Some(id), _) => id,
        (None, Some(session)) => session.user_id().to_string(),
        (None, None) => bail!("not logged in; run `results login` or pass --student-id"),
    };

    let exams = match &session {
        Some(session) => {
            let authed = BearerAuth::new(http.clone(), &session.token)
                .context("stored token is not a valid header value")?;
            SchoolApiClient::new(config.base_url.clone(), authed)
                .student_results(&student_id)
                .await?
        }
        None => auth.api().student_results(&student_id).await?,
    };

    info!(%student_id, exam_count = exams.len(), "Results loaded");
    Ok((student_id, exams))
}
