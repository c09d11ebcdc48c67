//! CLI definition and dispatch.

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::{self, CsvAdapter};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::analysis::{self, Recommendation, SectorReport};
use crate::domain::config_validation::{self, AppConfig, build_config};
use crate::domain::error::SectorScopeError;
use crate::domain::metrics::{MonthlyReturn, PerformanceMetrics};
use crate::domain::questionnaire::{self, Answers, QuestionRecord, Questionnaire};
use crate::domain::sector::{self, SectorTraits, TRAIT_LABELS};
use crate::domain::series::DateRange;
use crate::domain::style::StyleCode;
use crate::ports::data_port::DataPort;

#[derive(Parser, Debug)]
#[command(
    name = "sectorscope",
    about = "Investment style quiz with sector recommendations and performance metrics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Take the 40-question quiz interactively
    Quiz {
        #[command(flatten)]
        data: DataArgs,
        /// Seed for the question order
        #[arg(long)]
        seed: Option<u64>,
        /// Ask questions in table order
        #[arg(long)]
        no_shuffle: bool,
        /// Also show metrics for each recommended sector
        #[arg(long)]
        analyze: bool,
        /// With --analyze, include monthly returns
        #[arg(long, requires = "analyze")]
        monthly: bool,
    },
    /// Classify a saved answers file (CSV with a qid,answer header)
    Classify {
        #[arg(short, long)]
        answers: PathBuf,
    },
    /// Show the recommendation and sector metrics for a style code
    Recommend {
        #[arg(long)]
        code: String,
        #[command(flatten)]
        data: DataArgs,
        /// Include monthly returns for each sector
        #[arg(long)]
        monthly: bool,
    },
    /// Show performance metrics for one sector
    Analyze {
        #[arg(long)]
        sector: String,
        #[command(flatten)]
        data: DataArgs,
        /// Include monthly returns
        #[arg(long)]
        monthly: bool,
    },
    /// List the sector catalog with data availability
    Sectors {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Print the question table
    Questions,
}

/// Options shared by every command that reads sector data.
#[derive(Args, Debug, Default, Clone)]
pub struct DataArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Directory holding <sector>.csv files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Period start (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// Period end (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
}

pub fn run(cli: Cli) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Command::Quiz {
            data,
            seed,
            no_shuffle,
            analyze,
            monthly,
        } => run_quiz(&data, seed, no_shuffle, analyze, monthly, &mut out),
        Command::Classify { answers } => run_classify(&answers, &mut out),
        Command::Recommend {
            code,
            data,
            monthly,
        } => run_recommend(&code, &data, monthly, &mut out),
        Command::Analyze {
            sector,
            data,
            monthly,
        } => run_analyze(&sector, &data, monthly, &mut out),
        Command::Sectors { data } => run_sectors(&data, &mut out),
        Command::Questions => write_questions(&mut out, &Questionnaire::standard()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Loads the INI file when given, otherwise the built-in defaults.
pub fn load_config(path: Option<&PathBuf>) -> Result<AppConfig, SectorScopeError> {
    let adapter = match path {
        Some(p) => {
            eprintln!("Loading config from {}", p.display());
            FileConfigAdapter::from_file(p).map_err(|e| SectorScopeError::ConfigParse {
                file: p.display().to_string(),
                reason: e.to_string(),
            })?
        }
        None => FileConfigAdapter::empty(),
    };
    build_config(&adapter)
}

/// Config file values with command-line overrides applied.
pub fn resolve_config(args: &DataArgs) -> Result<AppConfig, SectorScopeError> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(dir) = &args.data_dir {
        config.data.dir = dir.clone();
    }
    let start = match &args.start {
        Some(s) => config_validation::parse_date(s, "start_date")?,
        None => config.period.start(),
    };
    if start < config_validation::earliest_start() {
        return Err(SectorScopeError::ConfigInvalid {
            section: "analysis".to_string(),
            key: "start_date".to_string(),
            reason: format!(
                "start_date must not be before {}",
                config_validation::earliest_start()
            ),
        });
    }
    let end = match &args.end {
        Some(s) => config_validation::parse_date(s, "end_date")?,
        None => config.period.end(),
    };
    config.period = DateRange::new(start, end)?;
    Ok(config)
}

pub fn make_adapter(config: &AppConfig) -> CsvAdapter {
    CsvAdapter::with_columns(
        config.data.dir.clone(),
        &config.data.date_column,
        &config.data.value_column,
    )
}

fn run_quiz<W: Write>(
    args: &DataArgs,
    seed: Option<u64>,
    no_shuffle: bool,
    analyze: bool,
    monthly: bool,
    out: &mut W,
) -> Result<(), SectorScopeError> {
    let config = resolve_config(args)?;
    let questionnaire = Questionnaire::standard();

    let order: Vec<&QuestionRecord> = if no_shuffle || !config.quiz.shuffle {
        questionnaire.questions().iter().collect()
    } else {
        let mut rng = match seed.or(config.quiz.seed) {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        questionnaire.shuffled(&mut rng)
    };

    let stdin = io::stdin();
    let answers = match run_quiz_session(&order, stdin.lock(), &mut *out)? {
        Some(a) => a,
        None => {
            eprintln!("Quiz aborted");
            return Ok(());
        }
    };

    let code = questionnaire.classify(&answers);
    let recommendation = analysis::recommend(code);
    write_recommendation(out, &recommendation)?;

    if analyze {
        let adapter = make_adapter(&config);
        let reports = analysis::analyze_sectors(&adapter, recommendation.sectors, Some(&config.period));
        write_period(out, &config.period)?;
        write_sector_reports(out, &reports, monthly)?;
    }
    Ok(())
}

/// Asks each question in `order`, reading one answer per line.
///
/// Unrecognized input re-asks the same question. Returns `None` when the user
/// quits with `q` or input ends before every question is answered.
pub fn run_quiz_session<R: BufRead, W: Write>(
    order: &[&QuestionRecord],
    mut input: R,
    out: &mut W,
) -> Result<Option<Answers>, SectorScopeError> {
    let mut answers = Answers::new();
    let total = order.len();

    for (i, question) in order.iter().enumerate() {
        loop {
            writeln!(out, "\n{} / {}", i + 1, total)?;
            writeln!(out, "{}", question.text)?;
            write!(out, "[y/n, q to quit] > ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let token = line.trim();
            if token.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match questionnaire::parse_answer(token) {
                Some(answer) => {
                    answers.insert(question.id, answer);
                    break;
                }
                None => writeln!(out, "Please answer y or n.")?,
            }
        }
    }

    Ok(Some(answers))
}

pub fn run_classify<W: Write>(answers_path: &PathBuf, out: &mut W) -> Result<(), SectorScopeError> {
    let questionnaire = Questionnaire::standard();
    let file = File::open(answers_path)?;
    let answers = csv_adapter::read_answers(file, &questionnaire)?;
    if answers.len() < questionnaire.len() {
        eprintln!(
            "warning: {} of {} questions answered",
            answers.len(),
            questionnaire.len()
        );
    }
    writeln!(out, "{}", questionnaire.classify(&answers))?;
    Ok(())
}

pub fn run_recommend<W: Write>(
    code: &str,
    args: &DataArgs,
    monthly: bool,
    out: &mut W,
) -> Result<(), SectorScopeError> {
    let code: StyleCode = code.parse()?;
    let config = resolve_config(args)?;
    let adapter = make_adapter(&config);

    let recommendation = analysis::recommend(code);
    write_recommendation(out, &recommendation)?;

    let reports = analysis::analyze_sectors(&adapter, recommendation.sectors, Some(&config.period));
    write_period(out, &config.period)?;
    write_sector_reports(out, &reports, monthly)?;
    Ok(())
}

pub fn run_analyze<W: Write>(
    sector_name: &str,
    args: &DataArgs,
    monthly: bool,
    out: &mut W,
) -> Result<(), SectorScopeError> {
    let config = resolve_config(args)?;
    if !sector::is_known(sector_name) {
        eprintln!("warning: {} is not in the sector catalog", sector_name);
    }
    let adapter = make_adapter(&config);
    let data = analysis::analyze_sector(&adapter, sector_name, Some(&config.period))?;

    write_period(out, &config.period)?;
    writeln!(out, "\n=== {} ===", sector_name)?;
    write_metrics(out, &data.metrics)?;
    if monthly {
        write_monthly(out, &data.monthly)?;
    }
    Ok(())
}

pub fn run_sectors<W: Write>(args: &DataArgs, out: &mut W) -> Result<(), SectorScopeError> {
    let config = resolve_config(args)?;
    let adapter = make_adapter(&config);

    for name in sector::names() {
        match adapter.data_range(name) {
            Ok(Some((first, last, n))) => {
                writeln!(out, "{:<16} {} .. {} ({} rows)", name, first, last, n)?
            }
            Ok(None) => writeln!(out, "{:<16} no data", name)?,
            Err(e) => writeln!(out, "{:<16} error: {}", name, e)?,
        }
    }

    match adapter.list_sectors() {
        Ok(found) => {
            for extra in found.iter().filter(|s| !sector::is_known(s)) {
                writeln!(out, "{:<16} (not in catalog)", extra)?;
            }
        }
        Err(e) => tracing::warn!(dir = %config.data.dir.display(), error = %e, "cannot list data directory"),
    }
    Ok(())
}

pub fn write_questions<W: Write>(
    out: &mut W,
    questionnaire: &Questionnaire,
) -> Result<(), SectorScopeError> {
    for q in questionnaire.questions() {
        writeln!(out, "{:>2}  {}  {}  {}", q.id, q.axis, q.polarity, q.text)?;
    }
    Ok(())
}

pub fn write_recommendation<W: Write>(
    out: &mut W,
    rec: &Recommendation,
) -> Result<(), SectorScopeError> {
    writeln!(out, "\n=== Your investment style: {} ===", rec.code)?;
    if let Some(profile) = rec.profile {
        writeln!(out, "{}", profile.description)?;
        writeln!(out, "\nStrengths:")?;
        for s in profile.strengths {
            writeln!(out, "  - {}", s)?;
        }
        writeln!(out, "Weaknesses:")?;
        for w in profile.weaknesses {
            writeln!(out, "  - {}", w)?;
        }
    }

    writeln!(out, "\nRecommended sectors:")?;
    for name in rec.sectors {
        writeln!(out, "  - {}", name)?;
    }

    if let Some(traits) = &rec.average_traits {
        writeln!(out, "\nStyle profile:")?;
        write_traits(out, traits)?;
    }
    Ok(())
}

fn write_traits<W: Write>(out: &mut W, traits: &SectorTraits) -> Result<(), SectorScopeError> {
    for (label, value) in TRAIT_LABELS.iter().zip(traits.to_array()) {
        let bar = "#".repeat((value * 20.0).round() as usize);
        writeln!(out, "  {}  {:.2}  {}", label, value, bar)?;
    }
    Ok(())
}

fn write_period<W: Write>(out: &mut W, period: &DateRange) -> Result<(), SectorScopeError> {
    writeln!(out, "\nPeriod: {} .. {}", period.start(), period.end())?;
    Ok(())
}

pub fn write_metrics<W: Write>(
    out: &mut W,
    metrics: &PerformanceMetrics,
) -> Result<(), SectorScopeError> {
    writeln!(out, "Total Return:       {:.2}%", metrics.total_return)?;
    writeln!(out, "Annual Volatility:  {:.2}%", metrics.annual_volatility)?;
    writeln!(out, "Max Drawdown:       {:.2}%", metrics.max_drawdown)?;
    writeln!(out, "Sharpe Ratio:       {:.2}", metrics.sharpe_ratio)?;
    writeln!(out, "Win Rate:           {:.2}%", metrics.win_rate)?;
    Ok(())
}

fn write_monthly<W: Write>(out: &mut W, months: &[MonthlyReturn]) -> Result<(), SectorScopeError> {
    writeln!(out, "\nMonthly returns:")?;
    for m in months {
        writeln!(out, "  {}  {:>7.1}%", m.label(), m.return_pct)?;
    }
    Ok(())
}

/// Writes metrics per sector; sectors without data get a "no data" line.
pub fn write_sector_reports<W: Write>(
    out: &mut W,
    reports: &[SectorReport],
    monthly: bool,
) -> Result<(), SectorScopeError> {
    for report in reports {
        writeln!(out, "\n=== {} ===", report.sector)?;
        match &report.result {
            Ok(data) => {
                write_metrics(out, &data.metrics)?;
                if monthly {
                    write_monthly(out, &data.monthly)?;
                }
            }
            Err(e) if e.is_no_data() => writeln!(out, "No data available ({})", e)?,
            Err(e) => writeln!(out, "Analysis failed: {}", e)?,
        }
    }
    Ok(())
}
