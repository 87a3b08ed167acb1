//! Resume tailor: structured resume parsing and job-specific tailoring

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use resume_tailor::cli::{self, Cli, Commands, ConfigAction};
use resume_tailor::config::{Config, OutputFormat};
use resume_tailor::input::InputManager;
use resume_tailor::llm::client::GeminiClient;
use resume_tailor::llm::job_analyzer::JobAnalyzer;
use resume_tailor::llm::optimizer::ResumeOptimizer;
use resume_tailor::llm::{GenerationParams, TextGenerator};
use resume_tailor::output::{save_to_file, suggest_filename, DocxWriter, ResumeRenderer};
use resume_tailor::parser::ResumeParser;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if let Err(e) = run_command(cli.command, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config_path: &Path) -> Result<()> {
    if let Commands::Config { action } = &command {
        return run_config(action.as_ref(), config_path);
    }

    let config = Config::load_from(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    debug!("Loaded configuration from {}", config_path.display());

    match command {
        Commands::Parse { resume, output, save } => {
            let format = output_format(output.as_deref(), &config)?;
            run_parse(&config, &resume, format, save.as_deref())
        }
        Commands::Optimize {
            resume,
            job,
            output_docx,
            output,
            save,
        } => {
            let format = output_format(output.as_deref(), &config)?;
            run_optimize(&config, &resume, &job, output_docx, format, save.as_deref()).await
        }
        Commands::Config { .. } => Ok(()),
    }
}

fn output_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(anyhow::Error::msg),
        None => Ok(config.output.format),
    }
}

fn run_parse(config: &Config, resume: &Path, format: OutputFormat, save: Option<&Path>) -> Result<()> {
    cli::validate_file_extension(resume, cli::RESUME_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Resume file: {}", e))?;

    println!("🚀 Parsing resume");
    println!("📄 Resume: {}", resume.display());

    let parser = ResumeParser::new(&config.parsing);
    let record = parser
        .parse(resume)
        .with_context(|| format!("Failed to parse {}", resume.display()))?;

    println!(
        "✅ Found {} skills, {} jobs, {} schools",
        record.skills.len(),
        record.experience.len(),
        record.education.len()
    );

    let rendered = ResumeRenderer::from_config(&config.output).render(&record, format)?;
    emit(&rendered, save)
}

async fn run_optimize(
    config: &Config,
    resume: &Path,
    job: &Path,
    output_docx: Option<PathBuf>,
    format: OutputFormat,
    save: Option<&Path>,
) -> Result<()> {
    cli::validate_file_extension(resume, cli::RESUME_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Resume file: {}", e))?;
    cli::validate_file_extension(job, cli::JOB_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Job listing file: {}", e))?;

    let api_key = config.api_key()?;

    println!("🚀 Tailoring resume");
    println!("📄 Resume: {}", resume.display());
    println!("💼 Job listing: {}", job.display());

    let record = ResumeParser::new(&config.parsing)
        .parse(resume)
        .with_context(|| format!("Failed to parse {}", resume.display()))?;
    let job_text = InputManager::new()
        .read_job_listing(job)
        .with_context(|| format!("Failed to read {}", job.display()))?;
    info!("Job listing: {} characters", job_text.len());

    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(&config.llm, api_key)?);
    let params = GenerationParams::from(&config.llm);
    println!("🤖 Model: {}", generator.model_name());

    let pb = spinner("Analyzing job listing...");
    let analysis = JobAnalyzer::new(generator.clone(), params).analyze(&job_text).await;
    pb.finish_and_clear();
    let analysis = analysis.context("Job analysis failed")?;
    println!(
        "🔍 Job analysis: {} required skills, {} keywords",
        analysis.required_skills.len(),
        analysis.keywords.len()
    );

    let pb = spinner("Tailoring resume...");
    let optimized = ResumeOptimizer::new(generator, params)
        .optimize(&record, &analysis)
        .await;
    pb.finish_and_clear();

    if let Some(warning) = &optimized.warning {
        println!("⚠️  {}", warning);
    }

    let docx_path = output_docx.unwrap_or_else(|| {
        config
            .output
            .output_dir
            .join(suggest_filename(resume, "docx", config.output.timestamp_filenames))
    });
    DocxWriter::new()
        .save(&optimized.resume, &docx_path)
        .with_context(|| format!("Failed to write {}", docx_path.display()))?;
    println!("📝 Tailored resume written to {}", docx_path.display());

    let rendered = ResumeRenderer::from_config(&config.output).render_optimized(&optimized, format)?;
    emit(&rendered, save)
}

fn run_config(action: Option<&ConfigAction>, config_path: &Path) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            let config = Config::load_from(config_path)?;
            println!("⚙️  Current Configuration ({})\n", config_path.display());
            println!(
                "{}",
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?
            );
        }
        Some(ConfigAction::Reset) => {
            println!("🔄 Resetting configuration to defaults...");
            Config::default().save_to(config_path)?;
            println!("✅ Configuration reset successfully!");
        }
        Some(ConfigAction::Path) => {
            println!("{}", config_path.display());
        }
    }
    Ok(())
}

fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_to_file(rendered, path)
                .with_context(|| format!("Failed to save output to {}", path.display()))?;
            println!("💾 Output saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
