mod store;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use matchview_core::{Comparison, ComparisonBuilder, ComparisonReport, Panel, SubmissionStore, ViewerConfig};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use walkdir::WalkDir;

use store::DirectoryStore;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "matchview", version, about = "Side-by-side match views for pairwise similarity reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 由单份对比报告生成并排视图 JSON
    Compare {
        /// 对比报告（JSON）
        #[arg(long)]
        report: PathBuf,

        /// 提交根目录，每个子目录为一个提交
        #[arg(long)]
        submissions: PathBuf,

        /// 输出文件；缺省写到标准输出
        #[arg(long)]
        output: Option<PathBuf>,

        /// 配置文件路径（TOML）
        #[arg(long)]
        config: Option<PathBuf>,

        /// 匿名显示的提交 id
        #[arg(long, num_args = 1..)]
        anonymize: Vec<String>,

        /// 格式化输出
        #[arg(long)]
        pretty: bool,
    },

    /// 批量处理目录下的全部报告（*.json）
    Batch {
        /// 报告目录
        #[arg(long)]
        reports: PathBuf,

        /// 提交根目录
        #[arg(long)]
        submissions: PathBuf,

        /// 输出目录（每份报告写一个 <name>.view.json）
        #[arg(long)]
        output: PathBuf,

        /// 线程数（"auto"=CPU 核心数；覆盖配置文件）
        #[arg(long)]
        threads: Option<String>,

        /// 配置文件路径（TOML）
        #[arg(long)]
        config: Option<PathBuf>,

        /// 匿名显示的提交 id
        #[arg(long, num_args = 1..)]
        anonymize: Vec<String>,
    },

    /// 打印指定数量的匹配颜色
    Palette {
        #[arg(long)]
        count: usize,

        /// 配置文件路径（TOML）
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// 输出结构：显示名 + 对比视图
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonOutput<'a> {
    first_display_name: String,
    second_display_name: String,
    comparison: &'a Comparison,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { report, submissions, output, config, anonymize, pretty } => {
            info!(?report, ?submissions, "building comparison");
            let config = load_config(config.as_deref())?;
            let store = DirectoryStore::new(submissions).with_anonymous(anonymize);

            let parsed = ComparisonReport::from_path(&report).with_context(|| format!("read report {}", report.display()))?;
            let comparison = ComparisonBuilder::new(config.palette).build(&parsed, &store).context("build comparison")?;

            match output {
                Some(path) => {
                    let mut out = BufWriter::new(File::create(&path).context("create output file")?);
                    write_output(&mut out, &comparison, &store, pretty)?;
                    out.flush().context("flush output")?;
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut out = stdout.lock();
                    write_output(&mut out, &comparison, &store, pretty)?;
                    writeln!(out)?;
                }
            }
            info!(matches = comparison.all_matches.len(), "comparison written");
        }
        Commands::Batch { reports, submissions, output, threads, config, anonymize } => {
            info!(?reports, ?submissions, ?output, "starting batch");
            let mut config = load_config(config.as_deref())?;
            if let Some(t) = threads {
                config.threads = parse_threads(&t);
            }
            let store = DirectoryStore::new(submissions).with_anonymous(anonymize);
            std::fs::create_dir_all(&output).context("create output directory")?;

            let mut failed = 0usize;
            let mut names = Vec::new();
            let mut parsed = Vec::new();
            for path in list_reports(&reports) {
                match ComparisonReport::from_path(&path) {
                    Ok(r) => {
                        names.push(output_name(&path));
                        parsed.push(r);
                    }
                    Err(err) => {
                        error!(path = %path.display(), %err, "skipping invalid report");
                        failed += 1;
                    }
                }
            }

            let builder = ComparisonBuilder::new(config.palette);
            let results = builder.build_all(&parsed, &store, config.threads).context("schedule comparisons")?;
            let mut written = 0usize;
            for (name, result) in names.iter().zip(results) {
                match result {
                    Ok(comparison) => {
                        let path = output.join(name);
                        let mut out = BufWriter::new(File::create(&path).with_context(|| format!("create {}", path.display()))?);
                        write_output(&mut out, &comparison, &store, false)?;
                        out.flush().context("flush output")?;
                        written += 1;
                    }
                    Err(err) => {
                        error!(report = %name, %err, "comparison failed");
                        failed += 1;
                    }
                }
            }

            info!(written, failed, "batch finished");
            if failed > 0 {
                bail!("{failed} report(s) failed");
            }
        }
        Commands::Palette { count, config } => {
            let config = load_config(config.as_deref())?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for color in config.palette.generate(count) {
                writeln!(out, "{color}")?;
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，避免混入 stdout 的 JSON
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(std::io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    match path {
        Some(p) => ViewerConfig::from_path(p).with_context(|| format!("load config {}", p.display())),
        None => Ok(ViewerConfig::default()),
    }
}

fn write_output(out: &mut dyn Write, comparison: &Comparison, store: &dyn SubmissionStore, pretty: bool) -> Result<()> {
    let view = ComparisonOutput {
        first_display_name: store.display_name(comparison.submission_id(Panel::First)),
        second_display_name: store.display_name(comparison.submission_id(Panel::Second)),
        comparison,
    };
    if pretty {
        serde_json::to_writer_pretty(out, &view)?;
    } else {
        serde_json::to_writer(out, &view)?;
    }
    Ok(())
}

/// 报告目录下的 *.json（单层，按文件名排序）
fn list_reports(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry { Ok(e) => e, Err(_) => continue };
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == "json") {
            files.push(entry.into_path());
        }
    }
    files
}

fn output_name(report: &Path) -> String {
    let stem = report.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    format!("{stem}.view.json")
}

/// 解析线程参数
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") { return None; }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
