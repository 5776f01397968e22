//! 命令行入口
//!
//! 参数定义用 clap derive；各子命令的实现也放在这里。

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};

use crate::app::App;
use crate::browser::HeadlessPdfPrinter;
use crate::config::Config;
use crate::document::export::WORD_FILE_NAME;
use crate::document::{split, Exporter, PdfTarget, RenderedDocument};
use crate::error::{AppError, AppResult};
use crate::models::{
    load_generation_form, Alternative, BloomLevel, DifficultyLevel, GenerationForm, QuestionSpec,
    QuestionType,
};
use crate::prompts::alternatives::assertion_logic;
use crate::prompts::compile_request;
use crate::services::{CancellationToken, LlmService, TextGenerator};
use crate::workflow::{Action, Mode};

/// Academicus AI: 按 INEP/ENADE 规范生成和审核题目
#[derive(Parser, Debug)]
#[command(name = "academicus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML 配置文件（环境变量优先）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 输出 debug 日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 只编译并打印提示词，不调用模型
    Prompt(RequestArgs),

    /// 生成题目并按需导出
    Generate(GenerateArgs),

    /// 审核已有题目
    Audit(AuditArgs),

    /// 导出保存过的模型输出
    Export(ExportArgs),

    /// 打印题型、布鲁姆层级和难度说明
    Catalog,
}

/// 生成请求参数；提供 `--request` 时先读文件，再由命令行参数覆盖
#[derive(Args, Debug, Default)]
pub struct RequestArgs {
    /// 请求文件（TOML 格式的表单）
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// 课程名称
    #[arg(long)]
    pub course: Option<String>,

    /// 知识内容
    #[arg(long)]
    pub content: Option<String>,

    /// 学习目标
    #[arg(long)]
    pub objective: Option<String>,

    /// 题型（single-answer / incomplete-statement / multiple-complementation / assertion-reason / discursive）
    #[arg(long = "type")]
    pub question_type: Option<QuestionType>,

    /// 布鲁姆层级（remember … create）
    #[arg(long)]
    pub bloom: Option<BloomLevel>,

    /// 难度（easy / medium / hard）
    #[arg(long)]
    pub difficulty: Option<DifficultyLevel>,

    /// 题目数量 1-10
    #[arg(short, long)]
    pub quantity: Option<u8>,

    /// 多项组合题的断言数量 3-5
    #[arg(long)]
    pub range: Option<u8>,

    /// 断言-理由题的指定答案 A-E
    #[arg(long)]
    pub answer: Option<Alternative>,
}

impl RequestArgs {
    pub async fn to_form(&self) -> AppResult<GenerationForm> {
        let mut form = match &self.request {
            Some(path) => load_generation_form(path).await?,
            None => GenerationForm::default(),
        };

        if let Some(course) = &self.course {
            form.course = course.clone();
        }
        if let Some(content) = &self.content {
            form.content = content.clone();
        }
        if let Some(objective) = &self.objective {
            form.learning_objective = objective.clone();
        }
        if let Some(question_type) = self.question_type {
            form.question_type = question_type;
        }
        if let Some(bloom) = self.bloom {
            form.bloom_level = bloom;
        }
        if let Some(difficulty) = self.difficulty {
            form.difficulty = difficulty;
        }
        if let Some(quantity) = self.quantity {
            form.quantity = quantity;
        }
        if let Some(range) = self.range {
            form.multiple_range = range;
        }
        if let Some(answer) = self.answer {
            form.correct_alternative = answer;
        }

        Ok(form)
    }
}

/// 导出选项
#[derive(Args, Debug, Default)]
pub struct ExportFlags {
    /// 导出 Word 文档
    #[arg(long)]
    pub word: bool,

    /// 导出完整 PDF
    #[arg(long)]
    pub pdf: bool,

    /// 只导出技术报告 PDF
    #[arg(long)]
    pub report_pdf: bool,

    /// 导出目录（默认取配置 output_dir）
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

impl ExportFlags {
    fn any(&self) -> bool {
        self.word || self.pdf || self.report_pdf
    }

    fn dir(&self, config: &Config) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_dir))
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// 把模型原始输出保存为 markdown
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 以 JSON 打印拆分后的题目和报告
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub export: ExportFlags,
}

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// 题目文件，`-` 表示标准输入
    #[arg(short, long)]
    pub input: String,

    /// 把审核报告保存为 markdown
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 以 JSON 打印拆分后的题目和报告
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub export: ExportFlags,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// 之前保存的模型输出
    #[arg(short, long)]
    pub markdown: PathBuf,

    #[command(flatten)]
    pub export: ExportFlags,
}

/// 加载配置；日志已初始化，失败原因先记录再返回
pub fn load_config(path: Option<&Path>) -> AppResult<Config> {
    Config::load(path).map_err(|e| {
        error!("❌ 配置加载失败: {}", e);
        e
    })
}

/// 执行子命令
pub async fn run(command: Command, config: Config, cancel: &CancellationToken) -> AppResult<()> {
    match command {
        Command::Prompt(args) => {
            let request = args.to_form().await?.validate()?;
            if let Some(note) = answer_key_note(request.spec) {
                info!("🎯 {}", note);
            }
            println!("{}", compile_request(&request));
            Ok(())
        }
        Command::Generate(args) => {
            let form = args.request.to_form().await?;
            let service = LlmService::new(&config)?;
            let mut app = App::new(config, service);
            app.dispatch(Action::ReplaceForm(form));
            submit_and_export(&mut app, cancel, args.output.as_deref(), args.json, &args.export).await
        }
        Command::Audit(args) => {
            let input = read_input(&args.input).await?;
            let service = LlmService::new(&config)?;
            let mut app = App::new(config, service);
            app.dispatch(Action::SwitchMode(Mode::Auditor));
            app.dispatch(Action::SetAuditInput(input));
            submit_and_export(&mut app, cancel, args.output.as_deref(), args.json, &args.export).await
        }
        Command::Export(args) => export_markdown(&config, &args).await,
        Command::Catalog => {
            print_catalog();
            Ok(())
        }
    }
}

async fn submit_and_export<G: TextGenerator>(
    app: &mut App<G>,
    cancel: &CancellationToken,
    output: Option<&Path>,
    json: bool,
    flags: &ExportFlags,
) -> AppResult<()> {
    let document = app.submit(cancel).await?;

    let text = app.state().output.clone().unwrap_or_default();
    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!("{}", text);
    }

    if let Some(path) = output {
        tokio::fs::write(path, &text)
            .await
            .map_err(|e| AppError::file(path.display().to_string(), e))?;
        info!("💾 已保存模型输出: {}", path.display());
    }

    if !flags.any() {
        return Ok(());
    }

    let dir = flags.dir(app.config());
    let printer = HeadlessPdfPrinter::new(app.config());
    if flags.word {
        app.export_word(&dir.join(WORD_FILE_NAME)).await?;
    }
    if flags.pdf {
        let target = PdfTarget::Full;
        app.export_pdf(target, &dir.join(target.file_name()), &printer)
            .await?;
    }
    if flags.report_pdf {
        let target = PdfTarget::ReportOnly;
        app.export_pdf(target, &dir.join(target.file_name()), &printer)
            .await?;
    }
    Ok(())
}

async fn export_markdown(config: &Config, args: &ExportArgs) -> AppResult<()> {
    if !args.export.any() {
        warn!("⚠️ 未指定导出格式（--word / --pdf / --report-pdf）");
        return Ok(());
    }

    let markdown = tokio::fs::read_to_string(&args.markdown)
        .await
        .map_err(|e| AppError::file(args.markdown.display().to_string(), e))?;
    let rendered = RenderedDocument::from_document(&split(&markdown));

    let exporter = Exporter::new();
    let dir = args.export.dir(config);
    let printer = HeadlessPdfPrinter::new(config);

    if args.export.word {
        exporter
            .export_word(
                &rendered,
                &dir.join(WORD_FILE_NAME),
                chrono::Local::now().date_naive(),
            )
            .await?;
    }
    for (enabled, target) in [
        (args.export.pdf, PdfTarget::Full),
        (args.export.report_pdf, PdfTarget::ReportOnly),
    ] {
        if enabled {
            exporter
                .export_pdf(&rendered, target, &dir.join(target.file_name()), &printer)
                .await?;
        }
    }
    Ok(())
}

async fn read_input(source: &str) -> AppResult<String> {
    if source == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .map_err(|e| AppError::file("<stdin>", e))?;
        return Ok(buffer);
    }
    tokio::fs::read_to_string(source)
        .await
        .map_err(|e| AppError::file(source, e))
}

/// 断言-理由题指定答案对应的判断，其他题型没有
fn answer_key_note(spec: QuestionSpec) -> Option<String> {
    match spec {
        QuestionSpec::AssertionReason { answer_key } => Some(format!(
            "Gabarito {}: {}",
            answer_key,
            assertion_logic(answer_key)
        )),
        _ => None,
    }
}

fn print_catalog() {
    println!("Taxonomia de Bloom");
    for level in BloomLevel::pyramid() {
        let info = level.info();
        println!("  {:<10} {}", level.label(), info.description);
        println!("  {:<10} Verbos: {}", "", info.verbs);
    }

    println!("\nNível de Dificuldade");
    for level in DifficultyLevel::ALL {
        println!("  {:<8} {}", level.label(), level.calibration());
    }

    println!("\nTipos de Questão");
    for question_type in QuestionType::ALL {
        let info = question_type.info();
        println!("\n## {} ({})", question_type.label(), question_type.id());
        println!("{}", info.description);
        println!("\nExemplo:\n{}", question_type.example(Default::default()));
        println!("\nDica: {}", info.tip);
        if question_type == QuestionType::AssertionReason {
            println!("\nGabaritos:");
            for answer_key in Alternative::ALL {
                println!("  {}) {}", answer_key, assertion_logic(answer_key));
            }
        }
    }
}
