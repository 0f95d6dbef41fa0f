use clap::{Parser, Subcommand};
use course_form_core::app::request::{add_course, delete_course, list_courses};
use course_form_core::client::request::NoWasmClient;
use course_form_core::config::{ClientConfig, FormFields, DEFAULT_API_URL, DEFAULT_TEACHER_ID};
use course_form_core::error::{ErrorKind, Result};
use course_form_core::interface::HttpClient;
use course_form_core::model::structs::CourseForm;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "course-form")]
#[command(about = "Add, list and delete courses from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the course service
    #[arg(long, global = true, env = "COURSE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Teacher the courses belong to
    #[arg(long, global = true, env = "COURSE_TEACHER_ID", default_value_t = DEFAULT_TEACHER_ID)]
    teacher_id: i32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "COURSE_LOG", default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Submit the course form
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Show the teacher's courses
    List,
    /// Delete a course
    Delete {
        course_id: i32,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

fn init_logger(level: LevelFilter) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                level = colors.color(record.level()),
                message = message,
                target = record.target(),
            ))
        })
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| ErrorKind::ParseError(format!("Failed to initialize logger: {e}")).into())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level)?;

    let config = ClientConfig {
        api_url: cli.api_url,
        teacher_id: cli.teacher_id,
        ..Default::default()
    };
    let client = NoWasmClient::new(config).await?;

    match cli.command {
        Command::Add { name, description } => {
            add_course(client, FormFields::default(), CourseForm { name, description }).await?;
        }
        Command::List => {
            list_courses(&client).await?;
        }
        Command::Delete { course_id, yes } => {
            if !delete_course(client, course_id, yes).await? {
                println!("已取消");
            }
        }
    }

    Ok(())
}
