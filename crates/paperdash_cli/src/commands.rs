//! Subcommand handlers.

use crate::{Commands, DataFormat, ProjectCommands, RenderFormat};
use paperdash_core::db::open_db;
use paperdash_core::{
    build_dashboard, export_csv, export_json, import_csv, import_json, parse_instant, Clock,
    DashboardConfig, DashboardRenderer, HtmlRenderer, ProjectDraft, ProjectId, ProjectRecord,
    ProjectService, ProjectStore, SqliteProjectRepository, SystemClock, TextRenderer,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn Error>>;

/// Argument problems detected after parsing.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CliError {
    MissingDataSource,
    UnknownProject(String),
    InvalidNow(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDataSource => {
                write!(f, "no data source: pass --data or --db, or set db_path in the config")
            }
            Self::UnknownProject(key) => write!(f, "no project named or identified by `{key}`"),
            Self::InvalidNow(raw) => write!(f, "cannot parse --now `{raw}`, expected YYYY-MM-DD"),
        }
    }
}

impl Error for CliError {}

pub(crate) fn run(command: Commands, config: &DashboardConfig) -> CliResult<()> {
    match command {
        Commands::Render {
            data,
            db,
            format,
            months,
            now,
            out,
        } => {
            let projects = match data {
                Some(path) => read_projects(&path, data_format(&path, None))?,
                None => load_store(db.as_deref(), config)?.into_projects(),
            };
            let rendered = render(&projects, config, format, months, now.as_deref())?;
            write_output(out.as_deref(), &rendered)
        }
        Commands::Import { file, db } => {
            let projects = read_projects(&file, data_format(&file, None))?;
            let mut conn = open_db(store_path(db.as_deref(), config)?)?;
            let mut service = ProjectService::new(SqliteProjectRepository::try_new(&mut conn)?);
            let store = service.load_store()?;
            let update = service.import_projects(&store, projects)?;
            println!("imported {} projects", update.value);
            Ok(())
        }
        Commands::Export { file, db, format } => {
            let store = load_store(db.as_deref(), config)?;
            write_projects(&file, data_format(&file, format), store.projects())?;
            println!("exported {} projects", store.len());
            Ok(())
        }
        Commands::Project { db, command } => run_project(command, db.as_deref(), config),
    }
}

fn run_project(
    command: ProjectCommands,
    db: Option<&Path>,
    config: &DashboardConfig,
) -> CliResult<()> {
    let mut conn = open_db(store_path(db, config)?)?;
    let mut service = ProjectService::new(SqliteProjectRepository::try_new(&mut conn)?);
    let store = service.load_store()?;

    match command {
        ProjectCommands::Add { name } => {
            let update = service.create_project(&store, ProjectDraft::named(name))?;
            println!("{}", update.value);
        }
        ProjectCommands::Rename { project, new_name } => {
            let id = resolve_project(&store, &project)?;
            service.rename_project(&store, id, &new_name)?;
        }
        ProjectCommands::Delete { project } => {
            let id = resolve_project(&store, &project)?;
            let update = service.delete_project(&store, id)?;
            println!("deleted {} ({} papers)", update.value.name, update.value.papers.len());
        }
        ProjectCommands::List => {
            for project in store.projects() {
                println!("{}\t{}\t{} papers", project.id, project.name, project.papers.len());
            }
        }
    }
    Ok(())
}

/// Builds the dashboard and renders it in `format`.
pub(crate) fn render(
    projects: &[ProjectRecord],
    config: &DashboardConfig,
    format: RenderFormat,
    months: Option<usize>,
    now: Option<&str>,
) -> CliResult<String> {
    let settings = DashboardConfig {
        month_count: months.unwrap_or(config.month_count),
        ..config.clone()
    };
    settings.validate()?;

    let now = match now {
        Some(raw) => parse_instant(raw).ok_or_else(|| CliError::InvalidNow(raw.to_string()))?,
        None => SystemClock.now(),
    };
    let view = build_dashboard(projects, now, settings.month_count);

    Ok(match format {
        RenderFormat::Html => HtmlRenderer.document(&view, &settings.title),
        RenderFormat::Text => TextRenderer::default().render(&view),
    })
}

/// Explicit format wins; otherwise `.csv` selects CSV and anything else JSON.
pub(crate) fn data_format(path: &Path, explicit: Option<DataFormat>) -> DataFormat {
    explicit.unwrap_or_else(|| {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => DataFormat::Csv,
            _ => DataFormat::Json,
        }
    })
}

/// Accepts a project id or a case-insensitive name.
pub(crate) fn resolve_project(store: &ProjectStore, key: &str) -> Result<ProjectId, CliError> {
    if let Ok(id) = key.trim().parse::<ProjectId>() {
        if store.get_project(id).is_some() {
            return Ok(id);
        }
    }
    store
        .find_by_name(key)
        .map(|project| project.id)
        .ok_or_else(|| CliError::UnknownProject(key.to_string()))
}

fn store_path(db: Option<&Path>, config: &DashboardConfig) -> Result<PathBuf, CliError> {
    db.map(Path::to_path_buf)
        .or_else(|| config.db_path.clone())
        .ok_or(CliError::MissingDataSource)
}

fn load_store(db: Option<&Path>, config: &DashboardConfig) -> CliResult<ProjectStore> {
    let mut conn = open_db(store_path(db, config)?)?;
    let service = ProjectService::new(SqliteProjectRepository::try_new(&mut conn)?);
    Ok(service.load_store()?)
}

fn read_projects(path: &Path, format: DataFormat) -> CliResult<Vec<ProjectRecord>> {
    let projects = match format {
        DataFormat::Json => import_json(&std::fs::read_to_string(path)?)?,
        DataFormat::Csv => import_csv(File::open(path)?)?,
    };
    Ok(projects)
}

fn write_projects(path: &Path, format: DataFormat, projects: &[ProjectRecord]) -> CliResult<()> {
    match format {
        DataFormat::Json => std::fs::write(path, export_json(projects)?)?,
        DataFormat::Csv => export_csv(projects, File::create(path)?)?,
    }
    Ok(())
}

fn write_output(out: Option<&Path>, rendered: &str) -> CliResult<()> {
    match out {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{data_format, render, resolve_project, run, CliError};
    use crate::{Commands, DataFormat, ProjectCommands, RenderFormat};
    use paperdash_core::{DashboardConfig, ProjectDraft, ProjectStore};
    use std::path::Path;

    const DATA: &str = r#"{ "projects": [
        { "name": "Vision", "papers": [
            { "title": "Paper <A>", "start": "2026-01-01", "end": "2026-03-31", "deadline": "2026-02-01" }
        ] }
    ] }"#;

    #[test]
    fn data_format_prefers_explicit_then_extension() {
        assert_eq!(data_format(Path::new("a.CSV"), None), DataFormat::Csv);
        assert_eq!(data_format(Path::new("a.json"), None), DataFormat::Json);
        assert_eq!(data_format(Path::new("a"), None), DataFormat::Json);
        assert_eq!(data_format(Path::new("a.json"), Some(DataFormat::Csv)), DataFormat::Csv);
    }

    #[test]
    fn resolve_project_accepts_id_or_name() {
        let update = ProjectStore::new()
            .create_project(ProjectDraft::named("Vision"))
            .unwrap();
        let id = update.value;
        let store = update.store;

        assert_eq!(resolve_project(&store, &id.to_string()), Ok(id));
        assert_eq!(resolve_project(&store, "vision"), Ok(id));
        assert_eq!(
            resolve_project(&store, "NLP"),
            Err(CliError::UnknownProject("NLP".to_string()))
        );
    }

    #[test]
    fn render_uses_fixed_now_and_config_title() {
        let projects = paperdash_core::import_json(DATA).unwrap();
        let config = DashboardConfig {
            title: "Lab".to_string(),
            ..DashboardConfig::default()
        };

        let html =
            render(&projects, &config, RenderFormat::Html, Some(3), Some("2026-02-10")).unwrap();
        assert!(html.contains("<title>Lab</title>"));
        assert!(html.contains("<th>Feb 2026</th>"));
        assert!(html.contains("<div class=\"card overdue\">"));
        assert!(html.contains("Paper &lt;A&gt;"));

        let text =
            render(&projects, &config, RenderFormat::Text, None, Some("2026-01-10")).unwrap();
        assert!(text.starts_with("== Work on this next\n"));
    }

    #[test]
    fn render_rejects_bad_arguments() {
        let config = DashboardConfig::default();
        assert!(render(&[], &config, RenderFormat::Text, Some(0), Some("2026-01-01")).is_err());
        let err = render(&[], &config, RenderFormat::Text, None, Some("tomorrow")).unwrap_err();
        assert_eq!(err.to_string(), CliError::InvalidNow("tomorrow".to_string()).to_string());
    }

    #[test]
    fn import_export_and_project_commands_share_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("store.sqlite3");
        let data = dir.path().join("data.json");
        let exported = dir.path().join("out.csv");
        std::fs::write(&data, DATA).unwrap();
        let config = DashboardConfig {
            db_path: Some(db.clone()),
            ..DashboardConfig::default()
        };

        run(Commands::Import { file: data, db: None }, &config).unwrap();
        run(
            Commands::Project {
                db: Some(db.clone()),
                command: ProjectCommands::Add {
                    name: "NLP".to_string(),
                },
            },
            &config,
        )
        .unwrap();
        run(
            Commands::Project {
                db: None,
                command: ProjectCommands::Rename {
                    project: "vision".to_string(),
                    new_name: "Vision Lab".to_string(),
                },
            },
            &config,
        )
        .unwrap();
        run(
            Commands::Export {
                file: exported.clone(),
                db: None,
                format: None,
            },
            &config,
        )
        .unwrap();

        let csv = std::fs::read_to_string(&exported).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "project,title,status,priority,start,end,deadline,progress");
        assert_eq!(lines[1], "Vision Lab,Paper <A>,,Low,2026-01-01,2026-03-31,2026-02-01,0");
        assert_eq!(lines[2], "NLP,,,,,,,");

        let missing = run(
            Commands::Project {
                db: None,
                command: ProjectCommands::Delete {
                    project: "Robotics".to_string(),
                },
            },
            &config,
        );
        assert!(missing.is_err());
    }

    #[test]
    fn store_commands_need_a_database_path() {
        let err = run(
            Commands::Project {
                db: None,
                command: ProjectCommands::List,
            },
            &DashboardConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), CliError::MissingDataSource.to_string());
    }
}
