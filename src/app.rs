use crate::config::Config;
use crate::convert::Converter;
use crate::error::AppResult;
use crate::github::Github;
use crate::output::{self, RawSnapshot};
use log::*;
use std::path::PathBuf;

/// Run options taken from the command line.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    /// Also write the raw GitHub records next to the import file.
    pub dump_raw: bool,
    /// Convert a previously dumped snapshot instead of fetching from GitHub.
    pub from_dump: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            output_dir: PathBuf::from("."),
            dump_raw: false,
            from_dump: None,
        }
    }
}

/// Oversees one conversion run: retrieval, optional raw dump, conversion,
/// and writing the import file.
///
pub struct App {
    config: Config,
    options: Options,
}

impl App {
    /// Run a conversion according to the given configuration and options.
    /// Returns the path of the written import file.
    ///
    pub async fn start(config: Config, options: Options) -> AppResult<PathBuf> {
        info!(
            "Starting conversion of {}/{} into project {}...",
            config.github.owner, config.github.repo, config.jira.project_key
        );
        let app = App { config, options };

        let snapshot = app.snapshot().await?;
        if app.options.dump_raw {
            let path = output::write_snapshot(&app.options.output_dir, &snapshot)?;
            info!("Wrote raw GitHub records to {}", path.display());
        }

        let document = Converter::new(&app.config).convert(
            &snapshot.github_issues,
            snapshot.github_comments.as_deref(),
        );
        let path = output::write_import(&app.options.output_dir, &document)?;
        info!("Wrote Jira import file to {}", path.display());
        Ok(path)
    }

    /// Source records, either read from a dump or fetched from GitHub.
    ///
    async fn snapshot(&self) -> AppResult<RawSnapshot> {
        match &self.options.from_dump {
            Some(path) => {
                info!("Reading GitHub records from {}...", path.display());
                Ok(output::read_snapshot(path)?)
            }
            None => self.fetch().await,
        }
    }

    async fn fetch(&self) -> AppResult<RawSnapshot> {
        let settings = &self.config.github;
        let token = self.config.github_token();
        if token.is_none() {
            warn!("No GitHub token configured, requests are unauthenticated and rate limited");
        }
        let github = Github::new(
            &settings.owner,
            &settings.repo,
            token.as_deref(),
            &settings.api_url,
        )?;

        info!("Fetching issues...");
        let github_issues = github.issues(settings.include_pull_requests).await?;
        let github_comments = if settings.include_comments {
            info!("Fetching comments...");
            Some(github.comments().await?)
        } else {
            debug!("Comment retrieval disabled, issues will have no comments");
            None
        };

        Ok(RawSnapshot {
            github_issues,
            github_comments,
        })
    }
}
