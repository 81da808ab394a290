use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use apphub_core::{image, ApplicationService, AuthError, AuthService};
use apphub_store::{Application, ApplicationPatch, NewApplication};
use clap::{Parser, Subcommand};

use crate::i18n::{t, Language};

/// Bilingual admin CLI for the AppReferenceHub catalog
#[derive(Debug, Parser)]
#[command(name = "apphub", version, about)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Interface language ("en" or "ar")
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the public catalog listing
    List,

    /// Show a single catalog entry
    Show { id: String },

    /// Add a new application (requires login)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        link: String,

        /// Externally hosted image URL
        #[arg(long)]
        image_url: Option<String>,

        /// Local image file, embedded as a data URL
        #[arg(long, conflicts_with = "image_url")]
        image_file: Option<PathBuf>,
    },

    /// Edit an existing application (requires login)
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        link: Option<String>,

        /// Externally hosted image URL
        #[arg(long)]
        image_url: Option<String>,

        /// Local image file, embedded as a data URL
        #[arg(long, conflicts_with = "image_url")]
        image_file: Option<PathBuf>,

        /// Remove the stored image
        #[arg(long, conflicts_with_all = ["image_url", "image_file"])]
        clear_image: bool,
    },

    /// Delete an application (requires login)
    Remove {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Log in as the configured admin
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Drop the current session
    Logout,

    /// Show the current session identity
    Whoami,
}

/// Everything a command needs to run
pub struct CommandContext {
    pub service: ApplicationService,
    pub auth: AuthService,
    pub lang: Language,
}

/// Run a command and return the text to print.
///
/// Not-found conditions come back as localized messages, not errors; only
/// real failures (I/O, validation, bad credentials) produce an `Err`.
pub fn execute(ctx: &CommandContext, command: Command) -> Result<String> {
    match command {
        Command::List => list(ctx),
        Command::Show { id } => show(ctx, &id),
        Command::Add {
            name,
            description,
            link,
            image_url,
            image_file,
        } => {
            require_admin(ctx)?;
            let image_url = resolve_image(image_url, image_file)?.unwrap_or_default();
            let app = ctx.service.create_app(NewApplication {
                name,
                description,
                link,
                image_url,
            })?;
            Ok(format!("{} ({})", t(ctx.lang, "app.created"), app.id))
        }
        Command::Edit {
            id,
            name,
            description,
            link,
            image_url,
            image_file,
            clear_image,
        } => {
            require_admin(ctx)?;
            let image_url = if clear_image {
                Some(String::new())
            } else {
                resolve_image(image_url, image_file)?
            };
            let patch = ApplicationPatch {
                name,
                description,
                link,
                image_url,
            };
            if patch.is_empty() {
                bail!("Nothing to update: no fields were supplied");
            }
            match ctx.service.update_app(&id, patch)? {
                Some(_) => Ok(t(ctx.lang, "app.updated").to_string()),
                None => Ok(t(ctx.lang, "app.notfound").to_string()),
            }
        }
        Command::Remove { id, yes } => {
            require_admin(ctx)?;
            if !yes && !confirm(t(ctx.lang, "admin.delete.confirm"))? {
                return Ok(t(ctx.lang, "admin.delete.aborted").to_string());
            }
            if ctx.service.delete_app(&id)? {
                Ok(t(ctx.lang, "app.deleted").to_string())
            } else {
                Ok(t(ctx.lang, "app.notfound").to_string())
            }
        }
        Command::Login { email, password } => match ctx.auth.login(&email, &password) {
            Ok(user) => Ok(format!("{} ({})", t(ctx.lang, "login.success"), user.email)),
            Err(AuthError::InvalidCredentials) => Err(anyhow!("{}", t(ctx.lang, "login.error"))),
            Err(e) => Err(e.into()),
        },
        Command::Logout => {
            ctx.auth.logout()?;
            Ok(t(ctx.lang, "logout.success").to_string())
        }
        Command::Whoami => match ctx.auth.current_user() {
            Some(user) => Ok(user.email),
            None => Ok(t(ctx.lang, "session.none").to_string()),
        },
    }
}

fn list(ctx: &CommandContext) -> Result<String> {
    let apps = ctx.service.list_apps()?;
    if apps.is_empty() {
        return Ok(t(ctx.lang, "admin.empty").to_string());
    }

    let mut out = format!(
        "{}\n{}\n",
        t(ctx.lang, "home.title"),
        t(ctx.lang, "home.subtitle")
    );
    for app in &apps {
        out.push_str(&format!("\n{}  {}\n    {}\n", app.id, app.name, app.link));
    }
    Ok(out)
}

fn show(ctx: &CommandContext, id: &str) -> Result<String> {
    let Some(app) = ctx.service.get_app(id)? else {
        return Ok(t(ctx.lang, "app.notfound").to_string());
    };
    Ok(render_application(ctx.lang, &app))
}

fn render_application(lang: Language, app: &Application) -> String {
    format!(
        "{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}",
        t(lang, "app.form.name"),
        app.name,
        t(lang, "app.form.description"),
        app.description,
        t(lang, "app.form.link"),
        app.link,
        t(lang, "app.form.image"),
        app.image_url,
        t(lang, "app.form.created"),
        app.created_at,
    )
}

/// The presentation layer refuses mutations without an identity; the store
/// itself never checks.
fn require_admin(ctx: &CommandContext) -> Result<()> {
    if ctx.auth.current_user().is_none() {
        return Err(anyhow!("{}", t(ctx.lang, "auth.denied")));
    }
    Ok(())
}

fn resolve_image(image_url: Option<String>, image_file: Option<PathBuf>) -> Result<Option<String>> {
    match image_file {
        Some(path) => Ok(Some(image::file_to_data_url(&path)?)),
        None => Ok(image_url),
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
