//! CLI entry point for blog-index

use anyhow::{Context, Result};
use blog_index::commands::show::PostRef;
use blog_index::content::Lang;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-index")]
#[command(version)]
#[command(about = "Content index and build tooling for a bilingual blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Language of the post (en, tr)
        lang: Lang,

        /// Title of the new post
        title: String,

        /// Directory name of the post (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only list posts in this language
        #[arg(short, long)]
        lang: Option<Lang>,
    },

    /// List post slugs of a language
    Slugs {
        lang: Lang,
    },

    /// List every (language, slug) pair
    Params,

    /// Show a post as JSON
    Show {
        /// Permalink such as /en/hello/
        #[arg(required_unless_present = "slug")]
        permalink: Option<String>,

        /// Look the post up by slug instead
        #[arg(long, requires = "lang", conflicts_with = "permalink")]
        slug: Option<String>,

        /// Language of --slug
        #[arg(short, long)]
        lang: Option<Lang>,
    },

    /// Show SEO metadata of a page as JSON (/en/, /tr/ or a post permalink)
    Meta {
        route: String,
    },

    /// Print every publishable URL
    Urls,

    /// Generate sitemap.xml and robots.txt
    #[command(alias = "g")]
    Generate,

    /// Check posts for non-canonical permalinks and bad dates
    Check,

    /// Clean the public folder
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_index=debug,info"
    } else {
        "blog_index=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            blog_index::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New { lang, title, slug } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            let path = blog_index::commands::new::create_post(&blog, lang, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List { lang } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::list::run(&blog, lang)?;
        }

        Commands::Slugs { lang } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::list::slugs(&blog, lang)?;
        }

        Commands::Params => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::list::params(&blog)?;
        }

        Commands::Show {
            permalink,
            slug,
            lang,
        } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            let post = match (permalink, slug, lang) {
                (_, Some(slug), Some(lang)) => PostRef::Slug { lang, slug },
                (Some(permalink), _, _) => PostRef::Permalink(permalink),
                _ => anyhow::bail!("Pass a permalink or --slug with --lang"),
            };
            blog_index::commands::show::run(&blog, &post)?;
        }

        Commands::Meta { route } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::show::meta(&blog, &route)?;
        }

        Commands::Urls => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::urls::run(&blog)?;
        }

        Commands::Generate => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::info!("Generating sitemap...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Check => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::check::run(&blog)?;
        }

        Commands::Clean => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
