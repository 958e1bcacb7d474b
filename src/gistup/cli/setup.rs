use clap::Parser;
use gistup::config::GIST_ID_ENV;
use gistup::format::JsonStyle;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "gistup", bin_name = "gistup", version = get_version())]
#[command(about = "Upload text or JSON to GitHub Gist", long_about = None)]
pub struct Cli {
    /// File to upload. Reads standard input when omitted
    pub path: Option<PathBuf>,

    /// Filename stored in the gist (defaults to the file's name or stdin.txt)
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Gist description. A timestamp is used if omitted
    #[arg(short, long)]
    pub description: Option<String>,

    /// Create a public gist
    #[arg(long)]
    pub public: bool,

    /// Update an existing gist instead of creating a new one
    #[arg(long, env = GIST_ID_ENV)]
    pub gist_id: Option<String>,

    /// GitHub token (overrides GITHUB_TOKEN / GH_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Pretty-print JSON input with N spaces of indentation
    #[arg(long, value_name = "N", conflicts_with = "raw_json")]
    pub indent: Option<usize>,

    /// Minify JSON input
    #[arg(long)]
    pub raw_json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn json_style(&self) -> Option<JsonStyle> {
        if self.raw_json {
            Some(JsonStyle::Minify)
        } else {
            self.indent.map(|indent| JsonStyle::Pretty { indent })
        }
    }
}
